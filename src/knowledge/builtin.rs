use crate::models::{DiseaseRecord, Treatment};

struct Entry {
    code: &'static str,
    description: &'static str,
    symptoms: &'static [&'static str],
    organic: &'static [&'static str],
    chemical: &'static [&'static str],
    prevention: &'static [&'static str],
    fertilizer: &'static str,
}

impl Entry {
    fn to_record(&self) -> DiseaseRecord {
        DiseaseRecord {
            description: self.description.to_string(),
            symptoms: owned(self.symptoms),
            treatment: Treatment {
                organic: owned(self.organic),
                chemical: owned(self.chemical),
            },
            prevention: owned(self.prevention),
            fertilizer: self.fertilizer.to_string(),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Every class the upstream leaf classifier can emit, with a healthy
/// entry per crop.
pub(super) fn records() -> impl Iterator<Item = (String, DiseaseRecord)> {
    ENTRIES
        .iter()
        .map(|entry| (entry.code.to_string(), entry.to_record()))
}

const ENTRIES: &[Entry] = &[
    Entry {
        code: "Tomato___Early_blight",
        description: "Fungal disease causing dark spots with concentric rings on leaves",
        symptoms: &[
            "Dark brown spots with concentric rings (target-like pattern)",
            "Yellow halo around spots",
            "Lower leaves affected first",
            "Leaf drop and defoliation",
            "Small black lesions on stems",
        ],
        organic: &[
            "Remove infected leaves immediately and destroy",
            "Apply neem oil spray (2ml/L water) weekly",
            "Use copper-based fungicides (Bordeaux mixture)",
            "Improve air circulation between plants",
            "Apply baking soda solution (1 tbsp/gallon)",
            "Use compost tea as foliar spray",
        ],
        chemical: &[
            "Chlorothalonil 500g/L at 2ml/L water",
            "Mancozeb 75% WP at 2g/L",
            "Azoxystrobin 250g/L at 1ml/L",
            "Apply every 7-10 days during infection",
            "Alternate fungicides to prevent resistance",
        ],
        prevention: &[
            "Practice 3-year crop rotation",
            "Use drip irrigation instead of overhead watering",
            "Mulch to prevent soil splash onto leaves",
            "Plant resistant varieties if available",
            "Maintain proper plant spacing (45-60cm)",
            "Remove crop debris after harvest",
            "Avoid working with wet plants",
        ],
        fertilizer: "Balanced NPK 19-19-19, increase potassium for disease resistance",
    },
    Entry {
        code: "Tomato___Late_blight",
        description: "Devastating fungal disease that can destroy entire crops within days",
        symptoms: &[
            "Water-soaked lesions on leaves",
            "White fuzzy mold on leaf undersides",
            "Rapid spread in cool, wet conditions",
            "Brown spots on stems",
            "Fruit rot with greasy appearance",
            "Entire plant collapse possible",
        ],
        organic: &[
            "🚨 URGENT: Remove and burn infected plants immediately",
            "Apply copper fungicide at first sign",
            "Increase plant spacing drastically",
            "Stop all overhead irrigation",
            "Apply Bacillus subtilis biological fungicide",
            "Remove volunteer plants from previous season",
        ],
        chemical: &[
            "Metalaxyl + Mancozeb at 2.5g/L (systemic action)",
            "Cymoxanil + Famoxadone at 2ml/L",
            "Dimethomorph 50% WP at 1g/L",
            "Apply every 5-7 days during outbreak",
            "Use preventive sprays in cool, humid weather",
        ],
        prevention: &[
            "Use certified disease-free seeds only",
            "Monitor weather forecasts (high risk at 15-25°C + rain)",
            "Apply preventive fungicides before symptoms",
            "Destroy volunteer potato and tomato plants",
            "Plant in well-drained areas",
            "Avoid planting near potatoes",
            "Consider resistant varieties",
        ],
        fertilizer:
            "Reduce nitrogen, increase phosphorus (0-20-20) and potassium for stronger plants",
    },
    Entry {
        code: "Tomato___Bacterial_spot",
        description: "Bacterial disease causing dark spots on leaves, stems, and fruit",
        symptoms: &[
            "Small dark spots with yellow halos",
            "Spots may merge to form large lesions",
            "Leaf edges turn yellow and die",
            "Defoliation in severe cases",
            "Raised spots on fruit",
            "Reduced fruit quality",
        ],
        organic: &[
            "Remove and destroy infected plant parts",
            "Apply copper-based bactericides (copper hydroxide)",
            "Avoid working with plants when wet",
            "Sanitize all tools with 10% bleach solution",
            "Improve air circulation",
            "Remove weeds that harbor bacteria",
        ],
        chemical: &[
            "Copper hydroxide at 2g/L water",
            "Streptomycin sulfate (where legally permitted)",
            "Copper + Mancozeb combination products",
            "Apply weekly during wet weather",
            "Begin applications preventively",
        ],
        prevention: &[
            "Use resistant varieties (check local recommendations)",
            "Use certified disease-free seeds",
            "Avoid overhead irrigation completely",
            "Disinfect tools between plants",
            "Remove crop debris immediately after harvest",
            "2-3 year rotation away from tomatoes/peppers",
            "Control insect vectors",
        ],
        fertilizer: "Balanced NPK with adequate calcium (reduces susceptibility)",
    },
    Entry {
        code: "Tomato___healthy",
        description: "✅ Your tomato plant appears healthy with no visible disease symptoms!",
        symptoms: &[
            "Vibrant green leaves",
            "No spots, lesions, or discoloration",
            "Normal growth pattern",
            "Good leaf structure",
        ],
        organic: &[
            "✓ No treatment needed",
            "Continue regular care routine",
            "Monitor weekly for any changes",
            "Maintain good cultural practices",
        ],
        chemical: &[],
        prevention: &[
            "Continue current care practices",
            "Regular monitoring and inspection",
            "Proper watering (1-2 inches per week)",
            "Maintain balanced nutrition",
            "Good air circulation",
            "Mulch around plants",
            "Practice crop rotation",
        ],
        fertilizer: "Continue balanced fertilization (10-10-10 or 5-10-10 NPK)",
    },
    Entry {
        code: "Potato___Early_blight",
        description: "Common fungal disease affecting potato foliage and tubers",
        symptoms: &[
            "Target-like spots with concentric rings",
            "Lower, older leaves affected first",
            "Brown lesions on stems",
            "Yellowing around lesions",
            "Progressive upward movement",
            "Tuber infection at harvest",
        ],
        organic: &[
            "Remove infected lower leaves",
            "Apply baking soda spray (1 tbsp/gallon water)",
            "Use copper fungicide weekly",
            "Apply compost tea as foliar spray",
            "Maintain adequate soil moisture",
            "Improve plant nutrition",
        ],
        chemical: &[
            "Chlorothalonil 72% WP at 2g/L",
            "Azoxystrobin 23% SC at 1ml/L",
            "Mancozeb at labeled rates",
            "Apply every 7-10 days",
            "Begin at first symptom appearance",
        ],
        prevention: &[
            "Use certified seed potatoes",
            "Hill up soil around plants",
            "Provide adequate nitrogen during growth",
            "Water at base, not overhead",
            "Remove volunteer potatoes",
            "Destroy crop residue after harvest",
            "3-4 year crop rotation",
        ],
        fertilizer: "NPK 10-10-20, adequate nitrogen during vegetative growth",
    },
    Entry {
        code: "Potato___Late_blight",
        description:
            "Serious disease that caused the Irish Potato Famine - can destroy crops rapidly",
        symptoms: &[
            "Water-soaked dark lesions on leaves",
            "White fungal growth on leaf undersides",
            "Brown-black stems",
            "Rapid plant collapse",
            "Tuber rot with reddish-brown flesh",
            "Foul odor from rotting tubers",
        ],
        organic: &[
            "🚨 EMERGENCY ACTION REQUIRED",
            "Remove entire infected plants within 24 hours",
            "Do NOT compost infected material - burn it",
            "Apply copper fungicide to surrounding plants",
            "Harvest healthy tubers immediately if possible",
            "Hill up soil to protect tubers",
        ],
        chemical: &[
            "Metalaxyl-based systemic fungicides",
            "Cymoxanil at 2ml/L for curative action",
            "Chlorothalonil for protectant action",
            "Apply every 5 days during outbreaks",
            "Tank mix systemic + protectant",
        ],
        prevention: &[
            "Use resistant varieties (check local recommendations)",
            "Destroy volunteer plants and cull piles",
            "Monitor weather (high risk: 15-25°C + high humidity)",
            "Apply preventive sprays before symptoms",
            "Hill plants properly",
            "Ensure good drainage",
            "Early harvest if disease appears nearby",
        ],
        fertilizer: "Balanced nutrition, avoid excess nitrogen which increases susceptibility",
    },
    Entry {
        code: "Potato___healthy",
        description: "✅ Your potato plant is healthy and disease-free!",
        symptoms: &[
            "Dark green, vigorous foliage",
            "No lesions or spots",
            "Normal plant structure",
            "Good tuber development expected",
        ],
        organic: &[
            "✓ No treatment necessary",
            "Continue monitoring",
            "Maintain current practices",
        ],
        chemical: &[],
        prevention: &[
            "Continue proper hilling",
            "Consistent watering",
            "Monitor for pests",
            "Maintain nutrition",
            "Regular inspection",
            "Good weed control",
        ],
        fertilizer: "Continue balanced program, increase potassium as tubers develop",
    },
    Entry {
        code: "Pepper_bell___Bacterial_spot",
        description: "Bacterial disease causing spots on leaves and fruit of pepper plants",
        symptoms: &[
            "Small, dark spots on leaves",
            "Yellow halos around spots",
            "Leaf drop and defoliation",
            "Raised spots on fruit",
            "Fruit may become unmarketable",
            "Reduced yields",
        ],
        organic: &[
            "Remove infected leaves promptly",
            "Apply copper bactericide (copper hydroxide)",
            "Avoid overhead watering",
            "Sanitize hands and tools frequently",
            "Improve air circulation",
            "Remove plant debris",
        ],
        chemical: &[
            "Copper hydroxide at 2-3g/L",
            "Fixed copper products",
            "Apply weekly during wet periods",
            "Begin preventively at transplanting",
            "Continue through fruit set",
        ],
        prevention: &[
            "Use disease-free transplants",
            "Hot water seed treatment (50°C for 25 min)",
            "Drip irrigation only",
            "Wide plant spacing (45-60cm)",
            "3-year rotation",
            "Control weeds",
            "Disinfect stakes and cages",
        ],
        fertilizer: "Balanced NPK, adequate calcium for fruit quality",
    },
    Entry {
        code: "Pepper_bell___healthy",
        description: "✅ Your pepper plant is healthy with no disease symptoms!",
        symptoms: &[
            "Dark green leaves",
            "No spots or lesions",
            "Good fruit set",
            "Normal growth",
        ],
        organic: &[
            "✓ Continue current care",
            "Regular monitoring",
            "Maintain practices",
        ],
        chemical: &[],
        prevention: &[
            "Consistent watering",
            "Proper fertilization",
            "Pest monitoring",
            "Good air flow",
            "Mulching",
            "Support plants as needed",
        ],
        fertilizer: "Balanced NPK, increase potassium during fruiting (5-10-10)",
    },
];
