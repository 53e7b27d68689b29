use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropdoc",
    version,
    about = "Crop leaf disease severity and treatment recommendations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a recommendation for a classifier result
    Diagnose(DiagnoseArgs),
    /// List known disease codes
    List,
    /// Validate config and knowledge base
    Check,
}

#[derive(clap::Args)]
pub struct DiagnoseArgs {
    /// Disease label from the classifier, e.g. Tomato___Early_blight
    pub label: Option<String>,

    /// Classifier confidence between 0 and 1
    #[arg(allow_negative_numbers = true)]
    pub confidence: Option<f64>,

    /// Air temperature in °C, for weather risk assessment
    #[arg(long, requires = "humidity", allow_negative_numbers = true)]
    pub temp: Option<f64>,

    /// Relative humidity in percent, for weather risk assessment
    #[arg(long, requires = "temp")]
    pub humidity: Option<f64>,

    /// Require an exact knowledge base code, skip label normalization
    #[arg(long)]
    pub strict: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
