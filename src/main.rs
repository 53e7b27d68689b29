mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, DiagnoseArgs};
use cropdoc::{
    assess_disease_risk, Config, DiagnosisReport, KnowledgeBase, RecommendationEngine,
    WeatherConditions,
};
use dialoguer::Input;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("Configuration error")?;

    match cli.command {
        Commands::Diagnose(args) => {
            let kb = config
                .knowledge_base()
                .context("Failed to load knowledge base")?;
            diagnose(&config, RecommendationEngine::new(kb), args)
        }
        Commands::List => {
            let kb = config
                .knowledge_base()
                .context("Failed to load knowledge base")?;
            list(&kb);
            Ok(())
        }
        Commands::Check => check(&config),
    }
}

fn diagnose(config: &Config, engine: RecommendationEngine, args: DiagnoseArgs) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();

    let label = match args.label {
        Some(label) => label,
        None if interactive => Input::new()
            .with_prompt("Disease label")
            .interact_text()
            .context("Input error")?,
        None => anyhow::bail!("missing disease label"),
    };

    let raw_confidence: f64 = match args.confidence {
        Some(c) => c,
        None if interactive => Input::new()
            .with_prompt("Confidence (0-1)")
            .interact_text()
            .context("Input error")?,
        None => anyhow::bail!("missing confidence"),
    };

    let (confidence, clamped) = config.confidence(raw_confidence)?;

    let kb = engine.knowledge_base();
    let resolution = if args.strict || !config.normalize_labels {
        kb.resolve_exact(&label)
    } else {
        kb.resolve_label(&label)
    };
    if !resolution.is_recognized() {
        tracing::warn!(label = %label, "Label not in knowledge base");
    }
    let code = resolution.code().unwrap_or(label.trim()).to_string();

    let recommendation = engine.recommend(&code, confidence);

    let weather_risks = match (args.temp, args.humidity) {
        (Some(temp), Some(humidity)) => {
            assess_disease_risk(&WeatherConditions::new(temp, humidity))
        }
        _ => Vec::new(),
    };

    let report = DiagnosisReport::new(label, resolution, recommendation)
        .with_threshold_flag(config.below_reporting_threshold(confidence))
        .with_clamped_flag(clamped)
        .with_weather_risks(weather_risks);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}

fn list(kb: &KnowledgeBase) {
    for code in kb.codes() {
        println!("{:<32} {}", code, cropdoc::models::humanize(code));
    }
}

fn check(config: &Config) -> Result<()> {
    println!("Configuration:");
    println!("  confidence policy:   {:?}", config.confidence_policy);
    println!("  reporting threshold: {}", config.reporting_threshold);
    println!("  normalize labels:    {}", config.normalize_labels);

    let source = match &config.knowledge_base_path {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };

    match config.knowledge_base() {
        Ok(kb) => {
            println!("  knowledge base:      {} ({} entries) OK", source, kb.len());
            Ok(())
        }
        Err(e) => {
            println!("  knowledge base:      {} FAILED", source);
            Err(e).context("Knowledge base validation failed")
        }
    }
}
