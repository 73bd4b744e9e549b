//! Methodfit CLI - Command-line questionnaire for contraceptive method screening.

use clap::Parser;
use methodfit_cli::commands;
use methodfit_cli::flow;
use methodfit_cli::{Cli, Command, Config, Formatter};
use methodfit_engine::Recommender;
use tracing::Level;

fn main() {
    // Initialize tracing (log to stderr)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> methodfit_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Pick the rule-table variant and build the engine
    let variant = cli.rules.map(Into::into).unwrap_or(config.settings.rules);
    let recommender = Recommender::new(variant.rule_set());

    // Handle commands
    match cli.command {
        None | Some(Command::Quiz) => {
            flow::run_quiz(&recommender, &formatter)?;
        }
        Some(Command::Methods) => {
            commands::execute_methods(&formatter)?;
        }
        Some(Command::Show(args)) => {
            commands::execute_show(args, &formatter)?;
        }
        Some(Command::Recommend(args)) => {
            commands::execute_recommend(args, &recommender, &formatter)?;
        }
    }

    Ok(())
}
