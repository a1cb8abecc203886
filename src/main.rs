use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use std::sync::Arc;
use swipe_engine::config::ScoringWeights;
use swipe_engine::geometry::KeyboardGeometry;
use swipe_engine::layouts::KnownLayout;
use swipe_engine::SwipeEngine;
use tracing::{error, info, warn};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/word_freq.txt")]
    dict: String,

    #[arg(global = true, short = 'L', long, default_value = "qwerty")]
    layout: KnownLayout,

    /// Custom keyboard geometry JSON (overrides --layout)
    #[arg(global = true, short = 'k', long)]
    keyboard: Option<String>,

    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Predict(cmd::predict::PredictArgs),
    Eval(cmd::eval::EvalArgs),
    Inspect(cmd::inspect::InspectArgs),
}

fn main() {
    // Logs go to stderr; stdout carries predictions.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // 1. Parse raw matches (to tell typed flags from defaults)
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    info!("🚀 Initializing Swipe Engine...");

    // 2. Keyboard geometry
    let geometry = match &cli.keyboard {
        Some(path) => {
            info!("📂 Loading Keyboard: {}", path);
            KeyboardGeometry::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        None => cli.layout.geometry(),
    };

    // 3. Config and the subcommand matches its flags live in
    let (sub_name, mut config) = match &cli.command {
        Commands::Predict(args) => ("predict", args.config.clone()),
        Commands::Eval(args) => ("eval", args.config.clone()),
        Commands::Inspect(args) => ("inspect", args.config.clone()),
    };
    let Some(sub_matches) = matches.subcommand_matches(sub_name) else {
        error!("missing matches for subcommand '{}'", sub_name);
        process::exit(2);
    };

    // 4. Weights: JSON file as base, explicit CLI flags on top
    if let Some(path) = &cli.weights {
        info!("⚖️  Loading Weights from: {}", path);
        let mut file_weights = ScoringWeights::load_from_file(path).unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        });
        file_weights.merge_from_cli(&config.weights, sub_matches);
        config.weights = file_weights;
    } else if cli.debug {
        warn!("⚠️  No external weights loaded. Using embedded defaults.");
    }

    // 5. Engine
    let engine = match SwipeEngine::with_config(&geometry, &config) {
        Ok(e) => Arc::new(e),
        Err(e) => {
            error!("❌ FATAL ERROR INITIALIZING ENGINE: {}", e);
            process::exit(1);
        }
    };

    // 6. Dictionary
    info!("📚 Loading Dictionary: {}", cli.dict);
    match engine.load(&cli.dict) {
        Ok(count) => info!("   -> {} entries", count),
        Err(e) => {
            error!("❌ {} (code {})", e, e.code());
            process::exit(1);
        }
    }

    // 7. Execute
    match cli.command {
        Commands::Predict(args) => cmd::predict::run(args, engine),
        Commands::Eval(args) => cmd::eval::run(args, engine, &geometry, cli.debug),
        Commands::Inspect(args) => cmd::inspect::run(args, engine),
    }
}
