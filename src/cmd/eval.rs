use crate::reports;
use clap::Args;
use std::process;
use std::sync::Arc;
use std::time::Instant;
use swipe_engine::config::Config;
use swipe_engine::geometry::KeyboardGeometry;
use swipe_engine::simulate::{self, SynthesisParams};
use swipe_engine::SwipeEngine;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct EvalArgs {
    #[command(flatten)]
    pub config: Config,

    /// Labelled samples, one `trace<TAB>expected_word` per line
    #[arg(long, conflicts_with = "synthetic")]
    pub labels: Option<String>,

    /// Number of synthetic gestures to generate from the dictionary
    #[arg(long)]
    pub synthetic: Option<usize>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 3)]
    pub linger_max: usize,

    #[arg(long, default_value_t = 0.3)]
    pub drift_probability: f64,

    #[arg(short = 'K', long, default_value_t = 3)]
    pub top_k: usize,
}

pub fn run(args: EvalArgs, engine: Arc<SwipeEngine>, geometry: &KeyboardGeometry, debug: bool) {
    let samples = match (&args.labels, args.synthetic) {
        (Some(path), _) => {
            info!("📂 Loading labelled samples: {}", path);
            simulate::load_labeled_samples(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        (None, count) => {
            let count = count.unwrap_or(1000);
            let seed = args.seed.unwrap_or_else(|| fastrand::u64(..));
            info!("🎲 Synthesising {} gestures (seed {})", count, seed);
            let params = SynthesisParams {
                linger_max: args.linger_max,
                drift_probability: args.drift_probability,
            };
            simulate::synthetic_samples(&engine, geometry, &params, count, seed)
        }
    };

    if debug {
        for s in samples.iter().take(10) {
            println!("   {} -> {}", s.trace, s.expected);
        }
    }

    let start = Instant::now();
    let summary = simulate::evaluate(&engine, &samples, args.top_k);
    let elapsed = start.elapsed();

    reports::print_eval_report(&summary, &engine.weights(), elapsed);
}
