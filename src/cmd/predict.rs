use crate::reports;
use clap::Args;
use std::sync::Arc;
use strum_macros::{Display, EnumString};
use swipe_engine::config::Config;
use swipe_engine::SwipeEngine;

#[derive(Debug, Clone, Copy, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub config: Config,

    /// Raw letter traces to decode
    #[arg(required = true)]
    pub traces: Vec<String>,

    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

pub fn run(args: PredictArgs, engine: Arc<SwipeEngine>) {
    let limit = args.limit.unwrap_or(engine.decoder().default_limit);

    for trace in &args.traces {
        match args.format {
            OutputFormat::Json => println!("{}", engine.predict_json(trace, limit)),
            OutputFormat::Table => {
                let query = engine.normalizer().normalize(trace);
                let predictions = engine.predict(trace, limit);
                reports::print_predictions(trace, query.as_str(), &predictions);
            }
        }
    }
}
