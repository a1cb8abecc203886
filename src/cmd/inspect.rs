use crate::reports;
use clap::Args;
use std::sync::Arc;
use swipe_engine::config::Config;
use swipe_engine::SwipeEngine;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub config: Config,

    /// Only show index buckets for this first letter
    #[arg(short, long)]
    pub letter: Option<char>,
}

pub fn run(args: InspectArgs, engine: Arc<SwipeEngine>) {
    let Some(dictionary) = engine.snapshot() else {
        println!("No dictionary loaded.");
        return;
    };

    reports::print_dictionary_summary(&dictionary, &engine.weights());

    let buckets: Vec<((char, usize), usize)> = dictionary
        .bucket_histogram()
        .into_iter()
        .filter(|((first, _), _)| {
            args.letter
                .map_or(true, |l| l.to_ascii_lowercase() == *first)
        })
        .collect();
    reports::print_bucket_histogram(&buckets);
}
