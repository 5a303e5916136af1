use crate::reports;
use clap::Args;
use recordbreak::api::{self, BatchSummary};
use recordbreak::config::Config;
use recordbreak::error::RbResult;
use recordbreak::loader;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// File with one score sequence per line
    #[arg(short, long)]
    pub input: PathBuf,
}

pub fn run(args: &BatchArgs, config: &Config) -> RbResult<()> {
    let sequences = loader::load_sequences(&args.input, &config.loader)?;
    let evals = api::evaluate_batch(&sequences);
    let summary = BatchSummary::from(evals.as_slice());

    if summary.failed > 0 {
        warn!(
            "{} of {} sequences could not be evaluated",
            summary.failed, summary.sequences
        );
    }

    reports::print_batch(&evals, &summary, &config.report)
}
