use crate::reports;
use clap::Args;
use recordbreak::config::ReportParams;
use recordbreak::counter::trace_record_breaks;
use recordbreak::error::RbResult;
use recordbreak::loader;

#[derive(Args, Debug, Clone)]
pub struct CountArgs {
    #[command(flatten)]
    pub report: ReportParams,

    /// Scores separated by commas or spaces, e.g. `3,4,21` or `3 -4 21`.
    /// A comma list starting with a negative number needs `--` before it.
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub scores: Vec<String>,
}

pub fn run(args: &CountArgs, report: &ReportParams) -> RbResult<()> {
    let scores = loader::parse_scores(&args.scores.join(" "))?;
    let trace = trace_record_breaks(&scores)?;
    reports::print_trace("input", &trace, report)
}
