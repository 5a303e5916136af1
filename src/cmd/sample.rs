use crate::reports;
use clap::Args;
use recordbreak::config::ReportParams;
use recordbreak::counter::trace_record_breaks;
use recordbreak::error::RbResult;
use recordbreak::samples::get_all_samples;

#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    #[command(flatten)]
    pub report: ReportParams,

    /// Only run samples whose name contains this text
    #[arg(short, long)]
    pub sample: Option<String>,
}

pub fn run(args: &SampleArgs, report: &ReportParams) -> RbResult<()> {
    for (sample, scores) in get_all_samples() {
        let name = sample.to_string();
        if let Some(ref filter) = args.sample {
            if !name.contains(&filter.to_lowercase()) {
                continue;
            }
        }

        let trace = trace_record_breaks(scores)?;
        reports::print_trace(&name, &trace, report)?;
    }
    Ok(())
}
