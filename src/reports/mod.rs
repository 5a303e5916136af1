use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use recordbreak::api::{BatchSummary, Evaluation};
use recordbreak::config::{OutputFormat, ReportParams};
use recordbreak::counter::{RecordKind, RecordTrace};
use recordbreak::error::RbResult;
use serde_json::json;

fn header(labels: &[&str]) -> Vec<Cell> {
    labels
        .iter()
        .map(|l| Cell::new(l).add_attribute(Attribute::Bold))
        .collect()
}

fn num(v: impl ToString) -> Cell {
    Cell::new(v.to_string()).set_alignment(CellAlignment::Right)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_trace(label: &str, trace: &RecordTrace, params: &ReportParams) -> RbResult<()> {
    match params.format {
        OutputFormat::Plain => {
            println!("{} {}", trace.breaks.max_breaks, trace.breaks.min_breaks);
        }
        OutputFormat::Json => {
            let value = if params.show_events {
                json!({ "label": label, "breaks": trace.breaks, "events": trace.events })
            } else {
                json!({ "label": label, "breaks": trace.breaks })
            };
            println!("{}", serde_json::to_string(&value)?);
        }
        OutputFormat::Table => {
            let mut table = new_table();
            table.set_header(header(&["Sequence", "Max Breaks", "Min Breaks"]));
            table.add_row(vec![
                Cell::new(label),
                num(trace.breaks.max_breaks),
                num(trace.breaks.min_breaks),
            ]);
            println!("{table}");

            if params.show_events {
                print_events(trace);
            }
        }
    }
    Ok(())
}

fn print_events(trace: &RecordTrace) {
    if trace.events.is_empty() {
        println!("(no records broken)");
        return;
    }

    let mut table = new_table();
    table.set_header(header(&["Index", "Score", "Record", "Count"]));
    for e in &trace.events {
        let color = match e.kind {
            RecordKind::Max => Color::Green,
            RecordKind::Min => Color::Red,
        };
        table.add_row(vec![
            num(e.index),
            num(e.score),
            Cell::new(e.kind).fg(color),
            num(e.count),
        ]);
    }
    println!("{table}");
}

pub fn print_batch(
    evals: &[Evaluation],
    summary: &BatchSummary,
    params: &ReportParams,
) -> RbResult<()> {
    match params.format {
        OutputFormat::Plain => {
            for e in evals {
                match e.breaks() {
                    Some(b) => println!("{} {}", b.max_breaks, b.min_breaks),
                    None => println!("error"),
                }
            }
        }
        OutputFormat::Json => {
            let value = json!({ "results": evals, "summary": summary });
            println!("{}", serde_json::to_string(&value)?);
        }
        OutputFormat::Table => {
            let mut table = new_table();
            table.set_header(header(&["Sequence", "Length", "Max Breaks", "Min Breaks"]));
            for e in evals {
                let row = match &e.outcome {
                    Ok(b) => vec![
                        Cell::new(&e.label),
                        num(e.len),
                        num(b.max_breaks),
                        num(b.min_breaks),
                    ],
                    Err(msg) => vec![
                        Cell::new(&e.label),
                        num(e.len),
                        Cell::new(msg).fg(Color::Red),
                        Cell::new(""),
                    ],
                };
                table.add_row(row);
            }
            println!("{table}");
            println!(
                "Sequences: {} | Failed: {} | Max Breaks: {} | Min Breaks: {}",
                summary.sequences,
                summary.failed,
                summary.total_max_breaks,
                summary.total_min_breaks
            );
        }
    }
    Ok(())
}
