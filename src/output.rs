use std::io::{self, Write};

use serde::Serialize;

use crate::app::{
    ClearResult, ProgressEvent, ProgressSink, PruneResult, SurveyOutcome, SurveyReport,
};
use crate::report::render_line;

#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    Console,
    Json,
}

pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn print_report(outcome: &SurveyOutcome) {
        let report = &outcome.report;
        println!();
        if report.total_retrieved == 0 {
            println!("No observations found matching the criteria.");
            return;
        }

        println!("Total observations retrieved: {}", report.total_retrieved);
        println!(
            "Observations with annotations: {} ({:.1}%)",
            report.annotations.annotated, report.annotations.percentage
        );
        if let Some(range) = &report.date_range {
            println!("Date range: {} to {}", range.oldest, range.newest);
        }

        println!("Quality grades:");
        for (grade, count) in &report.quality_grades {
            println!("  {grade}: {count}");
        }

        if !report.annotations.breakdown.is_empty() {
            println!("Annotation breakdown:");
            for (term, values) in &report.annotations.breakdown {
                println!("  {term}:");
                for (value, count) in values {
                    println!("    {value}: {count}");
                }
            }
        }

        println!();
        println!(
            "Accurate research-grade observations ({}):",
            outcome.accurate.len()
        );
        for record in &outcome.accurate {
            println!("{}", render_line(record));
        }

        println!();
        println!("Other observations ({}):", outcome.other.len());
        for record in &outcome.other {
            println!("{}", render_line(record));
        }

        if !report.backfilled_places.is_empty() {
            println!();
            println!("Unknown place ids fetched this run:");
            for place in &report.backfilled_places {
                match (&place.name, &place.place_type_label) {
                    (Some(name), Some(label)) => println!("  {} {} ({})", place.id, name, label),
                    (Some(name), None) => println!("  {} {}", place.id, name),
                    (None, _) => println!("  {} lookup failed", place.id),
                }
            }
        }
        if !report.missing_term_ids.is_empty() {
            println!("Annotation terms with no label: {:?}", report.missing_term_ids);
        }
        if !report.missing_value_ids.is_empty() {
            println!(
                "Annotation values with no label: {:?}",
                report.missing_value_ids
            );
        }
    }
}

impl ProgressSink for ConsoleOutput {
    fn event(&self, event: ProgressEvent) {
        println!("{}", event.message);
    }
}

pub struct JsonOutput;

impl JsonOutput {
    pub fn print_report(report: &SurveyReport) -> io::Result<()> {
        Self::print_json(report)
    }

    pub fn print_clear(result: &ClearResult) -> io::Result<()> {
        Self::print_json(result)
    }

    pub fn print_prune(result: &PruneResult) -> io::Result<()> {
        Self::print_json(result)
    }

    fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        let mut stdout = io::stdout();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}

impl ProgressSink for JsonOutput {
    fn event(&self, _event: ProgressEvent) {}
}
