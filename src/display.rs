use crate::checks::Report;
use crate::scenario::{Group, Outcome};

pub fn display_details(report: &Report) {
    for group in [Group::Classroom, Group::Subject, Group::Student] {
        let mut results = report.results_for(group).peekable();
        if results.peek().is_none() {
            continue;
        }
        println!("{group}:");
        for r in results {
            match &r.outcome {
                Outcome::Passed => println!("  - {}: ok", r.label),
                Outcome::Failed(m) => println!("  - {}: FAILED ({})", r.label, m),
            }
        }
        println!();
    }
}

pub fn display_stats(report: &Report) {
    println!(
        "Examples passed/failed/total: {}/{}/{}",
        report.passed(),
        report.failed(),
        report.results.len()
    );
}
