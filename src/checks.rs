use crate::builtin;
use crate::config::Config;
use crate::scenario::{Group, Outcome, Scenario};
use eyre::{Result, bail};
use tracing::{debug, warn};

#[derive(Clone, Debug)]
pub struct ExampleResult {
    pub group: Group,
    pub label: String,
    pub outcome: Outcome,
}

#[derive(Clone, Debug, Default)]
pub struct Report {
    pub results: Vec<ExampleResult>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn results_for(&self, group: Group) -> impl Iterator<Item = &ExampleResult> {
        self.results.iter().filter(move |r| r.group == group)
    }
}

fn boxed<S: Scenario + 'static>(scenario: S) -> Box<dyn Scenario> {
    Box::new(scenario)
}

/// Gather the scenarios to check: the documented examples first (unless
/// disabled), then the configured ones, optionally restricted to one group.
pub fn collect(config: &Config, only: Option<Group>) -> Vec<Box<dyn Scenario>> {
    let mut scenarios: Vec<Box<dyn Scenario>> = Vec::new();
    if config.check.builtin {
        scenarios.extend(builtin::classrooms().into_iter().map(boxed));
        scenarios.extend(builtin::subjects().into_iter().map(boxed));
        scenarios.extend(builtin::students().into_iter().map(boxed));
    }
    scenarios.extend(config.classroom.iter().cloned().map(boxed));
    scenarios.extend(config.subject.iter().cloned().map(boxed));
    scenarios.extend(config.student.iter().cloned().map(boxed));
    scenarios.retain(|s| only.is_none_or(|g| s.group() == g));
    scenarios
}

pub fn run(scenarios: &[Box<dyn Scenario>], fail_fast: bool) -> Report {
    let mut report = Report::default();
    for scenario in scenarios {
        let (group, label) = (scenario.group(), scenario.label());
        let outcome = scenario.run();
        match &outcome {
            Outcome::Passed => debug!(%group, example = %label, "example passed"),
            Outcome::Failed(m) => {
                warn!(%group, example = %label, mismatch = %m, "example failed");
            }
        }
        let stop = fail_fast && !outcome.is_passed();
        report.results.push(ExampleResult {
            group,
            label,
            outcome,
        });
        if stop {
            debug!("stopping at first failure");
            break;
        }
    }
    report
}

pub fn ensure_all_passed(report: &Report) -> Result<()> {
    if report.results.is_empty() {
        bail!("no example has been run");
    }
    let failed = report.failed();
    if failed > 0 {
        bail!(
            "{} example{} out of {} did not match the expected result",
            failed,
            if failed == 1 { "" } else { "s" },
            report.results.len()
        );
    }
    Ok(())
}
