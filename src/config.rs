use crate::scenario::{ClassroomScenario, StudentScenario, SubjectScenario};
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Stop at the first failing example.
    pub fail_fast: bool,
    /// Run the documented examples in addition to the configured ones.
    pub builtin: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            builtin: true,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub check: CheckConfig,
    pub classroom: Vec<ClassroomScenario>,
    pub subject: Vec<SubjectScenario>,
    pub student: Vec<StudentScenario>,
}

impl Config {
    pub fn load(file_name: impl AsRef<Path>) -> Result<Config> {
        let file_name = file_name.as_ref();
        let content = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        let config = Self::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))?;
        info!(
            file = %file_name.display(),
            scenarios = config.scenario_count(),
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn scenario_count(&self) -> usize {
        self.classroom.len() + self.subject.len() + self.student.len()
    }
}
