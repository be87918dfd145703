use crate::domain::ports::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_path, validate_suffix, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_SUFFIX: &str = ".csv";

/// File-driven configuration, for setups where the source list or the
/// accepted column spellings change per school year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub columns: ColumnConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input_path: String,
    pub sources: Vec<String>,
    pub suffix: Option<String>,
}

/// Accepted header spellings per logical field. Two near-identical import
/// scripts used to exist just to cover spelling variants between the
/// schools' spreadsheet exports; this mapping replaces both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub equipo: Vec<String>,
    pub alumno: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub preserve_assignments: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl RosterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` references with the environment value.
    /// Unset variables are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("source.input_path", &self.source.input_path)?;
        validate_path("load.output_path", &self.load.output_path)?;
        validate_non_empty_list("source.sources", &self.source.sources)?;
        validate_suffix("source.suffix", self.source_suffix(), &["csv", "tsv"])?;
        validate_non_empty_list("columns.equipo", &self.columns.equipo)?;
        validate_non_empty_list("columns.alumno", &self.columns.alumno)?;
        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for RosterConfig {
    fn input_path(&self) -> &str {
        &self.source.input_path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn sources(&self) -> &[String] {
        &self.source.sources
    }

    fn source_suffix(&self) -> &str {
        self.source.suffix.as_deref().unwrap_or(DEFAULT_SUFFIX)
    }

    fn team_columns(&self) -> &[String] {
        &self.columns.equipo
    }

    fn member_columns(&self) -> &[String] {
        &self.columns.alumno
    }

    fn preserve_assignments(&self) -> bool {
        self.load.preserve_assignments.unwrap_or(false)
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
