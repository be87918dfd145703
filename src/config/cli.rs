use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_list, validate_path, validate_suffix, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Flag-driven configuration. Defaults mirror the deployed classroom
/// setup, so a bare `roster-etl` run regenerates the production document.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roster-etl")]
#[command(about = "Builds the classroom roster database from per-group CSV exports")]
pub struct CliConfig {
    /// Directory containing the source CSV files
    #[arg(long, default_value = ".")]
    pub input_path: String,

    /// Directory the database document is written to
    #[arg(long, default_value = "./backend")]
    pub output_path: String,

    /// Expected source identifiers, in processing order
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = vec![
            "1D_equipos".to_string(),
            "2A_equipos".to_string(),
            "2B_equipos".to_string(),
            "2C_equipos".to_string(),
            "2D_equipos".to_string(),
        ]
    )]
    pub sources: Vec<String>,

    /// Suffix appended to each identifier to form its file name
    #[arg(long, default_value = ".csv")]
    pub suffix: String,

    /// Accepted header spellings for the team number column
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = vec!["número de equipo".to_string(), "equipo".to_string()]
    )]
    pub team_columns: Vec<String>,

    /// Accepted header spellings for the member name column
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = vec!["nombre completo".to_string(), "nombre".to_string()]
    )]
    pub member_columns: Vec<String>,

    /// Carry prior project assignments into the regenerated document
    #[arg(long)]
    pub preserve_assignments: bool,

    /// Load configuration from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable resource usage reporting")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn sources(&self) -> &[String] {
        &self.sources
    }

    fn source_suffix(&self) -> &str {
        &self.suffix
    }

    fn team_columns(&self) -> &[String] {
        &self.team_columns
    }

    fn member_columns(&self) -> &[String] {
        &self.member_columns
    }

    fn preserve_assignments(&self) -> bool {
        self.preserve_assignments
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_list("sources", &self.sources)?;
        validate_suffix("suffix", &self.suffix, &["csv", "tsv"])?;
        validate_non_empty_list("team_columns", &self.team_columns)?;
        validate_non_empty_list("member_columns", &self.member_columns)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_deployed_setup() {
        let config = CliConfig::parse_from(["roster-etl"]);

        assert_eq!(config.sources.len(), 5);
        assert_eq!(config.sources[0], "1D_equipos");
        assert_eq!(config.suffix, ".csv");
        assert_eq!(config.output_path, "./backend");
        assert_eq!(
            config.team_columns,
            vec!["número de equipo".to_string(), "equipo".to_string()]
        );
        assert!(!config.preserve_assignments);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn comma_separated_lists_are_split() {
        let config = CliConfig::parse_from([
            "roster-etl",
            "--sources",
            "3A_equipos,3B_equipos",
            "--team-columns",
            "equipo,team",
        ]);

        assert_eq!(
            config.sources,
            vec!["3A_equipos".to_string(), "3B_equipos".to_string()]
        );
        assert_eq!(
            config.team_columns,
            vec!["equipo".to_string(), "team".to_string()]
        );
    }

    #[test]
    fn empty_sources_fail_validation() {
        let mut config = CliConfig::parse_from(["roster-etl"]);
        config.sources.clear();
        assert!(config.validate().is_err());
    }
}
