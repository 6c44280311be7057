use crate::utils::error::Result;
use crate::utils::logger::{self, LogFormat};
use crate::utils::validation::{validate_filter_directives, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "hello", version)]
#[command(about = "Decodes an empty record and prints a greeting")]
pub struct CliConfig {
    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Diagnostic log format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Filter directives for diagnostics, e.g. "hello=trace"; overrides --verbose
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl CliConfig {
    pub fn filter_directives(&self) -> &str {
        logger::filter_directives(self.verbose, self.log_filter.as_deref())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(directives) = &self.log_filter {
            validate_filter_directives("log_filter", directives)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_parse_to_defaults() {
        let config = CliConfig::try_parse_from(["hello"]).unwrap();
        assert!(!config.verbose);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert_eq!(config.filter_directives(), logger::DEFAULT_FILTER);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_filter_overrides_verbose() {
        let config =
            CliConfig::try_parse_from(["hello", "-v", "--log-format", "json", "--log-filter", "hello=trace"])
                .unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.filter_directives(), "hello=trace");
    }

    #[test]
    fn test_invalid_log_filter_fails_validation() {
        let config = CliConfig {
            log_filter: Some("hello=loud".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(crate::HelloError::InvalidConfigValue { .. })
        ));
    }
}
