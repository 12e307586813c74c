use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_QUIET_PERIOD_MS: u64 = 300;

/// Settings for one search input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// How long typing has to pause before the URL gets updated
    pub quiet_period_ms: u64,
    /// Parameter holding the search term
    pub query_param: String,
    /// Pagination parameter, reset on every search
    pub page_param: String,
    /// Value written to `page_param`
    pub first_page: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            quiet_period_ms: DEFAULT_QUIET_PERIOD_MS,
            query_param: "query".to_string(),
            page_param: "page".to_string(),
            first_page: "1".to_string(),
        }
    }
}

impl SearchConfig {
    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.query_param.is_empty() {
            return Err(ConfigError::EmptyParamName("query"));
        }
        if self.page_param.is_empty() {
            return Err(ConfigError::EmptyParamName("page"));
        }
        if self.query_param == self.page_param {
            return Err(ConfigError::ParamNameCollision(self.query_param.clone()));
        }
        if self.first_page.is_empty() {
            return Err(ConfigError::EmptyFirstPage);
        }
        // browser timeouts take a u32 of milliseconds
        if self.quiet_period_ms > u64::from(u32::MAX) {
            return Err(ConfigError::QuietPeriodTooLong(self.quiet_period_ms));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.quiet_period(), Duration::from_millis(300));
        assert_eq!(config.query_param, "query");
        assert_eq!(config.page_param, "page");
        assert_eq!(config.first_page, "1");
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"quiet_period_ms": 150, "query_param": "q"}"#).unwrap();
        assert_eq!(config.quiet_period(), Duration::from_millis(150));
        assert_eq!(config.query_param, "q");
        assert_eq!(config.page_param, "page");
    }

    #[test]
    fn validation_errors() {
        let config = SearchConfig {
            query_param: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyParamName("query")));

        let config = SearchConfig {
            page_param: "query".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ParamNameCollision("query".to_string()))
        );

        let config = SearchConfig {
            first_page: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyFirstPage));

        let config = SearchConfig {
            quiet_period_ms: 5_000_000_000,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::QuietPeriodTooLong(5_000_000_000))
        );

        let config = SearchConfig {
            quiet_period_ms: u64::from(u32::MAX),
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
