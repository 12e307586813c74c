use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("The {0} parameter name can't be empty")]
    EmptyParamName(&'static str),
    #[error("query and page parameters can't share the name {0:?}")]
    ParamNameCollision(String),
    #[error("A quiet period of {0}ms is longer than a browser timeout allows")]
    QuietPeriodTooLong(u64),
    #[error("The first page value can't be empty")]
    EmptyFirstPage,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
