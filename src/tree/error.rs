use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeError {
    #[error("config name must not be empty")]
    EmptyConfigName,

    #[error("section type must not be empty")]
    EmptySectionType,

    #[error("option name must not be empty")]
    EmptyOptionName,

    #[error("config handle is stale")]
    StaleConfig,

    #[error("section handle is stale")]
    StaleSection,

    #[error("option handle is stale")]
    StaleOption,
}
