use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    #[error("cannot load unregistered function '{0}'")]
    UnregisteredFunction(String),
    #[error("cannot find existing function '{0}' in pipeline")]
    NotFound(String),
    #[error("pipeline contains a function without a registered label")]
    UnlabelledFunction,
    #[error("unsupported language '{0}'")]
    UnsupportedLanguage(String),
    #[error("language support unavailable: {0}")]
    LanguageSupportUnavailable(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid trimmer: {0}")]
    InvalidTrimmer(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl PipelineError {
    /// Errors the caller has to fix in its setup rather than at runtime.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PipelineError::UnsupportedLanguage(_) | PipelineError::Configuration(_)
        )
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for PipelineError {
    fn from(err: serde_yaml::Error) -> Self {
        PipelineError::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
