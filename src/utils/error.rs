use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Failed to read config file '{path}': {source}")]
    ConfigFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Logger initialization failed: {message}")]
    LoggerError { message: String },
}

pub type Result<T> = std::result::Result<T, ProjectError>;
