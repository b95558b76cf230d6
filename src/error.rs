use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sprig operations
#[derive(Error, Diagnostic, Debug)]
pub enum SprigError {
    #[error("IO error: {0}")]
    #[diagnostic(code(sprig::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(sprig::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(sprig::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(sprig::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Output error: {message}")]
    #[diagnostic(code(sprig::output))]
    Output { message: String },

    #[error("Watch error: {0}")]
    #[diagnostic(code(sprig::watch))]
    Watch(String),

    #[error("Validation failed: {message}")]
    #[diagnostic(code(sprig::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SprigError>;
