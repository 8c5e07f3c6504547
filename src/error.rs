use miette::Diagnostic;
use thiserror::Error;

/// Main error type for skinforge operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkinError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(skinforge::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(skinforge::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown palette: {name}")]
    #[diagnostic(code(skinforge::palette))]
    Palette {
        name: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SkinError>;
