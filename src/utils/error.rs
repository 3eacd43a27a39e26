use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Result type for the generation pipeline
pub type PixifyResult<T> = Result<T, PixifyError>;

/// Error types for Pixify operations
#[derive(Debug)]
pub enum PixifyError {
    /// Descriptor missing, unparsable, or holding an invalid value
    Config(String),
    /// A named template could not be resolved under the source root
    TemplateNotFound(String),
    /// The template engine failed while parsing or evaluating a template
    Render { template: String, message: String },
    /// IO error with the path it happened on
    Io { path: PathBuf, source: io::Error },
    /// Server error
    Server(String),
}

impl PixifyError {
    /// Wrap an IO error together with the path that caused it
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        PixifyError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build a render error for the given template
    pub fn render<T: fmt::Display>(template: &str, message: T) -> Self {
        PixifyError::Render {
            template: template.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for PixifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixifyError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PixifyError::TemplateNotFound(name) => write!(f, "Template not found: {}", name),
            PixifyError::Render { template, message } => {
                write!(f, "Error rendering template {}: {}", template, message)
            }
            PixifyError::Io { path, source } => write!(f, "IO error on {}: {}", path.display(), source),
            PixifyError::Server(msg) => write!(f, "Server error: {}", msg),
        }
    }
}

impl Error for PixifyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PixifyError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<walkdir::Error> for PixifyError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "filesystem loop detected"));
        PixifyError::Io { path, source }
    }
}
