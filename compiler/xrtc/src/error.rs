//! Errors that end processing of one input file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use xrt_diagnostic::CompileError;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{}: cannot read source: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Spans are 32-bit byte offsets.
    #[error("{}: source is {len} bytes, the limit is {} bytes", path.display(), u32::MAX)]
    TooLarge { path: PathBuf, len: usize },

    #[error("{}:{source}", path.display())]
    Compile {
        path: PathBuf,
        #[source]
        source: CompileError,
    },

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("no input files")]
    NoInput,
}

impl DriverError {
    /// The front-end error, if the file was read but failed to compile.
    pub fn compile_error(&self) -> Option<&CompileError> {
        match self {
            DriverError::Compile { source, .. } => Some(source),
            _ => None,
        }
    }
}
