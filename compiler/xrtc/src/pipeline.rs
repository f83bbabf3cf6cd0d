//! Per-file front-end pipeline.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info_span};
use xrt_diagnostic::CompileError;
use xrt_ir::{Ast, SourceBuffer, TokenList};

use crate::DriverError;

/// Everything the front end produces for one file.
#[derive(Clone, Debug)]
pub struct Compiled {
    /// Operator-resolved token stream.
    pub tokens: TokenList,
    pub ast: Ast,
}

/// Run `f`, logging how long the stage took.
fn timed<T>(stage: &'static str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    debug!(stage, elapsed = ?start.elapsed(), "stage finished");
    result
}

/// Scan, resolve operators, and parse an already loaded source.
pub fn compile_source(source: Arc<SourceBuffer>) -> Result<Compiled, CompileError> {
    let _span = info_span!("compile", path = %source.path().display()).entered();

    let scanned = timed("scan", || xrt_lexer::scan(source))?;
    let tokens = timed("resolve", || xrt_lexer::resolve_operators(&scanned))?;
    let ast = timed("parse", || xrt_parse::parse(&tokens))?;

    Ok(Compiled { tokens, ast })
}

/// Read `path` and compile it.
pub fn compile_file(path: &Path) -> Result<Compiled, DriverError> {
    let text = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if u32::try_from(text.len()).is_err() {
        return Err(DriverError::TooLarge {
            path: path.to_path_buf(),
            len: text.len(),
        });
    }

    compile_source(SourceBuffer::shared(text, path)).map_err(|source| DriverError::Compile {
        path: path.to_path_buf(),
        source,
    })
}
