//! XRT compiler driver.
//!
//! Runs the front end (scan, resolve operators, parse) over one file at a
//! time and hosts the concerns the core crates leave out: reading files,
//! logging setup, command-line options, and token/AST dumps.

mod dump;
mod error;
mod options;
mod pipeline;

use std::sync::Once;

pub use dump::{dump_ast, dump_tokens, AstPrinter};
pub use error::DriverError;
pub use options::Options;
pub use pipeline::{compile_file, compile_source, Compiled};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for log output.
///
/// Call this once at startup. Safe to call multiple times. The filter comes
/// from `RUST_LOG` (e.g. `RUST_LOG=xrt_parse=trace`) and defaults to `info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
