//! Diagnostics for the XRT front end.
//!
//! Every fatal condition in scanning, operator resolution, and parsing is a
//! [`CompileError`]: one type carrying a closed [`ErrorKind`], a message, and
//! the offending token's location. Callers match on the kind only when they
//! need to; rendering (colour, snippets) is left to whoever receives it.

mod error;
mod error_code;

pub use error::{CompileError, ErrorKind, Phase};
pub use error_code::ErrorCode;
