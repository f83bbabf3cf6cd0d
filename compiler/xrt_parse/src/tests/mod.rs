//! Parser tests.
//!
//! - `parser`: top-level grammar rules and the ASTs they produce
//! - `errors`: every error kind the grammar can raise

mod errors;
