use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: X#### where first digit indicates phase:
/// - X0xxx: Scanner errors
/// - X1xxx: Operator resolution and parser errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanner Errors (X0xxx)
    /// No lexical rule matches the remaining input
    X0001,

    // Parser Errors (X1xxx)
    /// Punctuator run with no operator meaning
    X1001,
    /// Lookahead past the end of the token stream
    X1002,
    /// Token kind did not match what the grammar requires
    X1003,
    /// Unknown preprocessor directive
    X1004,
    /// Recognized construct that is not supported yet
    X1005,
    /// Token not valid at this grammar position
    X1006,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "X1003").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::X0001 => "X0001",
            ErrorCode::X1001 => "X1001",
            ErrorCode::X1002 => "X1002",
            ErrorCode::X1003 => "X1003",
            ErrorCode::X1004 => "X1004",
            ErrorCode::X1005 => "X1005",
            ErrorCode::X1006 => "X1006",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::X1003.to_string(), "X1003");
        assert_eq!(ErrorCode::X0001.as_str(), "X0001");
    }
}
