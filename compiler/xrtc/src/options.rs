//! Command-line options.

use std::path::PathBuf;

use crate::DriverError;

/// What the driver does with each input file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Print every token of each file.
    pub dump_tokens: bool,
    /// Print the AST of each file.
    pub dump_ast: bool,
    /// Source files, in command-line order.
    pub paths: Vec<PathBuf>,
}

impl Options {
    /// Parse the arguments after the program name.
    ///
    /// Flags may appear anywhere; everything that is not a flag is a path.
    pub fn parse<I, S>(args: I) -> Result<Options, DriverError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Options::default();
        for arg in args {
            let arg = arg.into();
            match arg.as_str() {
                "--tokens" => options.dump_tokens = true,
                "--ast" => options.dump_ast = true,
                flag if flag.starts_with('-') => return Err(DriverError::UnknownOption(arg)),
                _ => options.paths.push(PathBuf::from(arg)),
            }
        }
        if options.paths.is_empty() {
            return Err(DriverError::NoInput);
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags_and_paths() {
        let options = Options::parse(["--ast", "a.xrt", "--tokens", "b.xrt"]);
        assert_eq!(
            options.ok(),
            Some(Options {
                dump_tokens: true,
                dump_ast: true,
                paths: vec![PathBuf::from("a.xrt"), PathBuf::from("b.xrt")],
            })
        );
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = Options::parse(["a.xrt", "--verbose"]).err();
        assert!(matches!(err, Some(DriverError::UnknownOption(flag)) if flag == "--verbose"));
    }

    #[test]
    fn paths_are_required() {
        assert!(matches!(
            Options::parse(["--tokens"]),
            Err(DriverError::NoInput)
        ));
        assert!(matches!(
            Options::parse(Vec::<String>::new()),
            Err(DriverError::NoInput)
        ));
    }
}
