//! Command-line argument parsing and validation

use crate::core::number::parse_number;
use clap::Parser;
use std::path::PathBuf;

/// Add one or more numbers
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(name = "add")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Filename to write result to
    pub output_file: PathBuf,

    /// One or more numbers
    // Hyphenated tokens (`-.5`, `-1_000`, `-inf`) are left to `parse_number`;
    // flags therefore have to come before the first number.
    #[arg(
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        value_parser = parse_number
    )]
    pub numbers: Vec<f64>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_basic_args() {
        let args = Args::try_parse_from(["add", "out.txt", "1", "2", "3"]).unwrap();
        assert!(!args.debug);
        assert_eq!(args.output_file, PathBuf::from("out.txt"));
        assert_eq!(args.numbers, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_debug_flag() {
        let args = Args::try_parse_from(["add", "--debug", "out.txt", "1"]).unwrap();
        assert!(args.debug);
    }

    #[test]
    fn test_parse_negative_numbers() {
        let args = Args::try_parse_from(["add", "out.txt", "-5.5", "5.5", "-3"]).unwrap();
        assert_eq!(args.numbers, vec![-5.5, 5.5, -3.0]);
    }

    #[test]
    fn test_parse_hyphenated_number_forms() {
        let args =
            Args::try_parse_from(["add", "out.txt", "-.5", "-1_000", "-1e5", "-inf"]).unwrap();
        assert_eq!(
            args.numbers,
            vec![-0.5, -1000.0, -100000.0, f64::NEG_INFINITY]
        );
    }

    #[test]
    fn test_hyphenated_garbage_is_an_invalid_number() {
        let err = Args::try_parse_from(["add", "out.txt", "1", "-x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("invalid float value: '-x'"));
    }

    #[test]
    fn test_missing_numbers() {
        let err = Args::try_parse_from(["add", "out.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_missing_output_file() {
        let err = Args::try_parse_from(["add"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_invalid_number() {
        let err = Args::try_parse_from(["add", "out.txt", "1", "two"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("invalid float value: 'two'"));
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let err = Args::try_parse_from(["add", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }
}
