//! Parser for whitespace-delimited learning-curve result files.
//!
//! Each line holds exactly four numbers:
//! `randomSize randomAccuracy selectiveSize selectiveAccuracy`.
//! Any malformed line aborts the parse; there is no partial result.

use super::schema::{CurveDataset, CurveSample};
use crate::utils::config::FIELDS_PER_LINE;
use crate::utils::error::ParseError;
use log::debug;
use std::path::Path;

/// Parse a results file from disk
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `path` - Path to the results file
///
/// # Returns
/// The file's samples in line order
///
/// # Errors
/// * `ParseError::Io` - File cannot be read
/// * `ParseError::FieldCount` - A line does not have exactly four fields
/// * `ParseError::InvalidNumber` - A field is not a floating-point number
pub fn parse_curve_file(path: impl AsRef<Path>) -> Result<CurveDataset, ParseError> {
    let path = path.as_ref();

    debug!("Parsing curve file: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    let dataset = parse_curve_str(&content)?;

    debug!("Parsed {} samples from {}", dataset.len(), path.display());

    Ok(dataset)
}

/// Parse results-file content already held in memory
///
/// **Public** - same rules as [`parse_curve_file`]
pub fn parse_curve_str(content: &str) -> Result<CurveDataset, ParseError> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line))
        .collect::<Result<Vec<_>, _>>()
        .map(CurveDataset::new)
}

/// Parse a single record
///
/// **Private** - `line_number` is 1-based and only used for error reporting
fn parse_line(line_number: usize, line: &str) -> Result<CurveSample, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() != FIELDS_PER_LINE {
        return Err(ParseError::FieldCount {
            line: line_number,
            expected: FIELDS_PER_LINE,
            found: tokens.len(),
        });
    }

    let random_size = parse_number(line_number, tokens[0])?;
    let random_accuracy = parse_number(line_number, tokens[1])?;
    let selective_size = parse_number(line_number, tokens[2])?;
    let selective_accuracy = parse_number(line_number, tokens[3])?;

    Ok(CurveSample::new(
        random_size,
        random_accuracy,
        selective_size,
        selective_accuracy,
    ))
}

fn parse_number(line_number: usize, token: &str) -> Result<f64, ParseError> {
    token
        .parse::<f64>()
        .map_err(|source| ParseError::InvalidNumber {
            line: line_number,
            token: token.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_two_lines() {
        let dataset = parse_curve_str("1 0.5 1 0.6\n2 0.55 2 0.75\n").unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.samples()[0], CurveSample::new(1.0, 0.5, 1.0, 0.6));
        assert_eq!(dataset.samples()[1], CurveSample::new(2.0, 0.55, 2.0, 0.75));
    }

    #[test]
    fn test_mixed_whitespace_and_crlf() {
        let dataset = parse_curve_str("10\t0.1   20 0.2\r\n 30 0.3\t40\t0.4 \r\n").unwrap();

        assert_eq!(dataset.random_sizes(), vec![10.0, 30.0]);
        assert_eq!(dataset.selective_accuracies(), vec![0.2, 0.4]);
    }

    #[test]
    fn test_empty_content() {
        let dataset = parse_curve_str("").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_curve_str("1 0.5 1 0.6\n2 0.55 2\n").unwrap_err();

        match err {
            ParseError::FieldCount { line, expected, found } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_line_is_malformed() {
        let err = parse_curve_str("1 0.5 1 0.6\n\n2 0.55 2 0.75\n").unwrap_err();
        assert!(matches!(err, ParseError::FieldCount { line: 2, found: 0, .. }));
    }

    #[test]
    fn test_non_numeric_token() {
        let err = parse_curve_str("1 0.5 one 0.6\n").unwrap_err();

        match err {
            ParseError::InvalidNumber { line, token, .. } => {
                assert_eq!(line, 1);
                assert_eq!(token, "one");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_scientific_notation() {
        let dataset = parse_curve_str("1e2 5e-1 1E2 0.6\n").unwrap();
        assert_eq!(dataset.samples()[0], CurveSample::new(100.0, 0.5, 100.0, 0.6));
    }

    #[test]
    fn test_parse_curve_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1 0.5 1 0.6").unwrap();
        writeln!(file, "2 0.55 2 0.75").unwrap();

        let dataset = parse_curve_file(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_curve_file(dir.path().join("absent.matlab")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
