//! Plain-text report written to stdout.
//!
//! Format:
//! ```text
//! exp1 0.15
//! exp2 0.05
//!
//! average: 0.1
//! ```

use crate::aggregator::FileArea;
use crate::utils::config::FLOAT_SIGNIFICANT_DIGITS;
use crate::utils::error::OutputError;
use std::io::Write;

/// Write one `label area` line per file, a blank line, then the average
///
/// **Public** - main entry point for text output
///
/// # Errors
/// * `OutputError::WriteFailed` - Writer rejected the output
pub fn write_text_report<W: Write>(
    entries: &[FileArea],
    average: f64,
    writer: &mut W,
) -> Result<(), OutputError> {
    for entry in entries {
        writeln!(writer, "{} {}", entry.label, format_area(entry.area))?;
    }

    writeln!(writer)?;
    writeln!(writer, "average: {}", format_area(average))?;
    writer.flush()?;

    Ok(())
}

/// Format a float with 12 significant digits
///
/// **Public** - used for every number in the text report
///
/// Mirrors `%.12g` with trailing zeros dropped, keeping a `.0` on integral
/// values: `0.15000000000000002` prints as `0.15`, `1.0` as `1.0` and
/// `0.00001` as `1e-05`.
pub fn format_area(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let precision = FLOAT_SIGNIFICANT_DIGITS;

    // Rounded scientific form tells us the decimal exponent after rounding
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        );
    }

    let decimals = (precision as i32 - 1 - exponent) as usize;
    let fixed = format!("{:.*}", decimals, value);
    let trimmed = trim_fraction(&fixed);

    if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        format!("{}.0", trimmed)
    }
}

/// Drop trailing zeros after the decimal point, and the point itself if bare
///
/// **Private** - internal formatting helper
fn trim_fraction(number: &str) -> &str {
    if !number.contains('.') {
        return number;
    }
    number.trim_end_matches('0').trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_area_drops_float_noise() {
        assert_eq!(format_area(0.675 - 0.525), "0.15");
        assert_eq!(format_area((0.15 + 0.05) / 2.0), "0.1");
    }

    #[test]
    fn test_format_area_integral_and_zero() {
        assert_eq!(format_area(1.0), "1.0");
        assert_eq!(format_area(-3.0), "-3.0");
        assert_eq!(format_area(0.0), "0.0");
        assert_eq!(format_area(100000000000.0), "100000000000.0");
    }

    #[test]
    fn test_format_area_scientific() {
        assert_eq!(format_area(0.00001), "1e-05");
        assert_eq!(format_area(-0.000012345), "-1.2345e-05");
        assert_eq!(format_area(1e16), "1e+16");
        assert_eq!(format_area(0.0001), "0.0001");
    }

    #[test]
    fn test_format_area_twelve_digits() {
        assert_eq!(format_area(1.0 / 3.0), "0.333333333333");
        assert_eq!(format_area(-2.0 / 3.0), "-0.666666666667");
    }

    #[test]
    fn test_format_area_non_finite() {
        assert_eq!(format_area(f64::NAN), "nan");
        assert_eq!(format_area(f64::INFINITY), "inf");
        assert_eq!(format_area(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_write_text_report() {
        let entries = vec![
            FileArea::new("exp1", "curves/exp1.matlab", 2, 0.15),
            FileArea::new("exp2", "curves/exp2.matlab", 2, 0.05),
        ];
        let mut out = Vec::new();

        write_text_report(&entries, 0.1, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "exp1 0.15\nexp2 0.05\n\naverage: 0.1\n"
        );
    }
}
