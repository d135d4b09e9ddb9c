//! Number formatting and parsing helpers.
//!
//! Path data and `rgba()` strings are written straight into an output buffer.
//! Integers go through `itoa` and fractional values through `ryu`, with
//! trailing zeros trimmed so `10.50` is written as `10.5` and `3.0` as `3`.

/// Write `n` rounded to `precision` decimal places with minimal digits.
///
/// # Examples
///
/// ```
/// use shapepaint::common::num::write_num;
///
/// let mut buf = String::new();
/// write_num(&mut buf, 10.0, 2);
/// buf.push(' ');
/// write_num(&mut buf, 10.126, 2);
/// assert_eq!(buf, "10 10.13");
/// ```
#[inline]
pub fn write_num(buf: &mut String, n: f64, precision: u32) {
    if !n.is_finite() {
        buf.push('0');
        return;
    }

    let factor = 10f64.powi(precision as i32);
    let mut rounded = (n * factor).round() / factor;
    // Avoid "-0"
    if rounded == 0.0 {
        rounded = 0.0;
    }

    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        let mut buffer = itoa::Buffer::new();
        buf.push_str(buffer.format(rounded as i64));
    } else {
        let mut buffer = ryu::Buffer::new();
        let s = buffer.format(rounded);
        if s.contains('.') && !s.contains('e') {
            buf.push_str(s.trim_end_matches('0').trim_end_matches('.'));
        } else {
            buf.push_str(s);
        }
    }
}

/// Format a number with [`write_num`] into a new string.
#[inline]
pub fn fmt_num(n: f64, precision: u32) -> String {
    let mut s = String::with_capacity(16);
    write_num(&mut s, n, precision);
    s
}

/// Parse a numeric attribute value.
///
/// DrawingML stores almost every quantity as an integer (EMUs, 60000ths of a
/// degree, 100000ths of a percent), so the integer path is tried first and
/// decimal notation is accepted as a fallback.
#[inline]
pub fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let int_val: Option<i64> = atoi_simd::parse::<i64, false, false>(value.as_bytes()).ok();
    if let Some(v) = int_val {
        return Some(v as f64);
    }
    let float_val: Option<f64> = fast_float2::parse(value).ok();
    float_val.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_integers() {
        assert_eq!(fmt_num(0.0, 2), "0");
        assert_eq!(fmt_num(200.0, 2), "200");
        assert_eq!(fmt_num(-15.0, 2), "-15");
    }

    #[test]
    fn test_write_fractions_trimmed() {
        assert_eq!(fmt_num(10.5, 2), "10.5");
        assert_eq!(fmt_num(10.123, 2), "10.12");
        assert_eq!(fmt_num(0.333333, 3), "0.333");
        assert_eq!(fmt_num(0.999, 2), "1");
    }

    #[test]
    fn test_negative_zero_is_plain_zero() {
        assert_eq!(fmt_num(-0.0001, 2), "0");
    }

    #[test]
    fn test_non_finite_written_as_zero() {
        assert_eq!(fmt_num(f64::NAN, 2), "0");
        assert_eq!(fmt_num(f64::INFINITY, 2), "0");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("50000"), Some(50000.0));
        assert_eq!(parse_number("-5400000"), Some(-5400000.0));
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number(" 7 "), Some(7.0));
        assert_eq!(parse_number("w"), None);
        assert_eq!(parse_number(""), None);
    }
}
