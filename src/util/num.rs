/// Significant digits used when rendering floats, matching C's `%g`.
pub const GENERAL_PRECISION: i32 = 6;

/// Renders a float the way C's `printf("%g", value)` does.
///
/// Six significant digits are kept. Fixed notation is used when the decimal
/// exponent lies in `-4..6`, scientific notation otherwise; trailing zeros of
/// the fraction are removed in both forms and the exponent carries a sign and
/// at least two digits.
///
/// # Parameters
/// - `value`: The float to render.
///
/// # Returns
/// The rendered text.
///
/// # Example
/// ```
/// use golfstack::util::num::format_general;
///
/// assert_eq!(format_general(2.5), "2.5");
/// assert_eq!(format_general(2.0), "2");
/// assert_eq!(format_general(0.0001), "0.0001");
/// assert_eq!(format_general(0.00001), "1e-05");
/// assert_eq!(format_general(1234567.0), "1.23457e+06");
/// assert_eq!(format_general(1e20), "1e+20");
/// assert_eq!(format_general(-1.0 / 3.0), "-0.333333");
/// assert_eq!(format_general(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the final precision first decides which notation applies.
    let scientific = format!("{:.*e}", usize::try_from(GENERAL_PRECISION - 1).unwrap_or(0), value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= GENERAL_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(GENERAL_PRECISION - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Strips trailing zeros, and then a dangling point, from a decimal fraction.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Value a text reads as when it does not start with a number.
pub const UNREADABLE_TEXT_VALUE: i64 = 1;

/// Reads the integer a byte string starts with.
///
/// Leading whitespace is skipped, then an optional sign and at least one
/// ASCII digit must follow; reading stops at the first non-digit. Values
/// beyond the `i64` range saturate. A string that does not start with a
/// number reads as [`UNREADABLE_TEXT_VALUE`].
///
/// # Example
/// ```
/// use golfstack::util::num::parse_leading_integer;
///
/// assert_eq!(parse_leading_integer(b"42"), 42);
/// assert_eq!(parse_leading_integer(b"  -17 apples"), -17);
/// assert_eq!(parse_leading_integer(b"3.75"), 3);
/// assert_eq!(parse_leading_integer(b"x=9,y=3"), 1);
/// assert_eq!(parse_leading_integer(b"- 4"), 1);
/// assert_eq!(parse_leading_integer(b""), 1);
/// assert_eq!(parse_leading_integer(b"99999999999999999999"), i64::MAX);
/// ```
#[must_use]
pub fn parse_leading_integer(bytes: &[u8]) -> i64 {
    let bytes = skip_space(bytes);
    let (negative, unsigned) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, bytes),
    };
    let digits = digit_run(unsigned);
    if digits == 0 {
        return UNREADABLE_TEXT_VALUE;
    }

    unsigned[..digits].iter().fold(0_i64, |acc, byte| {
        let digit = i64::from(byte - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    })
}

/// Reads the float a byte string starts with.
///
/// Like [`parse_leading_integer`], but the number may carry a fractional part
/// (`2.5`, `.5`, `7.`), an exponent (`1e3`), or be one of `inf`, `infinity`
/// and `nan` in any case. A string that does not start with a number reads
/// as `1.0`.
///
/// # Example
/// ```
/// use golfstack::util::num::parse_leading_float;
///
/// assert_eq!(parse_leading_float(b"3.75kg"), 3.75);
/// assert_eq!(parse_leading_float(b" -.5"), -0.5);
/// assert_eq!(parse_leading_float(b"7."), 7.0);
/// assert_eq!(parse_leading_float(b"2e3x"), 2000.0);
/// assert_eq!(parse_leading_float(b"2e"), 2.0);
/// assert_eq!(parse_leading_float(b"-Inf"), f64::NEG_INFINITY);
/// assert_eq!(parse_leading_float(b"t=-0.5"), 1.0);
/// assert_eq!(parse_leading_float(b""), 1.0);
/// ```
#[must_use]
pub fn parse_leading_float(bytes: &[u8]) -> f64 {
    let bytes = skip_space(bytes);
    let sign = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let end = sign + float_run(&bytes[sign..]);
    if end == sign {
        return i64_to_f64(UNREADABLE_TEXT_VALUE);
    }

    std::str::from_utf8(&bytes[..end]).ok()
                                       .and_then(|run| run.parse().ok())
                                       .unwrap_or_else(|| i64_to_f64(UNREADABLE_TEXT_VALUE))
}

/// Drops the leading bytes C's `isspace` accepts.
fn skip_space(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter()
                     .position(|&byte| !matches!(byte, b' ' | b'\t'..=b'\r'))
                     .unwrap_or(bytes.len());
    &bytes[start..]
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

/// Length of the unsigned float at the start of `bytes`; `0` when there is
/// none.
fn float_run(bytes: &[u8]) -> usize {
    for word in ["infinity", "inf", "nan"] {
        if bytes.len() >= word.len() && bytes[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return word.len();
        }
    }

    let whole = digit_run(bytes);
    let mut end = whole;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digit_run(&bytes[end + 1..]);
        end += 1 + fraction;
    }
    if whole + fraction == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'-' | b'+')));
        let exponent = digit_run(&bytes[end + 1 + sign..]);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }
    end
}

/// Truncates a float toward zero, saturating at the `i64` bounds (`NaN` gives
/// `0`).
///
/// # Example
/// ```
/// use golfstack::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(-2.9), -2);
/// assert_eq!(f64_to_i64_truncated(1e300), i64::MAX);
/// assert_eq!(f64_to_i64_truncated(f64::NAN), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn f64_to_i64_truncated(value: f64) -> i64 {
    value as i64
}

/// Converts an `i64` to a `f64`, rounding to the nearest representable value.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `i64` position into an index, if it is non-negative and
/// addressable.
///
/// # Example
/// ```
/// use golfstack::util::num::i64_to_index;
///
/// assert_eq!(i64_to_index(3), Some(3));
/// assert_eq!(i64_to_index(-1), None);
/// ```
#[must_use]
pub fn i64_to_index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

/// Converts an `i64` repetition or element count into a `usize`, clamping
/// negative values to zero.
///
/// # Example
/// ```
/// use golfstack::util::num::i64_to_count;
///
/// assert_eq!(i64_to_count(4), 4);
/// assert_eq!(i64_to_count(-4), 0);
/// ```
#[must_use]
pub fn i64_to_count(value: i64) -> usize {
    usize::try_from(value).unwrap_or(if value < 0 { 0 } else { usize::MAX })
}

/// Converts a length or position into an `i64`, saturating at `i64::MAX`.
#[must_use]
pub fn usize_to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
