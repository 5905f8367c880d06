use crate::UnitError;

const KIB: i64 = 1 << 10;
const MIB: i64 = 1 << 20;
const GIB: i64 = 1 << 30;
const TIB: i64 = 1 << 40;

/// Suffixes in match order. Two-letter forms come first so that `kb` is not
/// read as a number ending in `b`.
const SUFFIXES: [(&str, i64); 9] = [
    ("kb", KIB),
    ("mb", MIB),
    ("gb", GIB),
    ("tb", TIB),
    ("b", 1),
    ("k", KIB),
    ("m", MIB),
    ("g", GIB),
    ("t", TIB),
];

/// Parse a size string into a number of bytes.
///
/// Valid suffixes are `b`, `k`, `kb`, `m`, `mb`, `g`, `gb`, `t` and `tb`,
/// all powers of 1024. Case and surrounding whitespace are ignored, as is
/// whitespace between the number and the suffix. No suffix means bytes.
///
/// # Errors
///
/// Returns [`UnitError::InvalidSize`] if the number part is not a
/// non-negative base-10 integer, and [`UnitError::SizeOverflow`] if the
/// result does not fit.
///
/// # Example
///
/// ```
/// use settings_units::parse_size;
///
/// assert_eq!(parse_size("32").unwrap(), 32);
/// assert_eq!(parse_size(" 92 Kb ").unwrap(), 92 * 1024);
/// assert!(parse_size("15.0").is_err());
/// ```
pub fn parse_size(input: &str) -> Result<i64, UnitError> {
    let lowered = input.trim().to_lowercase();
    let mut number = lowered.as_str();
    let mut factor = 1;
    for (symbol, size) in SUFFIXES {
        if let Some(rest) = number.strip_suffix(symbol) {
            number = rest.trim();
            factor = size;
            break;
        }
    }

    let n = number
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= 0)
        .ok_or_else(|| UnitError::InvalidSize(input.to_string()))?;
    n.checked_mul(factor)
        .ok_or_else(|| UnitError::SizeOverflow(input.to_string()))
}
