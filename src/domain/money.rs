use std::fmt;

/// Money is represented as integer minor units (cents) to avoid
/// floating-point precision issues: 100.00 = 10000 cents.
pub type Cents = i64;

/// Format cents as a plain decimal string.
/// Example: 10000 -> "100.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Parse a decimal string into cents.
/// Example: "100" -> 10000, "12.5" -> 1250, "0.01" -> 1
pub fn parse_cents(input: &str) -> Result<Cents, AmountError> {
    let input = input.trim();
    let negative = input.starts_with('-');
    let digits = input.trim_start_matches('-');

    let (units_str, decimal_str) = match digits.split_once('.') {
        None => (digits, ""),
        Some((units, decimal)) if !decimal.contains('.') => (units, decimal),
        Some(_) => return Err(AmountError::InvalidFormat(input.to_string())),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(AmountError::InvalidFormat(input.to_string()));
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| AmountError::InvalidFormat(input.to_string()))?
    };

    // Pad a single decimal digit, truncate past two.
    let decimal: i64 = match decimal_str.len() {
        0 => 0,
        1 => parse_digits(decimal_str, input)? * 10,
        _ => {
            let first_two = decimal_str
                .get(..2)
                .ok_or_else(|| AmountError::InvalidFormat(input.to_string()))?;
            parse_digits(first_two, input)?
        }
    };

    let cents = units * 100 + decimal;
    Ok(if negative { -cents } else { cents })
}

fn parse_digits(s: &str, original: &str) -> Result<i64, AmountError> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::InvalidFormat(original.to_string()));
    }
    s.parse()
        .map_err(|_| AmountError::InvalidFormat(original.to_string()))
}

/// Validate a raw amount string from user input.
/// Accepts any non-negative decimal; rejects negative and non-numeric text.
pub fn validate_amount(input: &str) -> Result<Cents, AmountError> {
    let cents = parse_cents(input)?;
    if cents < 0 {
        return Err(AmountError::Negative(input.trim().to_string()));
    }
    Ok(cents)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    InvalidFormat(String),
    Negative(String),
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::InvalidFormat(input) => write!(f, "invalid amount: '{}'", input),
            AmountError::Negative(input) => write!(f, "amount cannot be negative: '{}'", input),
        }
    }
}

impl std::error::Error for AmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(10000), "100.00");
        assert_eq!(format_cents(1234), "12.34");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-4000), "-40.00");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("100"), Ok(10000));
        assert_eq!(parse_cents("100.00"), Ok(10000));
        assert_eq!(parse_cents("12.5"), Ok(1250));
        assert_eq!(parse_cents(".50"), Ok(50));
        assert_eq!(parse_cents(" 42 "), Ok(4200));
        assert_eq!(parse_cents("-40.00"), Ok(-4000));
        assert_eq!(parse_cents("100.999"), Ok(10099)); // truncates
    }

    #[test]
    fn test_parse_cents_invalid() {
        assert!(parse_cents("abc").is_err());
        assert!(parse_cents("").is_err());
        assert!(parse_cents(".").is_err());
        assert!(parse_cents("12.34.56").is_err());
        assert!(parse_cents("12.x9").is_err());
    }

    #[test]
    fn test_validate_amount_accepts_non_negative() {
        assert_eq!(validate_amount("500"), Ok(50000));
        assert_eq!(validate_amount("0"), Ok(0));
        assert_eq!(validate_amount("0.01"), Ok(1));
    }

    #[test]
    fn test_validate_amount_rejects_negative_and_garbage() {
        assert!(matches!(
            validate_amount("-1"),
            Err(AmountError::Negative(_))
        ));
        assert!(matches!(
            validate_amount("ten"),
            Err(AmountError::InvalidFormat(_))
        ));
    }
}
