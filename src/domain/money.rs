use std::fmt;

/// Money is represented as whole integer units of the account currency.
/// The ledger never converts or rounds, so no fractional part is kept.
pub type Amount = i64;

/// Parse a whole-unit amount, allowing surrounding whitespace and an
/// optional leading sign.
/// Example: "1000" -> 1000, " -500 " -> -500, "+20" -> 20
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    input
        .parse::<Amount>()
        .map_err(|_| ParseAmountError::InvalidFormat(input.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "amount is empty"),
            ParseAmountError::InvalidFormat(raw) => {
                write!(f, "invalid amount '{}': expected a whole number", raw)
            }
        }
    }
}

impl std::error::Error for ParseAmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1000"), Ok(1000));
        assert_eq!(parse_amount(" 42 "), Ok(42));
        assert_eq!(parse_amount("-500"), Ok(-500));
        assert_eq!(parse_amount("+20"), Ok(20));
        assert_eq!(parse_amount("0"), Ok(0));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert_eq!(parse_amount(""), Err(ParseAmountError::Empty));
        assert_eq!(parse_amount("   "), Err(ParseAmountError::Empty));
        assert!(matches!(
            parse_amount("12.50"),
            Err(ParseAmountError::InvalidFormat(_))
        ));
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("99999999999999999999").is_err());
    }
}
