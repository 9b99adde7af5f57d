//!
//! The token amount parsing and formatting.
//!

///
/// The amount parsing error.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// The string is not an unsigned integer literal, or exceeds 256 bits.
    Invalid,
    /// The value is zero or carries a minus sign.
    NonPositive,
}

///
/// Parses an unsigned amount from a decimal string or a `0x`-prefixed hexadecimal string.
///
/// Zero is accepted here; positivity is checked by [`parse_positive`].
///
pub fn parse(value: &str) -> Result<web3::types::U256, AmountError> {
    let value = value.trim();
    if value.starts_with('-') {
        return Err(AmountError::NonPositive);
    }

    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hexadecimal) if !hexadecimal.is_empty() => {
            web3::types::U256::from_str_radix(hexadecimal, 16).map_err(|_| AmountError::Invalid)
        }
        Some(_) => Err(AmountError::Invalid),
        None if !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit()) => {
            web3::types::U256::from_dec_str(value).map_err(|_| AmountError::Invalid)
        }
        None => Err(AmountError::Invalid),
    }?;

    Ok(parsed)
}

///
/// Parses a strictly positive amount.
///
pub fn parse_positive(value: &str) -> Result<web3::types::U256, AmountError> {
    let parsed = parse(value)?;
    if parsed.is_zero() {
        return Err(AmountError::NonPositive);
    }
    Ok(parsed)
}

///
/// Formats an amount as a decimal string.
///
pub fn to_decimal_string(value: &web3::types::U256) -> String {
    value.to_string()
}

///
/// The serde adapter writing `U256` as a decimal string.
///
/// `U256` serializes as a hexadecimal quantity by default, which is not what the claim
/// consumers expect.
///
pub mod decimal {
    use super::*;

    pub fn serialize<S>(value: &web3::types::U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(to_decimal_string(value).as_str())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<web3::types::U256, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let string = <String as serde::Deserialize>::deserialize(deserializer)?;
        parse(string.as_str())
            .map_err(|_| serde::de::Error::custom(format!("invalid amount `{string}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_beyond_u64() {
        let parsed = parse("100000000000000000000000000").expect("Always valid");
        assert_eq!(
            parsed,
            web3::types::U256::exp10(26),
            "a 100M token supply with 18 decimals must survive parsing"
        );
        assert_eq!(to_decimal_string(&parsed), "100000000000000000000000000");
    }

    #[test]
    fn hexadecimal() {
        assert_eq!(
            parse("0x3e8"),
            Ok(web3::types::U256::from(1000))
        );
    }

    #[test]
    fn negative_is_non_positive() {
        assert_eq!(parse("-5"), Err(AmountError::NonPositive));
    }

    #[test]
    fn zero_is_non_positive() {
        assert_eq!(parse_positive("0"), Err(AmountError::NonPositive));
        assert_eq!(parse("0"), Ok(web3::types::U256::zero()));
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(parse("1.5"), Err(AmountError::Invalid));
        assert_eq!(parse(""), Err(AmountError::Invalid));
        assert_eq!(parse("0x"), Err(AmountError::Invalid));
        assert_eq!(parse("12e18"), Err(AmountError::Invalid));
    }

    #[test]
    fn overflow_is_invalid() {
        let too_large = format!("1{}", "0".repeat(80));
        assert_eq!(parse(too_large.as_str()), Err(AmountError::Invalid));
    }
}
