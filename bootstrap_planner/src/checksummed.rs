//!
//! The serde adapter writing addresses in the EIP-55 checksummed form.
//!

pub fn serialize<S>(value: &web3::types::Address, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(balance_map::checksum(value).as_str())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<web3::types::Address, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let string = <String as serde::Deserialize>::deserialize(deserializer)?;
    balance_map::parse_address(string.as_str())
        .map_err(|_| serde::de::Error::custom(format!("invalid address `{string}`")))
}
