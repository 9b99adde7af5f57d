//!
//! The balance map input entry.
//!

use crate::error::Error;

///
/// The balance map input row, as supplied by the caller.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BalanceEntry {
    /// The account address in any accepted spelling.
    pub address: String,
    /// The entitlement as a decimal or `0x`-prefixed hexadecimal string.
    pub amount: String,
}

impl BalanceEntry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new<A, M>(address: A, amount: M) -> Self
    where
        A: ToString,
        M: ToString,
    {
        Self {
            address: address.to_string(),
            amount: amount.to_string(),
        }
    }

    ///
    /// Reads entries from a JSON object mapping addresses to amounts.
    ///
    /// The object key order is preserved. Repeated keys are kept as separate entries, so the
    /// builder rejects them as duplicates.
    ///
    pub fn from_json_map(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        let EntryList(pairs) = serde_json::from_str(json)?;
        pairs
            .into_iter()
            .map(|(address, amount)| match amount {
                serde_json::Value::String(amount) => Ok(Self::new(address, amount)),
                serde_json::Value::Number(amount) => Ok(Self::new(address, amount)),
                other => Err(<serde_json::Error as serde::de::Error>::custom(format!(
                    "amount for `{address}` must be a string or a number, found `{other}`"
                ))),
            })
            .collect()
    }

    ///
    /// Validates and normalizes the entry.
    ///
    pub fn normalize(&self) -> Result<NormalizedEntry, Error> {
        let address = crate::address::parse(self.address.as_str()).map_err(|error| match error {
            crate::address::AddressError::Invalid => Error::InvalidAddress {
                address: self.address.clone(),
            },
            crate::address::AddressError::Checksum { expected } => Error::InvalidChecksum {
                address: self.address.clone(),
                expected,
            },
        })?;

        let amount = crate::amount::parse_positive(self.amount.as_str()).map_err(|error| {
            match error {
                crate::amount::AmountError::Invalid => Error::InvalidAmount {
                    address: self.address.clone(),
                    amount: self.amount.clone(),
                },
                crate::amount::AmountError::NonPositive => Error::NonPositiveAmount {
                    address: self.address.clone(),
                    amount: self.amount.clone(),
                },
            }
        })?;

        Ok(NormalizedEntry { address, amount })
    }
}

///
/// The validated entry with a parsed address and amount.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedEntry {
    /// The account address.
    pub address: web3::types::Address,
    /// The positive entitlement.
    pub amount: web3::types::U256,
}

impl NormalizedEntry {
    ///
    /// The canonical index order: ascending amount, ties by ascending address bytes.
    ///
    pub fn canonical_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.amount
            .cmp(&other.amount)
            .then_with(|| self.address.cmp(&other.address))
    }
}

///
/// The JSON object key-value pairs in document order, repeated keys included.
///
struct EntryList(Vec<(String, serde_json::Value)>);

impl<'de> serde::Deserialize<'de> for EntryList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct EntryListVisitor;

        impl<'de> serde::de::Visitor<'de> for EntryListVisitor {
            type Value = EntryList;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a JSON object mapping addresses to amounts")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or_default());
                while let Some(pair) = map.next_entry::<String, serde_json::Value>()? {
                    pairs.push(pair);
                }
                Ok(EntryList(pairs))
            }
        }

        deserializer.deserialize_map(EntryListVisitor)
    }
}
