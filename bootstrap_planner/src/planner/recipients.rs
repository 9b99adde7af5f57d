//!
//! The initial token distribution accumulator.
//!

use crate::contract::recipient::Recipient;
use crate::error::Error;

///
/// The append-only recipient list of the initial token distribution.
///
/// The order of appends is the order of the token constructor argument.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients {
    /// The recipients in append order.
    list: Vec<Recipient>,
    /// Whether the list has been frozen.
    is_frozen: bool,
}

impl Recipients {
    ///
    /// Appends a recipient.
    ///
    pub fn push(&mut self, recipient: Recipient) -> Result<(), Error> {
        if self.is_frozen {
            return Err(Error::RecipientsFrozen {
                contract: recipient.contract,
            });
        }
        self.list.push(recipient);
        Ok(())
    }

    ///
    /// Freezes the list and returns it.
    ///
    pub fn freeze(&mut self) -> &[Recipient] {
        self.is_frozen = true;
        self.list.as_slice()
    }

    ///
    /// Whether the list has been frozen.
    ///
    pub fn is_frozen(&self) -> bool {
        self.is_frozen
    }

    ///
    /// Returns the recipients in append order.
    ///
    pub fn as_slice(&self) -> &[Recipient] {
        self.list.as_slice()
    }

    ///
    /// Returns the distributed total, saturated at the 256-bit maximum.
    ///
    pub fn total(&self) -> web3::types::U256 {
        self.list
            .iter()
            .fold(web3::types::U256::zero(), |total, recipient| {
                total.saturating_add(recipient.amount)
            })
    }
}

impl From<Recipients> for Vec<Recipient> {
    fn from(recipients: Recipients) -> Self {
        recipients.list
    }
}
