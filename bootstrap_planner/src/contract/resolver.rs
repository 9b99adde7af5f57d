//!
//! The contract spec resolver.
//!

use crate::address_predictor::AddressPredictor;
use crate::contract::argument::Argument;
use crate::contract::init_code::InitCode;
use crate::contract::ContractSpec;
use crate::error::Error;

///
/// Turns a creation bytecode and its constructor arguments into a planned contract.
///
#[derive(Debug, Clone, Copy)]
pub struct ContractSpecResolver {
    /// The address predictor of the campaign.
    predictor: AddressPredictor,
}

impl ContractSpecResolver {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(predictor: AddressPredictor) -> Self {
        Self { predictor }
    }

    ///
    /// Returns the address predictor.
    ///
    pub fn predictor(&self) -> &AddressPredictor {
        &self.predictor
    }

    ///
    /// Resolves the contract `name` built from the `contract` artifact.
    ///
    /// The same inputs always yield the same spec.
    ///
    pub fn resolve(
        &self,
        name: &str,
        contract: &str,
        template: Option<&[u8]>,
        arguments: Vec<Argument>,
    ) -> Result<ContractSpec, Error> {
        let template = match template {
            Some(template) if !template.is_empty() => template,
            _ => {
                return Err(Error::MissingInitCode {
                    contract: contract.to_owned(),
                })
            }
        };

        let init_code = InitCode::new(template, arguments.as_slice());
        let predicted_address = self.predictor.predict(&init_code.hash());

        let mut depends_on = Vec::new();
        for argument in arguments.iter() {
            argument.collect_dependencies(&mut depends_on);
        }

        Ok(ContractSpec::new(
            name.to_owned(),
            contract.to_owned(),
            init_code,
            predicted_address,
            depends_on,
        ))
    }
}
