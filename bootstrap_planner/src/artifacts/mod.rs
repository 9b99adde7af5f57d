//!
//! The compiled contract artifacts.
//!

pub mod error;


use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use self::error::Error;

///
/// The compiled contract artifact, in the Hardhat layout.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// The contract name.
    pub contract_name: String,
    /// The creation bytecode. Empty for abstract contracts and interfaces.
    pub bytecode: Vec<u8>,
}

///
/// The artifact file fields the planner reads.
///
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactFile {
    /// The contract name.
    contract_name: String,
    /// The `0x`-prefixed creation bytecode.
    bytecode: String,
}

impl Artifact {
    /// The artifact file extension.
    pub const EXTENSION: &'static str = "json";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(contract_name: String, bytecode: Vec<u8>) -> Self {
        Self {
            contract_name,
            bytecode,
        }
    }
}

impl TryFrom<&Path> for Artifact {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        let file: ArtifactFile =
            serde_json::from_str(text.as_str()).map_err(|error| Error::Parsing {
                error,
                path: path.to_path_buf(),
            })?;

        let digits = file
            .bytecode
            .strip_prefix("0x")
            .unwrap_or(file.bytecode.as_str());
        let bytecode = hex::decode(digits).map_err(|_| Error::InvalidBytecode {
            path: path.to_path_buf(),
        })?;

        Ok(Self::new(file.contract_name, bytecode))
    }
}

///
/// The artifacts of the campaign contracts, keyed by contract name.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artifacts {
    /// The artifacts.
    inner: BTreeMap<String, Artifact>,
}

impl Artifacts {
    ///
    /// Finds and reads the artifacts of the `names` contracts anywhere under `directory`.
    ///
    pub fn load<'a, I>(directory: &Path, names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut artifacts = Self::default();
        for name in names.into_iter() {
            if artifacts.inner.contains_key(name) {
                continue;
            }

            let pattern = format!(
                "{}/**/{name}.{}",
                directory.to_string_lossy(),
                Artifact::EXTENSION
            );
            let paths: Vec<PathBuf> = glob::glob(pattern.as_str())
                .map_err(|error| Error::Pattern {
                    error,
                    pattern: pattern.clone(),
                })?
                .filter_map(Result::ok)
                .filter(|path| !path.to_string_lossy().contains("build-info"))
                .collect();

            let path = match paths.as_slice() {
                [] => {
                    return Err(Error::Missing {
                        name: name.to_owned(),
                        directory: directory.to_path_buf(),
                    })
                }
                [path] => path.to_owned(),
                _ => {
                    return Err(Error::Ambiguous {
                        name: name.to_owned(),
                        paths,
                    })
                }
            };

            let artifact = Artifact::try_from(path.as_path())?;
            artifacts.inner.insert(name.to_owned(), artifact);
        }
        Ok(artifacts)
    }

    ///
    /// Adds an artifact, replacing the one with the same name.
    ///
    pub fn insert(&mut self, artifact: Artifact) {
        self.inner.insert(artifact.contract_name.clone(), artifact);
    }

    ///
    /// Returns the creation bytecode of the contract.
    ///
    pub fn bytecode(&self, name: &str) -> Option<&[u8]> {
        self.inner
            .get(name)
            .map(|artifact| artifact.bytecode.as_slice())
    }
}

impl FromIterator<Artifact> for Artifacts {
    fn from_iter<T: IntoIterator<Item = Artifact>>(iter: T) -> Self {
        let mut artifacts = Self::default();
        for artifact in iter.into_iter() {
            artifacts.insert(artifact);
        }
        artifacts
    }
}
