//! Interface Schemas
//!
//! Contract ABIs, parsed once from pre-built Hardhat artifacts and shared by
//! reference between every identity with the same shape.

use alloy_json_abi::JsonAbi;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{RegistryError, Result};

/// Artifacts compiled into the crate, keyed by contract shape name.
pub const EMBEDDED_ARTIFACTS: &[(&str, &str)] = &[
    ("GlobalOwner", include_str!("../../artifacts/GlobalOwner.json")),
    ("GlobalPause", include_str!("../../artifacts/GlobalPause.json")),
    ("GlobalBlacklist", include_str!("../../artifacts/GlobalBlacklist.json")),
    ("APRHistory", include_str!("../../artifacts/APRHistory.json")),
    ("ERC20", include_str!("../../artifacts/ERC20.json")),
    ("LDYStaking", include_str!("../../artifacts/LDYStaking.json")),
    ("LToken", include_str!("../../artifacts/LToken.json")),
    ("LTokenSignaler", include_str!("../../artifacts/LTokenSignaler.json")),
    ("Multicall3", include_str!("../../artifacts/Multicall3.json")),
    ("UpgradeableBeacon", include_str!("../../artifacts/UpgradeableBeacon.json")),
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HardhatArtifact {
    contract_name: String,
    abi: JsonAbi,
}

/// Callable surface of one contract shape.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceSchema {
    /// Name the schema is registered under
    pub shape: String,
    /// Solidity contract name recorded in the artifact
    pub contract_name: String,
    pub abi: JsonAbi,
}

impl InterfaceSchema {
    /// Parse a Hardhat artifact (`{"contractName": .., "abi": [..]}`).
    pub fn from_artifact(shape: &str, json: &str) -> Result<Self> {
        let artifact: HardhatArtifact =
            serde_json::from_str(json).map_err(|source| RegistryError::Artifact {
                shape: shape.to_string(),
                source,
            })?;
        Ok(Self {
            shape: shape.to_string(),
            contract_name: artifact.contract_name,
            abi: artifact.abi,
        })
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.abi.functions.contains_key(name)
    }

    pub fn has_event(&self, name: &str) -> bool {
        self.abi.events.contains_key(name)
    }
}

/// Interface schemas keyed by shape name.
#[derive(Debug, Clone, Default)]
pub struct SchemaStore {
    schemas: HashMap<String, Arc<InterfaceSchema>>,
}

impl SchemaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every artifact in [`EMBEDDED_ARTIFACTS`].
    pub fn embedded() -> Result<Self> {
        let mut store = Self::new();
        for (shape, json) in EMBEDDED_ARTIFACTS {
            store.insert_artifact(shape, json)?;
        }
        Ok(store)
    }

    pub fn insert_artifact(&mut self, shape: &str, json: &str) -> Result<Arc<InterfaceSchema>> {
        let schema = Arc::new(InterfaceSchema::from_artifact(shape, json)?);
        self.schemas.insert(shape.to_string(), Arc::clone(&schema));
        Ok(schema)
    }

    pub fn get(&self, shape: &str) -> Option<Arc<InterfaceSchema>> {
        self.schemas.get(shape).map(Arc::clone)
    }

    /// Like [`SchemaStore::get`], failing on shapes that were never registered.
    pub fn require(&self, shape: &str) -> Result<Arc<InterfaceSchema>> {
        self.get(shape).ok_or_else(|| {
            RegistryError::Configuration(format!("No interface schema registered for shape '{}'", shape))
        })
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_artifacts_parse() {
        let store = SchemaStore::embedded().unwrap();
        assert_eq!(store.len(), EMBEDDED_ARTIFACTS.len());

        let erc20 = store.get("ERC20").unwrap();
        assert_eq!(erc20.contract_name, "ERC20");
        assert!(erc20.has_function("balanceOf"));
        assert!(erc20.has_event("Transfer"));

        let ldy_staking = store.get("LDYStaking").unwrap();
        assert_eq!(ldy_staking.contract_name, "WIP_LDYStaking");
    }

    #[test]
    fn test_get_shares_one_instance() {
        let store = SchemaStore::embedded().unwrap();
        assert!(Arc::ptr_eq(&store.get("LToken").unwrap(), &store.get("LToken").unwrap()));
    }

    #[test]
    fn test_malformed_artifact() {
        let err = InterfaceSchema::from_artifact("Broken", "{\"abi\": 3}").unwrap_err();
        assert!(matches!(err, RegistryError::Artifact { ref shape, .. } if shape == "Broken"));
    }

    #[test]
    fn test_require_unknown_shape() {
        let store = SchemaStore::new();
        assert!(matches!(store.require("ERC20"), Err(RegistryError::Configuration(_))));
    }
}
