//! Deployment Address Book
//!
//! Addresses written out by deployment runs, applied on top of the static
//! contract table. Format:
//!
//! ```json
//! { "LUSDC": { "31337": "0xB7f8BC63BbcaD18155201308C8f3540b07f84F5e", "59140": "0x" } }
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::contracts::address::AddressSlot;
use crate::contracts::identity::ContractId;
use crate::error::{RegistryError, Result};
use crate::networks::{NetworkCatalog, NetworkId};

#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawAddressBook(BTreeMap<String, BTreeMap<String, String>>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    addresses: BTreeMap<ContractId, BTreeMap<NetworkId, AddressSlot>>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a book, accepting only networks of the built-in catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, &NetworkCatalog::default())
    }

    pub fn load_with(path: impl AsRef<Path>, catalog: &NetworkCatalog) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let book = Self::from_json_with(&content, catalog)?;
        debug!(path = %path.display(), contracts = book.addresses.len(), "loaded address book");
        Ok(book)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with(json, &NetworkCatalog::default())
    }

    /// Parse a book; every chain id must be known to `catalog` and appear at
    /// most once per contract.
    pub fn from_json_with(json: &str, catalog: &NetworkCatalog) -> Result<Self> {
        let raw: RawAddressBook = serde_json::from_str(json)?;

        let mut book = Self::new();
        for (name, networks) in raw.0 {
            let id = ContractId::parse(&name)?;
            for (key, value) in networks {
                let network: NetworkId = key.parse()?;
                if catalog.descriptor(network).is_none() {
                    return Err(RegistryError::UnknownNetwork(network.0));
                }
                if book.get(id, network).is_some() {
                    return Err(RegistryError::Configuration(format!(
                        "Address book lists network {} more than once for {} (key '{}')",
                        network, id, key
                    )));
                }
                book.insert(id, network, AddressSlot::parse(&value)?);
            }
        }
        Ok(book)
    }

    pub fn insert(&mut self, id: ContractId, network: NetworkId, slot: AddressSlot) {
        self.addresses.entry(id).or_default().insert(network, slot);
    }

    pub fn get(&self, id: ContractId, network: NetworkId) -> Option<AddressSlot> {
        self.addresses.get(&id).and_then(|n| n.get(&network)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContractId, NetworkId, AddressSlot)> + '_ {
        self.addresses.iter().flat_map(|(id, networks)| {
            networks
                .iter()
                .map(move |(network, slot)| (*id, *network, *slot))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
