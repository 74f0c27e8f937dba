//! Contract Registry
//!
//! Immutable table binding every [`ContractId`] to its interface schema and
//! per-network addresses.

use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, trace, warn};

use crate::contracts::address::{AddressSlot, Deployment};
use crate::contracts::address_book::AddressBook;
use crate::contracts::identity::{ContractId, Family};
use crate::contracts::schema::{InterfaceSchema, SchemaStore};
use crate::contracts::table;
use crate::error::{RegistryError, Result};
use crate::networks::NetworkId;

static GLOBAL_REGISTRY: OnceLock<ContractRegistry> = OnceLock::new();

/// One contract identity's configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractEntry {
    pub id: ContractId,
    pub schema: Arc<InterfaceSchema>,
    pub family: Option<Family>,
    /// Upgrade beacon rather than a concrete deployment
    pub is_beacon_proxy: bool,
    addresses: BTreeMap<NetworkId, AddressSlot>,
}

impl ContractEntry {
    pub fn new(id: ContractId, schema: Arc<InterfaceSchema>) -> Self {
        Self {
            id,
            schema,
            family: None,
            is_beacon_proxy: false,
            addresses: BTreeMap::new(),
        }
    }

    pub fn with_family(mut self, family: Family) -> Self {
        self.family = Some(family);
        self
    }

    pub fn beacon(mut self) -> Self {
        self.is_beacon_proxy = true;
        self
    }

    /// Set the slot for a network, replacing any previous one.
    pub fn with_slot(mut self, network: NetworkId, slot: AddressSlot) -> Self {
        self.addresses.insert(network, slot);
        self
    }

    /// Parse a configured literal (hex address or `"0x"`) for a network.
    pub fn with_address(self, network: impl Into<NetworkId>, value: &str) -> Result<Self> {
        let slot = AddressSlot::parse(value)?;
        Ok(self.with_slot(network.into(), slot))
    }

    /// Raw configured slot; `None` when the network has no key at all.
    pub fn slot(&self, network: NetworkId) -> Option<AddressSlot> {
        self.addresses.get(&network).copied()
    }

    pub fn deployment(&self, network: NetworkId) -> Deployment {
        self.slot(network)
            .map(|slot| slot.deployment())
            .unwrap_or(Deployment::NotDeployed)
    }

    /// Networks with a configured slot, deployed or pending.
    pub fn networks(&self) -> impl Iterator<Item = NetworkId> + '_ {
        self.addresses.keys().copied()
    }
}

/// Assembles and validates a [`ContractRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<ContractEntry>,
    address_book: Option<AddressBook>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, entry: ContractEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = ContractEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Overlay addresses produced by a deployment run.
    pub fn with_address_book(mut self, book: AddressBook) -> Self {
        self.address_book = Some(book);
        self
    }

    pub fn build(self) -> Result<ContractRegistry> {
        let duplicates: Vec<ContractId> = self.entries.iter().map(|e| e.id).duplicates().collect();
        if !duplicates.is_empty() {
            return Err(RegistryError::Configuration(format!(
                "Duplicate registry entries: {}",
                duplicates.iter().join(", ")
            )));
        }

        let mut by_id: HashMap<ContractId, ContractEntry> =
            self.entries.into_iter().map(|e| (e.id, e)).collect();

        let missing: Vec<ContractId> = ContractId::ALL
            .iter()
            .copied()
            .filter(|id| !by_id.contains_key(id))
            .collect();
        if !missing.is_empty() {
            return Err(RegistryError::Configuration(format!(
                "Registry has no entry for: {}",
                missing.iter().join(", ")
            )));
        }

        for entry in by_id.values() {
            if entry.family != entry.id.family() {
                return Err(RegistryError::Configuration(format!(
                    "Entry {} is tagged {:?} but its identity belongs to {:?}",
                    entry.id,
                    entry.family,
                    entry.id.family()
                )));
            }
        }

        if let Some(book) = self.address_book {
            for (id, network, slot) in book.iter() {
                let entry = by_id
                    .get_mut(&id)
                    .ok_or_else(|| RegistryError::Configuration(format!("Registry has no entry for: {}", id)))?;
                match entry.slot(network) {
                    Some(AddressSlot::Deployed(previous)) if Some(previous) != slot.deployment().address() => {
                        warn!(contract = %id, network = %network, %previous, new = %slot, "address book overrides static address");
                    }
                    _ => debug!(contract = %id, network = %network, address = %slot, "applying address book entry"),
                }
                entry.addresses.insert(network, slot);
            }
        }

        let entries: Vec<ContractEntry> = ContractId::ALL
            .iter()
            .filter_map(|id| by_id.remove(id))
            .collect();

        let mut families: HashMap<Family, Vec<ContractId>> = HashMap::new();
        for entry in &entries {
            if let (Some(family), false) = (entry.family, entry.is_beacon_proxy) {
                families.entry(family).or_default().push(entry.id);
            }
        }

        Ok(ContractRegistry { entries, families })
    }
}

/// Read-only contract table; safe to share across threads.
#[derive(Debug, Clone)]
pub struct ContractRegistry {
    /// Indexed by `ContractId::index()`
    entries: Vec<ContractEntry>,
    families: HashMap<Family, Vec<ContractId>>,
}

impl ContractRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The built-in contract table with the embedded interface schemas.
    pub fn builtin() -> Result<Self> {
        Self::builtin_with(None)
    }

    /// The built-in table, optionally overlaid with a deployment address book.
    pub fn builtin_with(address_book: Option<AddressBook>) -> Result<Self> {
        let schemas = SchemaStore::embedded()?;
        let mut builder = Self::builder().entries(table::builtin_entries(&schemas)?);
        if let Some(book) = address_book {
            builder = builder.with_address_book(book);
        }
        builder.build()
    }

    /// Process-wide built-in registry, built on first use.
    ///
    /// Concurrent first callers may each build a table; they are identical and
    /// only one is ever published.
    pub fn global() -> Result<&'static ContractRegistry> {
        if let Some(registry) = GLOBAL_REGISTRY.get() {
            return Ok(registry);
        }
        let registry = Self::builtin()?;
        info!(contracts = registry.len(), "contract registry initialized");
        Ok(GLOBAL_REGISTRY.get_or_init(|| registry))
    }

    pub fn get_entry(&self, id: ContractId) -> &ContractEntry {
        &self.entries[id.index()]
    }

    /// Resolve an identity given as a string, e.g. from user input.
    pub fn get_entry_by_name(&self, name: &str) -> Result<&ContractEntry> {
        let id = ContractId::parse(name)?;
        Ok(self.get_entry(id))
    }

    /// Address of `id` on `network`, or `NotDeployed` when the network has no
    /// key or holds the empty sentinel.
    pub fn get_address(&self, id: ContractId, network: NetworkId) -> Deployment {
        let deployment = self.get_entry(id).deployment(network);
        if !deployment.is_deployed() {
            trace!(contract = %id, network = %network, "contract not deployed on network");
        }
        deployment
    }

    /// Members of `family` in declaration order, beacons excluded.
    pub fn get_family_identities(&self, family: Family) -> &[ContractId] {
        self.families.get(&family).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get_interface_schema(&self, id: ContractId) -> &Arc<InterfaceSchema> {
        &self.get_entry(id).schema
    }

    /// Identities with a live address on `network`.
    pub fn deployed_on(&self, network: NetworkId) -> Vec<ContractId> {
        self.entries
            .iter()
            .filter(|e| e.deployment(network).is_deployed())
            .map(|e| e.id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContractEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
