//! Network Set Resolution
//!
//! Selects the ordered list of networks the application works with for a given
//! environment, and maps networks to their icon assets.

use itertools::Itertools;
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

use crate::error::{RegistryError, Result};
use crate::networks::chain::{NetworkDescriptor, NetworkId, DEVELOPMENT_EXTRAS, PRODUCTION_NETWORKS};
use crate::networks::environment::Environment;

/// Icon returned for networks without a registered asset.
pub const DEFAULT_NETWORK_ICON: &str = "/assets/chains/default.svg";

lazy_static! {
    static ref NETWORK_ICONS: HashMap<NetworkId, &'static str> = {
        let mut icons = HashMap::new();
        icons.insert(NetworkId::HARDHAT, "/assets/chains/hardhat.svg");
        icons.insert(NetworkId::ARBITRUM_GOERLI, "/assets/chains/arbitrum-goerli.png");
        icons.insert(NetworkId::ARBITRUM, "/assets/chains/arbitrum.svg");
        icons.insert(NetworkId::LINEA_TESTNET, "/assets/chains/linea-goerli.png");
        icons.insert(NetworkId::LINEA, "/assets/chains/linea.png");
        icons.insert(NetworkId::OKC_TESTNET, "/assets/chains/okxlogo.png");
        icons
    };
}

/// Icon asset for a network, or [`DEFAULT_NETWORK_ICON`].
pub fn network_icon(network: NetworkId) -> &'static str {
    NETWORK_ICONS
        .get(&network)
        .copied()
        .unwrap_or(DEFAULT_NETWORK_ICON)
}

/// Ordered, non-empty list of networks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActiveNetworkSet(Vec<NetworkDescriptor>);

impl ActiveNetworkSet {
    pub fn new(networks: Vec<NetworkDescriptor>) -> Result<Self> {
        if networks.is_empty() {
            return Err(RegistryError::Configuration(
                "Active network set must contain at least one network".to_string(),
            ));
        }
        Ok(Self(networks))
    }

    /// Default network; always present.
    pub fn first(&self) -> &NetworkDescriptor {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkDescriptor> {
        self.0.iter()
    }

    pub fn ids(&self) -> Vec<NetworkId> {
        self.0.iter().map(|n| n.id).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, network: NetworkId) -> bool {
        self.get(network).is_some()
    }

    pub fn get(&self, network: NetworkId) -> Option<&NetworkDescriptor> {
        self.0.iter().find(|n| n.id == network)
    }

    pub fn as_slice(&self) -> &[NetworkDescriptor] {
        &self.0
    }

    /// Every network of `self` appears in `other`, in the same relative order.
    pub fn is_ordered_subset_of(&self, other: &ActiveNetworkSet) -> bool {
        is_subsequence(&self.ids(), &other.ids())
    }
}

impl<'a> IntoIterator for &'a ActiveNetworkSet {
    type Item = &'a NetworkDescriptor;
    type IntoIter = std::slice::Iter<'a, NetworkDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn is_subsequence(needle: &[NetworkId], haystack: &[NetworkId]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|id| rest.any(|candidate| candidate == id))
}

/// Production and development network lists.
#[derive(Debug, Clone)]
pub struct NetworkCatalog {
    production: Vec<NetworkDescriptor>,
    development: Vec<NetworkDescriptor>,
}

impl NetworkCatalog {
    /// Development is `production` followed by `development_extras`.
    pub fn new(
        production: Vec<NetworkDescriptor>,
        development_extras: Vec<NetworkDescriptor>,
    ) -> Result<Self> {
        let development = production
            .iter()
            .cloned()
            .chain(development_extras)
            .collect();
        Self::from_sets(production, development)
    }

    /// Build from two explicit lists, checking the production list is a strict,
    /// order-preserving subset of the development one.
    pub fn from_sets(
        production: Vec<NetworkDescriptor>,
        development: Vec<NetworkDescriptor>,
    ) -> Result<Self> {
        let catalog = Self {
            production,
            development,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        if self.production.is_empty() {
            return Err(RegistryError::Configuration(
                "Production network list is empty".to_string(),
            ));
        }

        for (label, list) in [("production", &self.production), ("development", &self.development)] {
            let duplicates: Vec<NetworkId> = list.iter().map(|n| n.id).duplicates().collect();
            if !duplicates.is_empty() {
                return Err(RegistryError::Configuration(format!(
                    "Duplicate networks in {} list: {}",
                    label,
                    duplicates.iter().join(", ")
                )));
            }
        }

        let production_ids: Vec<NetworkId> = self.production.iter().map(|n| n.id).collect();
        let development_ids: Vec<NetworkId> = self.development.iter().map(|n| n.id).collect();
        if !is_subsequence(&production_ids, &development_ids) {
            return Err(RegistryError::Configuration(format!(
                "Production networks [{}] are not an ordered subset of development networks [{}]",
                production_ids.iter().join(", "),
                development_ids.iter().join(", ")
            )));
        }

        if self.development.len() == self.production.len() {
            return Err(RegistryError::Configuration(
                "Development network list adds no networks to production".to_string(),
            ));
        }

        Ok(())
    }

    pub fn production(&self) -> &[NetworkDescriptor] {
        &self.production
    }

    pub fn development(&self) -> &[NetworkDescriptor] {
        &self.development
    }

    /// Look a network up across both lists.
    pub fn descriptor(&self, network: NetworkId) -> Option<&NetworkDescriptor> {
        self.development
            .iter()
            .chain(self.production.iter())
            .find(|n| n.id == network)
    }

    pub fn resolve_active_networks(&self, environment: Environment) -> Result<ActiveNetworkSet> {
        let networks = match environment {
            Environment::Production => self.production.clone(),
            Environment::Development => self.development.clone(),
        };
        ActiveNetworkSet::new(networks)
    }
}

impl Default for NetworkCatalog {
    fn default() -> Self {
        Self {
            production: PRODUCTION_NETWORKS.to_vec(),
            development: PRODUCTION_NETWORKS
                .iter()
                .chain(DEVELOPMENT_EXTRAS.iter())
                .cloned()
                .collect(),
        }
    }
}

/// Resolve against the built-in catalog.
pub fn resolve_active_networks(environment: Environment) -> Result<ActiveNetworkSet> {
    NetworkCatalog::default().resolve_active_networks(environment)
}
