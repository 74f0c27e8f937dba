//! Per-network contract addresses

use alloy_primitives::Address;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{RegistryError, Result};

/// Literal configured for a network where the contract is known but has no address yet.
pub const EMPTY_ADDRESS_SENTINEL: &str = "0x";

/// What the configuration holds for one (contract, network) key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressSlot {
    Deployed(Address),
    /// Configured with the `"0x"` sentinel.
    Pending,
}

impl AddressSlot {
    /// Parse a configured literal: a 20-byte `0x`-prefixed hex address or the sentinel.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value == EMPTY_ADDRESS_SENTINEL {
            return Ok(AddressSlot::Pending);
        }

        let hex = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
            .ok_or_else(|| RegistryError::InvalidAddress {
                value: value.to_string(),
                reason: "missing 0x prefix".to_string(),
            })?;
        if hex.len() != 40 {
            return Err(RegistryError::InvalidAddress {
                value: value.to_string(),
                reason: format!("expected 40 hex digits, found {}", hex.len()),
            });
        }

        let address = Address::from_str(hex).map_err(|e| RegistryError::InvalidAddress {
            value: value.to_string(),
            reason: e.to_string(),
        })?;
        Ok(AddressSlot::Deployed(address))
    }

    pub fn deployment(&self) -> Deployment {
        match self {
            AddressSlot::Deployed(address) => Deployment::Deployed(*address),
            AddressSlot::Pending => Deployment::NotDeployed,
        }
    }
}

impl FromStr for AddressSlot {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for AddressSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressSlot::Deployed(address) => write!(f, "{}", address),
            AddressSlot::Pending => f.write_str(EMPTY_ADDRESS_SENTINEL),
        }
    }
}

impl Serialize for AddressSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of resolving a contract on a network.
///
/// `NotDeployed` is an expected outcome for partially rolled-out contracts,
/// not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "address", rename_all = "snake_case")]
pub enum Deployment {
    Deployed(Address),
    NotDeployed,
}

impl Deployment {
    pub fn address(&self) -> Option<Address> {
        match self {
            Deployment::Deployed(address) => Some(*address),
            Deployment::NotDeployed => None,
        }
    }

    pub fn is_deployed(&self) -> bool {
        matches!(self, Deployment::Deployed(_))
    }
}

impl From<Option<Address>> for Deployment {
    fn from(address: Option<Address>) -> Self {
        address.map_or(Deployment::NotDeployed, Deployment::Deployed)
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // checksummed
            Deployment::Deployed(address) => write!(f, "{}", address),
            Deployment::NotDeployed => f.write_str("not deployed"),
        }
    }
}
