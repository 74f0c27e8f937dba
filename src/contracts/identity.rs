//! Contract identities
//!
//! The closed set of logical contracts the application addresses, and the
//! families they belong to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strsim::jaro_winkler;

use crate::error::{RegistryError, Result};

/// Minimum similarity for an identity to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContractId {
    GlobalOwner,
    GlobalPause,
    GlobalBlacklist,
    #[serde(rename = "APRHistory")]
    AprHistory,
    #[serde(rename = "LDY")]
    Ldy,
    #[serde(rename = "LDYStaking")]
    LdyStaking,
    #[serde(rename = "USDC")]
    Usdc,
    #[serde(rename = "EUROC")]
    Euroc,
    #[serde(rename = "LUSDC")]
    Lusdc,
    #[serde(rename = "LEUROC")]
    Leuroc,
    LTokenBeacon,
    LTokenSignaler,
    Multicall3,
}

impl ContractId {
    /// Every identity, in declaration order.
    pub const ALL: [ContractId; 13] = [
        ContractId::GlobalOwner,
        ContractId::GlobalPause,
        ContractId::GlobalBlacklist,
        ContractId::AprHistory,
        ContractId::Ldy,
        ContractId::LdyStaking,
        ContractId::Usdc,
        ContractId::Euroc,
        ContractId::Lusdc,
        ContractId::Leuroc,
        ContractId::LTokenBeacon,
        ContractId::LTokenSignaler,
        ContractId::Multicall3,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ContractId::GlobalOwner => "GlobalOwner",
            ContractId::GlobalPause => "GlobalPause",
            ContractId::GlobalBlacklist => "GlobalBlacklist",
            ContractId::AprHistory => "APRHistory",
            ContractId::Ldy => "LDY",
            ContractId::LdyStaking => "LDYStaking",
            ContractId::Usdc => "USDC",
            ContractId::Euroc => "EUROC",
            ContractId::Lusdc => "LUSDC",
            ContractId::Leuroc => "LEUROC",
            ContractId::LTokenBeacon => "LTokenBeacon",
            ContractId::LTokenSignaler => "LTokenSignaler",
            ContractId::Multicall3 => "Multicall3",
        }
    }

    /// Position in [`ContractId::ALL`].
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Structural family, known at compile time.
    pub const fn family(&self) -> Option<Family> {
        match self {
            ContractId::Lusdc | ContractId::Leuroc | ContractId::LTokenBeacon => Some(Family::LToken),
            _ => None,
        }
    }

    /// Parse an identity coming from outside the type system.
    pub fn parse(name: &str) -> Result<Self> {
        if let Some(id) = Self::ALL.iter().find(|id| id.as_str() == name) {
            return Ok(*id);
        }

        let suggestion = Self::ALL
            .iter()
            .map(|id| (id, jaro_winkler(&id.as_str().to_lowercase(), &name.to_lowercase())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, _)| id.as_str().to_string());

        Err(RegistryError::UnknownIdentity {
            name: name.to_string(),
            suggestion,
        })
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Structural family tag carried by registry entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// Yield-bearing L-Tokens.
    LToken,
}

impl Family {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Family::LToken => "LToken",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LToken" | "YieldToken" => Ok(Family::LToken),
            other => Err(RegistryError::Configuration(format!("Unknown contract family '{}'", other))),
        }
    }
}

/// The L-Token identities, beacon excluded.
///
/// This is the statically typed counterpart of
/// `ContractRegistry::family_identities(Family::LToken)`; both must agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LTokenId {
    #[serde(rename = "LUSDC")]
    Lusdc,
    #[serde(rename = "LEUROC")]
    Leuroc,
}

impl LTokenId {
    pub const ALL: [LTokenId; 2] = [LTokenId::Lusdc, LTokenId::Leuroc];

    pub const fn contract_id(self) -> ContractId {
        match self {
            LTokenId::Lusdc => ContractId::Lusdc,
            LTokenId::Leuroc => ContractId::Leuroc,
        }
    }
}

impl From<LTokenId> for ContractId {
    fn from(id: LTokenId) -> Self {
        id.contract_id()
    }
}

impl TryFrom<ContractId> for LTokenId {
    type Error = ContractId;

    fn try_from(id: ContractId) -> std::result::Result<Self, Self::Error> {
        match id {
            ContractId::Lusdc => Ok(LTokenId::Lusdc),
            ContractId::Leuroc => Ok(LTokenId::Leuroc),
            other => Err(other),
        }
    }
}

impl fmt::Display for LTokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.contract_id().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, id) in ContractId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_parse_round_trips_every_identity() {
        for id in ContractId::ALL {
            assert_eq!(id.as_str().parse::<ContractId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_identity_suggests_closest() {
        match ContractId::parse("LUSDCC") {
            Err(RegistryError::UnknownIdentity { name, suggestion }) => {
                assert_eq!(name, "LUSDCC");
                assert_eq!(suggestion.as_deref(), Some("LUSDC"));
            }
            other => panic!("unexpected result: {:?}", other),
        }

        match ContractId::parse("SomethingElse") {
            Err(RegistryError::UnknownIdentity { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_serde_uses_identity_tokens() {
        assert_eq!(serde_json::to_string(&ContractId::AprHistory).unwrap(), "\"APRHistory\"");
        let id: ContractId = serde_json::from_str("\"LDYStaking\"").unwrap();
        assert_eq!(id, ContractId::LdyStaking);
    }

    #[test]
    fn test_ltoken_ids_are_family_members() {
        for id in LTokenId::ALL {
            assert_eq!(ContractId::from(id).family(), Some(Family::LToken));
            assert_eq!(LTokenId::try_from(ContractId::from(id)), Ok(id));
        }
        assert_eq!(LTokenId::try_from(ContractId::LTokenBeacon), Err(ContractId::LTokenBeacon));
    }

    #[test]
    fn test_family_aliases() {
        assert_eq!("YieldToken".parse::<Family>().unwrap(), Family::LToken);
        assert_eq!("LToken".parse::<Family>().unwrap(), Family::LToken);
        assert!("Stablecoin".parse::<Family>().is_err());
    }
}
