//! Network identifiers and descriptors
//!
//! Static descriptions of every network the application knows about.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RegistryError, Result};

/// Chain identifier of a blockchain network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(pub u64);

impl NetworkId {
    pub const ARBITRUM: NetworkId = NetworkId(42161);
    pub const ARBITRUM_GOERLI: NetworkId = NetworkId(421613);
    pub const LINEA: NetworkId = NetworkId(59144);
    pub const LINEA_TESTNET: NetworkId = NetworkId(59140);
    pub const HARDHAT: NetworkId = NetworkId(31337);
    pub const OKC_TESTNET: NetworkId = NetworkId(65);
}

impl From<u64> for NetworkId {
    fn from(id: u64) -> Self {
        NetworkId(id)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NetworkId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(NetworkId)
            .map_err(|e| RegistryError::Configuration(format!("Invalid chain id '{}': {}", s, e)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockExplorer {
    pub name: &'static str,
    pub url: &'static str,
}

/// Everything a consumer needs to talk to, and display, one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkDescriptor {
    pub id: NetworkId,
    pub name: &'static str,
    /// Short slug, e.g. `arbitrum-goerli`
    pub network: &'static str,
    pub native_currency: NativeCurrency,
    pub rpc_urls: &'static [&'static str],
    pub block_explorer: Option<BlockExplorer>,
    pub testnet: bool,
}

const ETHER: NativeCurrency = NativeCurrency {
    name: "Ether",
    symbol: "ETH",
    decimals: 18,
};

pub const ARBITRUM: NetworkDescriptor = NetworkDescriptor {
    id: NetworkId::ARBITRUM,
    name: "Arbitrum One",
    network: "arbitrum",
    native_currency: ETHER,
    rpc_urls: &["https://arb1.arbitrum.io/rpc"],
    block_explorer: Some(BlockExplorer {
        name: "Arbiscan",
        url: "https://arbiscan.io",
    }),
    testnet: false,
};

pub const LINEA: NetworkDescriptor = NetworkDescriptor {
    id: NetworkId::LINEA,
    name: "Linea Mainnet",
    network: "linea-mainnet",
    native_currency: NativeCurrency {
        name: "Linea Ether",
        symbol: "ETH",
        decimals: 18,
    },
    rpc_urls: &["https://rpc.linea.build"],
    block_explorer: Some(BlockExplorer {
        name: "Etherscan",
        url: "https://lineascan.build",
    }),
    testnet: false,
};

pub const HARDHAT: NetworkDescriptor = NetworkDescriptor {
    id: NetworkId::HARDHAT,
    name: "Hardhat",
    network: "hardhat",
    native_currency: ETHER,
    rpc_urls: &["http://127.0.0.1:8545"],
    block_explorer: None,
    testnet: true,
};

pub const ARBITRUM_GOERLI: NetworkDescriptor = NetworkDescriptor {
    id: NetworkId::ARBITRUM_GOERLI,
    name: "Arbitrum Goerli",
    network: "arbitrum-goerli",
    native_currency: NativeCurrency {
        name: "Arbitrum Goerli Ether",
        symbol: "ETH",
        decimals: 18,
    },
    rpc_urls: &["https://goerli-rollup.arbitrum.io/rpc"],
    block_explorer: Some(BlockExplorer {
        name: "Arbiscan",
        url: "https://goerli.arbiscan.io",
    }),
    testnet: true,
};

pub const LINEA_TESTNET: NetworkDescriptor = NetworkDescriptor {
    id: NetworkId::LINEA_TESTNET,
    name: "Linea Goerli Testnet",
    network: "linea-testnet",
    native_currency: NativeCurrency {
        name: "Linea Ether",
        symbol: "ETH",
        decimals: 18,
    },
    rpc_urls: &["https://rpc.goerli.linea.build"],
    block_explorer: Some(BlockExplorer {
        name: "Etherscan",
        url: "https://goerli.lineascan.build",
    }),
    testnet: true,
};

pub const OKC_TESTNET: NetworkDescriptor = NetworkDescriptor {
    id: NetworkId::OKC_TESTNET,
    name: "OKC Testnet",
    network: "okc-testnet",
    native_currency: NativeCurrency {
        name: "Testnet OKT",
        symbol: "OKT",
        decimals: 18,
    },
    rpc_urls: &["https://exchaintestrpc.okex.org"],
    block_explorer: Some(BlockExplorer {
        name: "OKLink",
        url: "https://www.oklink.com/okc-test",
    }),
    testnet: true,
};

/// Networks usable in production, in display order.
pub const PRODUCTION_NETWORKS: &[NetworkDescriptor] = &[ARBITRUM, LINEA];

/// Test networks appended after the production ones in development.
pub const DEVELOPMENT_EXTRAS: &[NetworkDescriptor] =
    &[HARDHAT, ARBITRUM_GOERLI, LINEA_TESTNET, OKC_TESTNET];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_id_parsing() {
        assert_eq!("31337".parse::<NetworkId>().unwrap(), NetworkId::HARDHAT);
        assert_eq!(" 65 ".parse::<NetworkId>().unwrap(), NetworkId::OKC_TESTNET);
        assert!("linea".parse::<NetworkId>().is_err());
        assert!("-1".parse::<NetworkId>().is_err());
    }

    #[test]
    fn test_production_networks_are_mainnets() {
        assert!(PRODUCTION_NETWORKS.iter().all(|n| !n.testnet));
        assert!(DEVELOPMENT_EXTRAS.iter().all(|n| n.testnet));
    }
}
