//! Built-in contract table
//!
//! Addresses recorded by the latest deployment runs. Hardhat (31337) addresses
//! come from the local deployment scripts and change whenever they are re-run.

use crate::contracts::identity::{ContractId, Family};
use crate::contracts::registry::ContractEntry;
use crate::contracts::schema::SchemaStore;
use crate::error::Result;
use crate::networks::NetworkId;

/// Canonical Multicall3 address, identical on every public chain.
pub const MULTICALL3_ADDRESS: &str = "0xcA11bde05977b3631167028862bE2a173976CA11";

pub fn builtin_entries(schemas: &SchemaStore) -> Result<Vec<ContractEntry>> {
    let erc20 = schemas.require("ERC20")?;
    let ltoken = schemas.require("LToken")?;

    Ok(vec![
        ContractEntry::new(ContractId::GlobalOwner, schemas.require("GlobalOwner")?)
            .with_address(NetworkId::HARDHAT, "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512")?,
        ContractEntry::new(ContractId::GlobalPause, schemas.require("GlobalPause")?)
            .with_address(NetworkId::HARDHAT, "0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9")?,
        ContractEntry::new(ContractId::GlobalBlacklist, schemas.require("GlobalBlacklist")?)
            .with_address(NetworkId::HARDHAT, "0x5FC8d32690cc91D4c39d9d3abcBD16989F875707")?,
        ContractEntry::new(ContractId::AprHistory, schemas.require("APRHistory")?)
            .with_address(NetworkId::HARDHAT, "0x0165878A594ca255338adfa4d48449f69242Eb8F")?,
        ContractEntry::new(ContractId::Ldy, erc20.clone())
            .with_address(NetworkId::HARDHAT, "0xa513E6E4b8f2a923D98304ec87F64353C4D5C853")?,
        ContractEntry::new(ContractId::LdyStaking, schemas.require("LDYStaking")?)
            .with_address(NetworkId::HARDHAT, "0x2279B7A0a67DB372996a5FaB50D91eAA73d2eBe6")?,
        ContractEntry::new(ContractId::Usdc, erc20.clone())
            .with_address(NetworkId::HARDHAT, "0x8A791620dd6260079BF849Dc5567aDC3F2FdC318")?
            .with_address(NetworkId::LINEA, "0xf56dc6695cF1f5c364eDEbC7Dc7077ac9B586068")?
            // not yet bridged to Linea Goerli
            .with_address(NetworkId::LINEA_TESTNET, "0x")?
            .with_address(NetworkId::ARBITRUM, "0xaf88d065e77c8cC2239327C5EDb3A432268e5831")?
            .with_address(NetworkId::ARBITRUM_GOERLI, "0xfd064A18f3BF249cf1f87FC203E90D8f650f2d63")?,
        ContractEntry::new(ContractId::Euroc, erc20),
        ContractEntry::new(ContractId::Lusdc, ltoken.clone())
            .with_family(Family::LToken)
            .with_address(NetworkId::HARDHAT, "0xB7f8BC63BbcaD18155201308C8f3540b07f84F5e")?,
        ContractEntry::new(ContractId::Leuroc, ltoken).with_family(Family::LToken),
        ContractEntry::new(ContractId::LTokenBeacon, schemas.require("UpgradeableBeacon")?)
            .with_family(Family::LToken)
            .beacon(),
        ContractEntry::new(ContractId::LTokenSignaler, schemas.require("LTokenSignaler")?)
            .with_address(NetworkId::HARDHAT, "0x0DCd1Bf9A1b36cE34237eEaFef220932846BCD82")?,
        ContractEntry::new(ContractId::Multicall3, schemas.require("Multicall3")?)
            .with_address(NetworkId::HARDHAT, "0x9A676e781A523b5d0C0e43731313A708CB607508")?
            .with_address(NetworkId::LINEA, MULTICALL3_ADDRESS)?
            .with_address(NetworkId::LINEA_TESTNET, MULTICALL3_ADDRESS)?
            .with_address(NetworkId::ARBITRUM, MULTICALL3_ADDRESS)?
            .with_address(NetworkId::ARBITRUM_GOERLI, MULTICALL3_ADDRESS)?,
    ])
}
