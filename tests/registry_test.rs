use ledgity_registry::contracts::{
    AddressBook, AddressSlot, ContractEntry, ContractRegistry, Family, LTokenId, SchemaStore,
};
use ledgity_registry::{ContractId, Deployment, NetworkId, RegistryError};
use std::fs;
use std::str::FromStr;
use std::sync::Arc;

use alloy_primitives::Address;

fn scratch_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("ledgity_registry_test_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn registry() -> ContractRegistry {
    ContractRegistry::builtin().expect("built-in registry")
}

#[test]
fn test_every_identity_has_an_entry_and_schema() {
    let registry = registry();
    for id in ContractId::ALL {
        let entry = registry.get_entry(id);
        assert_eq!(entry.id, id);
        assert!(!entry.schema.abi.functions.is_empty(), "{} has an empty ABI", id);

        let by_name = registry.get_entry_by_name(id.as_str()).unwrap();
        assert_eq!(by_name.id, id);
    }
}

#[test]
fn test_unknown_identity_is_an_error() {
    let registry = registry();
    for name in ["", "lusdc", "Multicall2", "WETH"] {
        match registry.get_entry_by_name(name) {
            Err(RegistryError::UnknownIdentity { name: reported, .. }) => assert_eq!(reported, name),
            other => panic!("expected UnknownIdentity for {:?}, got {:?}", name, other.map(|e| e.id)),
        }
    }
}

#[test]
fn test_scenario_a_deployed_address() {
    let expected = Address::from_str("0xB7f8BC63BbcaD18155201308C8f3540b07f84F5e").unwrap();
    assert_eq!(
        registry().get_address(ContractId::Lusdc, NetworkId(31337)),
        Deployment::Deployed(expected)
    );
}

#[test]
fn test_scenario_b_no_addresses() {
    let registry = registry();
    assert_eq!(registry.get_address(ContractId::Leuroc, NetworkId(31337)), Deployment::NotDeployed);
    assert_eq!(registry.get_entry(ContractId::Leuroc).networks().count(), 0);
}

#[test]
fn test_scenario_c_empty_sentinel() {
    let registry = registry();
    let usdc = registry.get_entry(ContractId::Usdc);

    // the key exists, but resolves the same way as an absent one
    assert_eq!(usdc.slot(NetworkId(59140)), Some(AddressSlot::Pending));
    assert_eq!(registry.get_address(ContractId::Usdc, NetworkId(59140)), Deployment::NotDeployed);
    assert_eq!(registry.get_address(ContractId::Usdc, NetworkId(65)), Deployment::NotDeployed);
}

#[test]
fn test_addresses_are_case_normalized() {
    let registry = registry();
    let deployment = registry.get_address(ContractId::Multicall3, NetworkId::ARBITRUM);
    let address = deployment.address().unwrap();

    assert_eq!(address, Address::from_str("0xca11bde05977b3631167028862be2a173976ca11").unwrap());
    assert_eq!(deployment.to_string(), "0xcA11bde05977b3631167028862bE2a173976CA11");
}

#[test]
fn test_scenario_e_family_excludes_beacon() {
    let registry = registry();
    let beacon = registry.get_entry(ContractId::LTokenBeacon);
    assert!(beacon.is_beacon_proxy);
    assert_eq!(beacon.family, Some(Family::LToken));

    let family: Family = "YieldToken".parse().unwrap();
    assert_eq!(
        registry.get_family_identities(family),
        &[ContractId::Lusdc, ContractId::Leuroc]
    );
}

#[test]
fn test_family_runtime_filter_agrees_with_type() {
    let registry = registry();
    let runtime: Vec<ContractId> = registry
        .iter()
        .filter(|e| e.family == Some(Family::LToken) && !e.is_beacon_proxy)
        .map(|e| e.id)
        .collect();
    let typed: Vec<ContractId> = LTokenId::ALL.iter().map(|id| ContractId::from(*id)).collect();

    assert_eq!(runtime, typed);
    assert_eq!(registry.get_family_identities(Family::LToken), typed.as_slice());
}

#[test]
fn test_schemas_are_shared_by_shape() {
    let registry = registry();
    let ldy = registry.get_interface_schema(ContractId::Ldy);
    let usdc = registry.get_interface_schema(ContractId::Usdc);
    let euroc = registry.get_interface_schema(ContractId::Euroc);
    assert!(Arc::ptr_eq(ldy, usdc));
    assert!(Arc::ptr_eq(usdc, euroc));
    assert_eq!(ldy.shape, "ERC20");

    assert!(Arc::ptr_eq(
        registry.get_interface_schema(ContractId::Lusdc),
        registry.get_interface_schema(ContractId::Leuroc)
    ));
    assert!(!Arc::ptr_eq(
        registry.get_interface_schema(ContractId::Lusdc),
        registry.get_interface_schema(ContractId::LTokenBeacon)
    ));
}

#[test]
fn test_deployed_on_network() {
    let registry = registry();
    assert_eq!(
        registry.deployed_on(NetworkId::LINEA),
        vec![ContractId::Usdc, ContractId::Multicall3]
    );
    assert_eq!(registry.deployed_on(NetworkId::LINEA_TESTNET), vec![ContractId::Multicall3]);
    assert!(registry.deployed_on(NetworkId::OKC_TESTNET).is_empty());
    assert_eq!(registry.deployed_on(NetworkId::HARDHAT).len(), 10);
}

#[test]
fn test_custom_table_via_builder() {
    let schemas = SchemaStore::embedded().unwrap();
    let erc20 = schemas.require("ERC20").unwrap();

    let entries: Vec<ContractEntry> = ContractId::ALL
        .iter()
        .map(|id| {
            let entry = ContractEntry::new(*id, Arc::clone(&erc20));
            match id.family() {
                Some(family) => entry.with_family(family),
                None => entry,
            }
        })
        .map(|entry| if entry.id == ContractId::LTokenBeacon { entry.beacon() } else { entry })
        .collect();

    let registry = ContractRegistry::builder().entries(entries).build().unwrap();
    assert_eq!(registry.get_family_identities(Family::LToken), &[ContractId::Lusdc, ContractId::Leuroc]);
    assert_eq!(registry.get_address(ContractId::GlobalOwner, NetworkId::HARDHAT), Deployment::NotDeployed);
}

#[test]
fn test_address_book_file_overlay() {
    let path = scratch_dir().join("deployments.json");
    fs::write(
        &path,
        r#"{
            "LEUROC": { "59140": "0x610178dA211FEF7D417bC0e6FeD39F05609AD788" },
            "USDC": { "59140": "0x" }
        }"#,
    )
    .unwrap();

    let book = AddressBook::load(&path).unwrap();
    let registry = ContractRegistry::builtin_with(Some(book)).unwrap();

    assert!(registry.get_address(ContractId::Leuroc, NetworkId::LINEA_TESTNET).is_deployed());
    assert_eq!(registry.get_address(ContractId::Usdc, NetworkId::LINEA_TESTNET), Deployment::NotDeployed);
    // untouched entries keep their static addresses
    assert!(registry.get_address(ContractId::Lusdc, NetworkId::HARDHAT).is_deployed());

    fs::remove_file(&path).ok();
}

#[test]
fn test_missing_address_book_file() {
    let path = scratch_dir().join("does-not-exist.json");
    match AddressBook::load(&path) {
        Err(RegistryError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected an io error, got {:?}", other),
    }
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = ContractRegistry::global().unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let registry = ContractRegistry::global().unwrap();
                registry.get_address(ContractId::Lusdc, NetworkId::HARDHAT)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            registry.get_address(ContractId::Lusdc, NetworkId::HARDHAT)
        );
    }
}
