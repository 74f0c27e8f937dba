//! Contracts - identities, interface schemas and per-network deployments

pub mod address;
pub mod address_book;
pub mod identity;
pub mod registry;
pub mod schema;
pub mod table;

pub use address::{AddressSlot, Deployment, EMPTY_ADDRESS_SENTINEL};
pub use address_book::AddressBook;
pub use identity::{ContractId, Family, LTokenId};
pub use registry::{ContractEntry, ContractRegistry, RegistryBuilder};
pub use schema::{InterfaceSchema, SchemaStore};
