//! Contract registry and environment-aware network resolution.
//!
//! [`contracts`] answers "which address and which ABI" for a contract on a
//! network; [`networks`] decides which networks are active for the running
//! environment. The two are independent and composed by the caller, usually
//! through a [`runtime::RuntimeConfig`] built once at startup.

pub mod contracts;
pub mod error;
pub mod networks;
pub mod runtime;

pub use contracts::{ContractEntry, ContractId, ContractRegistry, Deployment, Family, LTokenId};
pub use error::{RegistryError, Result};
pub use networks::{ActiveNetworkSet, Environment, EnvironmentSignals, NetworkCatalog, NetworkId};
pub use runtime::RuntimeConfig;
