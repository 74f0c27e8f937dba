//! Networks - environment-aware selection of the active network set

pub mod chain;
pub mod environment;
pub mod resolver;

pub use chain::{BlockExplorer, NativeCurrency, NetworkDescriptor, NetworkId};
pub use environment::{classify_environment, Environment, EnvironmentSignals};
pub use resolver::{
    network_icon, resolve_active_networks, ActiveNetworkSet, NetworkCatalog, DEFAULT_NETWORK_ICON,
};
