//! Runtime configuration
//!
//! Environment classification and active networks, decided once per process
//! and handed to consumers as an immutable value.

use std::sync::OnceLock;
use tracing::info;

use crate::error::Result;
use crate::networks::{ActiveNetworkSet, Environment, EnvironmentSignals, NetworkCatalog};

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub signals: EnvironmentSignals,
    pub environment: Environment,
    pub active_networks: ActiveNetworkSet,
    pub catalog: NetworkCatalog,
}

impl RuntimeConfig {
    pub fn from_signals(signals: EnvironmentSignals, catalog: NetworkCatalog) -> Result<Self> {
        let environment = signals.classify();
        Self::for_environment(signals, environment, catalog)
    }

    /// Skip classification and use `environment` directly.
    pub fn for_environment(
        signals: EnvironmentSignals,
        environment: Environment,
        catalog: NetworkCatalog,
    ) -> Result<Self> {
        catalog.validate()?;
        let active_networks = catalog.resolve_active_networks(environment)?;
        Ok(Self {
            signals,
            environment,
            active_networks,
            catalog,
        })
    }

    /// Read signals from the process environment; built-in catalog.
    pub fn from_env() -> Result<Self> {
        Self::from_signals(EnvironmentSignals::from_env(), NetworkCatalog::default())
    }
}

/// Publish `config` as the process configuration.
///
/// Returns the config back if one was already installed.
pub fn install(config: RuntimeConfig) -> std::result::Result<&'static RuntimeConfig, RuntimeConfig> {
    let (installed, fresh) = publish(config.clone());
    if !fresh {
        return Err(config);
    }
    Ok(installed)
}

/// Installed configuration, if any.
pub fn get() -> Option<&'static RuntimeConfig> {
    RUNTIME_CONFIG.get()
}

/// Installed configuration, reading the environment on first call.
///
/// Construction is pure, so racing first callers build equivalent values and
/// only the first one is published.
pub fn get_or_init_from_env() -> Result<&'static RuntimeConfig> {
    if let Some(config) = get() {
        return Ok(config);
    }
    let (installed, _) = publish(RuntimeConfig::from_env()?);
    Ok(installed)
}

fn publish(config: RuntimeConfig) -> (&'static RuntimeConfig, bool) {
    let mut fresh = false;
    let installed = RUNTIME_CONFIG.get_or_init(|| {
        fresh = true;
        config
    });
    if fresh {
        log_installed(installed);
    }
    (installed, fresh)
}

fn log_installed(config: &RuntimeConfig) {
    let names: Vec<&str> = config.active_networks.iter().map(|n| n.name).collect();
    info!(environment = %config.environment, networks = ?names, "runtime configuration installed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networks::NetworkId;

    #[test]
    fn test_production_config() {
        let config = RuntimeConfig::from_signals(EnvironmentSignals::new(false, false), NetworkCatalog::default()).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.active_networks.ids(), vec![NetworkId::ARBITRUM, NetworkId::LINEA]);
    }

    #[test]
    fn test_forced_environment() {
        let config = RuntimeConfig::for_environment(
            EnvironmentSignals::new(false, false),
            Environment::Development,
            NetworkCatalog::default(),
        )
        .unwrap();
        assert!(config.active_networks.contains(NetworkId::HARDHAT));
    }
}
