use anyhow::Result;
use clap::{Parser, Subcommand};
use ledgity_registry::contracts::{AddressBook, ContractRegistry, Family};
use ledgity_registry::networks::{network_icon, Environment, EnvironmentSignals, NetworkCatalog, NetworkId};
use ledgity_registry::{ContractId, RegistryError, RuntimeConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ledgity-registry")]
#[command(about = "Resolve contract addresses and active networks")]
struct Args {
    /// Deployment address book to overlay on the built-in table
    #[arg(long, global = true)]
    address_book: Option<PathBuf>,

    /// Force an environment instead of reading VERCEL_ENV / NODE_ENV
    #[arg(long, global = true)]
    env: Option<Environment>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the active networks
    Networks,
    /// Resolve a contract address on a network
    Address { contract: String, chain_id: NetworkId },
    /// List the members of a contract family
    Family { family: Family },
    /// List contracts, optionally only those deployed on a network
    Contracts {
        #[arg(long)]
        chain_id: Option<NetworkId>,
    },
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let signals = EnvironmentSignals::from_env();
    let environment = args.env.unwrap_or_else(|| signals.classify());
    let config = RuntimeConfig::for_environment(signals, environment, NetworkCatalog::default())?;
    info!("Environment: {}", config.environment);

    let registry = match &args.address_book {
        Some(path) => ContractRegistry::builtin_with(Some(AddressBook::load_with(path, &config.catalog)?))?,
        None => ContractRegistry::builtin()?,
    };

    match args.command {
        Command::Networks => {
            for network in &config.active_networks {
                println!(
                    "{:>7}  {:<22} {:<4} {}",
                    network.id,
                    network.name,
                    if network.testnet { "test" } else { "main" },
                    network_icon(network.id)
                );
            }
        }
        Command::Address { contract, chain_id } => {
            let entry = registry.get_entry_by_name(&contract)?;
            require_known_network(&config, chain_id)?;
            if !config.active_networks.contains(chain_id) {
                info!("Network {} is not active in {}", chain_id, config.environment);
            }
            println!("{}", registry.get_address(entry.id, chain_id));
        }
        Command::Family { family } => {
            for id in registry.get_family_identities(family) {
                println!("{}", id);
            }
        }
        Command::Contracts { chain_id } => {
            let ids: Vec<ContractId> = match chain_id {
                Some(network) => {
                    require_known_network(&config, network)?;
                    registry.deployed_on(network)
                }
                None => registry.iter().map(|e| e.id).collect(),
            };
            for id in ids {
                let schema = registry.get_interface_schema(id);
                println!("{:<16} {}", id, schema.shape);
            }
        }
    }

    Ok(())
}

fn require_known_network(config: &RuntimeConfig, network: NetworkId) -> Result<()> {
    if config.catalog.descriptor(network).is_none() {
        return Err(RegistryError::UnknownNetwork(network.0).into());
    }
    Ok(())
}
