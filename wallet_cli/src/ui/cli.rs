use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::sync::Arc;
use std::time::Duration;
use wallet_core::connections::SimulatedOutcome;
use wallet_core::{
    display_address, ConnectionManager, LogNotifier, PendingSlot, SimulatedConnector,
    TransferForm, ValidationResult,
};
#[cfg(feature = "storage")]
use wallet_core::{ProviderProfile, ProviderStore};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "wallet-panel", version, subcommand_required = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to a wallet provider (simulated)
    Connect {
        /// Provider id, e.g. MetaMask or Phantom
        provider: String,
        /// Make the provider decline the connection
        #[arg(long)]
        fail: bool,
        /// Simulated provider latency in milliseconds
        #[arg(long, default_value_t = 500)]
        latency_ms: u64,
    },
    /// Validate a transfer and dispatch it if it passes
    Transfer {
        /// Recipient address
        #[arg(long)]
        to: String,
        /// Amount to send
        #[arg(long)]
        amount: String,
        /// Balance available in the wallet
        #[arg(long)]
        balance: String,
    },
    /// Print an address, masked unless --full is given
    Show {
        address: String,
        #[arg(long)]
        full: bool,
    },
    /// Manage the configured wallet providers
    #[cfg(feature = "storage")]
    Providers {
        #[command(subcommand)]
        action: ProvidersAction,
    },
}

#[cfg(feature = "storage")]
#[derive(Subcommand, Debug)]
pub enum ProvidersAction {
    /// List configured providers (built-in defaults if none are stored)
    List,
    /// Add or overwrite a provider
    Add {
        id: String,
        name: String,
        #[arg(long)]
        website: Option<String>,
    },
    /// Remove a provider
    Remove { id: String },
}

/// Runs one command. `Ok(false)` means the command ran but the operation
/// failed (rejected connection, invalid transfer).
pub async fn run_cli(args: Args) -> Result<bool> {
    match args.command {
        Command::Connect {
            provider,
            fail,
            latency_ms,
        } => Ok(run_connect(provider, fail, latency_ms).await),
        Command::Transfer {
            to,
            amount,
            balance,
        } => Ok(run_transfer(to, amount, &balance)),
        Command::Show { address, full } => {
            println!("{}", display_address(&address, !full));
            Ok(true)
        }
        #[cfg(feature = "storage")]
        Command::Providers { action } => run_providers(action),
    }
}

async fn run_connect(provider: String, fail: bool, latency_ms: u64) -> bool {
    let outcome = if fail {
        SimulatedOutcome::Decline
    } else {
        SimulatedOutcome::Accept
    };
    let connector = SimulatedConnector::new()
        .with_default_outcome(outcome)
        .with_latency(Duration::from_millis(latency_ms));

    let manager = ConnectionManager::new(
        PendingSlot::new(),
        Arc::new(connector),
        Arc::new(LogNotifier),
    )
    .with_on_connected(|provider| println!("Connected: {}", provider));

    info!("Requesting connection to '{}'", provider);
    manager.connect(provider).await
}

fn run_transfer(to: String, amount: String, balance: &str) -> bool {
    let mut form = TransferForm::new();
    form.set_recipient(to);
    form.set_amount(amount);

    let sender = |recipient: &str, amount: &str| {
        println!("Sending {} to {}", amount, display_address(recipient, true));
    };

    match form.submit(balance, &sender) {
        ValidationResult::Valid => true,
        ValidationResult::Invalid(reason) => {
            eprintln!("{}", reason);
            false
        }
    }
}

#[cfg(feature = "storage")]
fn run_providers(action: ProvidersAction) -> Result<bool> {
    let store = ProviderStore::new()?;
    match action {
        ProvidersAction::List => {
            for profile in store.list_or_defaults()? {
                match &profile.website {
                    Some(site) => println!("{:<16} {} ({})", profile.id, profile.name, site),
                    None => println!("{:<16} {}", profile.id, profile.name),
                }
            }
            Ok(true)
        }
        ProvidersAction::Add { id, name, website } => {
            let mut profile = ProviderProfile::new(id, name);
            profile.website = website;
            store.save(&profile)?;
            info!("Saved provider '{}'", profile.id);
            Ok(true)
        }
        ProvidersAction::Remove { id } => {
            let removed = store.delete(&id)?;
            if !removed {
                eprintln!("No provider with id '{}'", id);
            }
            Ok(removed)
        }
    }
}
