use crate::connections::{connector::ExternalWalletConnector, errors::ConnectionError};
use crate::core::provider::ProviderId;
use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use std::time::Duration;

/// What a simulated provider does when asked to connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatedOutcome {
    Accept,
    Decline,
    Error(String),
}

/// A scripted stand-in for real wallet extensions.
///
/// Every provider answers after `latency` with the outcome registered for it,
/// or with `default_outcome` when nothing was registered.
#[derive(Debug, Clone)]
pub struct SimulatedConnector {
    outcomes: HashMap<ProviderId, SimulatedOutcome>,
    default_outcome: SimulatedOutcome,
    latency: Duration,
}

impl Default for SimulatedConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedConnector {
    pub fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
            default_outcome: SimulatedOutcome::Accept,
            latency: Duration::ZERO,
        }
    }

    pub fn with_outcome(mut self, provider: impl Into<ProviderId>, outcome: SimulatedOutcome) -> Self {
        self.outcomes.insert(provider.into(), outcome);
        self
    }

    pub fn with_default_outcome(mut self, outcome: SimulatedOutcome) -> Self {
        self.default_outcome = outcome;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn outcome_for(&self, provider: &ProviderId) -> &SimulatedOutcome {
        self.outcomes.get(provider).unwrap_or(&self.default_outcome)
    }
}

#[async_trait]
impl ExternalWalletConnector for SimulatedConnector {
    async fn connect_provider(&self, provider: &ProviderId) -> Result<bool, ConnectionError> {
        debug!("Simulating connection to '{}' ({:?})", provider, self.latency);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match self.outcome_for(provider) {
            SimulatedOutcome::Accept => Ok(true),
            SimulatedOutcome::Decline => Ok(false),
            SimulatedOutcome::Error(msg) => Err(ConnectionError::Rejected(msg.clone())),
        }
    }
}
