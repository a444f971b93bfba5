use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    clock::{SlotClock, SystemTimeSource, TimeSource},
    config::{ChainConfig, Holesky, Mainnet, Sepolia},
    conversions,
    error::NetworkError,
    types::SlotInfo,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    #[serde(rename = "mainnet")]
    Mainnet,
    #[serde(rename = "sepolia")]
    Sepolia,
    #[serde(rename = "holesky")]
    Holesky,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Sepolia, Network::Holesky];

    pub fn genesis_time(&self) -> u64 {
        match self {
            Network::Mainnet => Mainnet::GENESIS_TIME,
            Network::Sepolia => Sepolia::GENESIS_TIME,
            Network::Holesky => Holesky::GENESIS_TIME,
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => Mainnet::ID,
            Network::Sepolia => Sepolia::ID,
            Network::Holesky => Holesky::ID,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => Mainnet::NAME,
            Network::Sepolia => Sepolia::NAME,
            Network::Holesky => Holesky::NAME,
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Result<Self, NetworkError> {
        Self::ALL
            .into_iter()
            .find(|network| network.chain_id() == chain_id)
            .ok_or(NetworkError::UnsupportedChainId(chain_id))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|network| network.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NetworkError::UnsupportedNetwork(s.to_string()))
    }
}

impl TryFrom<u64> for Network {
    type Error = NetworkError;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        Self::from_chain_id(chain_id)
    }
}

/// Resolves named networks to their genesis times and answers slot queries for
/// them against a shared time source.
#[derive(Debug, Clone, Default)]
pub struct NetworkRegistry<T: TimeSource = SystemTimeSource> {
    time_source: T,
}

impl NetworkRegistry {
    pub fn new() -> Self {
        Self::with_time_source(SystemTimeSource)
    }
}

impl<T: TimeSource> NetworkRegistry<T> {
    pub fn with_time_source(time_source: T) -> Self {
        Self { time_source }
    }

    pub fn resolve(&self, name: &str) -> Result<Network, NetworkError> {
        name.parse().inspect_err(|e| debug!("Failed to resolve network: {}", e))
    }

    pub fn genesis_time_of(&self, network: Network) -> u64 {
        network.genesis_time()
    }

    pub fn current_slot_of(&self, network: Network) -> u64 {
        conversions::slot_at_time(self.time_source.now(), network.genesis_time())
    }

    /// Snapshot of the current slot of `network`.
    pub fn slot_info_of(&self, network: Network) -> SlotInfo {
        let now = self.time_source.now();
        let genesis_time = network.genesis_time();
        let slot = conversions::slot_at_time(now, genesis_time);
        conversions::slot_info_at(slot, genesis_time, now)
    }

    pub fn slot_info_of_slot(&self, network: Network, slot: u64) -> SlotInfo {
        conversions::slot_info_at(slot, network.genesis_time(), self.time_source.now())
    }

    /// A clock for `network` that borrows this registry's time source.
    pub fn clock_for(&self, network: Network) -> SlotClock<&T> {
        SlotClock::with_time_source(network.genesis_time(), &self.time_source)
    }
}
