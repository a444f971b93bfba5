pub const SECONDS_PER_SLOT: u64 = 12;
pub const SLOTS_PER_EPOCH: u64 = 32;
pub const SECONDS_PER_EPOCH: u64 = SECONDS_PER_SLOT * SLOTS_PER_EPOCH;

/// Seconds after the start of a slot during which attestations are expected.
pub const ATTESTATION_DEADLINE: u64 = 4;

pub const MAINNET_GENESIS: u64 = 1606824023;
pub const SEPOLIA_GENESIS: u64 = 1655733600;
pub const HOLESKY_GENESIS: u64 = 1695902400;

pub trait ChainConfig {
    const ID: u64;
    const NAME: &'static str;
    const GENESIS_TIME: u64;
}

pub struct Mainnet;

impl ChainConfig for Mainnet {
    const ID: u64 = 1;
    const NAME: &'static str = "mainnet";
    const GENESIS_TIME: u64 = MAINNET_GENESIS;
}

pub struct Sepolia;

impl ChainConfig for Sepolia {
    const ID: u64 = 11155111;
    const NAME: &'static str = "sepolia";
    const GENESIS_TIME: u64 = SEPOLIA_GENESIS;
}

pub struct Holesky;

impl ChainConfig for Holesky {
    const ID: u64 = 17000;
    const NAME: &'static str = "holesky";
    const GENESIS_TIME: u64 = HOLESKY_GENESIS;
}
