use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotClockError {
    #[error("Arithmetic overflow in {operation} for input {value}")]
    Overflow { operation: &'static str, value: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(String),
    #[error("Unsupported chain id: {0}")]
    UnsupportedChainId(u64),
}
