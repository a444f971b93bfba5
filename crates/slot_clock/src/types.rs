use serde::{Deserialize, Serialize};

/// Snapshot of a single slot.
///
/// `is_active` and `in_attestation_window` are only meaningful at the instant
/// the snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotInfo {
    pub slot: u64,
    pub epoch: u64,

    #[serde(rename = "slotInEpoch")]
    pub slot_in_epoch: u64,

    #[serde(rename = "startTime")]
    pub start_time: u64,

    #[serde(rename = "endTime")]
    pub end_time: u64,

    #[serde(rename = "isActive")]
    pub is_active: bool,

    /// Set only while the slot is active and within its attestation window.
    #[serde(rename = "inAttestationWindow")]
    pub in_attestation_window: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochInfo {
    pub epoch: u64,

    #[serde(rename = "firstSlot")]
    pub first_slot: u64,

    #[serde(rename = "lastSlot")]
    pub last_slot: u64,

    /// Start of `first_slot`
    #[serde(rename = "startTime")]
    pub start_time: u64,

    /// End of `last_slot`, exclusive
    #[serde(rename = "endTime")]
    pub end_time: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochBounds {
    #[serde(rename = "firstSlot")]
    pub first_slot: u64,

    #[serde(rename = "lastSlot")]
    pub last_slot: u64,
}

impl From<EpochBounds> for (u64, u64) {
    fn from(bounds: EpochBounds) -> Self {
        (bounds.first_slot, bounds.last_slot)
    }
}

/// Slots overlapped by a time range. An empty range is `(0, 0, 0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRange {
    #[serde(rename = "startSlot")]
    pub start_slot: u64,

    #[serde(rename = "endSlot")]
    pub end_slot: u64,

    pub count: u64,
}

impl SlotRange {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl From<SlotRange> for (u64, u64, u64) {
    fn from(range: SlotRange) -> Self {
        (range.start_slot, range.end_slot, range.count)
    }
}
