//! Pure conversions between Unix timestamps, slots and epochs.
//!
//! Every function here is total. Multiplications that could exceed `u64`
//! saturate at `u64::MAX`; the `checked_*` variants report the overflow
//! instead.

use crate::{
    config::{ATTESTATION_DEADLINE, SECONDS_PER_SLOT, SLOTS_PER_EPOCH},
    error::SlotClockError,
    types::{EpochBounds, EpochInfo, SlotInfo, SlotRange},
};

pub fn slot_to_epoch(slot: u64) -> u64 {
    slot / SLOTS_PER_EPOCH
}

/// Position of `slot` within its epoch, always in `0..SLOTS_PER_EPOCH`.
pub fn slot_in_epoch(slot: u64) -> u64 {
    slot % SLOTS_PER_EPOCH
}

pub fn checked_epoch_to_first_slot(epoch: u64) -> Result<u64, SlotClockError> {
    epoch
        .checked_mul(SLOTS_PER_EPOCH)
        .ok_or(SlotClockError::Overflow {
            operation: "epoch_to_first_slot",
            value: epoch,
        })
}

/// Saturates at `u64::MAX` for epochs past `u64::MAX / 32`.
pub fn epoch_to_first_slot(epoch: u64) -> u64 {
    checked_epoch_to_first_slot(epoch).unwrap_or(u64::MAX)
}

pub fn epoch_to_last_slot(epoch: u64) -> u64 {
    epoch_to_first_slot(epoch).saturating_add(SLOTS_PER_EPOCH - 1)
}

pub fn epoch_bounds(epoch: u64) -> EpochBounds {
    EpochBounds {
        first_slot: epoch_to_first_slot(epoch),
        last_slot: epoch_to_last_slot(epoch),
    }
}

pub fn checked_slot_start_time(slot: u64, genesis_time: u64) -> Result<u64, SlotClockError> {
    slot.checked_mul(SECONDS_PER_SLOT)
        .and_then(|offset| offset.checked_add(genesis_time))
        .ok_or(SlotClockError::Overflow {
            operation: "slot_start_time",
            value: slot,
        })
}

pub fn slot_start_time(slot: u64, genesis_time: u64) -> u64 {
    checked_slot_start_time(slot, genesis_time).unwrap_or(u64::MAX)
}

pub fn checked_slot_end_time(slot: u64, genesis_time: u64) -> Result<u64, SlotClockError> {
    checked_slot_start_time(slot, genesis_time)
        .ok()
        .and_then(|start| start.checked_add(SECONDS_PER_SLOT))
        .ok_or(SlotClockError::Overflow {
            operation: "slot_end_time",
            value: slot,
        })
}

/// Exclusive end of `slot`, which is also the start of `slot + 1`.
pub fn slot_end_time(slot: u64, genesis_time: u64) -> u64 {
    checked_slot_end_time(slot, genesis_time).unwrap_or(u64::MAX)
}

pub fn is_before_genesis(timestamp: u64, genesis_time: u64) -> bool {
    timestamp < genesis_time
}

/// Slot containing `timestamp`. Anything at or before genesis is slot 0.
pub fn slot_at_time(timestamp: u64, genesis_time: u64) -> u64 {
    if timestamp <= genesis_time {
        return 0;
    }
    (timestamp - genesis_time) / SECONDS_PER_SLOT
}

pub fn epoch_at_time(timestamp: u64, genesis_time: u64) -> u64 {
    slot_to_epoch(slot_at_time(timestamp, genesis_time))
}

/// Signed seconds from `now` until `slot` starts. Negative once the slot has
/// started.
pub fn time_until_slot_at(slot: u64, genesis_time: u64, now: u64) -> i64 {
    let delta = i128::from(slot_start_time(slot, genesis_time)) - i128::from(now);
    i64::try_from(delta).unwrap_or(if delta < 0 { i64::MIN } else { i64::MAX })
}

/// Seconds elapsed since `slot` started, `None` if it has not started yet.
pub fn seconds_into_slot_at(slot: u64, genesis_time: u64, now: u64) -> Option<u64> {
    now.checked_sub(slot_start_time(slot, genesis_time))
}

/// Seconds until the next slot boundary. Before genesis this is the time left
/// until genesis. Exactly on a boundary the full slot duration is returned.
pub fn duration_to_next_slot_at(genesis_time: u64, now: u64) -> u64 {
    if is_before_genesis(now, genesis_time) {
        return genesis_time - now;
    }
    SECONDS_PER_SLOT - (now - genesis_time) % SECONDS_PER_SLOT
}

pub fn is_slot_active_at(slot: u64, genesis_time: u64, now: u64) -> bool {
    now >= slot_start_time(slot, genesis_time) && now < slot_end_time(slot, genesis_time)
}

/// Whether `now` falls within [`ATTESTATION_DEADLINE`] seconds of the start of
/// `slot`, inclusive.
///
/// This does not check that `slot` is still the active slot; see
/// [`SlotInfo::in_attestation_window`] for the combined check.
pub fn is_in_attestation_window_at(slot: u64, genesis_time: u64, now: u64) -> bool {
    match seconds_into_slot_at(slot, genesis_time, now) {
        Some(elapsed) => elapsed <= ATTESTATION_DEADLINE,
        None => false,
    }
}

pub fn slot_info_at(slot: u64, genesis_time: u64, now: u64) -> SlotInfo {
    let is_active = is_slot_active_at(slot, genesis_time, now);

    SlotInfo {
        slot,
        epoch: slot_to_epoch(slot),
        slot_in_epoch: slot_in_epoch(slot),
        start_time: slot_start_time(slot, genesis_time),
        end_time: slot_end_time(slot, genesis_time),
        is_active,
        in_attestation_window: is_active
            && is_in_attestation_window_at(slot, genesis_time, now),
    }
}

pub fn epoch_info(epoch: u64, genesis_time: u64) -> EpochInfo {
    let EpochBounds {
        first_slot,
        last_slot,
    } = epoch_bounds(epoch);

    EpochInfo {
        epoch,
        first_slot,
        last_slot,
        start_time: slot_start_time(first_slot, genesis_time),
        end_time: slot_end_time(last_slot, genesis_time),
    }
}

/// Slots overlapped by `[start_time, end_time]`.
///
/// The start is inclusive. An `end_time` landing exactly on a slot boundary
/// does not count the slot that begins there.
pub fn slots_in_time_range(start_time: u64, end_time: u64, genesis_time: u64) -> SlotRange {
    if start_time > end_time {
        return SlotRange::default();
    }

    let start_slot = slot_at_time(start_time, genesis_time);
    let mut end_slot = slot_at_time(end_time, genesis_time);

    if end_slot > 0 && end_time == slot_start_time(end_slot, genesis_time) {
        end_slot -= 1;
    }

    let count = if end_slot >= start_slot {
        end_slot - start_slot + 1
    } else {
        0
    };

    SlotRange {
        start_slot,
        end_slot,
        count,
    }
}

pub fn format_slot(slot: u64) -> String {
    format!(
        "Slot {} (Epoch {}, Slot {}/{})",
        slot,
        slot_to_epoch(slot),
        slot_in_epoch(slot),
        SLOTS_PER_EPOCH - 1
    )
}
