use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use tracing::{trace, warn};

use crate::{
    config::ChainConfig,
    conversions,
    types::{EpochInfo, SlotInfo, SlotRange},
};

/// Source of the current Unix time in seconds.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> u64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs(),
            Err(e) => {
                warn!("System clock is {:?} before the Unix epoch", e.duration());
                0
            }
        }
    }
}

/// A time source that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    now: AtomicU64,
}

impl ManualTimeSource {
    pub fn new(now: u64) -> Self {
        Self {
            now: AtomicU64::new(now),
        }
    }

    pub fn set(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Moves the clock forward, saturating at `u64::MAX`.
    pub fn advance(&self, seconds: u64) {
        // The closure never returns `None`, so the update cannot fail.
        let _ = self
            .now
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                Some(now.saturating_add(seconds))
            });
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> u64 {
        (**self).now()
    }
}

/// Slot clock bound to a single genesis time.
///
/// Pure conversions are forwarded to [`conversions`]; the remaining methods
/// read the current time from `T`.
#[derive(Debug, Clone)]
pub struct SlotClock<T: TimeSource = SystemTimeSource> {
    genesis_time: u64,
    time_source: T,
}

impl SlotClock {
    pub fn new(genesis_time: u64) -> Self {
        Self::with_time_source(genesis_time, SystemTimeSource)
    }

    pub fn for_network<C: ChainConfig>() -> Self {
        Self::new(C::GENESIS_TIME)
    }
}

impl<T: TimeSource> SlotClock<T> {
    pub fn with_time_source(genesis_time: u64, time_source: T) -> Self {
        Self {
            genesis_time,
            time_source,
        }
    }

    pub fn genesis_time(&self) -> u64 {
        self.genesis_time
    }

    pub fn time_source(&self) -> &T {
        &self.time_source
    }

    pub fn now(&self) -> u64 {
        self.time_source.now()
    }

    pub fn is_before_genesis(&self) -> bool {
        conversions::is_before_genesis(self.now(), self.genesis_time)
    }

    pub fn current_slot(&self) -> u64 {
        let now = self.now();
        let slot = conversions::slot_at_time(now, self.genesis_time);
        trace!(now, genesis_time = self.genesis_time, slot, "Resolved current slot");
        slot
    }

    pub fn current_epoch(&self) -> u64 {
        conversions::slot_to_epoch(self.current_slot())
    }

    pub fn time_until_slot(&self, slot: u64) -> i64 {
        conversions::time_until_slot_at(slot, self.genesis_time, self.now())
    }

    pub fn duration_to_next_slot(&self) -> u64 {
        conversions::duration_to_next_slot_at(self.genesis_time, self.now())
    }

    pub fn seconds_into_slot(&self, slot: u64) -> Option<u64> {
        conversions::seconds_into_slot_at(slot, self.genesis_time, self.now())
    }

    pub fn is_slot_active(&self, slot: u64) -> bool {
        conversions::is_slot_active_at(slot, self.genesis_time, self.now())
    }

    /// Window check relative to the start of `slot` only; it does not require
    /// `slot` to be the current slot.
    pub fn is_in_attestation_window(&self, slot: u64) -> bool {
        conversions::is_in_attestation_window_at(slot, self.genesis_time, self.now())
    }

    pub fn slot_info(&self, slot: u64) -> SlotInfo {
        conversions::slot_info_at(slot, self.genesis_time, self.now())
    }

    pub fn current_slot_info(&self) -> SlotInfo {
        // Read the clock once so the slot and its flags agree.
        let now = self.now();
        let slot = conversions::slot_at_time(now, self.genesis_time);
        conversions::slot_info_at(slot, self.genesis_time, now)
    }

    pub fn slot_start_time(&self, slot: u64) -> u64 {
        conversions::slot_start_time(slot, self.genesis_time)
    }

    pub fn slot_end_time(&self, slot: u64) -> u64 {
        conversions::slot_end_time(slot, self.genesis_time)
    }

    pub fn slot_at_time(&self, timestamp: u64) -> u64 {
        conversions::slot_at_time(timestamp, self.genesis_time)
    }

    pub fn epoch_info(&self, epoch: u64) -> EpochInfo {
        conversions::epoch_info(epoch, self.genesis_time)
    }

    pub fn slots_in_time_range(&self, start_time: u64, end_time: u64) -> SlotRange {
        conversions::slots_in_time_range(start_time, end_time, self.genesis_time)
    }
}

/// Current slot for `genesis_time` according to the system clock.
pub fn current_slot(genesis_time: u64) -> u64 {
    SlotClock::new(genesis_time).current_slot()
}
