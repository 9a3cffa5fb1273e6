//! Platform abstraction layer
//!
//! Wall-clock concerns the deterministic simulation must not touch.

pub mod clock;

pub use clock::FrameClock;

/// Seed derived from the system clock, for runs without a configured seed
pub fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}
