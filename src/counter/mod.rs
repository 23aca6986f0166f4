//! Shared counters and the increment loops the contention experiments run.
//!
//! Two kinds of counter:
//! - [`RacyCounter`]: read and write are separate relaxed atomic ops, so a
//!   concurrent increment can be lost but never causes undefined behavior
//! - [`LockedCounter`]: a `u64` behind a mutex
//!
//! The loops in [`increment`] take the counter by reference; nothing here is
//! global.

pub mod cell;
pub mod increment;

pub use cell::{LockedCounter, RacyCounter};
pub use increment::{
    increment_with_batch, increment_with_delay, increment_with_lock, increment_without_lock,
};
