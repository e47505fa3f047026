//! Pure shift/conveyor simulation logic for Beltline.
//!
//! This crate contains all game logic that is independent of any entity
//! store, engine, or runtime. Functions take plain data and return results,
//! making them unit-testable and portable between the headless harness and
//! any future presentation frontend.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`choice`] | Modal choice state machine (item verdict / exit confirm) |
//! | [`classify`] | Spawn-order good/evil classification rules |
//! | [`clock`] | Shift clock, expiry latching, time-of-day display |
//! | [`constants`] | Conveyor geometry, pacing, and stat tunables |
//! | [`motion`] | Linear item movement, settle, queue-advance resume |
//! | [`stats`] | Bounded operator stat counter pair |

pub mod choice;
pub mod classify;
pub mod clock;
pub mod constants;
pub mod motion;
pub mod stats;
