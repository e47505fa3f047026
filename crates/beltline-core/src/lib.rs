//! Beltline Core - Conveyor Shift Simulation Engine
//!
//! A single-threaded, tick-driven simulation of a fixed-duration work
//! shift: items arrive on a conveyor, queue toward an inspection point,
//! and the operator accepts or rejects the frontmost one while the clock
//! runs down toward 6 AM.
//!
//! # Architecture
//!
//! Items live as entities in a `hecs` world owned by the [`engine::ShiftEngine`]:
//! - **Components**: pure data on item entities ([`components::Conveyed`],
//!   [`components::Inspectable`])
//! - **Systems**: queue coordination in [`queue`] (spawn cadence, jam
//!   detection, movement, dismissal)
//! - **Controller**: the engine routes semantic input events through the
//!   modal choice machine and drives the shift-end sequence
//!
//! Rendering, input polling, and audio are external collaborators behind
//! the [`presentation::Presentation`] trait.
//!
//! # Example
//!
//! ```rust,no_run
//! use beltline_core::prelude::*;
//!
//! let mut engine = ShiftEngine::new(ShiftCatalog::builtin());
//! let mut sink = NullPresentation;
//! engine.start_shift(0, &mut sink);
//!
//! loop {
//!     engine.tick(1.0 / 60.0, &mut sink); // 60 FPS
//! }
//! ```

pub mod catalog;
pub mod components;
pub mod engine;
pub mod presentation;
pub mod queue;
pub mod sequence;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::catalog::{ShiftCatalog, ShiftConfig};
    pub use crate::components::{Conveyed, Inspectable};
    pub use crate::engine::{InputEvent, ShiftEngine};
    pub use crate::presentation::{NullPresentation, Presentation};
}
