//! Watchface composition: readout formatting, update cycle, layout data.
//!
//! This crate turns a clock snapshot into the six display strings
//! (local time, local date, DST flag, UTC time, MJD, LST), drives the
//! throttled update cycle, handles inbound configuration messages, and
//! publishes the data-driven layout table an external renderer consumes.
//! Rendering itself stays outside: the renderer implements
//! [`ReadoutSink`] and receives formatted text.

pub mod elements;
pub mod face;
pub mod layout;
pub mod readout;

pub use elements::{DisplayElements, ElementHandle};
pub use face::{Face, UPDATE_PERIOD_SECONDS};
pub use layout::{
    Align, Color, ColorRole, Content, ElementSpec, FACE_LAYOUT, FontRole, FracRect, Slot,
    TargetProfile, color,
};
pub use readout::{Readout, ReadoutSet, ReadoutSink, compute_readouts};
