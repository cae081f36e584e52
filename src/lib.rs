#![cfg_attr(not(test), no_std)]

//! Rendering and time-computation core for an e-paper calendar clock.
//!
//! Turns calendar/clock state into bit-packed plane buffers: a scaled
//! bitmap-font engine with UTF-8 layout, a Gregorian/lunar calendar with
//! solar-term and holiday resolution, per-resolution layout tables, and the
//! screen compositor that ties them together. Panel bus sequencing, wireless
//! transport, and storage live outside this crate; callers feed time-set
//! records and drawing buffers in and hand the exported planes to their
//! panel driver.

pub mod calendar;
pub mod font;
pub mod layout;
pub mod remote;
pub mod screen;

pub use screen::{Device, RefreshClass, Screen};
