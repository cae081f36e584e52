#![cfg_attr(not(test), no_std)]

//! Bit-packed dual-plane framebuffer for small e-paper panels.
//!
//! One primary monochrome plane plus an optional accent plane, with
//! rotation-aware logical-to-physical addressing and integer drawing
//! primitives. Panel bus sequencing lives outside this crate; callers
//! export the plane bytes and hand them to their panel driver.

mod canvas;
pub mod draw;
pub mod trig;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use canvas::{BUFFER_CAP, Canvas, CanvasError};

/// Drawing color selector.
///
/// The primary plane uses set-bit = white, matching the panel's all-white
/// clear byte of `0xFF`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    /// Clear the primary-plane bit.
    Black,
    /// Set the primary-plane bit.
    White,
    /// Set the accent-plane bit. Ignored on panels without an accent plane.
    Red,
    /// Flip the primary-plane bit. Used for cursor/selection highlight.
    Swap,
}

impl Color {
    /// Background color used behind filled text.
    pub fn complement(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
            Self::Red | Self::Swap => Self::White,
        }
    }
}

/// Panel rotation applied between logical and physical coordinates.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Whether this rotation swaps the logical width/height.
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::R90 | Self::R270)
    }
}
