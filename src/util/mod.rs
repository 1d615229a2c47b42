//! Shared utilities.
//!
//! Color conversion for material and glow values, and frame pacing for the
//! headless driver.

pub mod color;
pub mod frame_timing;
