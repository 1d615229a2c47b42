//! Animation driver: frame-coherent smoothing of the channel toward the
//! resolved device target.

mod driver;
mod smoothing;

pub use driver::{attach, detach, ChannelSmoother};
pub use smoothing::{
    smooth, smooth_color, AnimatedVisualState, VISIBILITY_CUTOFF,
};
