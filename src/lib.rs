// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Voltage-driven animation engine for 3D semiconductor device views.
//!
//! semiviz maps a transistor's electrical parameters to a physical state
//! (channel on or off, pinch-off, current magnitude) and animates a layered
//! device model toward that state, frame by frame, with exponential
//! smoothing. Short-lived effects such as highlight pulses, idle rotation
//! and a legacy fade-in run alongside on their own schedules.
//!
//! # Key entry points
//!
//! - [`engine::TransistorViz`] - the device visualization component
//! - [`host::RenderHost`] - frame loop with a typed updater registry and
//!   periodic timers
//! - [`device::resolve`] - pure mapping from state and parameters to an
//!   animation target
//! - [`content::TopicStore`] - topic, chapter and section content
//! - [`options::Options`] - runtime configuration (animation, highlight,
//!   camera)
//!
//! # Architecture
//!
//! Everything is single-threaded and frame-driven. UI-side calls on
//! [`engine::TransistorViz`] resolve a new target into the shared
//! [`scene::DeviceScene`]; on every [`host::RenderHost::frame`] the host
//! fires due timers, then runs each registered updater once with mutable
//! access to that scene. Updater failures are logged and skipped so one
//! bad updater never stalls the loop.

pub mod animation;
pub mod content;
pub mod device;
pub mod effects;
pub mod engine;
pub mod error;
pub mod host;
pub mod options;
pub mod scene;
pub mod util;
