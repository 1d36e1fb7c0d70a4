//! Slamtape Effects - Tape saturation pipeline
//!
//! This crate assembles the primitives from `slamtape-core` into the tape
//! emulation:
//!
//! - [`TapeChannel`] - Per-sample pipeline with all state for one channel
//! - [`Tape`] - Mono [`Effect`](slamtape_core::Effect) with slam parameters
//! - [`StereoTape`] - Two independent channels under one slam control
//! - [`SlamControl`] - Knob, CV trim, and CV resolved to a control value
//!
//! The pipeline stages are public for instrumentation and testing:
//!
//! - [`GainStage`] - Pre-attenuation and deferred boost
//! - [`TapeCoefficients`] - Sample-rate derived filter settings
//! - [`DualPathBank`] - Alternating path copies of the filter state
//! - [`HeadBump`] - Cubic-feedback resonator
//! - [`saturation`] - Treble softening and spiral saturation
//! - [`HysteresisLimiter`] - ±0.99 limiter with output memory
//!
//! ## Example
//!
//! ```rust
//! use slamtape_core::{Effect, ParameterInfo};
//! use slamtape_effects::Tape;
//!
//! let mut tape = Tape::new(44100.0);
//! let slam = tape.find_param_by_name("slam").unwrap();
//! tape.set_param(slam, 0.7);
//!
//! let output = tape.process(1.0);
//! assert!(output.is_finite());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `slamtape-core/std`
//! - `tracing`: debug events on sample-rate changes and resets

#![cfg_attr(not(feature = "std"), no_std)]

pub mod channel;
pub mod coefficients;
pub mod dual_path;
pub mod gain_stage;
pub mod head_bump;
pub mod hysteresis;
pub mod saturation;
pub mod slam;
pub mod tape;

// Re-export main types at crate root
pub use channel::TapeChannel;
pub use coefficients::{REFERENCE_RATE, SOFTNESS, TapeCoefficients};
pub use dual_path::{DualPathBank, Path, PathOutput, PathState};
pub use gain_stage::{GAIN_BOOST, GAIN_CUT, GainStage};
pub use head_bump::HeadBump;
pub use hysteresis::{CEILING, HysteresisLimiter};
pub use slam::{CONTROL_MAX, CONTROL_MIN, SLAM_PARAM, SLAM_TRIM_PARAM, SlamControl};
pub use tape::{StereoTape, Tape};
