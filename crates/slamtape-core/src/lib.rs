//! Slamtape Core - DSP primitives for the tape pipeline
//!
//! The building blocks here are small, allocation-free, and `no_std`, so the
//! per-sample pipeline in `slamtape-effects` can run on any host thread that
//! owns an audio callback.
//!
//! # Core Abstractions
//!
//! - [`Effect`] - Object-safe per-sample processing trait
//! - [`ParameterInfo`] - Runtime parameter discovery for hosts and presets
//!
//! ## Filters
//!
//! - [`ResonantBiquad`] - Band-pass biquad with interleaved two-state recursion
//! - [`OnePole`] - One-pole smoother with an explicit blend amount
//!
//! ## Noise
//!
//! - [`FloatDither`] - Exponent-scaled dither driven by [`Xorshift32`]
//!
//! ## Utilities
//!
//! - Level conversion: [`db_to_linear`]
//! - Shapers: [`spiral`], [`sin_asin_shape`]
//!
//! # no_std Support
//!
//! Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! slamtape-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations, locks, or I/O in processing paths
//! - **64-bit**: All signal math in `f64`
//! - **Object-safe traits**: Dynamic dispatch when needed

#![cfg_attr(not(feature = "std"), no_std)]

pub mod biquad;
pub mod dither;
pub mod effect;
pub mod math;
pub mod one_pole;
pub mod param_info;

// Re-export main types at crate root
pub use biquad::ResonantBiquad;
pub use dither::{DENORMAL_FLOOR, DITHER_SEED, FloatDither, Xorshift32};
pub use effect::Effect;
pub use math::{SPIRAL_LIMIT, db_to_linear, sin_asin_shape, spiral};
pub use one_pole::OnePole;
pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParamUnit, ParameterInfo};
