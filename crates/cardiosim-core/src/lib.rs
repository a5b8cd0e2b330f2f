//! Core abstractions for cardiosim-rs.
//!
//! This crate provides the fundamental types used throughout cardiosim-rs:
//! - [`ParameterSpec`] / [`ParameterValues`] for the bounded numeric
//!   parameters each device kind declares
//! - [`DeviceDefinition`] bundling a device kind's metadata with its pure
//!   profile function
//! - [`DeviceRegistry`], an explicit catalog passed around as a value
//! - [`ImplantPresets`] for manufacturer sizing tables
//!
//! Device kinds are flat records looked up by id; dispatch goes through a
//! plain function pointer rather than a trait object.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod device;
pub mod error;
pub mod parameter;
pub mod presets;
pub mod profile;
pub mod registry;

pub use device::{DeviceDefinition, InternalParameters, ProfileFn};
pub use error::{DeviceError, Result};
pub use parameter::{ParameterSpec, ParameterValues};
pub use presets::{ImplantPresets, Preset};
pub use profile::{Profile, Segment};
pub use registry::DeviceRegistry;

// Re-export the point type for convenience
pub use glam::DVec3;
