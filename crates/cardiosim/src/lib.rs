//! cardiosim-rs: parametric cardiac implant device profiles.
//!
//! Each device kind declares bounded numeric parameters and a pure profile
//! function mapping parameter values to an ordered outline of
//! `(radius, 0, axial)` points. A downstream renderer revolves the outline
//! into a 3D surface, using the kind's interpolation-smoothness scalar to
//! control curve fitting.
//!
//! # Example
//!
//! ```
//! use cardiosim::builtin_catalog;
//!
//! let catalog = builtin_catalog().unwrap();
//! let device = catalog.get("RadialForce").unwrap();
//! let profile = device
//!     .profile_points(&device.default_values(), None, true)
//!     .unwrap();
//! assert!(!profile.is_empty());
//! ```

#![allow(clippy::missing_errors_doc)]

pub use cardiosim_core::{
    DeviceDefinition, DeviceError, DeviceRegistry, ImplantPresets, InternalParameters,
    ParameterSpec, ParameterValues, Preset, Profile, ProfileFn, Result, Segment,
};
pub use cardiosim_devices as devices;

// Re-export the point type for convenience
pub use glam::DVec3;

/// Builds a registry populated with every built-in device kind.
pub fn builtin_catalog() -> Result<DeviceRegistry> {
    let mut registry = DeviceRegistry::new();
    for device in cardiosim_devices::all_devices() {
        registry.register(device)?;
    }
    log::debug!("built-in catalog holds {} device kinds", registry.len());
    Ok(registry)
}
