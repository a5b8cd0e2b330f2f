//! Built-in device kinds for cardiosim-rs.
//!
//! Three families, one module each:
//! - [`generic`] — segmented Harmony TCPV outline and cylinder-based
//!   valves/stents
//! - [`asd_vsd`] — occluders for septal defects and patent ductus
//!   arteriosus
//! - [`tcav`] — transcatheter aortic valve anchoring concepts
//!
//! Every kind is a constructor returning a
//! [`cardiosim_core::DeviceDefinition`]; nothing registers itself
//! anywhere. [`all_devices`] lists the complete catalog in display order.

#![allow(clippy::must_use_candidate)]

pub mod asd_vsd;
pub mod generic;
pub mod tcav;

pub use asd_vsd::{
    custom_device, duct_occluder, duct_occluder_ii, multi_fenestrated_septal_occluder,
    muscular_vsd_occluder, septal_occluder,
};
pub use generic::{cylinder, cylinder_with_skirt, harmony};
pub use tcav::{angular_winglets, apical_tether, apical_tether_plug, radial_force};

use cardiosim_core::DeviceDefinition;

/// All built-in device kinds, in catalog display order.
#[must_use]
pub fn all_devices() -> Vec<DeviceDefinition> {
    vec![
        generic::harmony(),
        generic::cylinder(),
        generic::cylinder_with_skirt(),
        asd_vsd::septal_occluder(),
        asd_vsd::multi_fenestrated_septal_occluder(),
        asd_vsd::duct_occluder(),
        asd_vsd::duct_occluder_ii(),
        asd_vsd::muscular_vsd_occluder(),
        asd_vsd::custom_device(),
        tcav::apical_tether_plug(),
        tcav::apical_tether(),
        tcav::angular_winglets(),
        tcav::radial_force(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let devices = all_devices();
        assert_eq!(devices.len(), 13);
        let mut ids: Vec<&str> = devices.iter().map(DeviceDefinition::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), devices.len());
    }

    #[test]
    fn test_every_device_profiles_from_defaults() {
        for device in all_devices() {
            let profile = device
                .profile_points(&device.default_values(), None, true)
                .unwrap();
            assert!(!profile.is_empty(), "{}", device.id());
            // Cross-section points stay in the y = 0 plane.
            assert!(profile.iter().all(|p| p.y == 0.0), "{}", device.id());
        }
    }
}
