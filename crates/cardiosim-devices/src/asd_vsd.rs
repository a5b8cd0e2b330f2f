//! Occluder devices for atrial and ventricular septal defects and for
//! patent ductus arteriosus.
//!
//! All outlines run from the distal end (negative axial) to the proximal
//! end; double-disc occluders start and finish on the symmetry axis so the
//! revolved surface is closed.

use cardiosim_core::{
    DeviceDefinition, InternalParameters, ParameterSpec, ParameterValues, Profile, Result, Segment,
};

/// Self-expanding double-disc occluder for atrial septal defects.
#[must_use]
pub fn septal_occluder() -> DeviceDefinition {
    DeviceDefinition::new(
        "SeptalOccluder",
        "Septal Occluder",
        vec![
            ParameterSpec::new(
                "waistDiameterMm",
                "Waist diameter",
                "Diameter of the narrowing between the two discs",
                17.0,
                "mm",
                4.0,
                38.0,
                1.0,
                0.0,
            ),
            ParameterSpec::new(
                "rightDiameterMm",
                "Right disc diameter",
                "Diameter of right atrial disc",
                27.0,
                "mm",
                12.0,
                48.0,
                1.0,
                0.0,
            ),
            ParameterSpec::new(
                "leftDiameterMm",
                "Left disc diameter",
                "Diameter of the left atrial disc",
                31.0,
                "mm",
                16.0,
                54.0,
                1.0,
                0.0,
            ),
            ParameterSpec::new(
                "waistLengthMm",
                "Waist length",
                "Length of the narrowing between the two discs",
                4.0,
                "mm",
                3.0,
                4.0,
                0.1,
                0.0,
            ),
            ParameterSpec::new(
                "lengthMm",
                "Length",
                "Total length",
                12.0,
                "mm",
                12.0,
                16.0,
                1.0,
                0.0,
            ),
        ],
        InternalParameters::smoothness(-0.70),
        septal_occluder_profile,
    )
}

fn septal_occluder_profile(
    params: &ParameterValues,
    _segment: Option<Segment>,
    _open_segment: bool,
) -> Result<Profile> {
    let length = params.get("lengthMm")?;
    let radius = params.get("leftDiameterMm")? / 2.0;
    let secondary_radius = params.get("rightDiameterMm")? / 2.0;
    let half_narrowing = params.get("waistLengthMm")? / 2.0;
    let narrowing_radius = params.get("waistDiameterMm")? / 2.0;

    let half_length = length * 0.5;
    let shoulder = length * 0.5 * 45.0_f64.cos() / 45.0_f64.sin();
    let waist_offset = (half_length - half_narrowing) / 2.0;

    let mut profile = Profile::new();
    profile.push(0.0, -half_length);
    profile.push(radius - shoulder, -half_length);
    profile.push(radius, -half_narrowing + waist_offset);

    profile.push(narrowing_radius, -half_narrowing + waist_offset);
    profile.push(narrowing_radius, half_narrowing + waist_offset);

    profile.push(secondary_radius, half_narrowing + waist_offset);
    profile.push(secondary_radius, half_length);
    profile.push(0.0, half_length);
    Ok(profile)
}

/// Cribriform occluder with equal-sized discs and a narrow central pin.
#[must_use]
pub fn multi_fenestrated_septal_occluder() -> DeviceDefinition {
    DeviceDefinition::new(
        "MultiFenestratedSeptalOccluder",
        "Multi Fenestrated Septal Occluder",
        vec![ParameterSpec::new(
            "diameterMm",
            "Diameter",
            "Diameter of the discs",
            35.0,
            "mm",
            18.0,
            35.0,
            1.0,
            0.0,
        )],
        InternalParameters::smoothness(-0.70),
        multi_fenestrated_septal_occluder_profile,
    )
}

fn multi_fenestrated_septal_occluder_profile(
    params: &ParameterValues,
    _segment: Option<Segment>,
    _open_segment: bool,
) -> Result<Profile> {
    let radius = params.get("diameterMm")? / 2.0;
    let length = radius * 2.0 / 3.0;
    let half_narrowing = 1.5;
    let narrowing_radius = 2.0;

    let half_length = length * 0.5;
    let shoulder = length * 0.5 * 45.0_f64.cos() / 45.0_f64.sin();
    let waist_offset = (half_length - half_narrowing) / 2.0;

    let mut profile = Profile::new();
    profile.push(0.0, -half_length);
    profile.push(radius - shoulder, -half_length + length / 5.0);
    profile.push(radius, -half_narrowing + waist_offset);

    profile.push(narrowing_radius, -half_narrowing + waist_offset);
    profile.push(narrowing_radius, half_narrowing + waist_offset);

    profile.push(radius, half_narrowing + waist_offset);
    profile.push(radius, half_length - length / 10.0);
    profile.push(0.0, half_length);
    Ok(profile)
}

/// Mushroom-shaped occluder for patent ductus arteriosus.
#[must_use]
pub fn duct_occluder() -> DeviceDefinition {
    DeviceDefinition::new(
        "DuctOccluder",
        "Duct Occluder",
        vec![
            ParameterSpec::new(
                "aortaDiameterMm",
                "Aorta diameter",
                "Device diameter at descending aorta",
                8.0,
                "mm",
                5.0,
                12.0,
                1.0,
                0.0,
            ),
            ParameterSpec::new(
                "pulmonaryArteryDiameterMm",
                "PA diameter",
                "Device diameter at pulmonary artery",
                6.0,
                "mm",
                4.0,
                10.0,
                1.0,
                0.0,
            ),
            ParameterSpec::new(
                "diameterMm",
                "Retention skirt diameter",
                "Diameter of the retention skirt",
                12.0,
                "mm",
                9.0,
                18.0,
                1.0,
                0.0,
            ),
            ParameterSpec::new(
                "lengthMm",
                "Device length",
                "Device length",
                7.0,
                "mm",
                5.0,
                8.0,
                1.0,
                0.0,
            ),
        ],
        InternalParameters::smoothness(-0.70),
        duct_occluder_profile,
    )
}

fn duct_occluder_profile(
    params: &ParameterValues,
    _segment: Option<Segment>,
    _open_segment: bool,
) -> Result<Profile> {
    let radius = params.get("diameterMm")? / 2.0;
    let aorta_radius = params.get("aortaDiameterMm")? / 2.0;
    let pa_radius = params.get("pulmonaryArteryDiameterMm")? / 2.0;
    let length = params.get("lengthMm")?;

    let half_length = length * 0.5;

    let mut profile = Profile::new();
    profile.push(0.0, -half_length);
    profile.push(radius, -half_length);
    profile.push(radius, -half_length + 0.10 * half_length);
    profile.push(aorta_radius * 1.1, -half_length + 0.20 * half_length);

    profile.push(aorta_radius, 0.0);

    profile.push(aorta_radius, half_length * 4.0 / 5.0);
    profile.push(pa_radius, half_length);
    profile.push(pa_radius - (aorta_radius - pa_radius), half_length * 0.1);
    profile.push(0.0, half_length * 0.1);
    Ok(profile)
}

/// Symmetric double-disc occluder for muscular ventricular septal defects.
#[must_use]
pub fn muscular_vsd_occluder() -> DeviceDefinition {
    DeviceDefinition::new(
        "MuscularVsdOccluder",
        "Muscular VSD Occluder",
        vec![
            ParameterSpec::new(
                "innerDiameterMm",
                "Inner diameter",
                "Device sz/ waist diameter",
                8.0,
                "mm",
                5.0,
                12.0,
                1.0,
                0.0,
            ),
            ParameterSpec::new(
                "outerDiameterMm",
                "Skirt diameter",
                "Disc diameter",
                12.0,
                "mm",
                9.0,
                18.0,
                1.0,
                0.0,
            ),
        ],
        InternalParameters::smoothness(-0.70),
        muscular_vsd_occluder_profile,
    )
}

fn muscular_vsd_occluder_profile(
    params: &ParameterValues,
    _segment: Option<Segment>,
    _open_segment: bool,
) -> Result<Profile> {
    let radius = params.get("outerDiameterMm")? / 2.0;
    let inner_radius = params.get("innerDiameterMm")? / 2.0;
    let length = 7.0;

    let half_length = length * 0.5;

    let mut profile = Profile::new();
    profile.push(0.0, -half_length);
    profile.push(radius, -half_length);
    profile.push(radius, -half_length + 0.10 * half_length);
    profile.push(inner_radius, -half_length + 0.10 * half_length);

    profile.push(inner_radius, 0.0);

    profile.push(inner_radius, half_length - 0.10 * half_length);
    profile.push(radius, half_length - 0.10 * half_length);
    profile.push(radius, half_length);
    profile.push(inner_radius, half_length);

    profile.push(inner_radius * 0.8, half_length * 0.1);
    profile.push(0.0, 0.0);
    Ok(profile)
}

/// Low-profile duct occluder with two flat retention discs.
#[must_use]
pub fn duct_occluder_ii() -> DeviceDefinition {
    DeviceDefinition::new(
        "DuctOccluder2",
        "Duct Occluder II",
        vec![
            ParameterSpec::new(
                "waistDiameterMm",
                "Waist diameter",
                "Waist diameter",
                5.0,
                "mm",
                3.0,
                6.0,
                1.0,
                0.0,
            ),
            ParameterSpec::new(
                "lengthMm",
                "Device length",
                "Device length",
                4.0,
                "mm",
                4.0,
                6.0,
                1.0,
                0.0,
            ),
            ParameterSpec::new(
                "discDiameterMm",
                "Skirt diameter",
                "Disc diameter",
                11.0,
                "mm",
                9.0,
                12.0,
                1.0,
                0.0,
            ),
        ],
        InternalParameters::smoothness(-0.70),
        duct_occluder_ii_profile,
    )
}

fn duct_occluder_ii_profile(
    params: &ParameterValues,
    _segment: Option<Segment>,
    _open_segment: bool,
) -> Result<Profile> {
    let radius = params.get("discDiameterMm")? / 2.0;
    let waist_radius = params.get("waistDiameterMm")? / 2.0;
    let length = params.get("lengthMm")?;

    let half_length = length * 0.5;
    let disc_width = (radius - waist_radius) / 45.0_f64.tan();

    let mut profile = Profile::new();
    profile.push(0.0, -half_length);
    profile.push(waist_radius, -half_length);
    profile.push(radius, -half_length + disc_width);
    profile.push(waist_radius, -half_length);

    profile.push(waist_radius, 0.0);

    profile.push(waist_radius, half_length);
    profile.push(radius, half_length - disc_width);
    profile.push(waist_radius, half_length);
    profile.push(0.0, half_length);
    Ok(profile)
}

/// Freely parameterized double-disc device for planning non-catalog sizes.
#[must_use]
pub fn custom_device() -> DeviceDefinition {
    DeviceDefinition::new(
        "CustomDevice",
        "Custom Device",
        vec![
            ParameterSpec::new(
                "lengthMm",
                "Length",
                "Total length",
                10.0,
                "mm",
                0.0,
                30.0,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "diameterMm",
                "Primary diameter",
                "Diameter of the primary disk",
                30.0,
                "mm",
                0.0,
                60.0,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "secondaryDiameterMm",
                "Secondary diameter",
                "Diameter of secondary disk",
                25.0,
                "mm",
                0.0,
                60.0,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "waistLengthMm",
                "Waist length",
                "Length of the narrowing between the two disks",
                4.0,
                "mm",
                0.0,
                60.0,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "narrowingTransitioningLengthFraction",
                "Narrowing smoothness",
                "Percentage of transitioning region length relative to total length",
                10.0,
                "%",
                0.0,
                100.0,
                1.0,
                5.0,
            ),
            ParameterSpec::new(
                "waistDiameterMm",
                "Waist diameter",
                "Diameter of the narrowing between the two disks",
                15.0,
                "mm",
                0.0,
                60.0,
                0.1,
                1.0,
            ),
        ],
        InternalParameters::default(),
        custom_device_profile,
    )
}

fn custom_device_profile(
    params: &ParameterValues,
    _segment: Option<Segment>,
    _open_segment: bool,
) -> Result<Profile> {
    let length = params.get("lengthMm")?;
    let radius = params.get("diameterMm")? / 2.0;
    let secondary_radius = params.get("secondaryDiameterMm")? / 2.0;
    let half_narrowing = params.get("waistLengthMm")? / 2.0;
    let transition_fraction = params.get("narrowingTransitioningLengthFraction")?;
    let narrowing_radius = params.get("waistDiameterMm")? / 2.0;

    // The revolved model comes out wider than the outline because of
    // smoothing; divide the disc radii by this factor so the finished
    // model matches the prescribed diameters.
    let radius_overshoot = 1.16;

    let smoothing_offset = length * 0.5 * transition_fraction;
    let half_length = length * 0.5;

    let mut profile = Profile::new();
    profile.push(0.0, -half_length);
    profile.push(radius / radius_overshoot, -half_length);
    profile.push(radius / radius_overshoot, -half_narrowing - smoothing_offset);

    profile.push(narrowing_radius, -half_narrowing + smoothing_offset);
    profile.push(narrowing_radius, half_narrowing - smoothing_offset);

    profile.push(
        secondary_radius / radius_overshoot,
        half_narrowing + smoothing_offset,
    );
    profile.push(secondary_radius / radius_overshoot, half_length);
    profile.push(0.0, half_length);
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults(device: &DeviceDefinition) -> ParameterValues {
        device.default_values()
    }

    #[test]
    fn test_point_counts_are_fixed() {
        let cases = [
            (septal_occluder(), 8),
            (multi_fenestrated_septal_occluder(), 8),
            (duct_occluder(), 9),
            (muscular_vsd_occluder(), 11),
            (duct_occluder_ii(), 9),
            (custom_device(), 8),
        ];
        for (device, expected) in cases {
            let profile = device
                .profile_points(&defaults(&device), None, true)
                .unwrap();
            assert_eq!(profile.len(), expected, "{}", device.id());

            // Point count must not depend on parameter values.
            let mut stretched = defaults(&device);
            for spec in device.parameters() {
                stretched.set(spec.key.clone(), spec.maximum * spec.value_scale());
            }
            let profile = device.profile_points(&stretched, None, true).unwrap();
            assert_eq!(profile.len(), expected, "{}", device.id());
        }
    }

    #[test]
    fn test_profiles_are_deterministic() {
        for device in [septal_occluder(), duct_occluder(), custom_device()] {
            let values = defaults(&device);
            let a = device.profile_points(&values, None, true).unwrap();
            let b = device.profile_points(&values, None, true).unwrap();
            assert_eq!(a, b, "{}", device.id());
        }
    }

    #[test]
    fn test_septal_occluder_closes_on_axis() {
        let device = septal_occluder();
        let profile = device
            .profile_points(&defaults(&device), None, true)
            .unwrap();
        let points = profile.points();
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[points.len() - 1].x, 0.0);
        assert_eq!(points[0].z, -6.0);
        assert_eq!(points[points.len() - 1].z, 6.0);
    }

    #[test]
    fn test_septal_occluder_waist() {
        let device = septal_occluder();
        let profile = device
            .profile_points(&defaults(&device), None, true)
            .unwrap();
        // Waist points sit at half the waist diameter.
        assert_eq!(profile.points()[3].x, 8.5);
        assert_eq!(profile.points()[4].x, 8.5);
    }

    #[test]
    fn test_duct_occluder_ends() {
        let device = duct_occluder();
        let profile = device
            .profile_points(&defaults(&device), None, true)
            .unwrap();
        let points = profile.points();
        // Retention skirt at full radius on the aortic end.
        assert_eq!(points[1].x, 6.0);
        assert_eq!(points[1].z, -3.5);
        // Pulmonary artery end at PA radius.
        assert_eq!(points[6].x, 3.0);
        assert_eq!(points[6].z, 3.5);
    }

    #[test]
    fn test_muscular_vsd_occluder_fixed_length() {
        let device = muscular_vsd_occluder();
        let profile = device
            .profile_points(&defaults(&device), None, true)
            .unwrap();
        // Length is fixed at 7 mm regardless of parameters.
        assert_eq!(profile.points()[0].z, -3.5);
        assert_eq!(profile.points()[7].z, 3.5);
    }

    #[test]
    fn test_custom_device_overshoot_compensation() {
        let device = custom_device();
        let profile = device
            .profile_points(&defaults(&device), None, true)
            .unwrap();
        let primary = profile.points()[1].x;
        assert!((primary - 15.0 / 1.16).abs() < 1e-12);
    }

    #[test]
    fn test_missing_parameter_fails() {
        let device = duct_occluder_ii();
        let mut values = defaults(&device);
        values.remove("discDiameterMm");
        let err = device.profile_points(&values, None, true).unwrap_err();
        assert!(matches!(
            err,
            cardiosim_core::DeviceError::MissingParameter(key) if key == "discDiameterMm"
        ));
    }
}
