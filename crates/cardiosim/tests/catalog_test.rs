//! Integration tests for the built-in device catalog.

use cardiosim::*;

#[test]
fn test_builtin_catalog_contents() {
    let catalog = builtin_catalog().unwrap();
    assert_eq!(catalog.len(), 13);

    for id in [
        "Harmony",
        "Cylinder",
        "CylinderValveWithSkirt",
        "SeptalOccluder",
        "MultiFenestratedSeptalOccluder",
        "DuctOccluder",
        "DuctOccluder2",
        "MuscularVsdOccluder",
        "CustomDevice",
        "ApicalTetherPlug",
        "ApicalTether",
        "AngularWinglets",
        "RadialForce",
    ] {
        assert!(catalog.contains(id), "missing '{id}'");
    }

    // Display order starts with the generic kinds.
    let first: Vec<&str> = catalog.ids().take(3).collect();
    assert_eq!(first, ["Harmony", "Cylinder", "CylinderValveWithSkirt"]);
}

#[test]
fn test_every_kind_profiles_from_defaults() {
    let catalog = builtin_catalog().unwrap();
    for device in catalog.iter() {
        let profile = device
            .profile_points(&device.default_values(), None, true)
            .unwrap();
        assert!(!profile.is_empty(), "{}", device.id());
    }
}

#[test]
fn test_radial_force_catalog_size() {
    let catalog = builtin_catalog().unwrap();
    let device = catalog.get("RadialForce").unwrap();
    let values = ParameterValues::from([
        ("innerDiameterMm", 20.0),
        ("outerDiameterMm", 40.0),
        ("lengthMm", 16.0),
    ]);
    let profile = device.profile_points(&values, None, true).unwrap();
    let expected = [
        DVec3::new(10.0, 0.0, -4.0),
        DVec3::new(10.0, 0.0, 0.0),
        DVec3::new(10.0, 0.0, 4.0),
        DVec3::new(10.0, 0.0, 8.0),
        DVec3::new(20.0, 0.0, 4.0),
        DVec3::new(20.0, 0.0, 0.0),
        DVec3::new(20.0, 0.0, -4.0),
        DVec3::new(24.0, 0.0, -8.0),
        DVec3::new(24.0, 0.0, -8.0),
    ];
    assert_eq!(profile.points(), &expected);
}

#[test]
fn test_missing_parameter_surfaces_through_catalog() {
    let catalog = builtin_catalog().unwrap();
    let device = catalog.get("ApicalTether").unwrap();
    let values = ParameterValues::from([("outerDiameterMm", 36.0)]);
    let err = device.profile_points(&values, None, true).unwrap_err();
    assert!(matches!(
        err,
        DeviceError::MissingParameter(key) if key == "lengthMm"
    ));
}

#[test]
fn test_presets_fall_back_to_defaults() {
    let catalog = builtin_catalog().unwrap();
    let device = catalog.get("CylinderValveWithSkirt").unwrap();
    let presets = ImplantPresets::default_for(device.parameters());
    let values = presets.get("Default").unwrap();
    // A default preset is always usable as profile input.
    let profile = device.profile_points(values, None, true).unwrap();
    assert_eq!(profile.len(), 6);
    // Percent parameters arrive fraction-scaled.
    assert_eq!(values.get("skirtRadiusFraction").unwrap(), 0.2);
}

#[test]
fn test_smoothness_catalog() {
    let catalog = builtin_catalog().unwrap();
    let cases = [
        ("Harmony", -1.0),
        ("Cylinder", 0.0),
        ("CylinderValveWithSkirt", -1.0),
        ("SeptalOccluder", -0.70),
        ("DuctOccluder", -0.70),
        ("CustomDevice", 0.0),
        ("ApicalTetherPlug", -0.80),
        ("ApicalTether", -0.60),
        ("AngularWinglets", -0.60),
        ("RadialForce", -0.60),
    ];
    for (id, smoothness) in cases {
        let device = catalog.get(id).unwrap();
        assert_eq!(
            device.internal_parameters().interpolation_smoothness,
            smoothness,
            "{id}"
        );
    }
}
