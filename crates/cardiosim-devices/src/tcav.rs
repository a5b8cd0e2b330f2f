//! Transcatheter aortic valve anchoring concepts: apical tethers,
//! atrial winglets and radial-force stent fixation.

use cardiosim_core::{
    DeviceDefinition, InternalParameters, ParameterSpec, ParameterValues, Profile, Result, Segment,
};

/// One-size apical plug anchoring a transapical tether.
#[must_use]
pub fn apical_tether_plug() -> DeviceDefinition {
    DeviceDefinition::new(
        "ApicalTetherPlug",
        "Apical Tether Plug",
        Vec::new(),
        InternalParameters::smoothness(-0.80),
        apical_tether_plug_profile,
    )
}

fn apical_tether_plug_profile(
    _params: &ParameterValues,
    _segment: Option<Segment>,
    _open_segment: bool,
) -> Result<Profile> {
    let radius = 5.0;
    let length = 2.0;

    let half_length = length * 0.5;

    let mut profile = Profile::new();
    profile.push(0.0, -half_length);
    profile.push(
        radius - length * 0.5 * 45.0_f64.cos() / 45.0_f64.sin(),
        -half_length + length / 5.0,
    );
    profile.push(radius, half_length);
    profile.push(0.0, half_length);
    Ok(profile)
}

/// Tethered basket valve with a ventricular skirt.
#[must_use]
pub fn apical_tether() -> DeviceDefinition {
    DeviceDefinition::new(
        "ApicalTether",
        "Apical Tether",
        vec![
            // NB: comes in 13 different sizes
            ParameterSpec::new(
                "outerDiameterMm",
                "Diameter",
                "Outer diameter",
                30.0,
                "mm",
                30.0,
                43.0,
                1.0,
                1.0,
            ),
            ParameterSpec::new(
                "lengthMm",
                "Length",
                "Total length",
                10.0,
                "mm",
                10.0,
                30.0,
                1.0,
                1.0,
            ),
        ],
        InternalParameters::smoothness(-0.60),
        apical_tether_profile,
    )
}

fn apical_tether_profile(
    params: &ParameterValues,
    _segment: Option<Segment>,
    _open_segment: bool,
) -> Result<Profile> {
    // Basket comes in one size.
    let radius = 10.0;

    let outer_radius = params.get("outerDiameterMm")? / 2.0;
    let length = params.get("lengthMm")?;

    let mut profile = Profile::new();

    // Skirt
    profile.push(
        outer_radius,
        -length / 2.0 - length * 0.2 - outer_radius * 0.2,
    );

    // Basket
    profile.push(radius, -length / 2.0);
    profile.push(radius, 0.0);
    profile.push(radius, length / 2.0);
    profile.push(radius / 2.0, length / 2.0 + length * 0.2);

    Ok(profile)
}

/// Valve anchored by angled atrial winglets and ventricular graspers.
///
/// Catalog inflow/outflow pairings: 30/36 mm, 30/40 mm, 33/44 mm.
#[must_use]
pub fn angular_winglets() -> DeviceDefinition {
    DeviceDefinition::new(
        "AngularWinglets",
        "Angular Winglets",
        vec![
            ParameterSpec::new(
                "atrialWingletsAngleDeg",
                "Atrial winglets angle",
                "Atrial winglets angle",
                0.0,
                "deg",
                0.0,
                90.0,
                1.0,
                1.0,
            ),
            ParameterSpec::new(
                "inflowDiameterMm",
                "Inflow diameter",
                "Inflow diameter",
                15.0,
                "mm",
                15.0,
                33.0,
                3.0,
                1.0,
            ),
            ParameterSpec::new(
                "outflowDiameterMm",
                "Outflow diameter",
                "Outflow diameter",
                15.0,
                "mm",
                15.0,
                44.0,
                4.0,
                1.0,
            ),
            ParameterSpec::new(
                "lengthMm",
                "Length",
                "Total length",
                10.0,
                "mm",
                5.0,
                20.0,
                1.0,
                1.0,
            ),
        ],
        InternalParameters::smoothness(-0.60),
        angular_winglets_profile,
    )
}

fn angular_winglets_profile(
    params: &ParameterValues,
    _segment: Option<Segment>,
    _open_segment: bool,
) -> Result<Profile> {
    let winglets_angle_deg = params.get("atrialWingletsAngleDeg")?;
    let inflow_radius = params.get("inflowDiameterMm")? / 2.0;
    let outflow_radius = params.get("outflowDiameterMm")? / 2.0;
    let length = params.get("lengthMm")?;

    let winglets_length = outflow_radius - inflow_radius;
    let winglet_radius = winglets_length * winglets_angle_deg.to_radians().cos();
    let graspers_radius = winglets_length * 70.0_f64.to_radians().cos();

    let l = length / 2.0;

    let mut profile = Profile::new();
    profile.push(inflow_radius, -l - winglets_length);
    profile.push(inflow_radius, -l);
    profile.push(
        inflow_radius + winglet_radius,
        -l - (winglets_length.powi(2) - winglet_radius.powi(2)).sqrt(),
    );
    profile.push(inflow_radius, -l);
    profile.push(outflow_radius, l);

    // Ventricular graspers
    profile.push(outflow_radius, l - l * 0.1);
    profile.push(
        outflow_radius + graspers_radius,
        l - l * 0.1 - (winglets_length.powi(2) - graspers_radius.powi(2)).sqrt(),
    );

    Ok(profile)
}

/// Inner valve stent held by an oversized outer stent under radial force.
///
/// 27 mm inner valve with 3 outer stent sizes (43, 46 and 50 mm).
#[must_use]
pub fn radial_force() -> DeviceDefinition {
    DeviceDefinition::new(
        "RadialForce",
        "Radial Force",
        vec![
            ParameterSpec::new(
                "innerDiameterMm",
                "Inner stent diameter",
                "Inner stent diameter",
                15.0,
                "mm",
                15.0,
                27.0,
                1.0,
                1.0,
            ),
            ParameterSpec::new(
                "outerDiameterMm",
                "Outer stent diameter",
                "Outer stent diameter",
                15.0,
                "mm",
                15.0,
                50.0,
                1.0,
                1.0,
            ),
            ParameterSpec::new(
                "lengthMm",
                "Length",
                "Total length",
                15.0,
                "mm",
                15.0,
                20.0,
                1.0,
                1.0,
            ),
        ],
        InternalParameters::smoothness(-0.60),
        radial_force_profile,
    )
}

fn radial_force_profile(
    params: &ParameterValues,
    _segment: Option<Segment>,
    _open_segment: bool,
) -> Result<Profile> {
    let length = params.get("lengthMm")?;

    let inner_radius = params.get("innerDiameterMm")? / 2.0;
    let outer_radius = params.get("outerDiameterMm")? / 2.0;

    let mut profile = Profile::new();

    profile.push(inner_radius, -length / 4.0);
    profile.push(inner_radius, 0.0);
    profile.push(inner_radius, length / 4.0);
    profile.push(inner_radius, length / 2.0);

    profile.push(outer_radius, length / 4.0);
    profile.push(outer_radius, 0.0);
    profile.push(outer_radius, -length / 4.0);

    profile.push(outer_radius * 1.2, -length * 0.5);
    profile.push(outer_radius * 1.2, -length * 0.5);

    Ok(profile)
}
