//! Generic valve and stent shapes: the segmented Harmony TCPV outline and
//! two cylinder-based devices.

use cardiosim_core::{
    DeviceDefinition, InternalParameters, ParameterSpec, ParameterValues, Profile, Result, Segment,
};

/// Number of samples per curved section of the Harmony outline.
const CURVED_SECTION_POINTS: u32 = 7;
/// Slope of the tanh blend between straight and curved sections.
const CURVED_SEGMENT_SLOPE: f64 = 2.0;

/// Hourglass-shaped transcatheter pulmonary valve.
///
/// The only segmented kind: the outline can be generated for the distal,
/// middle or proximal anatomical segment separately, open or capped on the
/// symmetry axis, or for the whole device at once.
#[must_use]
pub fn harmony() -> DeviceDefinition {
    // Bounds allow scaling the animal device to humans.
    let scale = 2.0;
    let pa = "Pulmonary artery side";
    let pv = "Right ventricle side";
    DeviceDefinition::new(
        "Harmony",
        "Harmony TCPV",
        vec![
            ParameterSpec::new(
                "distalStraightRadiusMm",
                "Distal straight radius",
                pa,
                15.5,
                "mm",
                5.0,
                15.5 * scale,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "distalStraightLengthMm",
                "Distal straight length",
                pa,
                8.9,
                "mm",
                0.0,
                17.7 * scale,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "distalCurvedRadiusMm",
                "Distal curved radius",
                pa,
                15.0,
                "mm",
                0.0,
                15.5 * scale,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "distalCurvedLengthMm",
                "Distal curved length",
                pa,
                8.8,
                "mm",
                0.0,
                17.7 * scale,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "midRadiusMm",
                "Middle radius",
                "",
                11.0,
                "mm",
                3.0,
                11.0 * scale,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "midLengthMm",
                "Middle length",
                "",
                17.7,
                "mm",
                5.0,
                17.7 * scale,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "proximalCurvedRadiusMm",
                "Proximal curved radius",
                pa,
                21.0,
                "mm",
                0.0,
                21.5 * scale,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "proximalCurvedLengthMm",
                "Proximal curved length",
                pa,
                8.8,
                "mm",
                0.0,
                17.7 * scale,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "proximalStraightRadiusMm",
                "Proximal straight radius",
                pv,
                21.5,
                "mm",
                10.0,
                21.5 * scale,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "proximalStraightLengthMm",
                "Proximal straight length",
                pv,
                8.9,
                "mm",
                0.0,
                17.7 * scale,
                0.1,
                1.0,
            ),
        ],
        InternalParameters::smoothness(-1.0),
        harmony_profile,
    )
    .with_segments(vec![Segment::Distal, Segment::Middle, Segment::Proximal])
}

/// Tanh-blended radius along a curved section.
///
/// `t` runs from 0 to 1 along the section; the blend starts at `start`
/// and ends at `end`, with the steepness set by [`CURVED_SEGMENT_SLOPE`].
fn curved_radius(start: f64, end: f64, t: f64) -> f64 {
    let span = f64::tanh(0.5 * CURVED_SEGMENT_SLOPE) - f64::tanh(-0.5 * CURVED_SEGMENT_SLOPE);
    let scale = (end - start) / span;
    start + scale * (f64::tanh((0.5 - t) * CURVED_SEGMENT_SLOPE) - f64::tanh(-0.5 * CURVED_SEGMENT_SLOPE))
}

#[allow(clippy::similar_names)]
fn harmony_profile(
    params: &ParameterValues,
    segment: Option<Segment>,
    open_segment: bool,
) -> Result<Profile> {
    let mut profile = Profile::new();

    let in_distal = matches!(
        segment,
        None | Some(Segment::Distal) | Some(Segment::Whole)
    );
    let in_proximal = matches!(
        segment,
        None | Some(Segment::Proximal) | Some(Segment::Whole)
    );

    if in_distal {
        let straight_length = params.get("distalStraightLengthMm")?;
        let curved_length = params.get("distalCurvedLengthMm")?;
        let mid_length = params.get("midLengthMm")?;

        if !open_segment {
            // Cap on the axis, so the revolved segment is a closed model.
            profile.push(0.0, -straight_length - curved_length - mid_length * 0.5);
        }

        profile.push(
            params.get("distalStraightRadiusMm")?,
            -straight_length - curved_length - mid_length * 0.5,
        );

        let start_z = -curved_length - mid_length * 0.5;
        let curved_radius_mm = params.get("distalCurvedRadiusMm")?;
        let mid_radius = params.get("midRadiusMm")?;
        for point_index in 0..CURVED_SECTION_POINTS - 1 {
            let t = f64::from(point_index) / f64::from(CURVED_SECTION_POINTS - 1);
            profile.push(
                curved_radius(mid_radius, curved_radius_mm, t),
                start_z + t * curved_length,
            );
        }
        profile.push(mid_radius, -mid_length * 0.5);
    }

    if matches!(segment, Some(Segment::Distal | Segment::Middle)) && !open_segment {
        profile.push(0.0, -params.get("midLengthMm")? * 0.5);
    }

    if segment == Some(Segment::Middle) {
        // Whole outlines carry these points in the distal/proximal blocks.
        let mid_radius = params.get("midRadiusMm")?;
        let mid_length = params.get("midLengthMm")?;
        profile.push(mid_radius, -mid_length * 0.5);
        profile.push(mid_radius, mid_length * 0.5);
    }

    if matches!(segment, Some(Segment::Middle | Segment::Proximal)) && !open_segment {
        profile.push(0.0, params.get("midLengthMm")? * 0.5);
    }

    if in_proximal {
        let mid_radius = params.get("midRadiusMm")?;
        let mid_length = params.get("midLengthMm")?;
        let curved_length = params.get("proximalCurvedLengthMm")?;
        let curved_radius_mm = params.get("proximalCurvedRadiusMm")?;
        let straight_length = params.get("proximalStraightLengthMm")?;

        profile.push(mid_radius, mid_length * 0.5);

        let start_z = mid_length * 0.5;
        for point_index in 1..CURVED_SECTION_POINTS {
            let t = f64::from(point_index) / f64::from(CURVED_SECTION_POINTS - 1);
            // Mirrored blend: radius grows toward the proximal end.
            profile.push(
                curved_radius(mid_radius, curved_radius_mm, 1.0 - t),
                start_z + t * curved_length,
            );
        }

        profile.push(
            params.get("proximalStraightRadiusMm")?,
            mid_length * 0.5 + curved_length + straight_length,
        );

        if segment.is_some() && !open_segment {
            profile.push(0.0, mid_length * 0.5 + curved_length + straight_length);
        }
    }

    Ok(profile)
}

/// Plain cylindrical valve or stent with crimp/expand interpolation.
#[must_use]
pub fn cylinder() -> DeviceDefinition {
    DeviceDefinition::new(
        "Cylinder",
        "Cylinder valve/stent",
        vec![
            ParameterSpec::new(
                "expansionPercent",
                "Expansion",
                "100% means expanded, 0% means crimped",
                100.0,
                "%",
                0.0,
                100.0,
                1.0,
                10.0,
            ),
            ParameterSpec::new(
                "expandedDiameterMm",
                "Expanded diameter",
                "",
                22.4,
                "mm",
                0.0,
                60.0,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "expandedLengthMm",
                "Expanded length",
                "",
                24.0,
                "mm",
                0.0,
                100.0,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "crimpedDiameterMm",
                "Crimped diameter",
                "",
                7.0,
                "mm",
                0.0,
                60.0,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "crimpedLengthMm",
                "Crimped length",
                "",
                32.0,
                "mm",
                0.0,
                100.0,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "anchorPositionPercent",
                "Anchor position",
                "Defines what point of the device remains in the same position as it expands/contracts",
                0.0,
                "%",
                0.0,
                100.0,
                1.0,
                10.0,
            ),
        ],
        InternalParameters::default(),
        cylinder_profile,
    )
}

fn cylinder_profile(
    params: &ParameterValues,
    _segment: Option<Segment>,
    _open_segment: bool,
) -> Result<Profile> {
    let expansion = params.get("expansionPercent")?;
    let length = params.get("crimpedLengthMm")?
        + expansion * (params.get("expandedLengthMm")? - params.get("crimpedLengthMm")?);
    let radius = (params.get("crimpedDiameterMm")?
        + expansion * (params.get("expandedDiameterMm")? - params.get("crimpedDiameterMm")?))
        / 2.0;
    log::debug!(
        "expansion = {expansion}, actual diameter = {}, length = {length}",
        radius * 2.0
    );
    let origin = -length * params.get("anchorPositionPercent")?;

    let mut profile = Profile::new();
    profile.push(radius, origin);
    profile.push(radius, origin + length * 0.25);
    profile.push(radius, origin + length * 0.50);
    profile.push(radius, origin + length * 0.75);
    profile.push(radius, origin + length);
    Ok(profile)
}

/// Cylindrical valve with a flaring sealing skirt at the inflow end.
#[must_use]
pub fn cylinder_with_skirt() -> DeviceDefinition {
    DeviceDefinition::new(
        "CylinderValveWithSkirt",
        "Cylinder valve with skirt",
        vec![
            ParameterSpec::new(
                "radiusMm",
                "Radius",
                "Base radius",
                15.0,
                "mm",
                0.0,
                30.0,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "lengthMm",
                "Length",
                "Total length",
                30.0,
                "mm",
                0.0,
                100.0,
                0.1,
                1.0,
            ),
            ParameterSpec::new(
                "skirtLengthFraction",
                "Skirt length",
                "Percentage of skirt length relative to total length",
                20.0,
                "%",
                0.0,
                200.0,
                1.0,
                5.0,
            ),
            ParameterSpec::new(
                "skirtRadiusFraction",
                "Skirt radius",
                "Percentage of radius of skirt compared to the base radius",
                20.0,
                "%",
                0.0,
                200.0,
                1.0,
                5.0,
            ),
        ],
        InternalParameters::smoothness(-1.0),
        cylinder_with_skirt_profile,
    )
}

fn cylinder_with_skirt_profile(
    params: &ParameterValues,
    _segment: Option<Segment>,
    _open_segment: bool,
) -> Result<Profile> {
    let length = params.get("lengthMm")?;
    let radius = params.get("radiusMm")?;
    let skirt_length_fraction = params.get("skirtLengthFraction")?;
    let skirt_radius_fraction = params.get("skirtRadiusFraction")?;

    let mut profile = Profile::new();

    // Skirt
    profile.push(
        radius * (1.0 + skirt_radius_fraction),
        -length / 2.0 + length * skirt_length_fraction,
    );

    // Cylinder
    profile.push(radius, -length / 2.0);
    profile.push(radius, -length / 4.0);
    profile.push(radius, 0.0);
    profile.push(radius, length / 4.0);
    profile.push(radius, length / 2.0);

    Ok(profile)
}
