//! Device kind definitions.
//!
//! A [`DeviceDefinition`] bundles everything a catalog needs to know about
//! one device kind: identifier, parameter declarations, the fixed internal
//! smoothing record, optional anatomical segments and the profile function.
//! Device kinds are flat records dispatched through a function pointer;
//! there is no trait hierarchy to implement.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parameter::{ParameterSpec, ParameterValues};
use crate::profile::{Profile, Segment};

/// Fixed internal shape parameters of a device kind.
///
/// Not exposed to callers as sliders; consumed by the downstream
/// curve-fitting/lofting stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InternalParameters {
    /// Curve-fitting tension applied to the outline before it is revolved
    /// into a surface. Negative values sharpen the fit; `0.0` leaves the
    /// loft stage at its default.
    pub interpolation_smoothness: f64,
}

impl Default for InternalParameters {
    fn default() -> Self {
        Self {
            interpolation_smoothness: 0.0,
        }
    }
}

impl InternalParameters {
    /// Creates an internal parameter record with the given smoothness.
    #[must_use]
    pub const fn smoothness(interpolation_smoothness: f64) -> Self {
        Self {
            interpolation_smoothness,
        }
    }
}

/// Signature of a device profile function.
///
/// Pure and deterministic: equal inputs always produce an equal point
/// sequence. The segment selector and `open_segment` flag are only
/// interpreted by segmented devices. The only error condition is a
/// declared parameter missing from the supplied values.
pub type ProfileFn = fn(&ParameterValues, Option<Segment>, bool) -> Result<Profile>;

/// One device kind: a flat record of metadata plus its profile function.
#[derive(Debug, Clone)]
pub struct DeviceDefinition {
    id: String,
    name: String,
    parameters: Vec<ParameterSpec>,
    internal: InternalParameters,
    segments: Vec<Segment>,
    profile: ProfileFn,
}

impl DeviceDefinition {
    /// Creates a non-segmented device kind.
    #[must_use]
    pub fn new(
        id: &str,
        name: &str,
        parameters: Vec<ParameterSpec>,
        internal: InternalParameters,
        profile: ProfileFn,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            parameters,
            internal,
            segments: Vec::new(),
            profile,
        }
    }

    /// Declares the anatomical segments this device kind supports.
    #[must_use]
    pub fn with_segments(mut self, segments: Vec<Segment>) -> Self {
        self.segments = segments;
        self
    }

    /// Returns the unique identifier of this device kind.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable name of this device kind.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter declarations in display order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Returns the declaration for one parameter key, if declared.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.key == key)
    }

    /// Returns the fixed internal shape parameters.
    #[must_use]
    pub fn internal_parameters(&self) -> InternalParameters {
        self.internal
    }

    /// Returns the anatomical segments, empty for non-segmented kinds.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Resolves every declared parameter to its default value.
    ///
    /// Percent parameters are scaled to fractional form, the form profile
    /// functions consume.
    #[must_use]
    pub fn default_values(&self) -> ParameterValues {
        let mut values = ParameterValues::new();
        for spec in &self.parameters {
            values.set(spec.key.clone(), spec.scaled_default());
        }
        values
    }

    /// Generates the profile outline for the supplied parameter values.
    ///
    /// `segment` selects an anatomical segment on segmented kinds (`None`
    /// means the whole device) and `open_segment` controls whether segment
    /// ends are left open or capped on the symmetry axis.
    ///
    /// Values are accepted as-is; no range clamping is applied. Fails only
    /// when the profile function reads a parameter that was not supplied.
    pub fn profile_points(
        &self,
        values: &ParameterValues,
        segment: Option<Segment>,
        open_segment: bool,
    ) -> Result<Profile> {
        (self.profile)(values, segment, open_segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disc_profile(
        params: &ParameterValues,
        _segment: Option<Segment>,
        _open_segment: bool,
    ) -> Result<Profile> {
        let radius = params.get("diameterMm")? / 2.0;
        let mut profile = Profile::new();
        profile.push(0.0, 0.0);
        profile.push(radius, 0.0);
        Ok(profile)
    }

    fn disc() -> DeviceDefinition {
        DeviceDefinition::new(
            "Disc",
            "Disc",
            vec![
                ParameterSpec::new(
                    "diameterMm",
                    "Diameter",
                    "Disc diameter",
                    20.0,
                    "mm",
                    5.0,
                    40.0,
                    1.0,
                    1.0,
                ),
                ParameterSpec::new(
                    "openingPercent",
                    "Opening",
                    "Opening fraction",
                    50.0,
                    "%",
                    0.0,
                    100.0,
                    1.0,
                    10.0,
                ),
            ],
            InternalParameters::smoothness(-0.5),
            disc_profile,
        )
    }

    #[test]
    fn test_metadata_accessors() {
        let device = disc();
        assert_eq!(device.id(), "Disc");
        assert_eq!(device.name(), "Disc");
        assert_eq!(device.parameters().len(), 2);
        assert!(device.parameter("diameterMm").is_some());
        assert!(device.parameter("noSuchKey").is_none());
        assert_eq!(device.internal_parameters().interpolation_smoothness, -0.5);
        assert!(device.segments().is_empty());
    }

    #[test]
    fn test_default_values_scale_percent_parameters() {
        let device = disc();
        let values = device.default_values();
        assert_eq!(values.get("diameterMm").unwrap(), 20.0);
        assert_eq!(values.get("openingPercent").unwrap(), 0.5);
    }

    #[test]
    fn test_profile_points_dispatch() {
        let device = disc();
        let profile = device
            .profile_points(&device.default_values(), None, true)
            .unwrap();
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.points()[1].x, 10.0);
    }

    #[test]
    fn test_missing_parameter_propagates() {
        let device = disc();
        let err = device
            .profile_points(&ParameterValues::new(), None, true)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::DeviceError::MissingParameter(key) if key == "diameterMm"
        ));
    }
}
