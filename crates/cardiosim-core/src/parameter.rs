//! Device parameter declarations and per-instance values.
//!
//! A [`ParameterSpec`] describes one bounded numeric parameter of a device
//! kind (the row a host UI turns into a slider). [`ParameterValues`] holds
//! the values a caller supplies for one simulation instance.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{DeviceError, Result};

/// Declaration of one bounded numeric device parameter.
///
/// Specs are immutable, declared once per device kind; their order within
/// the device declaration defines display order. Parameters with unit `"%"`
/// are declared in percent but consumed by profile functions in fractional
/// form; [`ParameterSpec::scaled_default`] applies that conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Lookup key, e.g. `"outerDiameterMm"`.
    pub key: String,
    /// Short display name.
    pub name: String,
    /// Longer description, shown as a tooltip.
    pub info: String,
    /// Measurement unit: `"mm"`, `"deg"` or `"%"`.
    pub unit: String,
    /// Default value, in the declared unit.
    pub default_value: f64,
    /// Lower slider bound.
    pub minimum: f64,
    /// Upper slider bound.
    pub maximum: f64,
    /// Fine adjustment increment.
    pub single_step: f64,
    /// Coarse adjustment increment.
    pub page_step: f64,
    /// Number of decimals shown by the host UI.
    pub decimals: u32,
    /// Whether the parameter is exposed in the host UI.
    pub visible: bool,
}

impl ParameterSpec {
    /// Creates a spec with two display decimals, visible.
    #[allow(clippy::too_many_arguments)] // mirrors one UI slider row per call
    #[must_use]
    pub fn new(
        key: &str,
        name: &str,
        info: &str,
        default_value: f64,
        unit: &str,
        minimum: f64,
        maximum: f64,
        single_step: f64,
        page_step: f64,
    ) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            info: info.to_string(),
            unit: unit.to_string(),
            default_value,
            minimum,
            maximum,
            single_step,
            page_step,
            decimals: 2,
            visible: true,
        }
    }

    /// Sets the number of display decimals.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Hides the parameter from the host UI.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Scale applied when resolving a declared value to consumable form.
    ///
    /// Percent parameters are consumed as fractions.
    #[must_use]
    pub fn value_scale(&self) -> f64 {
        if self.unit == "%" {
            0.01
        } else {
            1.0
        }
    }

    /// Default value in consumable form.
    #[must_use]
    pub fn scaled_default(&self) -> f64 {
        self.default_value * self.value_scale()
    }
}

/// Parameter values supplied by a caller per simulation instance.
///
/// Values are keyed by [`ParameterSpec::key`]. No bounds checking is
/// performed; out-of-range values produce geometrically degenerate but
/// non-failing profiles. A missing key is the only error condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterValues {
    values: HashMap<String, f64>,
}

impl ParameterValues {
    /// Creates an empty value set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for a parameter key.
    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    /// Returns the value for a parameter key.
    ///
    /// Returns [`DeviceError::MissingParameter`] if the key was not supplied.
    /// Defaults are never substituted here.
    pub fn get(&self, key: &str) -> Result<f64> {
        self.values
            .get(key)
            .copied()
            .ok_or_else(|| DeviceError::MissingParameter(key.to_string()))
    }

    /// Returns the value for a parameter key, if supplied.
    #[must_use]
    pub fn try_get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Removes a value, returning it if it was present.
    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.values.remove(key)
    }

    /// Returns true if a value was supplied for the key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of supplied values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the supplied key/value pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for ParameterValues {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(&str, f64); N]> for ParameterValues {
    fn from(pairs: [(&str, f64); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}
