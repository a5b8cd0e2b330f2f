//! Manufacturer implant sizing presets.
//!
//! Devices come in a discrete set of manufactured sizes; a preset maps a
//! model designation to the parameter values describing that size. Presets
//! are stored one JSON file per device kind; when no file exists a single
//! "Default" preset is synthesized from the parameter declarations.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parameter::{ParameterSpec, ParameterValues};

/// One named manufacturer sizing preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    /// Model designation, e.g. `"ASO-017"`.
    pub model: String,
    /// Parameter values for this model, in consumable (fraction-scaled) form.
    pub parameters: ParameterValues,
}

/// Ordered collection of sizing presets for one device kind.
///
/// The preset file is a JSON array of `{model, parameters}` objects; file
/// order is preserved for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplantPresets {
    presets: Vec<Preset>,
}

impl ImplantPresets {
    /// Loads presets from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let presets = Self::from_reader(BufReader::new(file))?;
        log::debug!(
            "loaded {} preset(s) from {}",
            presets.len(),
            path.display()
        );
        Ok(presets)
    }

    /// Reads presets from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Synthesizes a single "Default" preset from parameter declarations.
    ///
    /// Used when a device kind has no preset file. Percent parameters are
    /// scaled to fractional form.
    #[must_use]
    pub fn default_for(specs: &[ParameterSpec]) -> Self {
        let mut parameters = ParameterValues::new();
        for spec in specs {
            parameters.set(spec.key.clone(), spec.scaled_default());
        }
        Self {
            presets: vec![Preset {
                model: "Default".to_string(),
                parameters,
            }],
        }
    }

    /// Returns the parameter values for a model designation, if present.
    #[must_use]
    pub fn get(&self, model: &str) -> Option<&ParameterValues> {
        self.presets
            .iter()
            .find(|p| p.model == model)
            .map(|p| &p.parameters)
    }

    /// Iterates over the model designations in file order.
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.model.as_str())
    }

    /// Iterates over the presets in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    /// Returns the number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Returns true if there are no presets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEPTAL_PRESETS: &str = r#"[
        {"model": "ASO-017", "parameters": {"waistDiameterMm": 17.0, "leftDiameterMm": 31.0, "rightDiameterMm": 27.0, "waistLengthMm": 4.0, "lengthMm": 12.0}},
        {"model": "ASO-020", "parameters": {"waistDiameterMm": 20.0, "leftDiameterMm": 34.0, "rightDiameterMm": 30.0, "waistLengthMm": 4.0, "lengthMm": 13.0}}
    ]"#;

    #[test]
    fn test_parse_preserves_file_order() {
        let presets = ImplantPresets::from_reader(SEPTAL_PRESETS.as_bytes()).unwrap();
        let models: Vec<&str> = presets.models().collect();
        assert_eq!(models, ["ASO-017", "ASO-020"]);
    }

    #[test]
    fn test_lookup_by_model() {
        let presets = ImplantPresets::from_reader(SEPTAL_PRESETS.as_bytes()).unwrap();
        let values = presets.get("ASO-020").unwrap();
        assert_eq!(values.get("waistDiameterMm").unwrap(), 20.0);
        assert!(presets.get("ASO-999").is_none());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = ImplantPresets::from_reader("not json".as_bytes());
        assert!(matches!(result, Err(crate::DeviceError::JsonError(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = ImplantPresets::load("/nonexistent/presets/Septal.json");
        assert!(matches!(result, Err(crate::DeviceError::IoError(_))));
    }

    #[test]
    fn test_default_preset_from_specs() {
        let specs = vec![
            ParameterSpec::new(
                "radiusMm", "Radius", "Base radius", 15.0, "mm", 0.0, 30.0, 0.1, 1.0,
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
        ];
        let presets = ImplantPresets::default_for(&specs);
        assert_eq!(presets.len(), 1);
        let values = presets.get("Default").unwrap();
        assert_eq!(values.get("radiusMm").unwrap(), 15.0);
        assert_eq!(values.get("skirtLengthFraction").unwrap(), 0.2);
    }
}
