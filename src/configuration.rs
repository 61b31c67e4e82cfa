use std::fs::File;
use std::io::BufReader;

use serde::{
    Deserialize,
    Serialize
};

use crate::quadploterror::QuadPlotError;

pub const DEFAULT_RANGE: (f64, f64) = (-10.0, 10.0);
pub const DEFAULT_SAMPLE_COUNT: usize = 400;
pub const DEFAULT_LABEL_DIGITS: u32 = 2;

/// Defaults applied to requests that leave them out, plus the text settings
/// of the generated plots. Every field is optional in the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    default_range: (f64, f64),
    default_samples: usize,
    label_digits: u32,
    x_label: String,
    y_label: String
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration {
            default_range: DEFAULT_RANGE,
            default_samples: DEFAULT_SAMPLE_COUNT,
            label_digits: DEFAULT_LABEL_DIGITS,
            x_label: "x".to_owned(),
            y_label: "y".to_owned()
        }
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_reader(file_path: &str) -> Result<Configuration, QuadPlotError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        log::debug!("loaded configuration from {}: {:?}", file_path, configuration);
        Ok(configuration)
    }

    pub fn with_default_range(mut self, min: f64, max: f64) -> Configuration {
        self.default_range = (min, max);
        self
    }

    pub fn with_default_samples(mut self, samples: usize) -> Configuration {
        self.default_samples = samples;
        self
    }

    pub fn default_range(&self) -> (f64, f64) {
        self.default_range
    }

    pub fn default_samples(&self) -> usize {
        self.default_samples
    }

    pub fn label_digits(&self) -> u32 {
        self.label_digits
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let configuration: Configuration = serde_json::from_str(r#"{ "default_samples": 50 }"#).unwrap();
        assert_eq!(configuration.default_samples(), 50);
        assert_eq!(configuration.default_range(), (-10.0, 10.0));
        assert_eq!(configuration.label_digits(), 2);
        assert_eq!(configuration.x_label(), "x");
    }

    #[test]
    fn range_is_read_as_a_pair() {
        let configuration: Configuration =
            serde_json::from_str(r#"{ "default_range": [-3, 3], "y_label": "f(x)" }"#).unwrap();
        assert_eq!(configuration.default_range(), (-3.0, 3.0));
        assert_eq!(configuration.y_label(), "f(x)");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Configuration::from_reader("/nonexistent/quadplot-config.json");
        assert!(matches!(result, Err(QuadPlotError::IOError(_))));
    }
}
