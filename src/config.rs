use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::Range;

/// Paths to the six flat tables describing a trained network, relative to
/// wherever the caller resolves them (the driver resolves against the config
/// file's directory).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightFiles {
    pub hidden_weights: PathBuf,
    pub hidden_bias: PathBuf,
    pub output_weights: PathBuf,
    pub output_bias: PathBuf,
    pub input_min: PathBuf,
    pub input_max: PathBuf,
}

/// A JSON description of a deployed network: topology sizes, the data files
/// holding its parameters, and the two scalar ranges.
///
/// The ranges default to the values the networks are trained against
/// (normalized `[-1, 1]`, output `[0, 1]`) and only need to appear in the
/// JSON when reusing weights with a different output scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub inputs: usize,
    pub hidden: usize,
    pub outputs: usize,
    pub files: WeightFiles,
    #[serde(default = "default_normalized_range")]
    pub normalized_range: Range,
    #[serde(default = "default_output_range")]
    pub output_range: Range,
}

fn default_normalized_range() -> Range {
    Range::new(-1.0, 1.0)
}

fn default_output_range() -> Range {
    Range::new(0.0, 1.0)
}

impl NetworkConfig {
    /// Deserializes a `NetworkConfig` from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<NetworkConfig> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_default_when_absent() {
        let cfg: NetworkConfig = serde_json::from_str(
            r#"{
                "inputs": 2,
                "hidden": 4,
                "outputs": 1,
                "files": {
                    "hidden_weights": "wh.txt",
                    "hidden_bias": "bh.txt",
                    "output_weights": "wy.txt",
                    "output_bias": "by.txt",
                    "input_min": "min.txt",
                    "input_max": "max.txt"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.normalized_range, Range::new(-1.0, 1.0));
        assert_eq!(cfg.output_range, Range::new(0.0, 1.0));
        assert_eq!((cfg.inputs, cfg.hidden, cfg.outputs), (2, 4, 1));
        assert_eq!(cfg.files.hidden_weights, PathBuf::from("wh.txt"));
    }

    #[test]
    fn explicit_ranges_are_kept() {
        let cfg: NetworkConfig = serde_json::from_str(
            r#"{
                "inputs": 1,
                "hidden": 1,
                "outputs": 1,
                "files": {
                    "hidden_weights": "wh.txt",
                    "hidden_bias": "bh.txt",
                    "output_weights": "wy.txt",
                    "output_bias": "by.txt",
                    "input_min": "min.txt",
                    "input_max": "max.txt"
                },
                "output_range": { "low": 0.0, "high": 10.0 }
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.output_range, Range::new(0.0, 10.0));
    }
}
