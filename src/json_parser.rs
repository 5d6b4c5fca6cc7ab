use crate::error::Result;
use crate::interpolation::{CellResult, CellResults, InterpolatorConfig};
use crate::sample::Sample;
use serde_json::{self, Value};
use std::fmt::Display;
use std::fs;
use std::hash::Hash;
use std::path::Path;

/// JSON loading for configs and samples, JSON export for interpolated cells
pub struct JsonParser;

impl JsonParser {
    /// Load and validate an interpolator config; missing fields take defaults
    pub fn load_config<P: AsRef<Path>>(file_path: P) -> Result<InterpolatorConfig> {
        let json_str = fs::read_to_string(file_path)?;
        InterpolatorConfig::from_json_str(&json_str)
    }

    /// Load a JSON array of `{"position": [lng, lat], "value": v}` samples
    pub fn load_samples<P: AsRef<Path>>(file_path: P) -> Result<Vec<Sample>> {
        let json_str = fs::read_to_string(file_path)?;
        Self::parse_samples(&json_str)
    }

    pub fn parse_samples(json_str: &str) -> Result<Vec<Sample>> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Cells as a JSON array sorted by cell id string, so output is stable
    /// across runs
    pub fn results_to_json<C>(results: &CellResults<C>) -> Result<Value>
    where
        C: Display + Eq + Hash,
    {
        let mut rows: Vec<(String, &CellResult<C>)> = results
            .values()
            .map(|result| (result.cell_id.to_string(), result))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        let rows = rows
            .into_iter()
            .map(|(_, result)| serde_json::to_value(result))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Value::Array(rows))
    }

    pub fn write_results<C, P>(results: &CellResults<C>, file_path: P) -> Result<()>
    where
        C: Display + Eq + Hash,
        P: AsRef<Path>,
    {
        let json = Self::results_to_json(results)?;
        fs::write(file_path, serde_json::to_string_pretty(&json)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_samples() {
        let samples = JsonParser::parse_samples(
            r#"[
                {"position": [-122.42, 37.77], "value": 3.0},
                {"position": [-122.40, 37.79], "value": -1.5}
            ]"#,
        )
        .unwrap();
        assert_eq!(samples, vec![Sample::new(-122.42, 37.77, 3.0), Sample::new(-122.40, 37.79, -1.5)]);
    }

    #[test]
    fn test_parse_samples_rejects_malformed() {
        assert!(matches!(JsonParser::parse_samples(r#"[{"value": 1.0}]"#), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = JsonParser::load_samples("/nonexistent/hex-interpolation/samples.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
