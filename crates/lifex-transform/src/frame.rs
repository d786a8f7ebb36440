//! The cleaned output table.
//!
//! [`ObservationFrame`] wraps a Polars DataFrame carrying exactly the six
//! output columns `unit, sex, age, region, year, value`, in that order,
//! with `year` as Int32 and `value` as Float64. This is the shape handed
//! to the writer regardless of input encoding.

use lifex_model::{CleanError, OBSERVATION_COLUMNS, Observation, Result};
use polars::prelude::{DataFrame, NamedFrom, Series};

/// A cleaned, column-projected observation table.
#[derive(Debug, Clone)]
pub struct ObservationFrame {
    pub data: DataFrame,
}

impl ObservationFrame {
    /// Materialize observations into the fixed six-column layout.
    pub fn from_observations(rows: &[Observation]) -> Result<Self> {
        let unit: Vec<&str> = rows.iter().map(|row| row.unit.as_str()).collect();
        let sex: Vec<&str> = rows.iter().map(|row| row.sex.as_str()).collect();
        let age: Vec<&str> = rows.iter().map(|row| row.age.as_str()).collect();
        let region: Vec<&str> = rows.iter().map(|row| row.region.as_str()).collect();
        let year: Vec<i32> = rows.iter().map(|row| row.year).collect();
        let value: Vec<f64> = rows.iter().map(|row| row.value).collect();

        let data = DataFrame::new(vec![
            Series::new(OBSERVATION_COLUMNS[0].into(), unit).into(),
            Series::new(OBSERVATION_COLUMNS[1].into(), sex).into(),
            Series::new(OBSERVATION_COLUMNS[2].into(), age).into(),
            Series::new(OBSERVATION_COLUMNS[3].into(), region).into(),
            Series::new(OBSERVATION_COLUMNS[4].into(), year).into(),
            Series::new(OBSERVATION_COLUMNS[5].into(), value).into(),
        ])
        .map_err(|error| CleanError::Frame(error.to_string()))?;
        Ok(Self { data })
    }

    /// Number of records in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    /// Column names in output order.
    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|name| name.as_str().to_string())
            .collect()
    }
}
