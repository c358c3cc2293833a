//! The three national indicators the pipeline reconciles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An indicator metric tracked per country per year.
///
/// Each metric maps to one canonical column of the `clean_data` table
/// and to one family of date-stamped source files
/// (e.g. `gdp_20240315.csv`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Total population.
    Population,
    /// Gross domestic product in current USD.
    Gdp,
    /// CO₂ emissions in kilotonnes.
    Co2Emissions,
}

impl Metric {
    /// All metrics, in canonical column order.
    pub const ALL: [Metric; 3] = [Metric::Population, Metric::Gdp, Metric::Co2Emissions];

    /// Canonical column name in the merged table.
    pub fn column_name(self) -> &'static str {
        match self {
            Metric::Population => "population",
            Metric::Gdp => "gdp",
            Metric::Co2Emissions => "co2_emissions",
        }
    }

    /// Filename prefix of this metric's source files.
    pub fn file_prefix(self) -> &'static str {
        match self {
            Metric::Population => "population_",
            Metric::Gdp => "gdp_",
            Metric::Co2Emissions => "co2_emissions_",
        }
    }

    /// Position of this metric's value slot in a [`crate::MergedRow`].
    pub fn index(self) -> usize {
        match self {
            Metric::Population => 0,
            Metric::Gdp => 1,
            Metric::Co2Emissions => 2,
        }
    }

    /// Human-readable description for listings.
    pub fn description(self) -> &'static str {
        match self {
            Metric::Population => "Total population",
            Metric::Gdp => "Gross domestic product (current USD)",
            Metric::Co2Emissions => "CO2 emissions (kt)",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "population" => Ok(Metric::Population),
            "gdp" => Ok(Metric::Gdp),
            "co2_emissions" | "co2" => Ok(Metric::Co2Emissions),
            other => Err(format!("unknown metric: {other}")),
        }
    }
}
