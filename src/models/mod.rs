//! Shared types used across all modules.
//!
//! Dataset and experiment names, year ranges, country specs and the
//! `[north, west, south, east]` area the CDS API expects. Other modules
//! import from here rather than reaching into each other's internals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{CMIP6_DATASET, ERA5_PREFIX};

/// Errors when parsing user-supplied values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid year range {0:?} (expected YYYY or YYYY-YYYY)")]
    InvalidYearRange(String),

    #[error("year range {start}-{end} ends before it starts")]
    ReversedYearRange { start: i32, end: i32 },

    #[error("invalid country {0:?} (expected a 2-letter code, optionally CODE:Subunit)")]
    InvalidCountry(String),

    #[error("either a dataset or an experiment must be given")]
    NoSource,
}

/// ERA5 reanalysis dataset flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dataset {
    #[default]
    SingleLevels,
    Land,
    PressureLevels,
}

impl Dataset {
    /// Full CDS dataset name, e.g. `reanalysis-era5-land`.
    pub fn cds_name(&self) -> String {
        format!("{ERA5_PREFIX}{self}")
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::SingleLevels => write!(f, "single-levels"),
            Dataset::Land => write!(f, "land"),
            Dataset::PressureLevels => write!(f, "pressure-levels"),
        }
    }
}

impl FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single-levels" => Ok(Dataset::SingleLevels),
            "land" => Ok(Dataset::Land),
            "pressure-levels" => Ok(Dataset::PressureLevels),
            other => Err(format!(
                "unknown dataset '{other}' (expected single-levels, land or pressure-levels)"
            )),
        }
    }
}

/// CMIP6 experiment (historical run or shared socioeconomic pathway).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Experiment {
    #[default]
    Historical,
    #[serde(rename = "ssp1_2_6")]
    Ssp126,
    #[serde(rename = "ssp2_4_5")]
    Ssp245,
    #[serde(rename = "ssp3_7_0")]
    Ssp370,
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Experiment::Historical => write!(f, "historical"),
            Experiment::Ssp126 => write!(f, "ssp1_2_6"),
            Experiment::Ssp245 => write!(f, "ssp2_4_5"),
            Experiment::Ssp370 => write!(f, "ssp3_7_0"),
        }
    }
}

impl FromStr for Experiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "historical" => Ok(Experiment::Historical),
            "ssp1_2_6" => Ok(Experiment::Ssp126),
            "ssp2_4_5" => Ok(Experiment::Ssp245),
            "ssp3_7_0" => Ok(Experiment::Ssp370),
            other => Err(format!(
                "unknown experiment '{other}' (expected historical, ssp1_2_6, ssp2_4_5 or ssp3_7_0)"
            )),
        }
    }
}

/// Temporal resolution of CMIP6 projections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Daily,
    #[default]
    Monthly,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Daily => write!(f, "daily"),
            Resolution::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Resolution::Daily),
            "monthly" => Ok(Resolution::Monthly),
            other => Err(format!("unknown resolution '{other}' (expected daily or monthly)")),
        }
    }
}

/// What to retrieve: ERA5 reanalysis or a CMIP6 projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Reanalysis(Dataset),
    Projection {
        experiment: Experiment,
        resolution: Resolution,
    },
}

impl Source {
    /// Pick the source from optional CLI values. The experiment wins when
    /// both are present.
    pub fn choose(
        dataset: Option<Dataset>,
        experiment: Option<Experiment>,
        resolution: Resolution,
    ) -> Result<Self, ModelError> {
        match (experiment, dataset) {
            (Some(experiment), _) => Ok(Source::Projection {
                experiment,
                resolution,
            }),
            (None, Some(dataset)) => Ok(Source::Reanalysis(dataset)),
            (None, None) => Err(ModelError::NoSource),
        }
    }

    /// CDS dataset name passed to the retrieve call.
    pub fn cds_name(&self) -> String {
        match self {
            Source::Reanalysis(dataset) => dataset.cds_name(),
            Source::Projection { .. } => CMIP6_DATASET.to_string(),
        }
    }

    /// Short label used in directory and file names.
    pub fn label(&self) -> String {
        match self {
            Source::Reanalysis(dataset) => dataset.to_string(),
            Source::Projection { experiment, .. } => experiment.to_string(),
        }
    }
}

/// Inclusive range of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Result<Self, ModelError> {
        if start > end {
            return Err(ModelError::ReversedYearRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }
}

impl FromStr for YearRange {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidYearRange(s.to_string());
        let parse = |v: &str| v.trim().parse::<i32>().map_err(|_| invalid());

        match s.split_once('-') {
            Some((start, end)) => YearRange::new(parse(start)?, parse(end)?),
            None => {
                let year = parse(s)?;
                YearRange::new(year, year)
            }
        }
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A country code with an optional subunit, written `IT` or `ES:Spain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySpec {
    pub code: String,
    pub subunit: Option<String>,
}

impl FromStr for CountrySpec {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, subunit) = match s.split_once(':') {
            Some((code, subunit)) => (code.trim(), Some(subunit.trim())),
            None => (s.trim(), None),
        };

        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ModelError::InvalidCountry(s.to_string()));
        }
        if subunit.is_some_and(str::is_empty) {
            return Err(ModelError::InvalidCountry(s.to_string()));
        }

        Ok(Self {
            code: code.to_ascii_uppercase(),
            subunit: subunit.map(String::from),
        })
    }
}

impl fmt::Display for CountrySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subunit {
            Some(subunit) => write!(f, "{}:{subunit}", self.code),
            None => write!(f, "{}", self.code),
        }
    }
}

/// Geographic area in the order the CDS API expects: north, west, south, east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Area {
    pub north: f64,
    pub west: f64,
    pub south: f64,
    pub east: f64,
}

impl Area {
    /// The whole globe.
    pub const GLOBAL: Area = Area {
        north: 90.0,
        west: -180.0,
        south: -90.0,
        east: 180.0,
    };

    pub fn to_array(self) -> [f64; 4] {
        [self.north, self.west, self.south, self.east]
    }
}

impl From<[f64; 4]> for Area {
    fn from([north, west, south, east]: [f64; 4]) -> Self {
        Self {
            north,
            west,
            south,
            east,
        }
    }
}

impl From<Area> for [f64; 4] {
    fn from(area: Area) -> Self {
        area.to_array()
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.north, self.west, self.south, self.east
        )
    }
}
