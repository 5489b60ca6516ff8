//! Retrieve request bodies for the CDS API.
//!
//! Field order matches what the CDS web form produces, so requests are
//! built as ordered maps rather than structs.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, json};

use crate::models::{Area, Dataset, Experiment, Resolution, Source};

/// Default ERA5 variable.
pub const DEFAULT_ERA5_VARIABLE: &str = "instantaneous_10m_wind_gust";

/// Default CMIP6 variable.
pub const DEFAULT_CMIP6_VARIABLE: &str = "daily_maximum_near_surface_air_temperature";

/// A dataset name plus the request body sent to `retrieve`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrieveRequest {
    pub dataset: String,
    pub body: IndexMap<String, Value>,
}

impl RetrieveRequest {
    /// Build the request for one year of `variable` over `area`.
    pub fn for_source(source: &Source, variable: &str, year: i32, area: Area) -> Self {
        match *source {
            Source::Reanalysis(dataset) => era5(dataset, variable, year, area),
            Source::Projection {
                experiment,
                resolution,
            } => cmip6(experiment, resolution, variable, year, area),
        }
    }

    /// `key : value` lines, one per body field.
    pub fn describe(&self) -> Vec<String> {
        self.body
            .iter()
            .map(|(k, v)| format!("{k:20} : {v}"))
            .collect()
    }
}

/// ERA5 reanalysis request: every hour of every day of `year`.
pub fn era5(dataset: Dataset, variable: &str, year: i32, area: Area) -> RetrieveRequest {
    let mut body = IndexMap::new();
    body.insert("product_type".to_string(), json!("reanalysis"));
    body.insert("variable".to_string(), json!(variable));
    body.insert("year".to_string(), json!([year.to_string()]));
    body.insert("month".to_string(), json!(months()));
    body.insert("day".to_string(), json!(days()));
    body.insert("time".to_string(), json!(hours()));
    body.insert("data_format".to_string(), json!("netcdf"));
    body.insert("download_format".to_string(), json!("unarchived"));
    body.insert("area".to_string(), json!(area));

    RetrieveRequest {
        dataset: dataset.cds_name(),
        body,
    }
}

/// CMIP6 projection request. Days are only listed for daily resolution.
pub fn cmip6(
    experiment: Experiment,
    resolution: Resolution,
    variable: &str,
    year: i32,
    area: Area,
) -> RetrieveRequest {
    let mut body = IndexMap::new();
    body.insert("variable".to_string(), json!(variable));
    body.insert("temporal_resolution".to_string(), json!(resolution));
    body.insert("experiment".to_string(), json!(experiment));
    body.insert("year".to_string(), json!([year.to_string()]));
    body.insert("month".to_string(), json!(months()));
    body.insert("time".to_string(), json!(hours()));
    body.insert("data_format".to_string(), json!("netcdf"));
    body.insert("download_format".to_string(), json!("unarchived"));
    body.insert("area".to_string(), json!(area));
    if resolution == Resolution::Daily {
        body.insert("day".to_string(), json!(days()));
    }

    RetrieveRequest {
        dataset: crate::constants::CMIP6_DATASET.to_string(),
        body,
    }
}

fn months() -> Vec<String> {
    (1..=12).map(|m| format!("{m:02}")).collect()
}

fn days() -> Vec<String> {
    (1..=31).map(|d| format!("{d:02}")).collect()
}

fn hours() -> Vec<String> {
    (0..24).map(|h| format!("{h:02}:00")).collect()
}
