//! Integration tests for the area and plan CLI commands.
//!
//! These tests exercise the library functions that back each command,
//! using the public API from the cdsfetch crate.

use std::path::{Path, PathBuf};

use cdsfetch::config::Config;
use cdsfetch::env::Env;
use cdsfetch::geo::CountryTable;
use cdsfetch::models::{Area, CountrySpec, Dataset, Experiment, Resolution, Source};
use cdsfetch::output::OutputRenderer;
use cdsfetch::output::json::JsonRenderer;
use cdsfetch::plan::{JobStatus, Plan, PlanSpec, RetrieveError, Retriever};
use cdsfetch::request::RetrieveRequest;
use cdsfetch::storage;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

// ---------------------------------------------------------------------------
// area
// ---------------------------------------------------------------------------

#[test]
fn area_for_country_with_subunits() {
    let table = CountryTable::builtin();
    let whole = table.area(&"PT".parse().unwrap(), None).unwrap();
    let mainland = table.area(&"PT:Portugal".parse().unwrap(), None).unwrap();

    // The Azores stretch the whole-country box far west.
    assert!(whole.west < mainland.west);
    assert_eq!(mainland.to_array(), [42.15, -9.5, 36.96, -6.19]);
}

#[test]
fn area_from_configured_country_file() {
    let mut table = CountryTable::builtin();
    table.extend_from_file(&fixture("countries.toml")).unwrap();

    let malta = table.area(&"MT".parse().unwrap(), None).unwrap();
    assert_eq!(malta.to_array(), [36.08, 14.18, 35.8, 14.58]);

    let gozo: CountrySpec = "MT:Gozo".parse().unwrap();
    assert!(table.area(&gozo, Some(0.1)).is_ok());
}

#[test]
fn config_points_at_country_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        format!(
            "[countries]\nfile = {:?}\n\n[download]\npadding = 0.2\n",
            fixture("countries.toml")
        ),
    )
    .unwrap();

    let config = Config::load(Some(path.as_path()), &Env::empty()).unwrap();
    assert_eq!(config.download.padding, 0.2);
    assert_eq!(config.countries.file, Some(fixture("countries.toml")));
}

// ---------------------------------------------------------------------------
// plan
// ---------------------------------------------------------------------------

struct FakeClient {
    downloaded: Vec<PathBuf>,
}

impl Retriever for FakeClient {
    fn retrieve(&mut self, _request: &RetrieveRequest, target: &Path) -> Result<(), RetrieveError> {
        std::fs::write(target, b"CDF").map_err(|e| RetrieveError::Write {
            path: target.to_path_buf(),
            source: e,
        })?;
        self.downloaded.push(target.to_path_buf());
        Ok(())
    }
}

fn era5_spec(years: &str) -> PlanSpec {
    let country: CountrySpec = "IT".parse().unwrap();
    let area = CountryTable::builtin().area(&country, Some(0.1)).unwrap();
    PlanSpec {
        source: Source::Reanalysis(Dataset::SingleLevels),
        variable: "instantaneous_10m_wind_gust".to_string(),
        country,
        area,
        years: years.parse().unwrap(),
    }
}

#[test]
fn plan_in_explicit_folder_then_resume() {
    let home = tempfile::tempdir().unwrap();
    let out = home.path().join("out");
    let root = storage::cache_location(Some(out.as_path()), &home.path().join("no-shared"), Some(home.path()))
        .unwrap();

    let plan = Plan::build(&root, &era5_spec("2019-2021"));
    let mut client = FakeClient { downloaded: vec![] };
    let summary = plan.run(&mut client).unwrap();
    assert_eq!(summary.retrieved, 3);
    assert_eq!(summary.skipped, 0);

    // Second run finds every file and retrieves nothing.
    let again = Plan::build(&root, &era5_spec("2019-2022"));
    let statuses: Vec<_> = again.jobs.iter().map(|j| j.status).collect();
    assert_eq!(
        statuses,
        vec![
            JobStatus::Skipped,
            JobStatus::Skipped,
            JobStatus::Skipped,
            JobStatus::Pending
        ]
    );
    let mut client = FakeClient { downloaded: vec![] };
    let summary = again.run(&mut client).unwrap();
    assert_eq!(summary.retrieved, 1);
    assert_eq!(summary.skipped, 3);
    assert!(client.downloaded[0].ends_with("instantaneous_10m_wind_gust_single-levels_IT_2022.nc"));
}

#[test]
fn plan_json_is_machine_readable() {
    let root = tempfile::tempdir().unwrap();
    let spec = PlanSpec {
        source: Source::Projection {
            experiment: Experiment::Historical,
            resolution: Resolution::Monthly,
        },
        variable: "daily_maximum_near_surface_air_temperature".to_string(),
        country: "ES:Spain".parse().unwrap(),
        area: Area::GLOBAL,
        years: "1990".parse().unwrap(),
    };
    let plan = Plan::build(root.path(), &spec);

    let parsed: serde_json::Value = serde_json::from_str(&JsonRenderer.render(&plan)).unwrap();
    let job = &parsed["jobs"][0];
    assert_eq!(job["request"]["dataset"], "projections-cmip6");
    assert_eq!(job["request"]["body"]["experiment"], "historical");
    assert_eq!(job["request"]["body"]["area"], serde_json::json!([90.0, -180.0, -90.0, 180.0]));
    assert!(
        job["target"]
            .as_str()
            .unwrap()
            .ends_with("daily_maximum_near_surface_air_temperature_historical_ES-Spain_1990.nc")
    );
}
