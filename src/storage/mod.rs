//! Output locations for downloaded NetCDF files.
//!
//! Picks the root folder (explicit, shared mount, or `~/copernicus_data`),
//! and names the per-request directory and per-year files beneath it.

use std::path::{Path, PathBuf};

use crate::constants::HOME_FOLDER;
use crate::models::{CountrySpec, Source};

/// Expand a leading `~` to `home`. Other paths are returned unchanged.
pub fn expand_tilde(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Choose the download root and make sure it exists.
///
/// Order: `explicit` (tilde-expanded), then `shared` when it is already a
/// directory, then `<home>/copernicus_data`.
pub fn cache_location(
    explicit: Option<&Path>,
    shared: &Path,
    home: Option<&Path>,
) -> std::io::Result<PathBuf> {
    let location = match explicit {
        Some(path) => expand_tilde(path, home),
        None if shared.is_dir() => {
            tracing::debug!(path = %shared.display(), "using shared download folder");
            return Ok(shared.to_path_buf());
        }
        None => {
            let home = home.ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "could not determine home directory",
                )
            })?;
            home.join(HOME_FOLDER)
        }
    };

    std::fs::create_dir_all(&location)?;
    Ok(location)
}

/// Country part of directory and file names: `ES`, or `ES-Canary_Is` for a
/// subunit.
pub fn country_label(country: &CountrySpec) -> String {
    let Some(ref subunit) = country.subunit else {
        return country.code.clone();
    };
    let slug = subunit
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    format!("{}-{slug}", country.code)
}

/// Directory holding every year of one variable/country/source combination.
pub fn job_dir(root: &Path, country: &CountrySpec, variable: &str, source: &Source) -> PathBuf {
    root.join(format!(
        "{}_{variable}_{}",
        country_label(country),
        source.label()
    ))
}

/// File name for a single year.
pub fn file_name(variable: &str, source: &Source, country: &CountrySpec, year: i32) -> String {
    format!(
        "{variable}_{}_{}_{year}.nc",
        source.label(),
        country_label(country)
    )
}
