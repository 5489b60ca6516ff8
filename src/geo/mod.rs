//! Country bounding boxes.
//!
//! Boxes are stored as `(west, south, east, north)` per country subunit,
//! the way Natural Earth publishes them. A country's area is the union of
//! its subunits (or one named subunit), padded outward and reordered to
//! `[north, west, south, east]`.

mod builtin;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Area, CountrySpec};

/// Errors while looking up or loading country boxes.
#[derive(Error, Debug)]
pub enum GeoError {
    #[error("unknown country code {0}")]
    UnknownCountry(String),

    #[error("country {code} has no subunit named {subunit:?} (known: {known})")]
    UnknownSubunit {
        code: String,
        subunit: String,
        known: String,
    },

    #[error("padding must be a finite number of degrees >= 0, got {0}")]
    InvalidPadding(f64),

    #[error("failed to read country table {path}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse country table {path}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// One subunit of a country with its bounding box.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subunit {
    pub code: String,
    pub name: String,
    /// `[west, south, east, north]` in degrees.
    pub bbox: [f64; 4],
}

#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(default, rename = "country")]
    countries: Vec<Subunit>,
}

/// Lookup table of country subunits.
#[derive(Debug, Clone)]
pub struct CountryTable {
    subunits: Vec<Subunit>,
}

impl Default for CountryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CountryTable {
    /// Table with the built-in countries only.
    pub fn builtin() -> Self {
        Self {
            subunits: builtin::subunits(),
        }
    }

    /// Add entries from a TOML file of `[[country]]` tables.
    ///
    /// An entry with the same code and name as an existing one replaces it.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize, GeoError> {
        let content = std::fs::read_to_string(path).map_err(|e| GeoError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file: TableFile = toml::from_str(&content).map_err(|e| GeoError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let added = file.countries.len();
        for mut entry in file.countries {
            entry.code = entry.code.to_ascii_uppercase();
            self.subunits
                .retain(|s| !(s.code == entry.code && s.name == entry.name));
            self.subunits.push(entry);
        }
        tracing::debug!(path = %path.display(), added, "loaded extra country boxes");
        Ok(added)
    }

    /// All subunits of `code`.
    pub fn subunits(&self, code: &str) -> Vec<&Subunit> {
        self.subunits
            .iter()
            .filter(|s| s.code.eq_ignore_ascii_case(code))
            .collect()
    }

    /// Padded `[north, west, south, east]` area for a country spec.
    ///
    /// Negative or non-finite padding is rejected; it would invert the box.
    pub fn area(&self, spec: &CountrySpec, padding: Option<f64>) -> Result<Area, GeoError> {
        if let Some(p) = padding.filter(|p| !p.is_finite() || *p < 0.0) {
            return Err(GeoError::InvalidPadding(p));
        }

        let units = self.subunits(&spec.code);
        if units.is_empty() {
            return Err(GeoError::UnknownCountry(spec.code.clone()));
        }

        let boxes: Vec<[f64; 4]> = match &spec.subunit {
            None => units.iter().map(|u| u.bbox).collect(),
            Some(name) => {
                let matching: Vec<[f64; 4]> = units
                    .iter()
                    .filter(|u| &u.name == name)
                    .map(|u| u.bbox)
                    .collect();
                if matching.is_empty() {
                    return Err(GeoError::UnknownSubunit {
                        code: spec.code.clone(),
                        subunit: name.clone(),
                        known: units
                            .iter()
                            .map(|u| u.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    });
                }
                matching
            }
        };

        let area = padded(union(&boxes), padding);
        tracing::debug!(country = %spec, %area, "resolved bounding box");
        Ok(area)
    }
}

/// Smallest `[west, south, east, north]` box covering all of `boxes`.
///
/// `boxes` must be non-empty.
fn union(boxes: &[[f64; 4]]) -> [f64; 4] {
    boxes.iter().skip(1).fold(boxes[0], |acc, b| {
        [
            acc[0].min(b[0]),
            acc[1].min(b[1]),
            acc[2].max(b[2]),
            acc[3].max(b[3]),
        ]
    })
}

/// Grow a `[west, south, east, north]` box and reorder it for the CDS API.
fn padded([west, south, east, north]: [f64; 4], padding: Option<f64>) -> Area {
    let p = padding.unwrap_or(0.0);
    Area {
        north: north + p,
        west: west - p,
        south: south - p,
        east: east + p,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Area, b: [f64; 4]) -> bool {
        a.to_array()
            .iter()
            .zip(b.iter())
            .all(|(x, y)| (x - y).abs() < 1e-9)
    }

    fn table() -> CountryTable {
        CountryTable {
            subunits: vec![
                Subunit {
                    code: "XA".into(),
                    name: "Mainland".into(),
                    bbox: [0.0, 40.0, 10.0, 50.0],
                },
                Subunit {
                    code: "XA".into(),
                    name: "Island".into(),
                    bbox: [-5.0, 30.0, -2.0, 35.0],
                },
            ],
        }
    }

    #[test]
    fn whole_country_is_union_of_subunits() {
        let spec: CountrySpec = "XA".parse().unwrap();
        let area = table().area(&spec, None).unwrap();
        assert!(close(area, [50.0, -5.0, 30.0, 10.0]));
    }

    #[test]
    fn subunit_selects_single_box_and_pads() {
        let spec: CountrySpec = "XA:Mainland".parse().unwrap();
        let area = table().area(&spec, Some(0.5)).unwrap();
        assert!(close(area, [50.5, -0.5, 39.5, 10.5]));
    }

    #[test]
    fn unknown_country_and_subunit() {
        let t = table();
        let err = t.area(&"ZZ".parse().unwrap(), None).unwrap_err();
        assert!(matches!(err, GeoError::UnknownCountry(code) if code == "ZZ"));

        let err = t.area(&"XA:Atlantis".parse().unwrap(), None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Atlantis"));
        assert!(msg.contains("Mainland, Island"));
    }

    #[test]
    fn negative_or_nan_padding_is_rejected() {
        let spec: CountrySpec = "XA".parse().unwrap();
        let t = table();

        let err = t.area(&spec, Some(-10.0)).unwrap_err();
        assert!(matches!(err, GeoError::InvalidPadding(p) if p == -10.0));

        let err = t.area(&spec, Some(f64::NAN)).unwrap_err();
        assert!(matches!(err, GeoError::InvalidPadding(p) if p.is_nan()));

        assert!(matches!(
            t.area(&spec, Some(f64::INFINITY)),
            Err(GeoError::InvalidPadding(_))
        ));
        assert!(t.area(&spec, Some(0.0)).is_ok());
    }

    #[test]
    fn builtin_table_knows_italy() {
        let area = CountryTable::builtin()
            .area(&"IT".parse().unwrap(), Some(0.1))
            .unwrap();
        assert!(area.north > area.south);
        assert!(area.east > area.west);
        assert!(area.north > 46.0 && area.south < 37.0);
    }

    #[test]
    fn extend_from_file_adds_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.toml");
        std::fs::write(
            &path,
            r#"
[[country]]
code = "xa"
name = "Island"
bbox = [-6.0, 29.0, -1.0, 36.0]

[[country]]
code = "XB"
name = "Other"
bbox = [1.0, 1.0, 2.0, 2.0]
"#,
        )
        .unwrap();

        let mut t = table();
        assert_eq!(t.extend_from_file(&path).unwrap(), 2);
        assert_eq!(t.subunits("XA").len(), 2);
        assert_eq!(t.subunits("XB").len(), 1);

        let island = t.area(&"XA:Island".parse().unwrap(), None).unwrap();
        assert!(close(island, [36.0, -6.0, 29.0, -1.0]));
    }

    #[test]
    fn extend_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[[country]]\ncode = 1").unwrap();

        let err = table().extend_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }
}
