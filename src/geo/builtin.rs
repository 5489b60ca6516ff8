//! Built-in country subunit boxes, `[west, south, east, north]`, rounded
//! to two decimals. Extend with `[countries] file` in the config.

use super::Subunit;

const BUILTIN: &[(&str, &str, [f64; 4])] = &[
    ("AT", "Austria", [9.48, 46.43, 16.98, 49.04]),
    ("BE", "Belgium", [2.51, 49.53, 6.16, 51.48]),
    ("CH", "Switzerland", [5.96, 45.82, 10.49, 47.81]),
    ("DE", "Germany", [5.87, 47.27, 15.04, 55.06]),
    ("DK", "Denmark", [8.07, 54.56, 15.20, 57.75]),
    ("ES", "Spain", [-9.39, 35.95, 4.33, 43.79]),
    ("ES", "Canary Is.", [-18.17, 27.64, -13.42, 29.42]),
    ("FR", "France", [-5.14, 41.33, 9.56, 51.09]),
    ("GB", "England", [-5.72, 49.96, 1.77, 55.81]),
    ("GB", "Scotland", [-7.66, 54.63, -0.72, 60.86]),
    ("GB", "Wales", [-5.33, 51.37, -2.65, 53.43]),
    ("GB", "Northern Ireland", [-8.18, 54.03, -5.43, 55.31]),
    ("GR", "Greece", [19.37, 34.80, 28.25, 41.75]),
    ("IE", "Ireland", [-10.48, 51.42, -5.99, 55.39]),
    ("IT", "Italy", [6.63, 37.92, 18.52, 47.09]),
    ("IT", "Sicily", [12.37, 36.64, 15.65, 38.81]),
    ("IT", "Sardinia", [8.13, 38.86, 9.83, 41.31]),
    ("NL", "Netherlands", [3.31, 50.75, 7.23, 53.56]),
    ("NO", "Norway", [4.65, 57.96, 31.08, 71.18]),
    ("PL", "Poland", [14.12, 49.00, 24.15, 54.84]),
    ("PT", "Portugal", [-9.50, 36.96, -6.19, 42.15]),
    ("PT", "Azores", [-31.28, 36.93, -25.01, 39.73]),
    ("PT", "Madeira", [-17.27, 32.40, -16.27, 33.13]),
    ("SE", "Sweden", [11.03, 55.34, 24.17, 69.06]),
];

pub(super) fn subunits() -> Vec<Subunit> {
    BUILTIN
        .iter()
        .map(|(code, name, bbox)| Subunit {
            code: (*code).to_string(),
            name: (*name).to_string(),
            bbox: *bbox,
        })
        .collect()
}
