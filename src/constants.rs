//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and CDS dataset names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "cdsfetch";

/// Version string reported by `--version` and the `version` command.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple, injected by `build.rs`.
pub const TARGET: &str = env!("TARGET");

/// Directory name under `~/.config/` for the tool's own config.
pub const CONFIG_DIR: &str = "cdsfetch";

/// Filename of the tool's config inside [`CONFIG_DIR`].
pub const CONFIG_FILENAME: &str = "config.toml";

/// Default CDS API dotfile, relative to the home directory.
pub const RC_FILENAME: &str = ".cdsapirc";

/// Shared download folder preferred when it exists.
pub const SHARED_FOLDER: &str = "/dataNfs";

/// Fallback download folder, relative to the home directory.
pub const HOME_FOLDER: &str = "copernicus_data";

/// Default bounding-box padding in degrees (roughly 10 km).
pub const DEFAULT_PADDING: f64 = 0.1;

/// Prefix of every ERA5 reanalysis dataset name.
pub const ERA5_PREFIX: &str = "reanalysis-era5-";

/// CMIP6 climate projections dataset name.
pub const CMIP6_DATASET: &str = "projections-cmip6";

// ── Environment variable names ──────────────────────────────────────

/// CDS API endpoint URL.
pub const ENV_CDSAPI_URL: &str = "CDSAPI_URL";
/// CDS API personal access token.
pub const ENV_CDSAPI_KEY: &str = "CDSAPI_KEY";
/// Alternate location of the CDS API dotfile.
pub const ENV_CDSAPI_RC: &str = "CDSAPI_RC";

pub const ENV_FOLDER: &str = "CDSFETCH_FOLDER";
pub const ENV_PADDING: &str = "CDSFETCH_PADDING";
pub const ENV_LOG: &str = "CDSFETCH_LOG";
