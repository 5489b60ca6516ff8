//! CDS API credential resolution.
//!
//! Priority (highest to lowest), applied per field:
//! 1. Explicit values from the caller (CLI flags)
//! 2. `CDSAPI_URL` / `CDSAPI_KEY`
//! 3. The dotfile named by `CDSAPI_RC`, else `~/.cdsapirc`
//!
//! The dotfile is only read when a field is still missing after steps 1
//! and 2.

pub mod key;
pub mod rcfile;

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::{ENV_CDSAPI_KEY, ENV_CDSAPI_RC, ENV_CDSAPI_URL, RC_FILENAME};
use crate::env::Env;
use crate::storage::expand_tilde;

pub use key::ApiKey;
pub use rcfile::RcFile;

/// Errors during credential resolution.
#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("missing CDS API configuration: no {missing} in $CDSAPI_URL/$CDSAPI_KEY or {path}")]
    MissingConfiguration {
        path: PathBuf,
        missing: &'static str,
    },

    #[error("failed to read CDS API configuration file {path}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where a credential field was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Argument,
    Environment,
    File,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Argument => write!(f, "command line"),
            Origin::Environment => write!(f, "environment"),
            Origin::File => write!(f, "file"),
        }
    }
}

/// Values supplied directly by the caller, taking precedence over everything.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub key: Option<String>,
}

/// Outcome of the lookup, before validation.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    url: Option<(String, Origin)>,
    key: Option<(ApiKey, Origin)>,
    config_path: PathBuf,
    verify: bool,
    file_read: bool,
}

/// Validated credentials handed to the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub url: String,
    pub key: ApiKey,
    pub verify: bool,
}

impl ResolvedConfig {
    /// Walk the sources in priority order.
    ///
    /// `home` is the user's home directory; `None` leaves the default
    /// dotfile unresolvable, so only the environment and `CDSAPI_RC` count.
    pub fn lookup(
        env: &Env,
        home: Option<&Path>,
        overrides: &Overrides,
    ) -> Result<Self, CredentialsError> {
        let mut url = pick(overrides.url.clone(), env.non_empty(ENV_CDSAPI_URL));
        let mut key = pick(overrides.key.clone(), env.non_empty(ENV_CDSAPI_KEY))
            .map(|(k, origin)| (ApiKey::new(k), origin));

        let config_path = Self::rc_path(env, home);
        let mut verify = true;
        let mut file_read = false;

        if url.is_some() && key.is_some() {
            tracing::debug!("url and key supplied without the configuration file");
        } else if let Some(rc) = RcFile::load(&config_path)? {
            tracing::debug!(path = %config_path.display(), "reading CDS API configuration file");
            file_read = true;
            if url.is_none() {
                url = rc.url.map(|u| (u, Origin::File));
            }
            if key.is_none() {
                key = rc.key.map(|k| (ApiKey::new(k), Origin::File));
            }
            verify = rc.verify.unwrap_or(true);
        } else {
            tracing::debug!(path = %config_path.display(), "CDS API configuration file not found");
        }

        if let Some((_, origin)) = &url {
            tracing::debug!(%origin, "resolved url");
        }
        if let Some((_, origin)) = &key {
            tracing::debug!(%origin, "resolved key");
        }

        Ok(Self {
            url,
            key,
            config_path,
            verify,
            file_read,
        })
    }

    /// The dotfile consulted (or that would be consulted) for missing fields.
    fn rc_path(env: &Env, home: Option<&Path>) -> PathBuf {
        match env.non_empty(ENV_CDSAPI_RC) {
            Some(path) => expand_tilde(Path::new(&path), home),
            None => match home {
                Some(h) => h.join(RC_FILENAME),
                None => PathBuf::from("~").join(RC_FILENAME),
            },
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_ref().map(|(u, _)| u.as_str())
    }

    pub fn key(&self) -> Option<&ApiKey> {
        self.key.as_ref().map(|(k, _)| k)
    }

    pub fn url_origin(&self) -> Option<Origin> {
        self.url.as_ref().map(|(_, o)| *o)
    }

    pub fn key_origin(&self) -> Option<Origin> {
        self.key.as_ref().map(|(_, o)| *o)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn verify(&self) -> bool {
        self.verify
    }

    /// Whether the dotfile was actually opened and parsed.
    pub fn file_read(&self) -> bool {
        self.file_read
    }

    /// Validate that both `url` and `key` were found.
    pub fn require(&self) -> Result<Credentials, CredentialsError> {
        match (&self.url, &self.key) {
            (Some((url, _)), Some((key, _))) => Ok(Credentials {
                url: url.clone(),
                key: key.clone(),
                verify: self.verify,
            }),
            (url, key) => Err(CredentialsError::MissingConfiguration {
                path: self.config_path.clone(),
                missing: match (url.is_none(), key.is_none()) {
                    (true, true) => "url and key",
                    (true, false) => "url",
                    _ => "key",
                },
            }),
        }
    }
}

fn pick(explicit: Option<String>, from_env: Option<String>) -> Option<(String, Origin)> {
    let explicit = explicit
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    match (explicit, from_env) {
        (Some(v), _) => Some((v, Origin::Argument)),
        (None, Some(v)) => Some((v, Origin::Environment)),
        (None, None) => None,
    }
}

/// Resolve credentials from the given environment and home directory.
pub fn resolve(
    env: &Env,
    home: Option<&Path>,
    overrides: &Overrides,
) -> Result<Credentials, CredentialsError> {
    ResolvedConfig::lookup(env, home, overrides)?.require()
}
