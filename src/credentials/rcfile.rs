//! `.cdsapirc` parsing.
//!
//! The file is a list of `name: value` lines. Values are split at the
//! first colon only, since URLs contain more of them.

use std::path::Path;

use super::CredentialsError;

/// Fields read from a CDS API dotfile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RcFile {
    pub url: Option<String>,
    pub key: Option<String>,
    pub verify: Option<bool>,
}

impl RcFile {
    /// Parse dotfile content. Unknown names and malformed lines are skipped.
    pub fn parse(content: &str) -> Self {
        let mut rc = RcFile::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((name, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            match name.trim() {
                "url" => rc.url = Some(value.to_string()),
                "key" => rc.key = Some(value.to_string()),
                "verify" => rc.verify = Some(parse_flag(value)),
                other => tracing::debug!(entry = other, "ignoring unknown rc entry"),
            }
        }

        rc
    }

    /// Read and parse the dotfile at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist; any other read
    /// failure is an error.
    pub fn load(path: &Path) -> Result<Option<Self>, CredentialsError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(Self::parse(&content))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CredentialsError::ReadFile {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_url_and_key() {
        let rc = RcFile::parse("url: https://cds.climate.copernicus.eu/api\nkey: abcd-1234\n");
        assert_eq!(rc.url.as_deref(), Some("https://cds.climate.copernicus.eu/api"));
        assert_eq!(rc.key.as_deref(), Some("abcd-1234"));
        assert_eq!(rc.verify, None);
    }

    #[test]
    fn parse_keeps_colons_in_value() {
        let rc = RcFile::parse("key: 12345:abcdef-0000");
        assert_eq!(rc.key.as_deref(), Some("12345:abcdef-0000"));
    }

    #[test]
    fn parse_skips_comments_blank_and_malformed_lines() {
        let rc = RcFile::parse("# personal token\n\nnot a pair\nkey:   \nurl:http://localhost:8080\n");
        assert_eq!(rc.url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(rc.key, None);
    }

    #[test]
    fn parse_verify_flag() {
        assert_eq!(RcFile::parse("verify: 0").verify, Some(false));
        assert_eq!(RcFile::parse("verify: False").verify, Some(false));
        assert_eq!(RcFile::parse("verify: 1").verify, Some(true));
    }

    #[test]
    fn later_duplicates_win() {
        let rc = RcFile::parse("key: first\nkey: second");
        assert_eq!(rc.key.as_deref(), Some("second"));
    }

    #[test]
    fn load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = RcFile::load(&dir.path().join("nope")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RcFile::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
