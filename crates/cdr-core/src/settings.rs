use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Call-detail-record export analyzer
#[derive(Parser, Debug, Clone)]
#[command(
    name = "cdr-analyzer",
    about = "Analyze call-detail-record exports: volume, contacts and time patterns",
    version
)]
pub struct Settings {
    /// Export files or directories of exports to analyze
    #[arg(value_name = "PATH", default_value = "./calls")]
    pub paths: Vec<PathBuf>,

    /// Your own phone number; calls to or from it are excluded
    #[arg(long)]
    pub self_number: Option<String>,

    /// Report format
    #[arg(long, default_value = "markdown", value_parser = ["markdown", "text", "json"])]
    pub format: String,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Clear saved configuration
    #[arg(long)]
    pub clear: bool,
}

// ── LastUsedParams ─────────────────────────────────────────────────────────────

/// Persisted last-used parameters saved to `~/.cdr-analyzer/last_used.json`.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct LastUsedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl LastUsedParams {
    /// Return the default path to the persisted config file.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Return the config path rooted at `base_dir` (used for testing).
    pub fn config_path_in(base_dir: &std::path::Path) -> PathBuf {
        base_dir.join(".cdr-analyzer").join("last_used.json")
    }

    /// Load persisted params from an explicit path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Atomically write params to an explicit path, creating parent
    /// directories if needed.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Delete the config file at an explicit path if it exists.
    pub fn clear_at(path: &std::path::Path) -> Result<(), std::io::Error> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments, merge with last-used params where no explicit CLI
    /// value was provided, and persist the result.
    pub fn load_with_last_used() -> Self {
        Self::load_with_last_used_impl(
            std::env::args_os().collect(),
            &LastUsedParams::config_path(),
        )
    }

    /// Full implementation: accepts args and an explicit config path so that
    /// tests can redirect to a temporary directory.
    pub fn load_with_last_used_impl(
        args: Vec<std::ffi::OsString>,
        config_path: &std::path::Path,
    ) -> Self {
        let matches = Settings::command().get_matches_from(args.clone());
        let mut settings = Settings::parse_from(args);

        if settings.clear {
            let _ = LastUsedParams::clear_at(config_path);
            return Self::apply_debug_flag(settings);
        }

        let last = LastUsedParams::load_from(config_path);

        // CLI always wins over the saved file.
        if !is_arg_explicitly_set(&matches, "self_number") && settings.self_number.is_none() {
            settings.self_number = last.self_number;
        }
        if !is_arg_explicitly_set(&matches, "format") {
            if let Some(v) = last.format {
                settings.format = v;
            }
        }

        settings = Self::apply_debug_flag(settings);

        let params = LastUsedParams::from(&settings);
        let _ = params.save_to(config_path);

        settings
    }

    /// `--debug` overrides the log level.
    fn apply_debug_flag(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Conversion ─────────────────────────────────────────────────────────────────

impl From<&Settings> for LastUsedParams {
    fn from(s: &Settings) -> Self {
        LastUsedParams {
            self_number: s.self_number.clone(),
            format: Some(s.format.clone()),
        }
    }
}

/// Returns `true` when `name` was supplied explicitly on the command line
/// (not via default value or environment variable).
fn is_arg_explicitly_set(matches: &clap::ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(clap::parser::ValueSource::CommandLine)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use tempfile::TempDir;

    fn tmp_config_path(tmp: &TempDir) -> PathBuf {
        LastUsedParams::config_path_in(tmp.path())
    }

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    // ── LastUsedParams ────────────────────────────────────────────────────────

    #[test]
    fn test_last_used_params_save_load() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        let params = LastUsedParams {
            self_number: Some("13800138000".to_string()),
            format: Some("json".to_string()),
        };
        params.save_to(&path).expect("save");

        let loaded = LastUsedParams::load_from(&path);
        assert_eq!(loaded.self_number, Some("13800138000".to_string()));
        assert_eq!(loaded.format, Some("json".to_string()));
    }

    #[test]
    fn test_last_used_params_clear() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        LastUsedParams::default().save_to(&path).expect("save");
        assert!(path.exists(), "file must exist after save");

        LastUsedParams::clear_at(&path).expect("clear");
        assert!(!path.exists(), "file must be gone after clear");
    }

    #[test]
    fn test_last_used_params_default_when_missing() {
        let tmp = TempDir::new().expect("tempdir");
        let loaded = LastUsedParams::load_from(&tmp_config_path(&tmp));
        assert!(loaded.self_number.is_none());
        assert!(loaded.format.is_none());
    }

    #[test]
    fn test_last_used_params_default_when_corrupt() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();
        assert!(LastUsedParams::load_from(&path).format.is_none());
    }

    // ── Settings ──────────────────────────────────────────────────────────────

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::parse_from(["cdr-analyzer"]);

        assert_eq!(settings.paths, vec![PathBuf::from("./calls")]);
        assert!(settings.self_number.is_none());
        assert_eq!(settings.format, "markdown");
        assert!(settings.output.is_none());
        assert_eq!(settings.log_level, "INFO");
        assert!(settings.log_file.is_none());
        assert!(!settings.debug);
        assert!(!settings.clear);
    }

    #[test]
    fn test_settings_accepts_several_paths() {
        let settings = Settings::parse_from(["cdr-analyzer", "jan.csv", "exports", "feb.txt"]);
        assert_eq!(
            settings.paths,
            vec![
                PathBuf::from("jan.csv"),
                PathBuf::from("exports"),
                PathBuf::from("feb.txt"),
            ]
        );
    }

    #[test]
    fn test_settings_rejects_unknown_format() {
        let result = Settings::try_parse_from(["cdr-analyzer", "--format", "html"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_merges_last_used_values() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        LastUsedParams {
            self_number: Some("13900000000".to_string()),
            format: Some("text".to_string()),
        }
        .save_to(&path)
        .unwrap();

        let settings = Settings::load_with_last_used_impl(args(&["cdr-analyzer", "data"]), &path);
        assert_eq!(settings.paths, vec![PathBuf::from("data")]);
        assert_eq!(settings.self_number.as_deref(), Some("13900000000"));
        assert_eq!(settings.format, "text");
    }

    #[test]
    fn test_load_cli_wins_and_is_persisted() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        LastUsedParams {
            self_number: Some("13900000000".to_string()),
            format: Some("text".to_string()),
        }
        .save_to(&path)
        .unwrap();

        let settings = Settings::load_with_last_used_impl(
            args(&["cdr-analyzer", "--format", "json", "--self-number", "13811112222"]),
            &path,
        );
        assert_eq!(settings.format, "json");
        assert_eq!(settings.self_number.as_deref(), Some("13811112222"));

        let saved = LastUsedParams::load_from(&path);
        assert_eq!(saved.format.as_deref(), Some("json"));
        assert_eq!(saved.self_number.as_deref(), Some("13811112222"));
    }

    #[test]
    fn test_load_clear_removes_file_and_skips_merge() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        LastUsedParams {
            self_number: Some("13900000000".to_string()),
            format: Some("text".to_string()),
        }
        .save_to(&path)
        .unwrap();

        let settings = Settings::load_with_last_used_impl(args(&["cdr-analyzer", "--clear"]), &path);
        assert!(!path.exists());
        assert!(settings.self_number.is_none());
        assert_eq!(settings.format, "markdown");
    }

    #[test]
    fn test_debug_flag_overrides_log_level() {
        let tmp = TempDir::new().expect("tempdir");
        let settings = Settings::load_with_last_used_impl(
            args(&["cdr-analyzer", "--debug", "--log-level", "ERROR"]),
            &tmp_config_path(&tmp),
        );
        assert_eq!(settings.log_level, "DEBUG");
    }
}
