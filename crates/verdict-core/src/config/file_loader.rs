//! File-based configuration loading

use std::fs;
use std::path::Path;

use super::error::ConfigError;
use super::logger_config::LoggerConfig;

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default config if file doesn't exist.
pub(super) fn load_from_file(path: &Path) -> Result<LoggerConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "logger config not found, using defaults");
        return Ok(LoggerConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_error = |format: &'static str, message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        format,
        message,
    };

    let config = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => {
            toml::from_str(&content).map_err(|e| parse_error("TOML", e.to_string()))?
        }
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string()))?
        }
        _ => serde_json::from_str(&content).map_err(|e| parse_error("JSON", e.to_string()))?,
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggerKind;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from_file(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("verdict.toml");
        fs::write(&path, "kind = \"tracing\"\nfatal_exit_code = 3\n").unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.kind, LoggerKind::Tracing);
        assert_eq!(config.fatal_exit_code, 3);
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("verdict.json");
        fs::write(&path, r#"{"fatal_exit_code": 12}"#).unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.kind, LoggerKind::Console);
        assert_eq!(config.fatal_exit_code, 12);
    }

    #[test]
    fn test_load_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("verdict.yml");
        fs::write(&path, "kind: tracing\n").unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.kind, LoggerKind::Tracing);
    }

    #[test]
    fn test_parse_error_names_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "kind = [").unwrap();

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: "TOML", .. }));
        assert!(err.to_string().contains("broken.toml"));
    }
}
