//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. Only if `SLOTGUARD_CREDENTIALS_PATH` is unset, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. With no file anywhere, uses built-in defaults
//!
//! ## Environment Variables
//! - `SLOTGUARD_CREDENTIALS_PATH`: Token file path (required for env loading)
//! - `SLOTGUARD_CALENDAR_ID`: Calendar identifier
//! - `SLOTGUARD_API_BASE_URL`: Calendar API base URL
//! - `SLOTGUARD_TIMEZONE`: IANA reference timezone
//! - `SLOTGUARD_SEND_UPDATES`: Attendee notification mode for writes
//! - `SLOTGUARD_REQUEST_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `SLOTGUARD_GUARDED_TOOLS`: Comma-separated tool names behind the guard
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./slotguard.json` or `./slotguard.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use slotguard_domain::{AgentConfig, CalendarConfig, Config, Result, SlotGuardError};

const CREDENTIALS_PATH_ENV: &str = "SLOTGUARD_CREDENTIALS_PATH";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["slotguard.json", "slotguard.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// Environment variables win whenever `SLOTGUARD_CREDENTIALS_PATH` is set.
/// Otherwise a probed config file is used, then the defaults.
///
/// # Errors
/// Returns `SlotGuardError::Config` if the chosen source holds an invalid
/// value. An invalid environment never falls back to a file or defaults.
pub fn load() -> Result<Config> {
    if env_opt(CREDENTIALS_PATH_ENV).is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    tracing::debug!("{CREDENTIALS_PATH_ENV} not set, trying config file");
    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No config file found, using defaults");
            validate(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `SLOTGUARD_CREDENTIALS_PATH` must be present; the rest default.
///
/// # Errors
/// Returns `SlotGuardError::Config` if the required variable is missing or
/// any value is invalid.
pub fn load_from_env() -> Result<Config> {
    let defaults = CalendarConfig::default();

    let credentials_path = env_var(CREDENTIALS_PATH_ENV)?;
    let request_timeout_secs = match env_opt("SLOTGUARD_REQUEST_TIMEOUT_SECS") {
        Some(raw) => raw.parse::<u64>().map_err(|e| {
            SlotGuardError::Config(format!("Invalid request timeout '{raw}': {e}"))
        })?,
        None => defaults.request_timeout_secs,
    };

    let calendar = CalendarConfig {
        calendar_id: env_opt("SLOTGUARD_CALENDAR_ID").unwrap_or(defaults.calendar_id),
        api_base_url: env_opt("SLOTGUARD_API_BASE_URL").unwrap_or(defaults.api_base_url),
        credentials_path,
        reference_timezone: env_opt("SLOTGUARD_TIMEZONE").unwrap_or(defaults.reference_timezone),
        send_updates: env_opt("SLOTGUARD_SEND_UPDATES").unwrap_or(defaults.send_updates),
        request_timeout_secs,
    };

    let agent = match env_list("SLOTGUARD_GUARDED_TOOLS") {
        Some(guarded_tools) => AgentConfig { guarded_tools },
        None => AgentConfig::default(),
    };

    validate(Config { calendar, agent })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `SlotGuardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - A value fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SlotGuardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SlotGuardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SlotGuardError::Config(format!("Failed to read config file: {e}")))?;

    validate(parse_config(&contents, &config_path)?)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SlotGuardError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SlotGuardError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(SlotGuardError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Reject values that would only fail later, at the first tool call.
fn validate(config: Config) -> Result<Config> {
    config.calendar.reference_tz()?;

    if config.calendar.calendar_id.trim().is_empty() {
        return Err(SlotGuardError::Config("calendar_id must not be empty".into()));
    }
    if config.calendar.request_timeout_secs == 0 {
        return Err(SlotGuardError::Config("request_timeout_secs must be positive".into()));
    }
    if let Err(e) = url::Url::parse(&config.calendar.api_base_url) {
        return Err(SlotGuardError::Config(format!(
            "Invalid API base URL '{}': {e}",
            config.calendar.api_base_url
        )));
    }

    Ok(config)
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut directories = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        directories.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            directories.extend([exe_dir.to_path_buf(), exe_dir.join("..")]);
        }
    }

    directories
        .iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `SlotGuardError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        SlotGuardError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Optional environment variable; blank counts as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Comma-separated list. An empty list (`""` after trimming) is `None`, so a
/// deployment cannot disable the guard by accident with a blank variable.
fn env_list(key: &str) -> Option<Vec<String>> {
    let raw = env_opt(key)?;
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect();
    (!items.is_empty()).then_some(items)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;
    use tempfile::NamedTempFile;

    use super::*;

    const VARS: [&str; 7] = [
        "SLOTGUARD_CREDENTIALS_PATH",
        "SLOTGUARD_CALENDAR_ID",
        "SLOTGUARD_API_BASE_URL",
        "SLOTGUARD_TIMEZONE",
        "SLOTGUARD_SEND_UPDATES",
        "SLOTGUARD_REQUEST_TIMEOUT_SECS",
        "SLOTGUARD_GUARDED_TOOLS",
    ];

    fn clear_env() {
        for key in VARS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_from_env_with_overrides() {
        clear_env();
        std::env::set_var("SLOTGUARD_CREDENTIALS_PATH", "/secrets/token.json");
        std::env::set_var("SLOTGUARD_TIMEZONE", "Europe/Berlin");
        std::env::set_var("SLOTGUARD_REQUEST_TIMEOUT_SECS", "5");
        std::env::set_var("SLOTGUARD_GUARDED_TOOLS", "create_event, update_event ,remove_event");

        let config = load_from_env().expect("config from env");
        assert_eq!(config.calendar.credentials_path, "/secrets/token.json");
        assert_eq!(config.calendar.reference_timezone, "Europe/Berlin");
        assert_eq!(config.calendar.request_timeout_secs, 5);
        assert_eq!(config.calendar.calendar_id, "primary");
        assert_eq!(
            config.agent.guarded_tools,
            vec!["create_event", "update_event", "remove_event"]
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_missing_var() {
        clear_env();
        let err = load_from_env().unwrap_err();
        assert!(matches!(err, SlotGuardError::Config(ref m) if m.contains("SLOTGUARD_CREDENTIALS_PATH")));
    }

    #[test]
    #[serial]
    fn test_load_from_env_invalid_values() {
        clear_env();
        std::env::set_var("SLOTGUARD_CREDENTIALS_PATH", "/secrets/token.json");
        std::env::set_var("SLOTGUARD_REQUEST_TIMEOUT_SECS", "soon");
        assert!(matches!(load_from_env(), Err(SlotGuardError::Config(_))));

        std::env::remove_var("SLOTGUARD_REQUEST_TIMEOUT_SECS");
        std::env::set_var("SLOTGUARD_TIMEZONE", "Mars/Olympus");
        assert!(matches!(load_from_env(), Err(SlotGuardError::Config(_))));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_guarded_tools_keeps_default() {
        clear_env();
        std::env::set_var("SLOTGUARD_CREDENTIALS_PATH", "/secrets/token.json");
        std::env::set_var("SLOTGUARD_GUARDED_TOOLS", " , ");

        let config = load_from_env().unwrap();
        assert_eq!(config.agent, AgentConfig::default());

        clear_env();
    }

    #[test]
    fn test_load_from_file_toml() {
        let toml_content = r#"
[calendar]
calendar_id = "team"
reference_timezone = "America/New_York"

[agent]
guarded_tools = ["create_event"]
"#;
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.calendar.calendar_id, "team");
        assert_eq!(config.calendar.send_updates, "all");
        assert_eq!(config.agent.guarded_tools, vec!["create_event"]);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/slotguard.json")));
        assert!(matches!(result, Err(SlotGuardError::Config(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(b"calendar: {}").unwrap();
        assert!(load_from_file(Some(file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"calendar": {"request_timeout_secs": 0}}"#).unwrap();
        let path = file.path().with_extension("json");
        std::fs::copy(file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(matches!(result, Err(SlotGuardError::Config(ref m)) if m.contains("timeout")));

        std::fs::remove_file(path).ok();
    }
}
