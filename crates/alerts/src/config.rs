use std::time::Duration;

/// Alert check configuration loaded from environment variables.
///
/// Unset or unparsable values fall back to the defaults below.
#[derive(Debug, Clone)]
pub struct AlertCheckConfig {
    /// Whether the periodic scheduler runs at all (default: `true`).
    pub enabled: bool,
    /// Time between scheduled checks (default: 300 s).
    pub interval: Duration,
    /// Maximum number of users checked in parallel (default: 8).
    pub concurrency: usize,
    /// Upper bound for a single store round trip (default: 10 s).
    pub store_timeout: Duration,
}

/// Default time between scheduled checks.
const DEFAULT_INTERVAL_SECS: u64 = 300;

/// Default number of users checked in parallel.
const DEFAULT_CONCURRENCY: usize = 8;

/// Default upper bound for one store access.
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

impl Default for AlertCheckConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            concurrency: DEFAULT_CONCURRENCY,
            store_timeout: Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS),
        }
    }
}

impl AlertCheckConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default |
    /// |-----------------------------|---------|
    /// | `ALERT_CHECK_ENABLED`       | `true`  |
    /// | `ALERT_CHECK_INTERVAL_SECS` | `300`   |
    /// | `ALERT_CHECK_CONCURRENCY`   | `8`     |
    /// | `ALERT_STORE_TIMEOUT_SECS`  | `10`    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse_u64 = |key: &str, default: u64| -> u64 {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(default)
        };

        let enabled = lookup("ALERT_CHECK_ENABLED")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        Self {
            enabled,
            interval: Duration::from_secs(parse_u64(
                "ALERT_CHECK_INTERVAL_SECS",
                DEFAULT_INTERVAL_SECS,
            )),
            concurrency: parse_u64("ALERT_CHECK_CONCURRENCY", DEFAULT_CONCURRENCY as u64) as usize,
            store_timeout: Duration::from_secs(parse_u64(
                "ALERT_STORE_TIMEOUT_SECS",
                DEFAULT_STORE_TIMEOUT_SECS,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> AlertCheckConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AlertCheckConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]);
        assert!(config.enabled);
        assert_eq!(config.interval, Duration::from_secs(300));
        assert_eq!(config.concurrency, 8);
        assert_eq!(config.store_timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("ALERT_CHECK_ENABLED", "false"),
            ("ALERT_CHECK_INTERVAL_SECS", "60"),
            ("ALERT_CHECK_CONCURRENCY", "2"),
            ("ALERT_STORE_TIMEOUT_SECS", "3"),
        ]);
        assert!(!config.enabled);
        assert_eq!(config.interval, Duration::from_secs(60));
        assert_eq!(config.concurrency, 2);
        assert_eq!(config.store_timeout, Duration::from_secs(3));
    }

    #[test]
    fn ignores_garbage_and_zero() {
        let config = load(&[
            ("ALERT_CHECK_INTERVAL_SECS", "soon"),
            ("ALERT_CHECK_CONCURRENCY", "0"),
        ]);
        assert_eq!(config.interval, Duration::from_secs(300));
        assert_eq!(config.concurrency, 8);
    }
}
