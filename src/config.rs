use std::path::PathBuf;

use crate::source::HostSource;

pub const LOGO_DIR_VAR: &str = "SYSFETCH_LOGO_DIR";
pub const LOG_VAR: &str = "SYSFETCH_LOG";
pub const DEFAULT_LOGO_DIR: &str = "./logos";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub logo_dir: PathBuf,
    /// `tracing` filter directive; `RUST_LOG` is consulted when unset.
    pub log_filter: String,
}

impl Config {
    pub fn from_env(source: &impl HostSource) -> Self {
        let non_empty = |key: &str| source.var(key).filter(|v| !v.trim().is_empty());

        Self {
            logo_dir: non_empty(LOGO_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOGO_DIR)),
            log_filter: non_empty(LOG_VAR)
                .or_else(|| non_empty("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fake::FakeSource;

    #[test]
    fn defaults() {
        let config = Config::from_env(&FakeSource::default());
        assert_eq!(config.logo_dir, PathBuf::from("./logos"));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn overrides() {
        let source = FakeSource::default()
            .with_var(LOGO_DIR_VAR, "/usr/share/sysfetch/logos")
            .with_var("RUST_LOG", "info")
            .with_var(LOG_VAR, "sysfetch=debug");
        let config = Config::from_env(&source);
        assert_eq!(config.logo_dir, PathBuf::from("/usr/share/sysfetch/logos"));
        assert_eq!(config.log_filter, "sysfetch=debug");
    }

    #[test]
    fn rust_log_fallback_and_blank_values() {
        let source = FakeSource::default()
            .with_var(LOGO_DIR_VAR, "")
            .with_var(LOG_VAR, " ")
            .with_var("RUST_LOG", "trace");
        let config = Config::from_env(&source);
        assert_eq!(config.logo_dir, PathBuf::from(DEFAULT_LOGO_DIR));
        assert_eq!(config.log_filter, "trace");
    }
}
