use std::path::Path;

use tracing::debug;

use crate::{
    error::{FetchError, Result},
    memory::{DerivedMetrics, MemCounters},
    parser,
    source::HostSource,
};

/// Placeholder for any fact that could not be determined.
pub const UNKNOWN: &str = "Unknown";

const OS_RELEASE: &str = "/etc/os-release";
const CPUINFO: &str = "/proc/cpuinfo";
const MEMINFO: &str = "/proc/meminfo";

/// Checked in order; the first non-empty one names the desktop.
const DESKTOP_VARS: [&str; 3] = ["XDG_CURRENT_DESKTOP", "DESKTOP_SESSION", "XDG_SESSION_TYPE"];

/// Everything shown in the information panel. String fields are never
/// empty: they hold either a real value or [`UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFacts {
    pub hostname: String,
    pub username: String,
    pub distro_name: String,
    pub kernel_release: String,
    pub shell_name: String,
    pub desktop_env: String,
    pub cpu_model: String,
    pub uptime_seconds: u64,
    pub total_ram_bytes: u64,
    pub free_ram_bytes: u64,
    pub cached_ram_bytes: u64,
}

impl Default for HostFacts {
    fn default() -> Self {
        Self {
            hostname: UNKNOWN.to_string(),
            username: UNKNOWN.to_string(),
            distro_name: UNKNOWN.to_string(),
            kernel_release: UNKNOWN.to_string(),
            shell_name: UNKNOWN.to_string(),
            desktop_env: UNKNOWN.to_string(),
            cpu_model: UNKNOWN.to_string(),
            uptime_seconds: 0,
            total_ram_bytes: 0,
            free_ram_bytes: 0,
            cached_ram_bytes: 0,
        }
    }
}

impl HostFacts {
    /// Gathers every fact from `source`. Never fails; each fact that cannot
    /// be read falls back to its default and is logged at debug level.
    pub fn collect(source: &impl HostSource) -> Self {
        let ram = source.ram();

        Self {
            hostname: known("hostname", source.hostname()),
            username: or_unknown("username", source.username()),
            distro_name: or_unknown("distro", distro_name(source)),
            kernel_release: known("kernel", source.kernel_release()),
            shell_name: or_unknown("shell", shell_name(source)),
            desktop_env: desktop_environment(source),
            cpu_model: or_unknown("cpu", cpu_model(source)),
            uptime_seconds: source.uptime_seconds(),
            total_ram_bytes: ram.total,
            free_ram_bytes: ram.free,
            cached_ram_bytes: cached_memory(source),
        }
    }

    pub fn metrics(&self) -> DerivedMetrics {
        DerivedMetrics::compute(
            self.total_ram_bytes,
            self.free_ram_bytes,
            self.cached_ram_bytes,
        )
    }
}

fn or_unknown(fact: &str, value: Result<String>) -> String {
    match value {
        Ok(value) if !value.is_empty() => value,
        Ok(_) => {
            debug!(fact, "empty value");
            UNKNOWN.to_string()
        }
        Err(e) => {
            debug!(fact, error = %e, "falling back to sentinel");
            UNKNOWN.to_string()
        }
    }
}

fn known(fact: &str, value: Option<String>) -> String {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    or_unknown(fact, Ok(value))
}

fn distro_name(source: &impl HostSource) -> Result<String> {
    let path = Path::new(OS_RELEASE);
    let content = source.read_text(path)?;
    parser::pretty_name(&content).ok_or_else(|| FetchError::MissingField {
        field: "PRETTY_NAME",
        path: path.to_path_buf(),
    })
}

fn shell_name(source: &impl HostSource) -> Result<String> {
    let ppid = source.parent_pid().ok_or(FetchError::NoParentProcess)?;
    let path = format!("/proc/{ppid}/cmdline");
    let raw = source.read_text(Path::new(&path))?;
    parser::shell_from_cmdline(&raw).ok_or(FetchError::MissingField {
        field: "argv[0]",
        path: path.into(),
    })
}

fn cpu_model(source: &impl HostSource) -> Result<String> {
    let path = Path::new(CPUINFO);
    let content = source.read_text(path)?;
    parser::cpu_model(&content).ok_or_else(|| FetchError::MissingField {
        field: "model name",
        path: path.to_path_buf(),
    })
}

fn cached_memory(source: &impl HostSource) -> u64 {
    match source.read_text(Path::new(MEMINFO)) {
        Ok(content) => MemCounters::from_meminfo(&content).cached_bytes(),
        Err(e) => {
            debug!(error = %e, "assuming no cached memory");
            0
        }
    }
}

pub fn desktop_environment(source: &impl HostSource) -> String {
    DESKTOP_VARS
        .iter()
        .filter_map(|key| source.var(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Renders uptime with its two or three coarsest units, e.g. `2 days, 3 hours, 7 mins`.
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{days} days, {hours} hours, {minutes} mins")
    } else if hours > 0 {
        format!("{hours} hours, {minutes} mins")
    } else {
        format!("{minutes} mins")
    }
}
