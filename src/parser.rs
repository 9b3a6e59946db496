//! Text parsers for the loosely structured files under `/etc` and `/proc`.
//!
//! Each function takes the full contents of one source and returns `None`
//! when the value it looks for is absent or malformed.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

static MEMINFO_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_()]+):\s+(\d+)").expect("valid meminfo regex"));

/// Value of `PRETTY_NAME` from an os-release file.
///
/// Quoted values yield the text between the first and last `"` on the line.
/// Unquoted values are taken as-is.
pub fn pretty_name(content: &str) -> Option<String> {
    for line in content.lines() {
        let Some(value) = line.strip_prefix("PRETTY_NAME=") else {
            continue;
        };

        let name = match (value.find('"'), value.rfind('"')) {
            (Some(start), Some(end)) if end > start => &value[start + 1..end],
            (Some(_), Some(_)) => continue,
            _ => value.trim(),
        };

        if name.is_empty() {
            return None;
        }
        return Some(name.to_string());
    }
    None
}

/// Display name of a process from its `/proc/<pid>/cmdline` record.
pub fn shell_from_cmdline(raw: &str) -> Option<String> {
    let argv0 = raw.split('\0').next().unwrap_or_default();
    let name = argv0.rsplit('/').next().unwrap_or_default();
    let name = name.split('\n').next().unwrap_or_default();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Marketing name of the first processor in a cpuinfo dump, without the
/// clock speed and the `CPU` suffix.
pub fn cpu_model(content: &str) -> Option<String> {
    let line = content
        .lines()
        .find(|line| line.starts_with("model name"))?;
    let (_, model) = line.split_once(':')?;

    let mut model = model.trim_start();
    if let Some(at) = model.find('@') {
        model = &model[..at];
    }
    if let Some(suffix) = model.find("CPU") {
        model = &model[..suffix];
    }

    let model = model.trim_end();
    if model.is_empty() {
        None
    } else {
        Some(model.to_string())
    }
}

/// Numeric `Key: value` fields of a meminfo dump, values in kB.
pub fn meminfo_fields(content: &str) -> HashMap<&str, u64> {
    content
        .lines()
        .filter_map(|line| MEMINFO_LINE.captures(line))
        .filter_map(|caps| {
            let key = caps.get(1)?.as_str();
            let value = caps.get(2)?.as_str().parse().ok()?;
            Some((key, value))
        })
        .collect()
}
