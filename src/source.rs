//! Read-only access to ambient OS state.
//!
//! Every fact the tool displays comes through [`HostSource`], so collection
//! and parsing can run against synthetic text in tests instead of `/proc`.

use std::{env, fs, path::Path};

use nix::unistd::{getppid, getuid, User};
use sysinfo::System;

use crate::error::{FetchError, Result};

/// Aggregate memory counters reported by the kernel, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RamTotals {
    pub total: u64,
    pub free: u64,
}

pub trait HostSource {
    /// Reads a whole text file. Invalid UTF-8 is replaced, not rejected.
    fn read_text(&self, path: &Path) -> Result<String>;

    fn var(&self, key: &str) -> Option<String>;

    fn parent_pid(&self) -> Option<u32>;

    fn hostname(&self) -> Option<String>;

    fn username(&self) -> Result<String>;

    fn kernel_release(&self) -> Option<String>;

    fn uptime_seconds(&self) -> u64;

    fn ram(&self) -> RamTotals;
}

/// The live host: procfs and friends via `std::fs`, process identity via
/// `nix`, aggregate counters via `sysinfo`.
pub struct OsSource {
    system: System,
}

impl OsSource {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_memory();
        Self { system }
    }
}

impl Default for OsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HostSource for OsSource {
    fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| FetchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn parent_pid(&self) -> Option<u32> {
        u32::try_from(getppid().as_raw()).ok()
    }

    fn hostname(&self) -> Option<String> {
        System::host_name()
    }

    fn username(&self) -> Result<String> {
        let uid = getuid();
        match User::from_uid(uid) {
            Ok(Some(user)) => Ok(user.name),
            _ => Err(FetchError::UnknownUser(uid.as_raw())),
        }
    }

    fn kernel_release(&self) -> Option<String> {
        System::kernel_version()
    }

    fn uptime_seconds(&self) -> u64 {
        System::uptime()
    }

    fn ram(&self) -> RamTotals {
        RamTotals {
            total: self.system.total_memory(),
            free: self.system.free_memory(),
        }
    }
}
