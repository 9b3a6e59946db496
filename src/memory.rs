//! Used-memory accounting.
//!
//! "Used" excludes page cache, buffers and reclaimable slab, the same way
//! `free` and most system monitors report it.

use crate::parser::meminfo_fields;

const GIB: f64 = (1u64 << 30) as f64;

/// Raw meminfo counters in kB. Missing lines read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemCounters {
    pub cached: u64,
    pub buffers: u64,
    pub shmem: u64,
    pub sreclaimable: u64,
}

impl MemCounters {
    pub fn from_meminfo(content: &str) -> Self {
        let fields = meminfo_fields(content);
        let get = |key: &str| fields.get(key).copied().unwrap_or(0);
        Self {
            cached: get("Cached"),
            buffers: get("Buffers"),
            shmem: get("Shmem"),
            sreclaimable: get("SReclaimable"),
        }
    }

    /// Reclaimable memory in bytes: cache, buffers and reclaimable slab,
    /// minus shared memory which lives in the page cache but cannot be dropped.
    pub fn cached_bytes(&self) -> u64 {
        self.cached
            .saturating_add(self.buffers)
            .saturating_add(self.sreclaimable)
            .saturating_sub(self.shmem)
            .saturating_mul(1024)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub used_ram_gb: f64,
    pub total_ram_gb: f64,
    pub usage_percent: f64,
}

impl DerivedMetrics {
    /// Used memory saturates at zero when cache exceeds `total - free`.
    pub fn compute(total: u64, free: u64, cached: u64) -> Self {
        let used = total.saturating_sub(free).saturating_sub(cached);
        let usage_percent = if total > 0 {
            used as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            used_ram_gb: used as f64 / GIB,
            total_ram_gb: total as f64 / GIB,
            usage_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMINFO: &str = "MemTotal:       16384000 kB
MemFree:         2048000 kB
Buffers:          102400 kB
Cached:          4096000 kB
Shmem:            204800 kB
SReclaimable:     307200 kB
";

    #[test]
    fn counters_from_meminfo() {
        let counters = MemCounters::from_meminfo(MEMINFO);
        assert_eq!(
            counters,
            MemCounters {
                cached: 4096000,
                buffers: 102400,
                shmem: 204800,
                sreclaimable: 307200,
            }
        );
        assert_eq!(
            counters.cached_bytes(),
            (4096000 + 102400 + 307200 - 204800) * 1024
        );
    }

    #[test]
    fn missing_counters_mean_no_cache() {
        let counters = MemCounters::from_meminfo("MemTotal: 1024 kB\n");
        assert_eq!(counters, MemCounters::default());
        assert_eq!(counters.cached_bytes(), 0);

        let total = 8u64 << 30;
        let free = 3u64 << 30;
        let metrics = DerivedMetrics::compute(total, free, counters.cached_bytes());
        assert_eq!(metrics.used_ram_gb, (total - free) as f64 / GIB);
        assert_eq!(metrics.total_ram_gb, 8.0);
    }

    #[test]
    fn used_excludes_cache() {
        let metrics = DerivedMetrics::compute(16 << 30, 4 << 30, 4 << 30);
        assert_eq!(metrics.used_ram_gb, 8.0);
        assert_eq!(metrics.total_ram_gb, 16.0);
        assert_eq!(metrics.usage_percent, 50.0);
    }

    #[test]
    fn zero_total_reports_zero_percent() {
        let metrics = DerivedMetrics::compute(0, 0, 0);
        assert_eq!(metrics.usage_percent, 0.0);
        assert!(!metrics.usage_percent.is_nan());
        assert_eq!(metrics.total_ram_gb, 0.0);
    }

    #[test]
    fn oversized_cache_clamps_to_zero() {
        let metrics = DerivedMetrics::compute(4 << 30, 1 << 30, 8 << 30);
        assert_eq!(metrics.used_ram_gb, 0.0);
        assert_eq!(metrics.usage_percent, 0.0);

        let counters = MemCounters {
            shmem: 10,
            ..MemCounters::default()
        };
        assert_eq!(counters.cached_bytes(), 0);
    }

    #[test]
    fn absurd_counters_saturate() {
        let counters = MemCounters::from_meminfo("Cached: 20000000000000000 kB\n");
        assert_eq!(counters.cached, 20000000000000000);
        assert_eq!(counters.cached_bytes(), u64::MAX);

        let counters = MemCounters {
            cached: u64::MAX,
            buffers: u64::MAX,
            sreclaimable: 1,
            shmem: 0,
        };
        assert_eq!(counters.cached_bytes(), u64::MAX);

        let metrics = DerivedMetrics::compute(16 << 30, 4 << 30, counters.cached_bytes());
        assert_eq!(metrics.used_ram_gb, 0.0);
        assert_eq!(metrics.usage_percent, 0.0);
    }
}
