use serde::Deserialize;

/// Realtime snapshot from `GetNetWork`.
///
/// `cpu` is the panel's two-element `[usage_percent, core_count]` array;
/// traffic rates are KB/s, totals are bytes.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetworkStatus {
    pub cpu: Vec<f64>,
    pub load: LoadAverage,
    pub mem: MemoryUsage,
    pub up: f64,
    pub down: f64,
    #[serde(rename = "upTotal")]
    pub up_total: u64,
    #[serde(rename = "downTotal")]
    pub down_total: u64,
    #[serde(rename = "upPackets")]
    pub up_packets: u64,
    #[serde(rename = "downPackets")]
    pub down_packets: u64,
}

/// Load averages plus the panel's display thresholds.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoadAverage {
    pub max: f64,
    pub safe: f64,
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

/// Memory figures in MB.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct MemoryUsage {
    #[serde(rename = "memTotal")]
    pub total: i64,
    #[serde(rename = "memFree")]
    pub free: i64,
    #[serde(rename = "memBuffers")]
    pub buffers: i64,
    #[serde(rename = "memCached")]
    pub cached: i64,
    #[serde(rename = "memRealUsed")]
    pub real_used: i64,
}

/// Base statistics from `GetSystemTotal`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SystemTotal {
    /// OS name and release, e.g. `CentOS Linux 7.5.1804 (Core)`.
    pub system: String,
    /// Panel version.
    pub version: String,
    /// Human-readable uptime.
    pub time: String,
    #[serde(rename = "cpuNum")]
    pub cpu_num: i64,
    #[serde(rename = "cpuRealUsed")]
    pub cpu_real_used: f64,
    #[serde(rename = "memTotal")]
    pub mem_total: i64,
    #[serde(rename = "memFree")]
    pub mem_free: i64,
    #[serde(rename = "memBuffers")]
    pub mem_buffers: i64,
    #[serde(rename = "memCached")]
    pub mem_cached: i64,
    #[serde(rename = "memRealUsed")]
    pub mem_real_used: i64,
}

/// One mounted partition from `GetDiskInfo`.
///
/// `size` and `inodes` keep the panel's four-column string layout:
/// total, used, available, percentage.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiskPartition {
    pub path: String,
    pub size: Vec<String>,
    pub inodes: Vec<String>,
}

/// Result of an `UpdatePanel` check.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpdateStatus {
    pub status: bool,
    pub version: String,
    #[serde(rename = "updateMsg")]
    pub update_msg: String,
}
