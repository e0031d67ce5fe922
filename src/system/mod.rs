//! System-level panel operations: realtime load, totals, disks, updates.

mod types;

pub use types::{DiskPartition, LoadAverage, MemoryUsage, NetworkStatus, SystemTotal, UpdateStatus};

use crate::Result;
use crate::client::Client;
use crate::params::Params;

impl Client {
    /// Realtime CPU, memory, network and load snapshot.
    pub async fn network_status(&self) -> Result<NetworkStatus> {
        self.fetch("/system?action=GetNetWork", Params::new()).await
    }

    /// Static system totals: OS, panel version, uptime, memory layout.
    pub async fn system_total(&self) -> Result<SystemTotal> {
        self.fetch("/system?action=GetSystemTotal", Params::new())
            .await
    }

    /// Mounted partitions with usage and inode figures.
    pub async fn disk_info(&self) -> Result<Vec<DiskPartition>> {
        self.fetch("/system?action=GetDiskInfo", Params::new()).await
    }

    /// Number of pending install tasks.
    ///
    /// Returns 0 when the panel is unreachable or the body is not a bare
    /// integer; "could not count" and "nothing pending" are deliberately
    /// indistinguishable here.
    pub async fn task_count(&self) -> i64 {
        let Ok(body) = self.call("/ajax?action=GetTaskCount", Params::new()).await else {
            return 0;
        };
        std::str::from_utf8(&body)
            .ok()
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Checks for a panel update; `check` forces a re-check and `force`
    /// triggers the upgrade itself.
    pub async fn update_status(&self, check: bool, force: bool) -> Result<UpdateStatus> {
        let params = Params::new().push("check", check).push("force", force);
        self.fetch("/ajax?action=UpdatePanel", params).await
    }
}
