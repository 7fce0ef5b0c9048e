//! Disk geometry and timing constants.

use serde::{Deserialize, Serialize};

/// Default number of addressable cylinders.
pub const DEFAULT_DISK_SIZE: u32 = 200;
/// Default spindle speed (revolutions per minute).
pub const DEFAULT_RPM: f64 = 7200.0;
/// Default sector size (bytes).
pub const DEFAULT_SECTOR_SIZE: u32 = 512;
/// Default seek cost (ms per cylinder of head movement).
pub const DEFAULT_SEEK_RATE_MS: f64 = 0.1;
/// Default transfer rate: 1 MB/s = 1000 bytes per ms.
pub const DEFAULT_TRANSFER_RATE_BYTES_PER_MS: f64 = 1000.0;

/// Physical characteristics of the simulated disk.
///
/// Immutable per invocation. Only `disk_size` constrains scheduling; the
/// remaining fields feed the timing model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskGeometry {
    /// Number of addressable cylinders (`0..disk_size`).
    pub disk_size: u32,
    /// Spindle speed (RPM).
    pub rotation_speed_rpm: f64,
    /// Bytes transferred per served request.
    pub sector_size_bytes: u32,
    /// Seek cost per cylinder (ms).
    pub seek_rate_ms_per_cylinder: f64,
    /// Sustained transfer rate (bytes/ms).
    pub transfer_rate_bytes_per_ms: f64,
}

impl DiskGeometry {
    /// Creates a geometry with `disk_size` cylinders and default constants.
    pub fn new(disk_size: u32) -> Self {
        Self {
            disk_size,
            ..Default::default()
        }
    }

    /// Sets the spindle speed.
    pub fn with_rotation_speed(mut self, rpm: f64) -> Self {
        self.rotation_speed_rpm = rpm;
        self
    }

    /// Sets the sector size.
    pub fn with_sector_size(mut self, bytes: u32) -> Self {
        self.sector_size_bytes = bytes;
        self
    }

    /// Sets the seek cost per cylinder.
    pub fn with_seek_rate(mut self, ms_per_cylinder: f64) -> Self {
        self.seek_rate_ms_per_cylinder = ms_per_cylinder;
        self
    }

    /// Sets the transfer rate.
    pub fn with_transfer_rate(mut self, bytes_per_ms: f64) -> Self {
        self.transfer_rate_bytes_per_ms = bytes_per_ms;
        self
    }

    /// Time of one full revolution (ms).
    #[inline]
    pub fn revolution_time_ms(&self) -> f64 {
        60_000.0 / self.rotation_speed_rpm
    }

    /// Average rotational latency per access: half a revolution (ms).
    #[inline]
    pub fn average_rotational_latency_ms(&self) -> f64 {
        self.revolution_time_ms() / 2.0
    }

    /// Time to transfer one sector (ms).
    #[inline]
    pub fn sector_transfer_time_ms(&self) -> f64 {
        self.sector_size_bytes as f64 / self.transfer_rate_bytes_per_ms
    }

    /// Highest addressable cylinder.
    #[inline]
    pub fn last_cylinder(&self) -> u32 {
        self.disk_size.saturating_sub(1)
    }
}

impl Default for DiskGeometry {
    fn default() -> Self {
        Self {
            disk_size: DEFAULT_DISK_SIZE,
            rotation_speed_rpm: DEFAULT_RPM,
            sector_size_bytes: DEFAULT_SECTOR_SIZE,
            seek_rate_ms_per_cylinder: DEFAULT_SEEK_RATE_MS,
            transfer_rate_bytes_per_ms: DEFAULT_TRANSFER_RATE_BYTES_PER_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let g = DiskGeometry::default();
        assert_eq!(g.disk_size, 200);
        assert_eq!(g.last_cylinder(), 199);
        // 7200 RPM → 8.333 ms/rev → 4.1667 ms average
        assert!((g.revolution_time_ms() - 8.333_333).abs() < 1e-5);
        assert!((g.average_rotational_latency_ms() - 4.166_666).abs() < 1e-5);
        // 512 bytes at 1000 bytes/ms
        assert!((g.sector_transfer_time_ms() - 0.512).abs() < 1e-12);
    }

    #[test]
    fn test_builders() {
        let g = DiskGeometry::new(500)
            .with_rotation_speed(5400.0)
            .with_sector_size(4096)
            .with_seek_rate(0.05)
            .with_transfer_rate(2048.0);
        assert_eq!(g.disk_size, 500);
        assert!((g.average_rotational_latency_ms() - 60_000.0 / 5400.0 / 2.0).abs() < 1e-12);
        assert!((g.sector_transfer_time_ms() - 2.0).abs() < 1e-12);
        assert!((g.seek_rate_ms_per_cylinder - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let g: DiskGeometry = serde_json::from_str(r#"{"disk_size": 300}"#).unwrap();
        assert_eq!(g.disk_size, 300);
        assert_eq!(g.sector_size_bytes, DEFAULT_SECTOR_SIZE);
        assert!((g.rotation_speed_rpm - DEFAULT_RPM).abs() < 1e-12);
    }
}
