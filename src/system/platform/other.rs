use sysinfo::System;

use super::{BoxedSource, StatsSource};
use crate::system::meminfo::{MEM_AVAILABLE, MEM_TOTAL, RawStats, SWAP_FREE, SWAP_TOTAL};

/// Platforms without `/proc/meminfo`: ask sysinfo and report the same
/// fields in kB so the utilization math is shared.
pub struct SysinfoSource {
    sys: System,
}

impl SysinfoSource {
    fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl StatsSource for SysinfoSource {
    fn sample(&mut self) -> RawStats {
        self.sys.refresh_memory();
        let mut stats = RawStats::with_capacity(4);
        stats.insert(MEM_TOTAL.to_string(), self.sys.total_memory() / 1024);
        stats.insert(MEM_AVAILABLE.to_string(), self.sys.available_memory() / 1024);
        stats.insert(SWAP_TOTAL.to_string(), self.sys.total_swap() / 1024);
        stats.insert(SWAP_FREE.to_string(), self.sys.free_swap() / 1024);
        stats
    }
}

pub fn default_source() -> BoxedSource {
    Box::new(SysinfoSource::new())
}
