use std::path::{Path, PathBuf};

use super::meminfo::{self, RawStats, TRACKED_FIELDS};

/// Produces one fresh set of raw statistics per call.
pub trait StatsSource {
    fn sample(&mut self) -> RawStats;
}

impl<T: StatsSource + ?Sized> StatsSource for Box<T> {
    fn sample(&mut self) -> RawStats {
        (**self).sample()
    }
}

/// A meminfo-shaped text file, `/proc/meminfo` by default.
#[derive(Debug, Clone)]
pub struct MeminfoFile {
    path: PathBuf,
}

impl MeminfoFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsSource for MeminfoFile {
    fn sample(&mut self) -> RawStats {
        meminfo::read(&self.path, &TRACKED_FIELDS)
    }
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(not(target_os = "linux"))]
mod other;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(not(target_os = "linux"))]
use other as platform_impl;

pub type BoxedSource = Box<dyn StatsSource + Send>;

/// The platform's native source of memory statistics.
pub fn default_source() -> BoxedSource {
    platform_impl::default_source()
}

/// An explicit path always means a meminfo-shaped file, whatever the platform.
pub fn source_for(path: Option<&Path>) -> BoxedSource {
    match path {
        Some(path) => Box::new(MeminfoFile::new(path)),
        None => default_source(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_source_does_not_panic() {
        let mut source = default_source();
        let _ = source.sample();
    }

    #[test]
    fn meminfo_file_keeps_its_path() {
        let source = MeminfoFile::new("/proc/meminfo");
        assert_eq!(source.path(), Path::new("/proc/meminfo"));
    }

    #[test]
    fn explicit_path_reads_meminfo_file() {
        let mut source = source_for(Some(Path::new("/nonexistent/ramswap/meminfo")));
        assert!(source.sample().is_empty());
    }
}
