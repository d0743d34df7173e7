use super::{BoxedSource, MeminfoFile};
use crate::system::meminfo::DEFAULT_SOURCE;

pub fn default_source() -> BoxedSource {
    Box::new(MeminfoFile::new(DEFAULT_SOURCE))
}
