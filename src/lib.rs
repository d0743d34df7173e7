pub mod config;
pub mod format;
pub mod launcher;
pub mod logging;
pub mod sampler;
pub mod sink;
pub mod status;
pub mod system;
