pub mod meminfo;
pub mod platform;
pub mod utilization;
