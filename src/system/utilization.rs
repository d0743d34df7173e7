use thiserror::Error;

use super::meminfo::{MEM_AVAILABLE, MEM_TOTAL, RawStats, SWAP_FREE, SWAP_TOTAL};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilizationError {
    #[error("field {0} missing from statistics")]
    FieldMissing(&'static str),
    #[error("{0} is zero")]
    DivisionGuard(&'static str),
}

/// Fraction of memory in use, or 0.0 when it cannot be determined.
pub fn memory_utilization(stats: &RawStats) -> f64 {
    try_memory(stats).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "memory utilization unknown");
        0.0
    })
}

/// Fraction of swap in use, or 0.0 when it cannot be determined (including swap disabled).
pub fn swap_utilization(stats: &RawStats) -> f64 {
    try_swap(stats).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "swap utilization unknown");
        0.0
    })
}

pub fn try_memory(stats: &RawStats) -> Result<f64, UtilizationError> {
    let total = field(stats, MEM_TOTAL)?;
    let available = field(stats, MEM_AVAILABLE)?;
    if total == 0 {
        return Err(UtilizationError::DivisionGuard(MEM_TOTAL));
    }
    let used = total as f64 - available as f64;
    Ok((used / total as f64).clamp(0.0, 1.0))
}

pub fn try_swap(stats: &RawStats) -> Result<f64, UtilizationError> {
    let total = field(stats, SWAP_TOTAL)?;
    let free = field(stats, SWAP_FREE)?;
    if total == 0 {
        return Err(UtilizationError::DivisionGuard(SWAP_TOTAL));
    }
    Ok((1.0 - free as f64 / total as f64).clamp(0.0, 1.0))
}

fn field(stats: &RawStats, name: &'static str) -> Result<u64, UtilizationError> {
    stats
        .get(name)
        .copied()
        .ok_or(UtilizationError::FieldMissing(name))
}
