use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Ok,
    Warn,
    Critical,
}

impl StatusLevel {
    /// Style class a display applies for this level.
    pub fn style_class(self) -> &'static str {
        match self {
            StatusLevel::Ok => "ramswap-ok",
            StatusLevel::Warn => "ramswap-warn",
            StatusLevel::Critical => "ramswap-critical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusLevel::Ok => "ok",
            StatusLevel::Warn => "warn",
            StatusLevel::Critical => "critical",
        }
    }
}

/// Maps a ratio to a level. Bounds are exclusive: a ratio equal to a
/// threshold stays in the band below it.
pub fn classify(ratio: f64, warn: f64, critical: f64) -> StatusLevel {
    if ratio > critical {
        StatusLevel::Critical
    } else if ratio > warn {
        StatusLevel::Warn
    } else {
        StatusLevel::Ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub mem_warn: f64,
    pub mem_critical: f64,
    pub swap_warn: f64,
    pub swap_critical: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            mem_warn: 0.75,
            mem_critical: 0.90,
            swap_warn: 0.50,
            swap_critical: 0.75,
        }
    }
}

impl Thresholds {
    /// Replaces a metric's pair with the defaults when either value is not a
    /// finite ratio in [0, 1]. Returns true if anything was replaced.
    pub fn sanitize(&mut self) -> bool {
        let defaults = Thresholds::default();
        let mut replaced = false;
        if !valid_pair(self.mem_warn, self.mem_critical) {
            self.mem_warn = defaults.mem_warn;
            self.mem_critical = defaults.mem_critical;
            replaced = true;
        }
        if !valid_pair(self.swap_warn, self.swap_critical) {
            self.swap_warn = defaults.swap_warn;
            self.swap_critical = defaults.swap_critical;
            replaced = true;
        }
        replaced
    }

    pub fn classify_memory(&self, ratio: f64) -> StatusLevel {
        classify(ratio, self.mem_warn, self.mem_critical)
    }

    pub fn classify_swap(&self, ratio: f64) -> StatusLevel {
        classify(ratio, self.swap_warn, self.swap_critical)
    }
}

fn valid_pair(warn: f64, critical: f64) -> bool {
    (0.0..=1.0).contains(&warn) && (0.0..=1.0).contains(&critical)
}
