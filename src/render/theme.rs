//! Colors and usage thresholds of the dashboard.

/// Healthy / below warning threshold
pub const GREEN: &str = "#22c55e";
/// Between warning and critical thresholds
pub const YELLOW: &str = "#eab308";
/// At or above critical threshold, container down
pub const RED: &str = "#ef4444";
/// Muted text (placeholders)
pub const MUTED: &str = "#94a3b8";

/// Usage at or above this percentage is shown yellow.
pub const WARNING_THRESHOLD_PCT: f64 = 70.0;
/// Usage at or above this percentage is shown red.
pub const CRITICAL_THRESHOLD_PCT: f64 = 90.0;

/// Three-tier classification of a usage percentage, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UsageLevel {
    Normal,
    Warning,
    Critical,
}

impl UsageLevel {
    pub fn for_pct(pct: f64) -> Self {
        if pct >= CRITICAL_THRESHOLD_PCT {
            UsageLevel::Critical
        } else if pct >= WARNING_THRESHOLD_PCT {
            UsageLevel::Warning
        } else {
            UsageLevel::Normal
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            UsageLevel::Normal => GREEN,
            UsageLevel::Warning => YELLOW,
            UsageLevel::Critical => RED,
        }
    }
}

/// Bar color for a usage percentage.
pub fn usage_color(pct: f64) -> &'static str {
    UsageLevel::for_pct(pct).color()
}
