//! Interfaces to the presentation collaborators.
//!
//! Chart rendering, icon rendering and toast notifications live outside the
//! catalog core. The core only talks to them through these traits; the
//! implementations here are plain-text stand-ins used by the terminal shell.

use std::fmt;
use tracing::{error, info, warn};

use crate::domains::catalog::Icon;

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}

/// Renders a numeric series. Holds no state between calls.
pub trait ChartRenderer: Send + Sync {
    fn render(&self, series: &[f64]) -> String;
}

/// Turns an icon descriptor into something displayable.
pub trait IconRenderer: Send + Sync {
    fn glyph(&self, icon: &Icon) -> String;
}

/// Fire-and-forget user notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// Unicode block sparkline.
#[derive(Debug, Default, Clone, Copy)]
pub struct SparklineChart;

impl ChartRenderer for SparklineChart {
    fn render(&self, series: &[f64]) -> String {
        const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

        let finite: Vec<f64> = series.iter().copied().filter(|v| v.is_finite()).collect();
        let Some(max) = finite.iter().copied().reduce(f64::max) else {
            return String::new();
        };
        let min = finite.iter().copied().fold(max, f64::min);
        let span = max - min;

        finite
            .iter()
            .map(|v| {
                if span == 0.0 {
                    BARS[BARS.len() - 1]
                } else {
                    let idx = ((v - min) / span * (BARS.len() - 1) as f64).round() as usize;
                    BARS[idx.min(BARS.len() - 1)]
                }
            })
            .collect()
    }
}

/// Renders icons as a bullet; the path descriptor has no terminal form.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextIcons;

impl IconRenderer for TextIcons {
    fn glyph(&self, icon: &Icon) -> String {
        if icon.as_str().is_empty() {
            " ".to_string()
        } else {
            "◆".to_string()
        }
    }
}

/// Sends notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Info | Severity::Success => info!(%severity, "{}", message),
            Severity::Warning => warn!("{}", message),
            Severity::Error => error!("{}", message),
        }
    }
}
