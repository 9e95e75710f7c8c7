/**
 * STYLE - Correspondance statut → apparence
 *
 * Chaque énumération de statut a une correspondance totale vers un `Style`
 * (ton + icône). Le `match` est exhaustif : ajouter une variante sans style
 * ne compile pas.
 */

use crate::metrics::BehaviorBand;
use crate::models::{FeedStatus, OutbreakRisk, PatternSeverity, RiskLevel, Severity, SubjectStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Critical,
    Warning,
    Info,
    Positive,
    Neutral,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    AlertTriangle,
    Bell,
    Info,
    Eye,
    Shield,
    Activity,
    Camera,
    Record,
    CameraOff,
    CheckCircle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub fg: &'static str,
    pub bg: &'static str,
    pub border: &'static str,
}

impl Tone {
    pub fn palette(&self) -> Palette {
        match self {
            Tone::Critical => Palette { fg: "#dc2626", bg: "#fee2e2", border: "#fecaca" },
            Tone::Warning => Palette { fg: "#ca8a04", bg: "#fef9c3", border: "#fef08a" },
            Tone::Info => Palette { fg: "#2563eb", bg: "#dbeafe", border: "#bfdbfe" },
            Tone::Positive => Palette { fg: "#16a34a", bg: "#dcfce7", border: "#bbf7d0" },
            Tone::Neutral => Palette { fg: "#4b5563", bg: "#f3f4f6", border: "#e5e7eb" },
            Tone::Accent => Palette { fg: "#9333ea", bg: "#f3e8ff", border: "#e9d5ff" },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Style {
    pub tone: Tone,
    pub icon: Icon,
}

impl Style {
    pub const fn new(tone: Tone, icon: Icon) -> Self {
        Self { tone, icon }
    }
}

/// Tout ce qui a une apparence déterminée par son statut
pub trait Styled {
    fn style(&self) -> Style;
}

impl Styled for Severity {
    fn style(&self) -> Style {
        match self {
            Severity::Critical => Style::new(Tone::Critical, Icon::AlertTriangle),
            Severity::Warning => Style::new(Tone::Warning, Icon::Bell),
            Severity::Info => Style::new(Tone::Info, Icon::Info),
        }
    }
}

impl Styled for SubjectStatus {
    fn style(&self) -> Style {
        match self {
            SubjectStatus::Normal => Style::new(Tone::Positive, Icon::Shield),
            SubjectStatus::Watch => Style::new(Tone::Warning, Icon::Eye),
            SubjectStatus::Alert => Style::new(Tone::Critical, Icon::AlertTriangle),
        }
    }
}

impl Styled for RiskLevel {
    fn style(&self) -> Style {
        match self {
            RiskLevel::Critical => Style::new(Tone::Critical, Icon::AlertTriangle),
            RiskLevel::Watch => Style::new(Tone::Warning, Icon::Eye),
            RiskLevel::Normal => Style::new(Tone::Positive, Icon::Shield),
        }
    }
}

impl Styled for FeedStatus {
    fn style(&self) -> Style {
        match self {
            FeedStatus::Live => Style::new(Tone::Critical, Icon::Camera),
            FeedStatus::Recording => Style::new(Tone::Warning, Icon::Record),
            FeedStatus::Offline => Style::new(Tone::Neutral, Icon::CameraOff),
        }
    }
}

impl Styled for PatternSeverity {
    fn style(&self) -> Style {
        match self {
            PatternSeverity::High => Style::new(Tone::Critical, Icon::AlertTriangle),
            PatternSeverity::Medium => Style::new(Tone::Warning, Icon::Activity),
            PatternSeverity::Low => Style::new(Tone::Positive, Icon::Activity),
        }
    }
}

impl Styled for OutbreakRisk {
    fn style(&self) -> Style {
        match self {
            OutbreakRisk::High => Style::new(Tone::Critical, Icon::AlertTriangle),
            OutbreakRisk::Medium => Style::new(Tone::Warning, Icon::AlertTriangle),
            OutbreakRisk::Low => Style::new(Tone::Positive, Icon::Shield),
        }
    }
}

impl Styled for BehaviorBand {
    fn style(&self) -> Style {
        match self {
            BehaviorBand::Good => Style::new(Tone::Positive, Icon::Activity),
            BehaviorBand::Fair => Style::new(Tone::Warning, Icon::Activity),
            BehaviorBand::Poor => Style::new(Tone::Critical, Icon::Activity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_tones() {
        assert_eq!(Severity::Critical.style().tone, Tone::Critical);
        assert_eq!(Severity::Warning.style().icon, Icon::Bell);
        assert_eq!(Severity::Info.style().tone, Tone::Info);
    }

    #[test]
    fn feed_status_dot_colors() {
        // live = point rouge, recording = jaune, offline = gris
        assert_eq!(FeedStatus::Live.style().tone.palette().fg, "#dc2626");
        assert_eq!(FeedStatus::Recording.style().tone, Tone::Warning);
        assert_eq!(FeedStatus::Offline.style().tone, Tone::Neutral);
    }

    #[test]
    fn risk_and_subject_share_tones() {
        assert_eq!(RiskLevel::Critical.style().tone, SubjectStatus::Alert.style().tone);
        assert_eq!(RiskLevel::Watch.style().tone, SubjectStatus::Watch.style().tone);
        assert_eq!(RiskLevel::Normal.style().tone, SubjectStatus::Normal.style().tone);
    }
}
