/**
 * MODELS - Types de données du dashboard CoopWatch
 *
 * RÔLE : Enregistrements affichés par les panneaux (flux, oiseaux suivis,
 * risques santé, comportements, rapports) et notification d'alerte.
 *
 * NOTE : Les fixtures sont immuables et construites avec des `&'static str`.
 * Seule la `Notification` possède ses données car elle vit dans le store.
 */

use serde::{Deserialize, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Urgence d'une notification, ordonnée : info < warning < critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Warning, Severity::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

/// Position d'un oiseau dans l'image de la caméra (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: u32,
    pub y: u32,
}

/// Une alerte du centre de notifications
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub subject_id: Option<String>,
    pub zone: String,
    #[serde(serialize_with = "rfc3339")]
    pub created_at: OffsetDateTime,
    pub read: bool,
    pub coordinates: Option<Coordinates>,
    pub snapshot: Option<String>,
}

fn rfc3339<S: Serializer>(ts: &OffsetDateTime, s: S) -> Result<S::Ok, S::Error> {
    let txt = ts.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
    s.serialize_str(&txt)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectStatus {
    Normal,
    Watch,
    Alert,
}

impl SubjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectStatus::Normal => "normal",
            SubjectStatus::Watch => "watch",
            SubjectStatus::Alert => "alert",
        }
    }
}

/// Oiseau suivi par le tracker
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrackedSubject {
    pub id: &'static str,
    pub confidence: f32,
    pub last_seen: &'static str,
    pub zone: &'static str,
    pub behavior_score: u8,
    pub status: SubjectStatus,
}

/// Totaux du tracker (oiseaux comptés vs suivis activement)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrackingTotals {
    pub total: u32,
    pub active: u32,
    pub avg_confidence: f32,
    pub confidence_threshold: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Normal,
    Watch,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Normal => "normal",
            RiskLevel::Watch => "watch",
            RiskLevel::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthRisk {
    pub id: &'static str,
    pub subject_id: &'static str,
    pub level: RiskLevel,
    pub confidence: f32,
    pub symptoms: &'static [&'static str],
    pub last_updated: &'static str,
    pub zone: &'static str,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedStatus {
    Live,
    Offline,
    Recording,
}

impl FeedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedStatus::Live => "live",
            FeedStatus::Offline => "offline",
            FeedStatus::Recording => "recording",
        }
    }
}

/// Caméra installée dans une zone de l'élevage
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeedDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub status: FeedStatus,
    pub subject_count: u32,
    pub temperature: f32,
    pub humidity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternSeverity {
    Low,
    Medium,
    High,
}

impl PatternSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternSeverity::Low => "low",
            PatternSeverity::Medium => "medium",
            PatternSeverity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BehaviorPattern {
    pub id: &'static str,
    pub behavior: &'static str,
    pub severity: PatternSeverity,
    pub count: u32,
    pub percentage: f32,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActivitySample {
    pub time: &'static str,
    pub normal: u32,
    pub abnormal: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PoseShare {
    pub pose: &'static str,
    pub count: u32,
    pub percentage: f32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiskSlice {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiskTrendPoint {
    pub time: &'static str,
    pub normal: u32,
    pub watch: u32,
    pub critical: u32,
}

/// Répartition du troupeau par niveau de risque
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthOverview {
    pub total: u32,
    pub healthy: u32,
    pub watch: u32,
    pub critical: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FlockHealthPoint {
    pub date: &'static str,
    pub healthy: u32,
    pub watch: u32,
    pub critical: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BehaviorShare {
    pub behavior: &'static str,
    pub count: u32,
    pub percentage: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutbreakRisk {
    Low,
    Medium,
    High,
}

impl OutbreakRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutbreakRisk::Low => "Low",
            OutbreakRisk::Medium => "Medium",
            OutbreakRisk::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ZoneOutbreakRisk {
    pub zone: &'static str,
    pub risk: OutbreakRisk,
    pub score: u32,
    pub birds: u32,
    pub factors: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiskForecast {
    pub day: &'static str,
    pub predicted: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PerformanceMetrics {
    pub detection_accuracy: f32,
    pub false_positive_rate: f32,
    pub response_time_minutes: f32,
    pub system_uptime: f32,
    pub birds_covered: u32,
    pub zones_monitored: u32,
}

/// Jauge en pourcentage (performances des modèles, qualité du tracking)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Gauge {
    pub label: &'static str,
    pub value: f32,
}

/// Chiffre clé affiché tel quel sur une carte
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Figure {
    pub label: &'static str,
    pub value: &'static str,
    pub caption: Option<&'static str>,
}
