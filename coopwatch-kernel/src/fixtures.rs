/**
 * FIXTURES - Jeux de données du dashboard
 *
 * RÔLE : Données littérales affichées par les panneaux. Aucune acquisition,
 * aucune inférence : les chiffres "IA" sont des constantes d'affichage.
 *
 * Seule la liste de notifications est construite à l'exécution, car ses
 * horodatages sont relatifs au démarrage du kernel.
 */

use crate::models::*;
use time::{Duration, OffsetDateTime};

// ---------------------------------------------------------------- flux vidéo

pub const FEEDS: &[FeedDescriptor] = &[
    FeedDescriptor {
        id: "barn-a-1",
        name: "Barn A - Zone 1",
        location: "North Section",
        status: FeedStatus::Live,
        subject_count: 245,
        temperature: 22.5,
        humidity: 65,
    },
    FeedDescriptor {
        id: "barn-a-2",
        name: "Barn A - Zone 2",
        location: "South Section",
        status: FeedStatus::Live,
        subject_count: 198,
        temperature: 23.1,
        humidity: 62,
    },
    FeedDescriptor {
        id: "barn-b-1",
        name: "Barn B - Zone 1",
        location: "East Section",
        status: FeedStatus::Recording,
        subject_count: 167,
        temperature: 21.8,
        humidity: 68,
    },
    FeedDescriptor {
        id: "outdoor-1",
        name: "Outdoor Run 1",
        location: "Free Range Area",
        status: FeedStatus::Live,
        subject_count: 89,
        temperature: 18.5,
        humidity: 45,
    },
];

pub fn find_feed(id: &str) -> Option<&'static FeedDescriptor> {
    FEEDS.iter().find(|feed| feed.id == id)
}

// ---------------------------------------------------------------- tracker

pub const TRACKED_SUBJECTS: &[TrackedSubject] = &[
    TrackedSubject { id: "CH001", confidence: 98.5, last_seen: "2s ago", zone: "Barn A-1", behavior_score: 85, status: SubjectStatus::Normal },
    TrackedSubject { id: "CH002", confidence: 96.2, last_seen: "1s ago", zone: "Barn A-1", behavior_score: 92, status: SubjectStatus::Normal },
    TrackedSubject { id: "CH003", confidence: 94.8, last_seen: "3s ago", zone: "Barn A-2", behavior_score: 45, status: SubjectStatus::Alert },
    TrackedSubject { id: "CH004", confidence: 97.1, last_seen: "1s ago", zone: "Barn A-1", behavior_score: 68, status: SubjectStatus::Watch },
    TrackedSubject { id: "CH005", confidence: 95.5, last_seen: "2s ago", zone: "Outdoor-1", behavior_score: 88, status: SubjectStatus::Normal },
    TrackedSubject { id: "CH006", confidence: 93.2, last_seen: "4s ago", zone: "Barn B-1", behavior_score: 91, status: SubjectStatus::Normal },
    TrackedSubject { id: "CH007", confidence: 96.8, last_seen: "1s ago", zone: "Barn A-2", behavior_score: 52, status: SubjectStatus::Watch },
    TrackedSubject { id: "CH008", confidence: 98.1, last_seen: "2s ago", zone: "Outdoor-1", behavior_score: 95, status: SubjectStatus::Normal },
];

pub const TRACKING_TOTALS: TrackingTotals = TrackingTotals {
    total: 245,
    active: 238,
    avg_confidence: 96.2,
    confidence_threshold: 95.0,
};

pub const TRACKING_PERFORMANCE: &[Gauge] = &[
    Gauge { label: "Detection Accuracy", value: 96.8 },
    Gauge { label: "Track Retention", value: 94.2 },
    Gauge { label: "ID Consistency", value: 91.5 },
];

pub const TRACKER_MODEL_LABEL: &str = "YOLOv8 + DeepSORT";

// ---------------------------------------------------------------- comportement

pub const BEHAVIOR_PATTERNS: &[BehaviorPattern] = &[
    BehaviorPattern {
        id: "lethargy",
        behavior: "Reduced Movement",
        severity: PatternSeverity::High,
        count: 12,
        percentage: 4.9,
        description: "Birds showing significantly less movement than normal",
    },
    BehaviorPattern {
        id: "isolation",
        behavior: "Flock Isolation",
        severity: PatternSeverity::Medium,
        count: 8,
        percentage: 3.3,
        description: "Individual birds separating from the main group",
    },
    BehaviorPattern {
        id: "drooping",
        behavior: "Wing Drooping",
        severity: PatternSeverity::Medium,
        count: 15,
        percentage: 6.1,
        description: "Wings hanging lower than normal posture",
    },
    BehaviorPattern {
        id: "posture",
        behavior: "Abnormal Posture",
        severity: PatternSeverity::Low,
        count: 5,
        percentage: 2.0,
        description: "Unusual body positioning or stance",
    },
    BehaviorPattern {
        id: "trembling",
        behavior: "Trembling/Shaking",
        severity: PatternSeverity::High,
        count: 3,
        percentage: 1.2,
        description: "Visible shaking or trembling movements",
    },
];

pub const ACTIVITY_24H: &[ActivitySample] = &[
    ActivitySample { time: "00:00", normal: 85, abnormal: 15 },
    ActivitySample { time: "04:00", normal: 92, abnormal: 8 },
    ActivitySample { time: "08:00", normal: 78, abnormal: 22 },
    ActivitySample { time: "12:00", normal: 82, abnormal: 18 },
    ActivitySample { time: "16:00", normal: 79, abnormal: 21 },
    ActivitySample { time: "20:00", normal: 88, abnormal: 12 },
];

pub const POSE_DISTRIBUTION: &[PoseShare] = &[
    PoseShare { pose: "Standing", count: 185, percentage: 75.5 },
    PoseShare { pose: "Walking", count: 42, percentage: 17.1 },
    PoseShare { pose: "Feeding", count: 12, percentage: 4.9 },
    PoseShare { pose: "Resting", count: 6, percentage: 2.4 },
];

pub const BEHAVIOR_OVERVIEW: &[Figure] = &[
    Figure { label: "Normal Behavior", value: "82.5%", caption: None },
    Figure { label: "Abnormal Patterns", value: "43", caption: None },
    Figure { label: "AI Confidence", value: "94.7%", caption: None },
    Figure { label: "Analysis Rate", value: "30 FPS", caption: None },
];

pub const BEHAVIOR_MODEL_PERFORMANCE: &[Gauge] = &[
    Gauge { label: "Pose Detection Accuracy", value: 96.3 },
    Gauge { label: "Behavior Classification", value: 91.8 },
    Gauge { label: "Temporal Analysis", value: 88.5 },
];

// ---------------------------------------------------------------- santé

pub const HEALTH_RISKS: &[HealthRisk] = &[
    HealthRisk {
        id: "HR001",
        subject_id: "CH003",
        level: RiskLevel::Critical,
        confidence: 94.2,
        symptoms: &["Reduced movement", "Wing drooping", "Isolation"],
        last_updated: "2 mins ago",
        zone: "Barn A-2",
        recommendation: "Immediate veterinary examination required",
    },
    HealthRisk {
        id: "HR002",
        subject_id: "CH007",
        level: RiskLevel::Watch,
        confidence: 76.8,
        symptoms: &["Reduced movement", "Abnormal posture"],
        last_updated: "5 mins ago",
        zone: "Barn A-2",
        recommendation: "Monitor closely for 24 hours",
    },
    HealthRisk {
        id: "HR003",
        subject_id: "CH004",
        level: RiskLevel::Watch,
        confidence: 68.3,
        symptoms: &["Isolation tendency"],
        last_updated: "8 mins ago",
        zone: "Barn A-1",
        recommendation: "Continue observation, check feed intake",
    },
];

pub const HEALTH_OVERVIEW: HealthOverview = HealthOverview {
    total: 245,
    healthy: 230,
    watch: 12,
    critical: 3,
};

pub const RISK_DISTRIBUTION: &[RiskSlice] = &[
    RiskSlice { name: "Normal", value: 230, color: "#22c55e" },
    RiskSlice { name: "Watch List", value: 12, color: "#eab308" },
    RiskSlice { name: "Critical", value: 3, color: "#ef4444" },
];

pub const RISK_TREND_5D: &[RiskTrendPoint] = &[
    RiskTrendPoint { time: "Mon", normal: 240, watch: 5, critical: 0 },
    RiskTrendPoint { time: "Tue", normal: 238, watch: 6, critical: 1 },
    RiskTrendPoint { time: "Wed", normal: 235, watch: 8, critical: 2 },
    RiskTrendPoint { time: "Thu", normal: 232, watch: 10, critical: 3 },
    RiskTrendPoint { time: "Fri", normal: 230, watch: 12, critical: 3 },
];

pub const HEALTH_MODEL_LABEL: &str = "CNN+LSTM";

pub const HEALTH_MODEL_PERFORMANCE: &[Gauge] = &[
    Gauge { label: "Classification Accuracy", value: 92.4 },
    Gauge { label: "Temporal Pattern Detection", value: 89.7 },
    Gauge { label: "False Positive Rate", value: 3.2 },
];

// ---------------------------------------------------------------- notifications

/// Temps de réponse moyen affiché par le centre d'alertes
pub const RESPONSE_TIME: &str = "2.3m";

/// Construit les notifications de démarrage, horodatées relativement à `now`
pub fn seed_notifications(now: OffsetDateTime) -> Vec<Notification> {
    vec![
        Notification {
            id: "N001".into(),
            severity: Severity::Critical,
            title: "Critical Health Alert".into(),
            message: "Bird CH003 showing severe lethargy and isolation behavior. Immediate veterinary attention required.".into(),
            subject_id: Some("CH003".into()),
            zone: "Barn A-2".into(),
            created_at: now - Duration::minutes(2),
            read: false,
            coordinates: Some(Coordinates { x: 156, y: 89 }),
            snapshot: None,
        },
        Notification {
            id: "N002".into(),
            severity: Severity::Warning,
            title: "Behavioral Anomaly Detected".into(),
            message: "Bird CH007 exhibiting reduced movement patterns. Monitoring for 24 hours recommended.".into(),
            subject_id: Some("CH007".into()),
            zone: "Barn A-2".into(),
            created_at: now - Duration::minutes(8),
            read: false,
            coordinates: Some(Coordinates { x: 203, y: 134 }),
            snapshot: None,
        },
        Notification {
            id: "N003".into(),
            severity: Severity::Warning,
            title: "Environmental Alert".into(),
            message: "Temperature in Barn B-1 has risen above optimal range (25.2°C). Check ventilation system.".into(),
            subject_id: None,
            zone: "Barn B-1".into(),
            created_at: now - Duration::minutes(15),
            read: true,
            coordinates: None,
            snapshot: None,
        },
        Notification {
            id: "N004".into(),
            severity: Severity::Info,
            title: "Daily Health Summary".into(),
            message: "Flock health assessment completed. 94.1% of birds showing normal behavior patterns.".into(),
            subject_id: None,
            zone: "All Zones".into(),
            created_at: now - Duration::hours(2),
            read: true,
            coordinates: None,
            snapshot: None,
        },
        Notification {
            id: "N005".into(),
            severity: Severity::Critical,
            title: "Equipment Malfunction".into(),
            message: "Camera feed from Barn A-3 offline. Manual inspection may be required.".into(),
            subject_id: None,
            zone: "Barn A-3".into(),
            created_at: now - Duration::hours(3),
            read: false,
            coordinates: None,
            snapshot: None,
        },
    ]
}

// ---------------------------------------------------------------- rapports

pub const FLOCK_HEALTH_7D: &[FlockHealthPoint] = &[
    FlockHealthPoint { date: "Mon", healthy: 238, watch: 5, critical: 2, total: 245 },
    FlockHealthPoint { date: "Tue", healthy: 235, watch: 7, critical: 3, total: 245 },
    FlockHealthPoint { date: "Wed", healthy: 232, watch: 10, critical: 3, total: 245 },
    FlockHealthPoint { date: "Thu", healthy: 230, watch: 12, critical: 3, total: 245 },
    FlockHealthPoint { date: "Fri", healthy: 230, watch: 12, critical: 3, total: 245 },
    FlockHealthPoint { date: "Sat", healthy: 233, watch: 9, critical: 3, total: 245 },
    FlockHealthPoint { date: "Sun", healthy: 235, watch: 8, critical: 2, total: 245 },
];

pub const REPORT_BEHAVIOR: &[BehaviorShare] = &[
    BehaviorShare { behavior: "Normal Activity", count: 210, percentage: 85.7 },
    BehaviorShare { behavior: "Reduced Movement", count: 20, percentage: 8.2 },
    BehaviorShare { behavior: "Isolation", count: 8, percentage: 3.3 },
    BehaviorShare { behavior: "Wing Drooping", count: 5, percentage: 2.0 },
    BehaviorShare { behavior: "Abnormal Posture", count: 2, percentage: 0.8 },
];

pub const OUTBREAK_RISK: &[ZoneOutbreakRisk] = &[
    ZoneOutbreakRisk { zone: "Barn A-1", risk: OutbreakRisk::Low, score: 15, birds: 85, factors: &["Good ventilation", "Normal behavior"] },
    ZoneOutbreakRisk { zone: "Barn A-2", risk: OutbreakRisk::Medium, score: 45, birds: 78, factors: &["3 sick birds", "Slight temp increase"] },
    ZoneOutbreakRisk { zone: "Barn B-1", risk: OutbreakRisk::Low, score: 22, birds: 67, factors: &["Stable environment", "Good feed intake"] },
    ZoneOutbreakRisk { zone: "Outdoor-1", risk: OutbreakRisk::Low, score: 8, birds: 15, factors: &["Open air", "Active movement"] },
];

pub const RISK_FORECAST_7D: &[RiskForecast] = &[
    RiskForecast { day: "Today", predicted: 25 },
    RiskForecast { day: "Day 2", predicted: 28 },
    RiskForecast { day: "Day 3", predicted: 32 },
    RiskForecast { day: "Day 4", predicted: 30 },
    RiskForecast { day: "Day 5", predicted: 27 },
    RiskForecast { day: "Day 6", predicted: 24 },
    RiskForecast { day: "Day 7", predicted: 22 },
];

pub const PERFORMANCE: PerformanceMetrics = PerformanceMetrics {
    detection_accuracy: 96.4,
    false_positive_rate: 3.2,
    response_time_minutes: 2.3,
    system_uptime: 99.8,
    birds_covered: 245,
    zones_monitored: 4,
};

pub const REPORT_SUMMARY: &[Figure] = &[
    Figure { label: "Overall Health", value: "95.9%", caption: Some("+2.1% from last week") },
    Figure { label: "At Risk Birds", value: "15", caption: Some("-3 from yesterday") },
    Figure { label: "Detection Rate", value: "96.4%", caption: Some("Excellent performance") },
];
