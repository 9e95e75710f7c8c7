/**
 * DASHBOARD SHELL - État de sélection de l'interface
 *
 * RÔLE : Onglet actif, flux vidéo sélectionné, type/période/section de
 * rapport, filtre du centre d'alertes. Chaque valeur a un défaut, n'est
 * modifiée que par une sélection directe, et n'est lue que par un panneau.
 */

use crate::config::DashboardConf;
use crate::error::KernelError;
use crate::fixtures::{find_feed, FEEDS};
use crate::models::{FeedDescriptor, Severity};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelId {
    #[default]
    VideoFeed,
    Tracker,
    Behavior,
    Health,
    Notifications,
    Reports,
}

impl PanelId {
    pub const ALL: [PanelId; 6] = [
        PanelId::VideoFeed,
        PanelId::Tracker,
        PanelId::Behavior,
        PanelId::Health,
        PanelId::Notifications,
        PanelId::Reports,
    ];

    /// Identifiant d'URL (`video-feed`, `tracker`...) vers panneau
    pub fn parse(id: &str) -> Option<PanelId> {
        PanelId::ALL.into_iter().find(|panel| panel.as_str() == id)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelId::VideoFeed => "video-feed",
            PanelId::Tracker => "tracker",
            PanelId::Behavior => "behavior",
            PanelId::Health => "health",
            PanelId::Notifications => "notifications",
            PanelId::Reports => "reports",
        }
    }

    /// Libellé court de l'onglet
    pub fn tab_label(&self) -> &'static str {
        match self {
            PanelId::VideoFeed => "Video Feed",
            PanelId::Tracker => "Tracker",
            PanelId::Behavior => "Behavior",
            PanelId::Health => "Health",
            PanelId::Notifications => "Alerts",
            PanelId::Reports => "Reports",
        }
    }

    /// Nom de l'agent de surveillance présenté dans la barre d'état
    pub fn agent_name(&self) -> &'static str {
        match self {
            PanelId::VideoFeed => "Video Feed Collector",
            PanelId::Tracker => "Chicken Tracker",
            PanelId::Behavior => "Behavior Analyzer",
            PanelId::Health => "Health Risk Classifier",
            PanelId::Notifications => "Notification Agent",
            PanelId::Reports => "Report Generator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Outbreak,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [ReportType::Daily, ReportType::Weekly, ReportType::Monthly, ReportType::Outbreak];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Daily => "daily",
            ReportType::Weekly => "weekly",
            ReportType::Monthly => "monthly",
            ReportType::Outbreak => "outbreak",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Daily => "Daily Summary",
            ReportType::Weekly => "Weekly Report",
            ReportType::Monthly => "Monthly Analysis",
            ReportType::Outbreak => "Outbreak Risk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Day,
    #[default]
    Week,
    Month,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 3] = [ReportPeriod::Day, ReportPeriod::Week, ReportPeriod::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPeriod::Day => "day",
            ReportPeriod::Week => "week",
            ReportPeriod::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Day => "Last Day",
            ReportPeriod::Week => "Last Week",
            ReportPeriod::Month => "Last Month",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSection {
    #[default]
    Summary,
    Behavior,
    Outbreak,
    Performance,
}

impl ReportSection {
    pub const ALL: [ReportSection; 4] = [
        ReportSection::Summary,
        ReportSection::Behavior,
        ReportSection::Outbreak,
        ReportSection::Performance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSection::Summary => "summary",
            ReportSection::Behavior => "behavior",
            ReportSection::Outbreak => "outbreak",
            ReportSection::Performance => "performance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportSection::Summary => "Health Summary",
            ReportSection::Behavior => "Behavior Analysis",
            ReportSection::Outbreak => "Outbreak Risk",
            ReportSection::Performance => "Performance",
        }
    }
}

/// Onglet du centre d'alertes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationFilter {
    #[default]
    All,
    Critical,
    Warning,
    Info,
}

impl NotificationFilter {
    pub const ALL: [NotificationFilter; 4] = [
        NotificationFilter::All,
        NotificationFilter::Critical,
        NotificationFilter::Warning,
        NotificationFilter::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationFilter::All => "all",
            NotificationFilter::Critical => "critical",
            NotificationFilter::Warning => "warning",
            NotificationFilter::Info => "info",
        }
    }

    /// Titre de la liste affichée pour ce filtre
    pub fn label(&self) -> &'static str {
        match self {
            NotificationFilter::All => "All Notifications",
            NotificationFilter::Critical => "Critical Alerts",
            NotificationFilter::Warning => "Warning Alerts",
            NotificationFilter::Info => "Information",
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            NotificationFilter::All => None,
            NotificationFilter::Critical => Some(Severity::Critical),
            NotificationFilter::Warning => Some(Severity::Warning),
            NotificationFilter::Info => Some(Severity::Info),
        }
    }
}

/// Sélection faite par l'utilisateur (un clic)
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum Selection {
    Tab { tab: PanelId },
    Feed { feed_id: String },
    ReportType { report_type: ReportType },
    ReportPeriod { period: ReportPeriod },
    ReportSection { section: ReportSection },
    NotificationFilter { filter: NotificationFilter },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardShell {
    active_tab: PanelId,
    selected_feed: String,
    report_type: ReportType,
    report_period: ReportPeriod,
    report_section: ReportSection,
    notification_filter: NotificationFilter,
}

impl Default for DashboardShell {
    fn default() -> Self {
        Self {
            active_tab: PanelId::default(),
            selected_feed: FEEDS[0].id.to_string(),
            report_type: ReportType::default(),
            report_period: ReportPeriod::default(),
            report_section: ReportSection::default(),
            notification_filter: NotificationFilter::default(),
        }
    }
}

impl DashboardShell {
    /// Shell avec les défauts surchargés par la configuration
    pub fn from_config(conf: &DashboardConf) -> Self {
        Self {
            active_tab: conf.default_tab,
            report_type: conf.default_report_type,
            report_period: conf.default_period,
            ..Self::default()
        }
    }

    pub fn active_tab(&self) -> PanelId {
        self.active_tab
    }

    pub fn selected_feed_id(&self) -> &str {
        &self.selected_feed
    }

    /// Descripteur du flux sélectionné (toujours présent dans les fixtures)
    pub fn selected_feed(&self) -> &'static FeedDescriptor {
        find_feed(&self.selected_feed).unwrap_or(&FEEDS[0])
    }

    pub fn report_type(&self) -> ReportType {
        self.report_type
    }

    pub fn report_period(&self) -> ReportPeriod {
        self.report_period
    }

    pub fn report_section(&self) -> ReportSection {
        self.report_section
    }

    pub fn notification_filter(&self) -> NotificationFilter {
        self.notification_filter
    }

    pub fn select_tab(&mut self, tab: PanelId) {
        self.active_tab = tab;
    }

    /// Sélectionne un flux ; un id absent des fixtures est refusé et
    /// la sélection courante est conservée.
    pub fn select_feed(&mut self, feed_id: &str) -> Result<(), KernelError> {
        let feed = find_feed(feed_id).ok_or_else(|| KernelError::UnknownFeed(feed_id.to_string()))?;
        self.selected_feed = feed.id.to_string();
        Ok(())
    }

    pub fn select_report_type(&mut self, report_type: ReportType) {
        self.report_type = report_type;
    }

    pub fn select_report_period(&mut self, period: ReportPeriod) {
        self.report_period = period;
    }

    pub fn select_report_section(&mut self, section: ReportSection) {
        self.report_section = section;
    }

    pub fn select_notification_filter(&mut self, filter: NotificationFilter) {
        self.notification_filter = filter;
    }

    pub fn apply(&mut self, selection: Selection) -> Result<(), KernelError> {
        debug!(?selection, "applying selection");
        match selection {
            Selection::Tab { tab } => self.select_tab(tab),
            Selection::Feed { feed_id } => self.select_feed(&feed_id)?,
            Selection::ReportType { report_type } => self.select_report_type(report_type),
            Selection::ReportPeriod { period } => self.select_report_period(period),
            Selection::ReportSection { section } => self.select_report_section(section),
            Selection::NotificationFilter { filter } => self.select_notification_filter(filter),
        }
        Ok(())
    }
}
