/**
 * DERIVED METRICS - Compteurs et ratios calculés à la lecture
 *
 * Fonctions pures sur un snapshot du store ou sur les fixtures.
 * Pas de cache : les entrées comptent quelques dizaines de lignes au plus.
 */

use crate::models::{HealthRisk, Notification, RiskLevel, Severity};
use crate::shell::NotificationFilter;
use serde::Serialize;

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

pub fn critical_unread_count(notifications: &[Notification]) -> usize {
    notifications
        .iter()
        .filter(|n| n.severity == Severity::Critical && !n.read)
        .count()
}

/// Sous-séquence ordonnée des notifications de sévérité `level`
pub fn filter_by_severity(notifications: &[Notification], level: Severity) -> Vec<Notification> {
    notifications
        .iter()
        .filter(|n| n.severity == level)
        .cloned()
        .collect()
}

/// Filtre correspondant à l'onglet choisi dans le centre d'alertes
pub fn filter_by_view(notifications: &[Notification], filter: NotificationFilter) -> Vec<Notification> {
    match filter.severity() {
        Some(level) => filter_by_severity(notifications, level),
        None => notifications.to_vec(),
    }
}

/// Pourcentage `active / total` à une décimale, arrondi au demi supérieur.
///
/// Calcul en dixièmes de pourcent sur des entiers : `238 / 245` donne `"97.1"`.
/// Un total nul donne `"0.0"`.
pub fn tracking_accuracy_ratio(active: u32, total: u32) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    let (active, total) = (u64::from(active), u64::from(total));
    let tenths = (active * 2000 + total) / (2 * total);
    format!("{}.{}", tenths / 10, tenths % 10)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotificationSummary {
    pub total: usize,
    pub unread: usize,
    pub critical_unread: usize,
}

pub fn summarize(notifications: &[Notification]) -> NotificationSummary {
    NotificationSummary {
        total: notifications.len(),
        unread: unread_count(notifications),
        critical_unread: critical_unread_count(notifications),
    }
}

pub fn risks_at_level(risks: &[HealthRisk], level: RiskLevel) -> Vec<HealthRisk> {
    risks.iter().filter(|risk| risk.level == level).copied().collect()
}

/// Tranche d'un score de comportement (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BehaviorBand {
    Good,
    Fair,
    Poor,
}

impl BehaviorBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => BehaviorBand::Good,
            60..=79 => BehaviorBand::Fair,
            _ => BehaviorBand::Poor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{seed_notifications, HEALTH_RISKS};
    use time::macros::datetime;

    fn seed() -> Vec<Notification> {
        seed_notifications(datetime!(2026-10-19 12:00 UTC))
    }

    #[test]
    fn tracking_ratio_rounds_half_up() {
        assert_eq!(tracking_accuracy_ratio(238, 245), "97.1");
        assert_eq!(tracking_accuracy_ratio(1, 16), "6.3");
        assert_eq!(tracking_accuracy_ratio(1, 8), "12.5");
        assert_eq!(tracking_accuracy_ratio(2, 3), "66.7");
        assert_eq!(tracking_accuracy_ratio(1, 3), "33.3");
        assert_eq!(tracking_accuracy_ratio(245, 245), "100.0");
        assert_eq!(tracking_accuracy_ratio(0, 245), "0.0");
    }

    #[test]
    fn tracking_ratio_empty_total() {
        assert_eq!(tracking_accuracy_ratio(0, 0), "0.0");
    }

    #[test]
    fn filter_preserves_order_and_severity() {
        let notifications = seed();
        let critical = filter_by_severity(&notifications, Severity::Critical);
        let ids: Vec<_> = critical.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["N001", "N005"]);

        let warnings = filter_by_severity(&notifications, Severity::Warning);
        assert!(warnings.iter().all(|n| n.severity == Severity::Warning));
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn view_filter_all_keeps_everything() {
        let notifications = seed();
        assert_eq!(filter_by_view(&notifications, NotificationFilter::All), notifications);
        assert_eq!(filter_by_view(&notifications, NotificationFilter::Info).len(), 1);
    }

    #[test]
    fn summary_of_seed() {
        let summary = summarize(&seed());
        assert_eq!(
            summary,
            NotificationSummary { total: 5, unread: 3, critical_unread: 2 }
        );
    }

    #[test]
    fn critical_risks_from_fixtures() {
        let critical = risks_at_level(HEALTH_RISKS, RiskLevel::Critical);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].subject_id, "CH003");
    }

    #[test]
    fn behavior_bands() {
        assert_eq!(BehaviorBand::from_score(95), BehaviorBand::Good);
        assert_eq!(BehaviorBand::from_score(80), BehaviorBand::Good);
        assert_eq!(BehaviorBand::from_score(68), BehaviorBand::Fair);
        assert_eq!(BehaviorBand::from_score(60), BehaviorBand::Fair);
        assert_eq!(BehaviorBand::from_score(45), BehaviorBand::Poor);
    }
}
