/**
 * NOTIFICATION STORE - Centre d'alertes du dashboard
 *
 * RÔLE :
 * Détient la liste des notifications et applique les deux seules transitions
 * autorisées : marquer comme lue, et supprimer (dismiss).
 *
 * CYCLE DE VIE :
 * - Non lue + présente à la création (seed au démarrage)
 * - mark_read : non lue → lue (idempotent)
 * - dismiss   : suppression définitive, pas d'annulation ni d'archive
 * - Toute opération sur un id inconnu ou déjà supprimé est un no-op
 *
 * L'ordre d'insertion est conservé dans les snapshots.
 */

use crate::models::Notification;
use std::collections::HashSet;
use tracing::debug;

/// Résultat d'une transition : utile pour les logs, jamais une erreur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Unchanged,
}

impl Transition {
    pub fn applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

#[derive(Debug, Default, Clone)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store déjà peuplé avec `seed`
    pub fn with_seed<I: IntoIterator<Item = Notification>>(seed: I) -> Self {
        let mut store = Self::new();
        store.initialize(seed);
        store
    }

    /// Peuple le store. En cas d'id dupliqué dans le seed, la première
    /// occurrence est gardée : un id reste unique dans le store.
    pub fn initialize<I: IntoIterator<Item = Notification>>(&mut self, seed: I) {
        let mut seen = HashSet::new();
        self.notifications = seed
            .into_iter()
            .filter(|notif| {
                let fresh = seen.insert(notif.id.clone());
                if !fresh {
                    debug!(id = %notif.id, "duplicate notification id in seed, keeping first");
                }
                fresh
            })
            .collect();
        debug!(count = self.notifications.len(), "notification store initialized");
    }

    pub fn mark_read(&mut self, id: &str) -> Transition {
        match self.notifications.iter_mut().find(|notif| notif.id == id) {
            Some(notif) if !notif.read => {
                notif.read = true;
                debug!(id, "notification marked as read");
                Transition::Applied
            }
            Some(_) => Transition::Unchanged,
            None => {
                debug!(id, "mark_read on unknown notification ignored");
                Transition::Unchanged
            }
        }
    }

    /// Marque toutes les notifications présentes comme lues.
    /// Retourne le nombre de notifications modifiées.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for notif in self.notifications.iter_mut().filter(|n| !n.read) {
            notif.read = true;
            changed += 1;
        }
        debug!(changed, "all notifications marked as read");
        changed
    }

    pub fn dismiss(&mut self, id: &str) -> Transition {
        let initial_len = self.notifications.len();
        self.notifications.retain(|notif| notif.id != id);

        if self.notifications.len() < initial_len {
            debug!(id, "notification dismissed");
            Transition::Applied
        } else {
            debug!(id, "dismiss on unknown notification ignored");
            Transition::Unchanged
        }
    }

    /// Copie ordonnée de toutes les notifications présentes
    pub fn snapshot(&self) -> Vec<Notification> {
        self.notifications.clone()
    }

    /// Vue empruntée, pour les métriques dérivées
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.notifications.iter().find(|notif| notif.id == id)
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_notifications;
    use crate::metrics::{critical_unread_count, unread_count};
    use time::macros::datetime;

    fn seeded() -> NotificationStore {
        NotificationStore::with_seed(seed_notifications(datetime!(2026-10-19 12:00 UTC)))
    }

    #[test]
    fn seed_counts_match_scenario() {
        let store = seeded();
        assert_eq!(store.len(), 5);
        assert_eq!(unread_count(store.notifications()), 3);
        assert_eq!(critical_unread_count(store.notifications()), 2);
    }

    #[test]
    fn mark_read_only_touches_target() {
        let mut store = seeded();
        let before = store.snapshot();

        assert_eq!(store.mark_read("N001"), Transition::Applied);
        let after = store.snapshot();

        assert!(after[0].read);
        assert_eq!(&before[1..], &after[1..]);
        assert_eq!(unread_count(&after), 2);
    }

    #[test]
    fn mark_read_is_idempotent() {
        let mut once = seeded();
        once.mark_read("N002");

        let mut twice = seeded();
        twice.mark_read("N002");
        assert_eq!(twice.mark_read("N002"), Transition::Unchanged);

        assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn dismiss_removes_exactly_one() {
        let mut store = seeded();
        assert_eq!(store.dismiss("N005"), Transition::Applied);
        assert_eq!(store.len(), 4);
        assert!(store.snapshot().iter().all(|n| n.id != "N005"));

        assert_eq!(store.dismiss("N005"), Transition::Unchanged);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn dismiss_unknown_is_noop() {
        let mut store = seeded();
        let before = store.snapshot();
        assert_eq!(store.dismiss("N999"), Transition::Unchanged);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn dismissed_is_terminal() {
        let mut store = seeded();
        store.dismiss("N001");
        let before = store.snapshot();

        assert_eq!(store.mark_read("N001"), Transition::Unchanged);
        assert_eq!(store.snapshot(), before);
        assert!(store.get("N001").is_none());
    }

    #[test]
    fn snapshot_keeps_insertion_order() {
        let mut store = seeded();
        store.dismiss("N003");
        let ids: Vec<_> = store.snapshot().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, ["N001", "N002", "N004", "N005"]);
    }

    #[test]
    fn unread_count_follows_any_sequence() {
        let mut store = seeded();
        store.mark_read("N005");
        store.dismiss("N002");
        store.mark_read("N999");
        store.dismiss("N004");

        let snapshot = store.snapshot();
        let expected = snapshot.iter().filter(|n| !n.read).count();
        assert_eq!(unread_count(&snapshot), expected);
        assert_eq!(expected, 1);
    }

    #[test]
    fn mark_all_read_reports_changes() {
        let mut store = seeded();
        assert_eq!(store.mark_all_read(), 3);
        assert_eq!(unread_count(store.notifications()), 0);
        assert_eq!(store.mark_all_read(), 0);
    }

    #[test]
    fn duplicate_seed_ids_keep_first() {
        let mut seed = seed_notifications(datetime!(2026-10-19 12:00 UTC));
        let mut dup = seed[0].clone();
        dup.title = "Duplicate".into();
        seed.push(dup);

        let store = NotificationStore::with_seed(seed);
        assert_eq!(store.len(), 5);
        assert_eq!(store.get("N001").map(|n| n.title.as_str()), Some("Critical Health Alert"));
    }
}
