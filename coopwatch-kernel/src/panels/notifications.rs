use super::{
    stat_with, Action, ActionKind, Banner, Control, ControlOption, Controls, ItemCard, PanelView, Section, StatCard,
    Widget,
};
use crate::fixtures::RESPONSE_TIME;
use crate::metrics::{filter_by_view, summarize};
use crate::models::{Notification, Severity};
use crate::shell::{NotificationFilter, PanelId};
use crate::style::{Icon, Styled, Tone};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const DISPLAY_TS: &[BorrowedFormatItem<'static>] = format_description!("[month repr:short] [day], [hour]:[minute]");

/// Horodatage affiché sur une alerte, ex: `Oct 19, 11:58`
pub fn display_time(ts: OffsetDateTime) -> String {
    ts.format(DISPLAY_TS).unwrap_or_default()
}

/// Texte de la bannière, `None` si aucune alerte critique non lue
pub fn critical_banner_text(critical_unread: usize) -> Option<String> {
    match critical_unread {
        0 => None,
        1 => Some("1 Critical Alert Requiring Immediate Attention".to_string()),
        n => Some(format!("{n} Critical Alerts Requiring Immediate Attention")),
    }
}

fn notification_card(n: &Notification) -> Widget {
    let mut subtitle = format!("{} • {}", n.zone, display_time(n.created_at));
    if let Some(subject) = &n.subject_id {
        subtitle.push_str(&format!(" • Bird: {subject}"));
    }

    let mut card = ItemCard::new(n.title.as_str(), n.severity.style())
        .id(&n.id)
        .subtitle(subtitle)
        .line(n.message.as_str())
        .emphasized(!n.read);
    if !n.read {
        card = card.badge("NEW", Tone::Info);
    }
    if n.coordinates.is_some() {
        card = card.action(Action::on(ActionKind::View, "View", &n.id));
    }
    if !n.read {
        card = card.action(Action::on(ActionKind::MarkRead, "Mark Read", &n.id));
    }
    Widget::Item(card.action(Action::on(ActionKind::Dismiss, "Dismiss", &n.id)))
}

fn filter_controls(filter: NotificationFilter) -> Widget {
    Widget::Controls(Controls {
        controls: vec![Control {
            name: "notification_filter",
            selected: filter.as_str(),
            options: NotificationFilter::ALL
                .iter()
                .map(|f| ControlOption { value: f.as_str(), label: f.label() })
                .collect(),
        }],
        actions: vec![Action::new(ActionKind::MarkAllRead, "Mark All Read")],
    })
}

/// Centre d'alertes : compteurs, bannière critique, liste filtrée
pub fn render(notifications: &[Notification], filter: NotificationFilter) -> PanelView {
    let summary = summarize(notifications);

    let unread = Widget::Stat(StatCard {
        label: "Unread".into(),
        value: summary.unread.to_string(),
        tone: Tone::Warning,
        icon: Some(Icon::Bell),
        caption: None,
        counter: (summary.unread > 0).then_some(summary.unread),
    });
    let stats = vec![
        stat_with("Total Alerts", summary.total.to_string(), Tone::Info, Icon::Bell, None),
        unread,
        stat_with("Critical", summary.critical_unread.to_string(), Tone::Critical, Icon::AlertTriangle, None),
        stat_with("Response Time", RESPONSE_TIME, Tone::Positive, Icon::CheckCircle, None),
    ];

    let mut sections = vec![Section::grid(None, 4, stats)];

    if let Some(text) = critical_banner_text(summary.critical_unread) {
        let banner = Widget::Banner(Banner {
            style: Severity::Critical.style(),
            text,
            action: Some(Action::on(ActionKind::SelectFilter, "View Critical", NotificationFilter::Critical.as_str())),
        });
        sections.push(Section::grid(None, 1, vec![banner]));
    }

    let mut list = vec![filter_controls(filter)];
    list.extend(filter_by_view(notifications, filter).iter().map(notification_card));
    let mut section = Section::stack(filter.label(), list);
    if filter == NotificationFilter::Critical {
        if let Some(Widget::Controls(controls)) = section.widgets.first_mut() {
            controls.actions.push(Action::new(ActionKind::AlertManager, "Alert Manager"));
        }
    }
    sections.push(section);

    PanelView { panel: PanelId::Notifications, title: "Notification Center".into(), sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_notifications;
    use crate::notifications::NotificationStore;
    use time::macros::datetime;

    fn now() -> OffsetDateTime {
        datetime!(2026-10-19 12:00 UTC)
    }

    fn items(view: &PanelView) -> Vec<ItemCard> {
        view.sections
            .iter()
            .flat_map(|s| s.widgets.iter())
            .filter_map(|w| match w {
                Widget::Item(item) => Some(item.clone()),
                _ => None,
            })
            .collect()
    }

    fn banner(view: &PanelView) -> Option<String> {
        view.sections.iter().flat_map(|s| s.widgets.iter()).find_map(|w| match w {
            Widget::Banner(b) => Some(b.text.clone()),
            _ => None,
        })
    }

    #[test]
    fn banner_pluralizes_and_disappears() {
        let mut store = NotificationStore::with_seed(seed_notifications(now()));
        assert_eq!(
            banner(&render(store.notifications(), NotificationFilter::All)).as_deref(),
            Some("2 Critical Alerts Requiring Immediate Attention")
        );

        store.mark_read("N001");
        assert_eq!(
            banner(&render(store.notifications(), NotificationFilter::All)).as_deref(),
            Some("1 Critical Alert Requiring Immediate Attention")
        );

        store.dismiss("N005");
        assert_eq!(banner(&render(store.notifications(), NotificationFilter::All)), None);
    }

    #[test]
    fn actions_follow_read_state_and_coordinates() {
        let view = render(&seed_notifications(now()), NotificationFilter::All);
        let cards = items(&view);
        let kinds = |id: &str| -> Vec<ActionKind> {
            let card = cards.iter().find(|c| c.id.as_deref() == Some(id)).expect("card");
            card.actions.iter().map(|a| a.kind).collect()
        };

        assert_eq!(kinds("N001"), [ActionKind::View, ActionKind::MarkRead, ActionKind::Dismiss]);
        assert_eq!(kinds("N003"), [ActionKind::Dismiss]);
        assert_eq!(kinds("N005"), [ActionKind::MarkRead, ActionKind::Dismiss]);
    }

    #[test]
    fn unread_items_are_badged_new() {
        let view = render(&seed_notifications(now()), NotificationFilter::All);
        let new: Vec<_> = items(&view)
            .into_iter()
            .filter(|c| c.badges.iter().any(|b| b.text == "NEW"))
            .filter_map(|c| c.id)
            .collect();
        assert_eq!(new, ["N001", "N002", "N005"]);
    }

    #[test]
    fn filter_narrows_list_and_titles_it() {
        let view = render(&seed_notifications(now()), NotificationFilter::Warning);
        let list = view.sections.last().expect("list");
        assert_eq!(list.title.as_deref(), Some("Warning Alerts"));
        let ids: Vec<_> = items(&view).into_iter().filter_map(|c| c.id).collect();
        assert_eq!(ids, ["N002", "N003"]);
    }

    #[test]
    fn subtitle_shows_zone_time_and_bird() {
        let view = render(&seed_notifications(now()), NotificationFilter::All);
        let first = &items(&view)[0];
        assert_eq!(first.subtitle.as_deref(), Some("Barn A-2 • Oct 19, 11:58 • Bird: CH003"));
    }
}
