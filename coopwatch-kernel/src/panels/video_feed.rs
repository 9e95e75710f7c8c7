use super::{stat_with, Action, ActionKind, ItemCard, PanelView, Section, Widget};
use crate::fixtures::FEEDS;
use crate::models::FeedDescriptor;
use crate::shell::{DashboardShell, PanelId};
use crate::style::{Icon, Styled, Tone};

fn feed_card(feed: &FeedDescriptor, selected: bool) -> Widget {
    let style = feed.status.style();
    Widget::Item(
        ItemCard::new(feed.name, style)
            .id(feed.id)
            .badge(feed.status.as_str(), style.tone)
            .line(feed.location)
            .line(format!("Count: {} birds", feed.subject_count))
            .line(format!("{}°C • {}% humidity", feed.temperature, feed.humidity))
            .action(Action::on(ActionKind::SelectFeed, "Select", feed.id))
            .selected(selected),
    )
}

/// Liste des flux + détail du flux sélectionné
pub fn render(shell: &DashboardShell) -> PanelView {
    let selected = shell.selected_feed();

    let feeds = FEEDS
        .iter()
        .map(|feed| feed_card(feed, feed.id == selected.id))
        .collect();

    let detail = vec![
        stat_with("Birds Detected", selected.subject_count.to_string(), Tone::Info, Icon::Camera, None),
        stat_with("Temperature", format!("{}°C", selected.temperature), Tone::Positive, Icon::Activity, None),
        stat_with("Humidity", format!("{}%", selected.humidity), Tone::Accent, Icon::Activity, None),
    ];

    PanelView {
        panel: PanelId::VideoFeed,
        title: "Video Feed".into(),
        sections: vec![
            Section::stack("Available Feeds", feeds),
            Section::grid(Some(selected.name), 3, detail)
                .with_note(format!("{} • {}", selected.status.as_str().to_uppercase(), selected.location)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_feed_is_marked_and_detailed() {
        let mut shell = DashboardShell::default();
        shell.select_feed("barn-b-1").unwrap();
        let view = render(&shell);

        let selected: Vec<_> = view.sections[0]
            .widgets
            .iter()
            .filter_map(|w| match w {
                Widget::Item(item) if item.selected => item.id.clone(),
                _ => None,
            })
            .collect();
        assert_eq!(selected, ["barn-b-1"]);
        assert_eq!(view.sections[1].title.as_deref(), Some("Barn B - Zone 1"));

        match &view.sections[1].widgets[0] {
            Widget::Stat(card) => assert_eq!(card.value, "167"),
            other => panic!("unexpected widget {other:?}"),
        }
    }
}
