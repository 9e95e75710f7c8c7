use super::{gauges, stat_with, ItemCard, PanelView, Section, Widget};
use crate::fixtures::{TRACKED_SUBJECTS, TRACKER_MODEL_LABEL, TRACKING_PERFORMANCE, TRACKING_TOTALS};
use crate::metrics::{tracking_accuracy_ratio, BehaviorBand};
use crate::models::TrackedSubject;
use crate::shell::PanelId;
use crate::style::{Icon, Styled, Tone};

fn subject_card(subject: &TrackedSubject) -> Widget {
    let band = BehaviorBand::from_score(subject.behavior_score);
    let style = subject.status.style();
    Widget::Item(
        ItemCard::new(subject.id, style)
            .id(subject.id)
            .subtitle(format!("{} • {}", subject.zone, subject.last_seen))
            .badge(subject.status.as_str(), style.tone)
            .badge(format!("Behavior: {}%", subject.behavior_score), band.style().tone)
            .line(format!("Confidence: {}%", subject.confidence)),
    )
}

pub fn render() -> PanelView {
    let totals = TRACKING_TOTALS;
    let accuracy = tracking_accuracy_ratio(totals.active, totals.total);

    let overview = vec![
        stat_with("Total Birds", totals.total.to_string(), Tone::Info, Icon::Eye, None),
        stat_with("Actively Tracked", totals.active.to_string(), Tone::Positive, Icon::Activity, None),
        stat_with("Tracking Accuracy", format!("{accuracy}%"), Tone::Accent, Icon::CheckCircle, None),
        stat_with(
            "Avg Confidence",
            format!("{}%", totals.avg_confidence),
            Tone::Warning,
            Icon::Activity,
            None,
        ),
    ];

    PanelView {
        panel: PanelId::Tracker,
        title: "Chicken Tracker".into(),
        sections: vec![
            Section::grid(None, 4, overview),
            Section::stack("Individual Bird Tracking", TRACKED_SUBJECTS.iter().map(subject_card).collect())
                .with_note(format!("Tracked with {TRACKER_MODEL_LABEL}")),
            Section::grid(Some("Tracking Performance Metrics"), 3, gauges(TRACKING_PERFORMANCE)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_card_uses_derived_ratio() {
        let view = render();
        let accuracy = view.sections[0].widgets.iter().find_map(|w| match w {
            Widget::Stat(card) if card.label == "Tracking Accuracy" => Some(card.value.clone()),
            _ => None,
        });
        assert_eq!(accuracy.as_deref(), Some("97.1%"));
    }

    #[test]
    fn subject_badges_follow_status_and_band() {
        let view = render();
        let ch003 = view.sections[1].widgets.iter().find_map(|w| match w {
            Widget::Item(item) if item.id.as_deref() == Some("CH003") => Some(item.clone()),
            _ => None,
        });
        let ch003 = ch003.expect("CH003 listed");
        assert_eq!(ch003.badges[0].text, "alert");
        assert_eq!(ch003.badges[0].tone, Tone::Critical);
        assert_eq!(ch003.badges[1].tone, Tone::Critical);
    }
}
