use super::{gauges, stat, stat_with, ChartBinding, ChartKind, ItemCard, PanelView, Section, Widget};
use crate::fixtures::{ACTIVITY_24H, BEHAVIOR_MODEL_PERFORMANCE, BEHAVIOR_OVERVIEW, BEHAVIOR_PATTERNS, POSE_DISTRIBUTION};
use crate::models::BehaviorPattern;
use crate::shell::PanelId;
use crate::style::{Icon, Styled, Tone};

const OVERVIEW_STYLE: [(Tone, Icon); 4] = [
    (Tone::Positive, Icon::CheckCircle),
    (Tone::Critical, Icon::AlertTriangle),
    (Tone::Info, Icon::Activity),
    (Tone::Accent, Icon::Eye),
];

fn pattern_card(pattern: &BehaviorPattern) -> Widget {
    let style = pattern.severity.style();
    Widget::Item(
        ItemCard::new(pattern.behavior, style)
            .id(pattern.id)
            .badge(pattern.severity.as_str().to_uppercase(), style.tone)
            .line(pattern.description)
            .line(format!("{} birds", pattern.count))
            .line(format!("{}% of flock", pattern.percentage)),
    )
}

pub fn render() -> PanelView {
    let overview = BEHAVIOR_OVERVIEW
        .iter()
        .zip(OVERVIEW_STYLE)
        .map(|(figure, (tone, icon))| stat_with(figure.label, figure.value, tone, icon, figure.caption))
        .collect();

    let activity = ChartBinding::new(ChartKind::Line, "24h Activity Pattern", "time", ACTIVITY_24H)
        .series("normal", "#22c55e")
        .series("abnormal", "#ef4444");
    let poses = ChartBinding::new(ChartKind::Bar, "Pose Distribution", "pose", POSE_DISTRIBUTION)
        .series("count", "#3b82f6");

    let pose_cards = POSE_DISTRIBUTION
        .iter()
        .map(|share| stat(share.pose, format!("{} ({}%)", share.count, share.percentage), Tone::Info))
        .collect();

    PanelView {
        panel: PanelId::Behavior,
        title: "Behavior Analysis".into(),
        sections: vec![
            Section::grid(None, 4, overview),
            Section::stack("Abnormal Behavior Patterns", BEHAVIOR_PATTERNS.iter().map(pattern_card).collect()),
            Section::grid(None, 2, vec![Widget::Chart(activity), Widget::Chart(poses)]),
            Section::grid(Some("Pose Breakdown"), 4, pose_cards),
            Section::grid(Some("AI Model Performance"), 3, gauges(BEHAVIOR_MODEL_PERFORMANCE)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_badges_are_uppercase_severity() {
        let view = render();
        let badges: Vec<_> = view.sections[1]
            .widgets
            .iter()
            .filter_map(|w| match w {
                Widget::Item(item) => Some((item.badges[0].text.clone(), item.badges[0].tone)),
                _ => None,
            })
            .collect();
        assert_eq!(badges.len(), BEHAVIOR_PATTERNS.len());
        assert_eq!(badges[0], ("HIGH".to_string(), Tone::Critical));
        assert_eq!(badges[3], ("LOW".to_string(), Tone::Positive));
    }

    #[test]
    fn activity_chart_names_both_series() {
        let view = render();
        match &view.sections[2].widgets[0] {
            Widget::Chart(chart) => {
                let keys: Vec<_> = chart.series.iter().map(|s| s.key).collect();
                assert_eq!(keys, ["normal", "abnormal"]);
                assert_eq!(chart.x_key, "time");
            }
            other => panic!("unexpected widget {other:?}"),
        }
    }
}
