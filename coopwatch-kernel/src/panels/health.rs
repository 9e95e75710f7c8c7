use super::{gauges, stat_with, Action, ActionKind, Banner, ChartBinding, ChartKind, ItemCard, PanelView, Section, Widget};
use crate::fixtures::{
    HEALTH_MODEL_LABEL, HEALTH_MODEL_PERFORMANCE, HEALTH_OVERVIEW, HEALTH_RISKS, RISK_DISTRIBUTION, RISK_TREND_5D,
};
use crate::metrics::risks_at_level;
use crate::models::{HealthRisk, RiskLevel};
use crate::shell::PanelId;
use crate::style::{Icon, Styled, Tone};

fn critical_card(risk: &HealthRisk) -> Widget {
    Widget::Item(
        ItemCard::new(format!("Bird {} - {}", risk.subject_id, risk.zone), risk.level.style())
            .id(risk.id)
            .line(format!("Symptoms: {}", risk.symptoms.join(", ")))
            .line(risk.recommendation)
            .action(Action::on(ActionKind::TakeAction, "Take Action", risk.subject_id))
            .emphasized(true),
    )
}

fn assessment_card(risk: &HealthRisk) -> Widget {
    let style = risk.level.style();
    let mut card = ItemCard::new(format!("Bird {}", risk.subject_id), style)
        .id(risk.id)
        .subtitle(format!("{} • {}", risk.zone, risk.last_updated))
        .badge(risk.level.as_str().to_uppercase(), style.tone)
        .line(format!("Confidence: {}%", risk.confidence));
    for symptom in risk.symptoms {
        card = card.badge(*symptom, Tone::Neutral);
    }
    Widget::Item(card.line(format!("Recommendation: {}", risk.recommendation)))
}

pub fn render() -> PanelView {
    let o = HEALTH_OVERVIEW;
    let overview = vec![
        stat_with("Total Flock", o.total.to_string(), Tone::Info, Icon::Eye, None),
        stat_with("Healthy", o.healthy.to_string(), Tone::Positive, Icon::Shield, None),
        stat_with("Watch List", o.watch.to_string(), Tone::Warning, Icon::Eye, None),
        stat_with("Critical", o.critical.to_string(), Tone::Critical, Icon::AlertTriangle, None),
    ];

    let mut sections = vec![Section::grid(None, 4, overview)];

    let critical = risks_at_level(HEALTH_RISKS, RiskLevel::Critical);
    if !critical.is_empty() {
        let mut widgets = vec![Widget::Banner(Banner {
            style: RiskLevel::Critical.style(),
            text: "Critical Health Alerts".into(),
            action: None,
        })];
        widgets.extend(critical.iter().map(critical_card));
        sections.push(Section::stack("Critical Health Alerts", widgets));
    }

    let distribution = ChartBinding::new(ChartKind::Pie, "Risk Distribution", "name", RISK_DISTRIBUTION)
        .series("value", "#22c55e");
    let trend = ChartBinding::new(ChartKind::Area, "Risk Trend (5 Days)", "time", RISK_TREND_5D)
        .stacked("normal", "#22c55e", "flock")
        .stacked("watch", "#eab308", "flock")
        .stacked("critical", "#ef4444", "flock");

    sections.push(Section::grid(None, 2, vec![Widget::Chart(distribution), Widget::Chart(trend)]));
    sections.push(Section::stack(
        "Individual Risk Assessments",
        HEALTH_RISKS.iter().map(assessment_card).collect(),
    ));
    sections.push(Section::grid(
        Some(&format!("{HEALTH_MODEL_LABEL} Model Performance")),
        3,
        gauges(HEALTH_MODEL_PERFORMANCE),
    ));

    PanelView { panel: PanelId::Health, title: "Health Risk Assessment".into(), sections }
}
