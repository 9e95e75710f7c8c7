use super::{
    stat, stat_with, Action, ActionKind, ChartBinding, ChartKind, Control, ControlOption, Controls, ItemCard,
    PanelView, Section, Widget,
};
use crate::fixtures::{FLOCK_HEALTH_7D, OUTBREAK_RISK, PERFORMANCE, REPORT_BEHAVIOR, REPORT_SUMMARY, RISK_FORECAST_7D};
use crate::models::ZoneOutbreakRisk;
use crate::shell::{DashboardShell, PanelId, ReportPeriod, ReportSection, ReportType};
use crate::style::{Icon, Style, Styled, Tone};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

const MONTH_YEAR: &[BorrowedFormatItem<'static>] = format_description!("[month repr:short] [year]");

/// Descripteur d'une demande de génération de rapport
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedReport {
    pub id: String,
    pub report_type: ReportType,
    pub period: ReportPeriod,
    pub title: String,
    pub requested_at: String,
}

/// Enregistre une demande de rapport pour le type et la période sélectionnés
pub fn generate_report(shell: &DashboardShell, now: OffsetDateTime) -> GeneratedReport {
    let (report_type, period) = (shell.report_type(), shell.report_period());
    info!("Generating {} report for {}", report_type.as_str(), period.as_str());
    GeneratedReport {
        id: Uuid::new_v4().to_string(),
        report_type,
        period,
        title: format!("{} - {}", report_type.label(), period.label()),
        requested_at: now.format(&Rfc3339).unwrap_or_default(),
    }
}

fn controls(shell: &DashboardShell) -> Widget {
    Widget::Controls(Controls {
        controls: vec![
            Control {
                name: "report_type",
                selected: shell.report_type().as_str(),
                options: ReportType::ALL
                    .iter()
                    .map(|t| ControlOption { value: t.as_str(), label: t.label() })
                    .collect(),
            },
            Control {
                name: "report_period",
                selected: shell.report_period().as_str(),
                options: ReportPeriod::ALL
                    .iter()
                    .map(|p| ControlOption { value: p.as_str(), label: p.label() })
                    .collect(),
            },
            Control {
                name: "report_section",
                selected: shell.report_section().as_str(),
                options: ReportSection::ALL
                    .iter()
                    .map(|s| ControlOption { value: s.as_str(), label: s.label() })
                    .collect(),
            },
        ],
        actions: vec![Action::new(ActionKind::GenerateReport, "Generate Report")],
    })
}

fn summary(now: OffsetDateTime) -> Vec<Section> {
    let mut figures: Vec<Widget> = REPORT_SUMMARY
        .iter()
        .zip([(Tone::Positive, Icon::Shield), (Tone::Warning, Icon::AlertTriangle), (Tone::Info, Icon::Eye)])
        .map(|(figure, (tone, icon))| stat_with(figure.label, figure.value, tone, icon, figure.caption))
        .collect();
    let month_year = now.format(MONTH_YEAR).unwrap_or_default();
    figures.push(stat_with("Report Date", now.day().to_string(), Tone::Accent, Icon::Activity, Some(&month_year)));

    let trend = ChartBinding::new(ChartKind::Area, "Flock Health Trend (7 Days)", "date", FLOCK_HEALTH_7D)
        .stacked("healthy", "#22c55e", "flock")
        .stacked("watch", "#eab308", "flock")
        .stacked("critical", "#ef4444", "flock");

    vec![
        Section::grid(None, 4, figures),
        Section::grid(None, 1, vec![Widget::Chart(trend)]),
    ]
}

fn behavior() -> Vec<Section> {
    let bars = ChartBinding::new(ChartKind::Bar, "Behavior Distribution", "behavior", REPORT_BEHAVIOR)
        .series("count", "#3b82f6");
    let pie = ChartBinding::new(ChartKind::Pie, "Behavior Share", "behavior", REPORT_BEHAVIOR)
        .series("percentage", "#8b5cf6");

    let rows = REPORT_BEHAVIOR
        .iter()
        .map(|share| {
            Widget::Item(
                ItemCard::new(share.behavior, Style::new(Tone::Neutral, Icon::Activity))
                    .line(format!("{} birds", share.count))
                    .badge(format!("{}%", share.percentage), Tone::Info),
            )
        })
        .collect();

    vec![
        Section::grid(None, 2, vec![Widget::Chart(bars), Widget::Chart(pie)]),
        Section::stack("Behavior Breakdown", rows),
    ]
}

fn zone_card(zone: &ZoneOutbreakRisk) -> Widget {
    let style = zone.risk.style();
    Widget::Item(
        ItemCard::new(zone.zone, style)
            .badge(format!("{} Risk", zone.risk.as_str()), style.tone)
            .line(format!("Risk Score: {}", zone.score))
            .line(format!("Birds: {}", zone.birds))
            .line(zone.factors.join(", ")),
    )
}

fn outbreak() -> Vec<Section> {
    let forecast = ChartBinding::new(ChartKind::Line, "7-Day Risk Forecast", "day", RISK_FORECAST_7D)
        .series("predicted", "#f97316");
    vec![
        Section::grid(Some("Zone Risk Assessment"), 2, OUTBREAK_RISK.iter().map(zone_card).collect()),
        Section::grid(None, 1, vec![Widget::Chart(forecast)]),
    ]
}

fn performance() -> Vec<Section> {
    let p = PERFORMANCE;
    let stats = vec![
        stat("Detection Accuracy", format!("{}%", p.detection_accuracy), Tone::Positive),
        stat("False Positive Rate", format!("{}%", p.false_positive_rate), Tone::Warning),
        stat("Avg Response Time", format!("{}m", p.response_time_minutes), Tone::Info),
        stat("System Uptime", format!("{}%", p.system_uptime), Tone::Accent),
    ];
    let coverage = vec![
        stat("Birds Covered", p.birds_covered.to_string(), Tone::Info),
        stat("Zones Monitored", p.zones_monitored.to_string(), Tone::Info),
    ];
    let agents = PanelId::ALL
        .iter()
        .map(|panel| {
            Widget::Item(
                ItemCard::new(panel.agent_name(), Style::new(Tone::Positive, Icon::CheckCircle))
                    .badge("Active", Tone::Positive),
            )
        })
        .collect();

    vec![
        Section::grid(None, 4, stats),
        Section::grid(Some("Coverage"), 2, coverage),
        Section::stack("AI Agent Status", agents),
    ]
}

pub fn render(shell: &DashboardShell, now: OffsetDateTime) -> PanelView {
    let section = shell.report_section();
    let mut sections = vec![Section::grid(None, 1, vec![controls(shell)]).with_note(section.label())];
    sections.extend(match section {
        ReportSection::Summary => summary(now),
        ReportSection::Behavior => behavior(),
        ReportSection::Outbreak => outbreak(),
        ReportSection::Performance => performance(),
    });

    PanelView { panel: PanelId::Reports, title: "Reports & Analytics".into(), sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Selection;
    use time::macros::datetime;

    fn now() -> OffsetDateTime {
        datetime!(2026-10-19 12:00 UTC)
    }

    #[test]
    fn controls_reflect_selection() {
        let mut shell = DashboardShell::default();
        shell.select_report_type(ReportType::Monthly);
        shell.select_report_period(ReportPeriod::Month);

        let view = render(&shell, now());
        match &view.sections[0].widgets[0] {
            Widget::Controls(c) => {
                let selected: Vec<_> = c.controls.iter().map(|c| c.selected).collect();
                assert_eq!(selected, ["monthly", "month", "summary"]);
            }
            other => panic!("unexpected widget {other:?}"),
        }
    }

    #[test]
    fn summary_carries_report_date() {
        let view = render(&DashboardShell::default(), now());
        let date = view.sections[1].widgets.iter().find_map(|w| match w {
            Widget::Stat(card) if card.label == "Report Date" => Some((card.value.clone(), card.caption.clone())),
            _ => None,
        });
        assert_eq!(date, Some(("19".to_string(), Some("Oct 2026".to_string()))));
    }

    #[test]
    fn outbreak_section_badges_zone_risk() {
        let mut shell = DashboardShell::default();
        shell
            .apply(Selection::ReportSection { section: ReportSection::Outbreak })
            .unwrap();
        let view = render(&shell, now());
        let badges: Vec<_> = view.sections[1]
            .widgets
            .iter()
            .filter_map(|w| match w {
                Widget::Item(item) => Some(item.badges[0].text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(badges, ["Low Risk", "Medium Risk", "Low Risk", "Low Risk"]);
    }

    #[test]
    fn generated_report_names_type_and_period() {
        let mut shell = DashboardShell::default();
        shell.select_report_type(ReportType::Outbreak);
        let report = generate_report(&shell, now());
        assert_eq!(report.title, "Outbreak Risk - Last Week");
        assert_eq!(report.requested_at, "2026-10-19T12:00:00Z");
        assert!(Uuid::parse_str(&report.id).is_ok());
    }
}
