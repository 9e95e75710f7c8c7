/**
 * PANELS - Rendu des 6 panneaux du dashboard
 *
 * RÔLE :
 * Chaque panneau est une fonction pure `render(données) -> PanelView`.
 * Un `PanelView` est un arbre visuel sérialisable (sections, cartes,
 * bannières, jauges, graphiques) que le navigateur affiche tel quel.
 *
 * FONCTIONNEMENT :
 * - Les graphiques sont liés directement aux tableaux de fixtures
 *   (les lignes sont sérialisées sans transformation)
 * - Les seules valeurs calculées viennent de `metrics`
 * - Aucun panneau ne modifie de données ni ne peut échouer
 */

pub mod behavior;
pub mod health;
pub mod notifications;
pub mod reports;
pub mod tracker;
pub mod video_feed;

use crate::models::{Gauge, Notification};
use crate::shell::{DashboardShell, PanelId};
use crate::style::{Icon, Style, Tone};
use serde::Serialize;
use time::OffsetDateTime;

/// Entrées du rendu : snapshot du store, état du shell, horloge
pub struct RenderContext<'a> {
    pub notifications: &'a [Notification],
    pub shell: &'a DashboardShell,
    pub now: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelView {
    pub panel: PanelId,
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layout {
    Stack,
    Grid { columns: u8 },
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: Option<String>,
    pub layout: Layout,
    pub widgets: Vec<Widget>,
    pub note: Option<String>,
}

impl Section {
    pub fn stack(title: impl Into<String>, widgets: Vec<Widget>) -> Self {
        Self { title: Some(title.into()), layout: Layout::Stack, widgets, note: None }
    }

    pub fn grid(title: Option<&str>, columns: u8, widgets: Vec<Widget>) -> Self {
        Self {
            title: title.map(str::to_string),
            layout: Layout::Grid { columns },
            widgets,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    Stat(StatCard),
    Banner(Banner),
    Item(ItemCard),
    Gauge(GaugeView),
    Chart(ChartBinding),
    Controls(Controls),
}

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub tone: Tone,
    pub icon: Option<Icon>,
    pub caption: Option<String>,
    /// Pastille de compteur (ex: nombre de non lues)
    pub counter: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Banner {
    pub style: Style,
    pub text: String,
    pub action: Option<Action>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    View,
    MarkRead,
    MarkAllRead,
    Dismiss,
    AlertManager,
    TakeAction,
    SelectFeed,
    SelectFilter,
    GenerateReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct Action {
    pub kind: ActionKind,
    pub label: String,
    pub target: Option<String>,
}

impl Action {
    pub fn new(kind: ActionKind, label: &str) -> Self {
        Self { kind, label: label.to_string(), target: None }
    }

    pub fn on(kind: ActionKind, label: &str, target: &str) -> Self {
        Self { kind, label: label.to_string(), target: Some(target.to_string()) }
    }
}

/// Carte d'un élément de liste (flux, oiseau, alerte, risque...)
#[derive(Debug, Clone, Serialize)]
pub struct ItemCard {
    pub id: Option<String>,
    pub heading: String,
    pub subtitle: Option<String>,
    pub lines: Vec<String>,
    pub style: Style,
    pub badges: Vec<Badge>,
    pub actions: Vec<Action>,
    pub selected: bool,
    pub emphasized: bool,
}

impl ItemCard {
    pub fn new(heading: impl Into<String>, style: Style) -> Self {
        Self {
            id: None,
            heading: heading.into(),
            subtitle: None,
            lines: Vec::new(),
            style,
            badges: Vec::new(),
            actions: Vec::new(),
            selected: false,
            emphasized: false,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn badge(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.badges.push(Badge { text: text.into(), tone });
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn emphasized(mut self, emphasized: bool) -> Self {
        self.emphasized = emphasized;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GaugeView {
    pub label: String,
    pub value: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Area,
    Pie,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesBinding {
    pub key: &'static str,
    pub color: &'static str,
    pub stack: Option<&'static str>,
}

/// Graphique lié à un tableau de fixtures
#[derive(Debug, Clone, Serialize)]
pub struct ChartBinding {
    pub chart: ChartKind,
    pub title: String,
    pub x_key: &'static str,
    pub series: Vec<SeriesBinding>,
    pub rows: serde_json::Value,
}

impl ChartBinding {
    pub fn new<T: Serialize>(chart: ChartKind, title: &str, x_key: &'static str, rows: &[T]) -> Self {
        Self {
            chart,
            title: title.to_string(),
            x_key,
            series: Vec::new(),
            rows: serde_json::to_value(rows).unwrap_or_default(),
        }
    }

    pub fn series(mut self, key: &'static str, color: &'static str) -> Self {
        self.series.push(SeriesBinding { key, color, stack: None });
        self
    }

    pub fn stacked(mut self, key: &'static str, color: &'static str, stack: &'static str) -> Self {
        self.series.push(SeriesBinding { key, color, stack: Some(stack) });
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ControlOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Sélecteur (onglets ou liste déroulante) avec sa valeur courante
#[derive(Debug, Clone, Serialize)]
pub struct Control {
    pub name: &'static str,
    pub selected: &'static str,
    pub options: Vec<ControlOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Controls {
    pub controls: Vec<Control>,
    pub actions: Vec<Action>,
}

pub fn stat(label: &str, value: impl Into<String>, tone: Tone) -> Widget {
    Widget::Stat(StatCard {
        label: label.to_string(),
        value: value.into(),
        tone,
        icon: None,
        caption: None,
        counter: None,
    })
}

pub fn stat_with(label: &str, value: impl Into<String>, tone: Tone, icon: Icon, caption: Option<&str>) -> Widget {
    Widget::Stat(StatCard {
        label: label.to_string(),
        value: value.into(),
        tone,
        icon: Some(icon),
        caption: caption.map(str::to_string),
        counter: None,
    })
}

pub fn gauges(values: &[Gauge]) -> Vec<Widget> {
    values
        .iter()
        .map(|g| Widget::Gauge(GaugeView { label: g.label.to_string(), value: g.value }))
        .collect()
}

pub fn render(panel: PanelId, ctx: &RenderContext<'_>) -> PanelView {
    match panel {
        PanelId::VideoFeed => video_feed::render(ctx.shell),
        PanelId::Tracker => tracker::render(),
        PanelId::Behavior => behavior::render(),
        PanelId::Health => health::render(),
        PanelId::Notifications => notifications::render(ctx.notifications, ctx.shell.notification_filter()),
        PanelId::Reports => reports::render(ctx.shell, ctx.now),
    }
}
