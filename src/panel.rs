//! Side-by-side layout of the logo and the information panel.

use crossterm::style::{Color, Stylize};

use crate::{
    facts::{format_uptime, HostFacts},
    logo::{display_width, Logo},
};

/// Rows rendered even when the logo is shorter.
pub const MIN_ROWS: usize = 10;

const LOGO_COLOR: Color = Color::Cyan;
const FRAME_COLOR: Color = Color::White;
const LABEL_WIDTH: usize = 9;
const GUTTER: &str = "  ";

const SWATCHES: [Color; 7] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Top,
    Separator,
    Bottom,
}

impl Border {
    fn glyphs(self) -> &'static str {
        match self {
            Border::Top => "╭────────────╮",
            Border::Separator => "├────────────┤",
            Border::Bottom => "╰────────────╯",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub icon: char,
    pub color: Color,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelRow {
    Border(Border),
    Field(Field),
    /// Memory gets its own row so the percentage can take a second color.
    Memory { used_gb: f64, total_gb: f64, percent: f64 },
    Swatches,
}

impl PanelRow {
    fn field(label: &'static str, icon: char, color: Color, value: &str) -> Self {
        PanelRow::Field(Field {
            label,
            icon,
            color,
            value: value.to_string(),
        })
    }

    fn render(&self) -> String {
        match self {
            PanelRow::Border(border) => border.glyphs().with(FRAME_COLOR).bold().to_string(),
            PanelRow::Field(field) => format!(
                "{}{}",
                label_cell(field.icon, field.color, field.label),
                field.value.as_str().with(field.color).bold()
            ),
            PanelRow::Memory {
                used_gb,
                total_gb,
                percent,
            } => format!(
                "{}{} ({})",
                label_cell('\u{f035b}', Color::Green, "Memory:"),
                format!("{used_gb:.1} GB / {total_gb:.1} GB").green().bold(),
                format!("{percent:.1}%").blue().bold()
            ),
            PanelRow::Swatches => {
                let swatches: Vec<String> = SWATCHES
                    .iter()
                    .map(|color| '●'.with(*color).to_string())
                    .collect();
                format!(
                    "{}{}",
                    label_cell('\u{f1fc}', Color::Cyan, "Colors:"),
                    swatches.join("  ")
                )
            }
        }
    }
}

fn label_cell(icon: char, color: Color, label: &str) -> String {
    let bar = "│".with(FRAME_COLOR).bold();
    format!(
        "{bar} {} {}{bar} ",
        icon.with(color),
        format!("{label:<width$}", width = LABEL_WIDTH).bold()
    )
}

/// The information panel, top to bottom.
pub fn template(facts: &HostFacts) -> Vec<PanelRow> {
    let metrics = facts.metrics();
    let user_host = format!("{}@{}", facts.username, facts.hostname);

    vec![
        PanelRow::Border(Border::Top),
        PanelRow::field("User:", '\u{f007}', Color::Blue, &user_host),
        PanelRow::Border(Border::Separator),
        PanelRow::field("Distro:", '\u{f08c7}', Color::Red, &facts.distro_name),
        PanelRow::field("Kernel:", '\u{f17c}', Color::Green, &facts.kernel_release),
        PanelRow::field("Shell:", '\u{f489}', Color::Yellow, &facts.shell_name),
        PanelRow::field("DE/WM:", '\u{f108}', Color::Blue, &facts.desktop_env),
        PanelRow::field(
            "Uptime:",
            '\u{f017}',
            Color::Magenta,
            &format_uptime(facts.uptime_seconds),
        ),
        PanelRow::field("CPU:", '\u{f4bc}', Color::Cyan, &facts.cpu_model),
        PanelRow::Memory {
            used_gb: metrics.used_ram_gb,
            total_gb: metrics.total_ram_gb,
            percent: metrics.usage_percent,
        },
        PanelRow::Border(Border::Bottom),
        PanelRow::Border(Border::Top),
        PanelRow::Swatches,
        PanelRow::Border(Border::Bottom),
    ]
}

/// Lays the logo out beside the panel, one string per terminal row.
///
/// Produces `max(MIN_ROWS, logo.len())` rows; panel rows past that count are
/// not shown, and rows past the panel carry only the logo column.
pub fn render(facts: &HostFacts, logo: &Logo) -> Vec<String> {
    let panel = template(facts);
    let width = logo.width();
    let rows = logo.len().max(MIN_ROWS);

    (0..rows)
        .map(|i| {
            let mut row = match logo.lines().get(i) {
                Some(line) => {
                    let padding = width - display_width(line);
                    format!("{line}{}", " ".repeat(padding))
                        .with(LOGO_COLOR)
                        .bold()
                        .to_string()
                }
                None => " ".repeat(width),
            };
            if let Some(info) = panel.get(i) {
                row.push_str(GUTTER);
                row.push_str(&info.render());
            }
            row
        })
        .collect()
}
