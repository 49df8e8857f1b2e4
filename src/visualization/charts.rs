use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

use super::format::format_volume;
use crate::models::ReservoirResult;

/// Named chart colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartColor {
    SkyBlue,
    Orange,
    Green,
    LightGreen,
    LightCoral,
}

impl ChartColor {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ChartColor::SkyBlue => (135, 206, 235),
            ChartColor::Orange => (255, 165, 0),
            ChartColor::Green => (0, 128, 0),
            ChartColor::LightGreen => (144, 238, 144),
            ChartColor::LightCoral => (240, 128, 128),
        }
    }

    fn paint(&self, text: &str) -> ColoredString {
        let (r, g, b) = self.rgb();
        text.truecolor(r, g, b)
    }
}

/// One bar of the volume comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: ChartColor,
}

/// Bar chart comparing pore volume, hydrocarbon pore volume and, when a
/// recovery factor was supplied, recoverable reserves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn from_result(result: &ReservoirResult) -> Self {
        let mut bars = vec![
            Bar {
                label: "Pore Volume (PV)".to_string(),
                value: result.pore_volume,
                color: ChartColor::SkyBlue,
            },
            Bar {
                label: "Hydrocarbon Pore Volume (HCPV)".to_string(),
                value: result.hydrocarbon_pore_volume,
                color: ChartColor::Orange,
            },
        ];
        if let Some(recovery) = &result.recovery {
            bars.push(Bar {
                label: "Recoverable Reserves".to_string(),
                value: recovery.recoverable_volume,
                color: ChartColor::Green,
            });
        }
        Self {
            title: "Comparison of Reservoir Volumes".to_string(),
            y_label: "Volume".to_string(),
            bars,
        }
    }
}

/// One slice of the recovery pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Share of the in-place total, 0-100
    pub percent: f64,
    pub color: ChartColor,
}

/// Two-slice chart of recoverable versus unrecoverable reserves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub total: f64,
    pub unit: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// `None` when the result has no recovery breakdown.
    pub fn from_result(result: &ReservoirResult) -> Option<Self> {
        let recovery = result.recovery?;
        Some(Self {
            title: "Recoverable vs Unrecoverable Reserves".to_string(),
            total: result.in_place_volume,
            unit: result.unit().to_string(),
            slices: vec![
                PieSlice {
                    label: "Recoverable".to_string(),
                    value: recovery.recoverable_volume,
                    percent: recovery.recoverable_percent(),
                    color: ChartColor::LightGreen,
                },
                PieSlice {
                    label: "Unrecoverable".to_string(),
                    value: recovery.unrecoverable_volume,
                    percent: recovery.unrecoverable_percent(),
                    color: ChartColor::LightCoral,
                },
            ],
        })
    }
}

const BAR_WIDTH: usize = 40;

/// Format a horizontal text rendering of the bar chart as a string.
pub fn format_bar_chart(chart: &BarChart) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", chart.title.bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let max_value = chart.bars.iter().map(|b| b.value).fold(0.0f64, f64::max);
    let label_width = chart
        .bars
        .iter()
        .map(|b| b.label.len())
        .max()
        .unwrap_or(0);

    output.push_str(&format!(
        "  {:<label_width$}  {:>18}  {}\n",
        "Category", chart.y_label, "Bar"
    ));
    output.push_str(&format!("  {}\n", "-".repeat(label_width + 22 + BAR_WIDTH)));

    for bar in &chart.bars {
        let bar_len = if max_value > 0.0 {
            ((bar.value / max_value) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let blocks = "\u{2588}".repeat(bar_len);

        output.push_str(&format!(
            "  {:<label_width$}  {:>18}  {}\n",
            bar.label,
            format_volume(bar.value),
            bar.color.paint(&blocks)
        ));
    }

    output.push('\n');
    output
}

/// Print the bar chart.
pub fn print_bar_chart(chart: &BarChart) {
    print!("{}", format_bar_chart(chart));
}

/// Format the pie chart as a proportional strip plus a legend with
/// percentage and absolute value per slice.
pub fn format_pie_chart(chart: &PieChart) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", chart.title.bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let strip_width = BAR_WIDTH + 10;
    let mut strip = String::new();
    let mut used = 0;
    for (i, slice) in chart.slices.iter().enumerate() {
        let width = if i + 1 == chart.slices.len() {
            strip_width.saturating_sub(used)
        } else {
            ((slice.percent / 100.0) * strip_width as f64).round() as usize
        };
        used += width;
        strip.push_str(&slice.color.paint(&"\u{2588}".repeat(width)).to_string());
    }
    output.push_str(&format!("  {strip}\n\n"));

    for slice in &chart.slices {
        output.push_str(&format!(
            "  {} {:<14} {:>5.1}%  ({} {})\n",
            slice.color.paint("\u{25A0}"),
            slice.label,
            slice.percent,
            format_volume(slice.value),
            chart.unit
        ));
    }
    output.push_str(&format!(
        "  {:<16} {:>6}  ({} {})\n",
        "Total",
        "100.0%",
        format_volume(chart.total),
        chart.unit
    ));

    output.push('\n');
    output
}

/// Print the pie chart.
pub fn print_pie_chart(chart: &PieChart) {
    print!("{}", format_pie_chart(chart));
}
