mod svg;

use log::info;

use crate::error::Result;

pub use svg::{SvgChartRenderer, generate_pie_chart};

/// One labelled slice of a pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

impl PieSlice {
    pub fn new(label: impl Into<String>, value: usize) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Pie chart data handed to a [`ChartRenderer`]
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    /// Short identifier, used as file stem by file-based renderers
    pub name: String,

    /// Title drawn above the chart
    pub title: String,

    /// Slices in drawing order
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn new(name: impl Into<String>, title: impl Into<String>, slices: Vec<PieSlice>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            slices,
        }
    }

    /// Sum of all slice values
    pub fn total(&self) -> usize {
        self.slices.iter().map(|slice| slice.value).sum()
    }

    /// Share of each slice in percent, `value / total * 100`
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        self.slices
            .iter()
            .map(|slice| {
                if total == 0 {
                    0.0
                } else {
                    slice.value as f64 / total as f64 * 100.0
                }
            })
            .collect()
    }
}

/// Surface that can display a pie chart
pub trait ChartRenderer {
    fn render_pie(&self, chart: &PieChart) -> Result<()>;
}

/// Renderer that writes the chart slices to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogChartRenderer;

impl ChartRenderer for LogChartRenderer {
    fn render_pie(&self, chart: &PieChart) -> Result<()> {
        info!("{}", chart.title);
        for (slice, percent) in chart.slices.iter().zip(chart.percentages()) {
            info!("  {}: {} ({:.1}%)", slice.label, slice.value, percent);
        }
        Ok(())
    }
}
