//! SVG pie charts
//!
//! Slices start at twelve o'clock and run counter-clockwise, each labelled in
//! the legend with its value and its share of the total.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{ChartRenderer, PieChart};
use crate::error::{DatasetError, Result};
use crate::utils::file_utils;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 500.0;
const PIE_CX: f64 = 370.0;
const PIE_CY: f64 = 270.0;
const PIE_RADIUS: f64 = 180.0;
const LEGEND_X: f64 = 20.0;
const LEGEND_Y: f64 = 80.0;
const LEGEND_ROW: f64 = 24.0;

const COLOR_TEXT: &str = "#2c3e50";
const PALETTE: &[&str] = &[
    "#3498db", "#f39c12", "#2ecc71", "#e74c3c", "#9b59b6", "#1abc9c", "#e67e22", "#95a5a6",
];

/// Renderer writing each chart to `<output_dir>/<chart name>.svg`
#[derive(Debug, Clone)]
pub struct SvgChartRenderer {
    output_dir: PathBuf,
}

impl SvgChartRenderer {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Path the given chart is written to
    pub fn chart_path(&self, chart: &PieChart) -> PathBuf {
        self.output_dir.join(format!("{}.svg", chart.name))
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render_pie(&self, chart: &PieChart) -> Result<()> {
        let svg = generate_pie_chart(chart)?;
        let path = self.chart_path(chart);
        file_utils::write_string_to_file(&path, &svg)?;
        info!("Saved chart to {}", path.display());
        Ok(())
    }
}

/// Generate a pie chart SVG document
pub fn generate_pie_chart(chart: &PieChart) -> Result<String> {
    let total = chart.total();
    if total == 0 {
        return Err(DatasetError::Chart(format!("chart '{}' has no data", chart.name)));
    }

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        CHART_WIDTH, CHART_HEIGHT, CHART_WIDTH, CHART_HEIGHT
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <rect width="100%" height="100%" fill="white"/>
  <text x="{}" y="40" font-family="Arial, sans-serif" font-size="20" font-weight="bold" fill="{}" text-anchor="middle">{}</text>
"#,
        CHART_WIDTH / 2.0,
        COLOR_TEXT,
        escape(&chart.title)
    ));

    let mut start = PI / 2.0;
    for (i, (slice, percent)) in chart.slices.iter().zip(chart.percentages()).enumerate() {
        let color = PALETTE[i % PALETTE.len()];

        if slice.value == total {
            svg.push_str(&format!(
                r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>
"#,
                PIE_CX, PIE_CY, PIE_RADIUS, color
            ));
        } else if slice.value > 0 {
            let sweep = slice.value as f64 / total as f64 * 2.0 * PI;
            let end = start + sweep;
            let (x1, y1) = point_at(start);
            let (x2, y2) = point_at(end);
            let large_arc = if sweep > PI { 1 } else { 0 };
            svg.push_str(&format!(
                r#"  <path d="M {:.2} {:.2} L {:.2} {:.2} A {} {} 0 {} 0 {:.2} {:.2} Z" fill="{}" stroke="white" stroke-width="1"/>
"#,
                PIE_CX, PIE_CY, x1, y1, PIE_RADIUS, PIE_RADIUS, large_arc, x2, y2, color
            ));
            start = end;
        }

        let row_y = LEGEND_Y + i as f64 * LEGEND_ROW;
        svg.push_str(&format!(
            r#"  <rect x="{}" y="{}" width="14" height="14" fill="{}"/>
  <text x="{}" y="{}" font-family="Arial, sans-serif" font-size="12" fill="{}">{}: {} ({:.1}%)</text>
"#,
            LEGEND_X,
            row_y - 11.0,
            color,
            LEGEND_X + 20.0,
            row_y,
            COLOR_TEXT,
            escape(&slice.label),
            slice.value,
            percent
        ));
    }

    svg.push_str("</svg>\n");
    debug!("Generated pie chart '{}' with {} slices", chart.name, chart.slices.len());
    Ok(svg)
}

// SVG y grows downwards, so the angle is mirrored to keep counter-clockwise order.
fn point_at(angle: f64) -> (f64, f64) {
    (PIE_CX + PIE_RADIUS * angle.cos(), PIE_CY - PIE_RADIUS * angle.sin())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
