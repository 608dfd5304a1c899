//! Inline SVG rendering of chart data.
//!
//! Every function returns a standalone `<svg>` element that can be embedded
//! directly in HTML.

use super::escape;
use crate::charts::{CategoryChart, HeatmapMatrix, Histogram};

const HISTOGRAM_WIDTH: f64 = 640.0;
const HISTOGRAM_HEIGHT: f64 = 240.0;
const MARGIN: f64 = 40.0;
const HEATMAP_CELL: f64 = 64.0;
const HEATMAP_LABEL_SPACE: f64 = 120.0;
const BAR_HEIGHT: f64 = 22.0;
const BAR_LABEL_SPACE: f64 = 160.0;
const BAR_AREA_WIDTH: f64 = 420.0;

/// Vertical bars, one per histogram bin.
pub fn histogram_svg(histogram: &Histogram) -> String {
    let plot_width = HISTOGRAM_WIDTH - 2.0 * MARGIN;
    let plot_height = HISTOGRAM_HEIGHT - 2.0 * MARGIN;
    let max_count = histogram.bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    let bar_width = plot_width / histogram.bins.len().max(1) as f64;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img">"#,
        w = HISTOGRAM_WIDTH,
        h = HISTOGRAM_HEIGHT
    );
    svg.push_str(&format!(
        r#"<text x="{}" y="20" text-anchor="middle" font-size="14">Distribution of {}</text>"#,
        HISTOGRAM_WIDTH / 2.0,
        escape(&histogram.column)
    ));

    for (idx, bin) in histogram.bins.iter().enumerate() {
        let height = plot_height * bin.count as f64 / max_count as f64;
        let x = MARGIN + idx as f64 * bar_width;
        let y = MARGIN + plot_height - height;
        svg.push_str(&format!(
            r##"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{height:.1}" fill="#4c72b0" stroke="#ffffff"><title>[{start:.2}, {end:.2}): {count}</title></rect>"##,
            w = bar_width,
            start = bin.start,
            end = bin.end,
            count = bin.count
        ));
    }

    if let (Some(first), Some(last)) = (histogram.bins.first(), histogram.bins.last()) {
        let axis_y = MARGIN + plot_height + 16.0;
        svg.push_str(&format!(
            r#"<text x="{MARGIN}" y="{axis_y}" font-size="11">{:.2}</text>"#,
            first.start
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{axis_y}" font-size="11" text-anchor="end">{:.2}</text>"#,
            MARGIN + plot_width,
            last.end
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Annotated correlation heatmap on a coolwarm scale.
pub fn heatmap_svg(matrix: &HeatmapMatrix) -> String {
    let n = matrix.labels.len() as f64;
    let width = HEATMAP_LABEL_SPACE + n * HEATMAP_CELL + MARGIN;
    let height = HEATMAP_LABEL_SPACE + n * HEATMAP_CELL;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" role="img">"#
    );

    for (idx, label) in matrix.labels.iter().enumerate() {
        let offset = HEATMAP_LABEL_SPACE + (idx as f64 + 0.5) * HEATMAP_CELL;
        svg.push_str(&format!(
            r#"<text x="{x}" y="{offset}" font-size="12" text-anchor="end" dominant-baseline="middle">{label}</text>"#,
            x = HEATMAP_LABEL_SPACE - 8.0,
            label = escape(label)
        ));
        svg.push_str(&format!(
            r#"<text x="{offset}" y="{y}" font-size="12" text-anchor="start" transform="rotate(-45 {offset} {y})">{label}</text>"#,
            y = HEATMAP_LABEL_SPACE - 8.0,
            label = escape(label)
        ));
    }

    for (row, values) in matrix.values.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            let x = HEATMAP_LABEL_SPACE + col as f64 * HEATMAP_CELL;
            let y = HEATMAP_LABEL_SPACE + row as f64 * HEATMAP_CELL;
            let annotation = if value.is_nan() {
                "n/a".to_string()
            } else {
                format!("{value:.2}")
            };
            svg.push_str(&format!(
                r##"<rect x="{x}" y="{y}" width="{c}" height="{c}" fill="{fill}" stroke="#ffffff"/>"##,
                c = HEATMAP_CELL,
                fill = coolwarm(*value)
            ));
            svg.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="12" text-anchor="middle" dominant-baseline="middle">{annotation}</text>"#,
                x + HEATMAP_CELL / 2.0,
                y + HEATMAP_CELL / 2.0
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Horizontal bars, most frequent category on top.
pub fn category_bars_svg(chart: &CategoryChart) -> String {
    let height = MARGIN + chart.counts.len() as f64 * BAR_HEIGHT + 10.0;
    let width = BAR_LABEL_SPACE + BAR_AREA_WIDTH + 60.0;
    let max_count = chart.counts.iter().map(|c| c.count).max().unwrap_or(0).max(1);

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" role="img">"#
    );
    svg.push_str(&format!(
        r#"<text x="{}" y="20" text-anchor="middle" font-size="14">Count of {} (Top {})</text>"#,
        width / 2.0,
        escape(&chart.column),
        chart.counts.len()
    ));

    for (idx, entry) in chart.counts.iter().enumerate() {
        let y = MARGIN + idx as f64 * BAR_HEIGHT;
        let bar = BAR_AREA_WIDTH * entry.count as f64 / max_count as f64;
        svg.push_str(&format!(
            r#"<text x="{x}" y="{ty}" font-size="12" text-anchor="end" dominant-baseline="middle">{label}</text>"#,
            x = BAR_LABEL_SPACE - 8.0,
            ty = y + BAR_HEIGHT / 2.0,
            label = escape(&entry.value)
        ));
        svg.push_str(&format!(
            r##"<rect x="{BAR_LABEL_SPACE}" y="{y}" width="{bar:.1}" height="{h}" fill="#55a868"/>"##,
            h = BAR_HEIGHT - 4.0
        ));
        svg.push_str(&format!(
            r#"<text x="{x:.1}" y="{ty}" font-size="11" dominant-baseline="middle">{count}</text>"#,
            x = BAR_LABEL_SPACE + bar + 4.0,
            ty = y + BAR_HEIGHT / 2.0,
            count = entry.count
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Diverging blue-white-red color for a value in `[-1, 1]`; gray for `NaN`.
fn coolwarm(value: f64) -> String {
    const COLD: (f64, f64, f64) = (59.0, 76.0, 192.0);
    const NEUTRAL: (f64, f64, f64) = (221.0, 221.0, 221.0);
    const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

    if value.is_nan() {
        return "#f0f0f0".to_string();
    }

    let t = value.clamp(-1.0, 1.0);
    let (from, to, weight) = if t < 0.0 {
        (NEUTRAL, COLD, -t)
    } else {
        (NEUTRAL, WARM, t)
    };
    let mix = |a: f64, b: f64| (a + (b - a) * weight).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        mix(from.0, to.0),
        mix(from.1, to.1),
        mix(from.2, to.2)
    )
}
