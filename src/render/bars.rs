use super::Renderer;
use crate::error::Result;
use crate::model::RankedEntry;
use crate::util::{format_axis, format_value};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Horizontal bar chart, best language on top. With `breakdown` each bar is
/// drawn as stacked segments for the entry's top contributing repositories,
/// fading toward a low-opacity remainder.
pub fn horizontal(
    renderer: &Renderer,
    path: &Path,
    title: &str,
    value_label: &str,
    entries: &[RankedEntry],
    breakdown: bool,
) -> Result<()> {
    let theme = renderer.theme;
    let n = entries.len();
    let height = (n as u32 * 40).max(480) + 140;
    let root = BitMapBackend::new(path, (1100, height)).into_drawing_area();
    root.fill(&theme.background)?;

    // Reversed so rank 1 lands at the top of the ascending y axis.
    let rows: Vec<&RankedEntry> = entries.iter().rev().collect();
    let names: Vec<String> = rows.iter().map(|e| e.language.clone()).collect();
    let max = rows
        .iter()
        .map(|e| e.value.as_f64())
        .fold(0.0f64, f64::max)
        .max(1e-9);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26).into_font().color(&theme.text))
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(170)
        .build_cartesian_2d(0f64..max * 1.15, (0..n as i32).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .light_line_style(&theme.spine.mix(0.25))
        .bold_line_style(&theme.spine.mix(0.25))
        .y_labels(n)
        .y_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => names
                .get(*i as usize)
                .cloned()
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .x_label_formatter(&|v| format_axis(*v))
        .x_desc(value_label)
        .axis_desc_style(("sans-serif", 18).into_font().color(&theme.text))
        .label_style(("sans-serif", 14).into_font().color(&theme.text))
        .axis_style(&theme.spine)
        .draw()?;

    let mut bars = Vec::new();
    for (j, row) in rows.iter().enumerate() {
        let color = renderer.color_for(&row.language);
        let y0 = SegmentValue::Exact(j as i32);
        let y1 = SegmentValue::Exact(j as i32 + 1);

        if breakdown && !row.top_repos.is_empty() {
            let mut left = 0f64;
            for (k, share) in row.top_repos.iter().enumerate() {
                let alpha = (1.0 - k as f64 * 0.15).max(0.4);
                let right = left + share.lines as f64;
                bars.push(Rectangle::new(
                    [(left, y0.clone()), (right, y1.clone())],
                    color.mix(alpha).filled(),
                ));
                left = right;
            }
            let total = row.value.as_f64();
            if left < total {
                bars.push(Rectangle::new(
                    [(left, y0), (total, y1)],
                    color.mix(0.25).filled(),
                ));
            }
        } else {
            bars.push(Rectangle::new(
                [(0.0, y0), (row.value.as_f64(), y1)],
                color.mix(0.9).filled(),
            ));
        }
    }
    chart.draw_series(bars)?;

    let label_style = TextStyle::from(("sans-serif", 14).into_font())
        .color(&theme.text)
        .pos(Pos::new(HPos::Left, VPos::Center));
    chart.draw_series(rows.iter().enumerate().map(|(j, row)| {
        Text::new(
            format!(" {}", format_value(&row.value)),
            (row.value.as_f64(), SegmentValue::CenterOf(j as i32)),
            label_style.clone(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Vertical bar chart of the top languages.
pub fn vertical(
    renderer: &Renderer,
    path: &Path,
    title: &str,
    value_label: &str,
    entries: &[RankedEntry],
) -> Result<()> {
    let theme = renderer.theme;
    let n = entries.len();
    let root = BitMapBackend::new(path, (1000, 620)).into_drawing_area();
    root.fill(&theme.background)?;

    let names: Vec<String> = entries.iter().map(|e| e.language.clone()).collect();
    let max = entries
        .iter()
        .map(|e| e.value.as_f64())
        .fold(0.0f64, f64::max)
        .max(1e-9);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26).into_font().color(&theme.text))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d((0..n as i32).into_segmented(), 0f64..max * 1.15)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(&theme.spine.mix(0.25))
        .bold_line_style(&theme.spine.mix(0.25))
        .x_labels(n)
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => names
                .get(*i as usize)
                .cloned()
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .y_label_formatter(&|v| format_axis(*v))
        .y_desc(value_label)
        .axis_desc_style(("sans-serif", 18).into_font().color(&theme.text))
        .label_style(("sans-serif", 12).into_font().color(&theme.text))
        .axis_style(&theme.spine)
        .draw()?;

    chart.draw_series(entries.iter().enumerate().map(|(j, entry)| {
        let color = renderer.color_for(&entry.language);
        Rectangle::new(
            [
                (SegmentValue::Exact(j as i32), 0.0),
                (SegmentValue::Exact(j as i32 + 1), entry.value.as_f64()),
            ],
            color.mix(0.9).filled(),
        )
    }))?;

    let label_style = TextStyle::from(("sans-serif", 12).into_font())
        .color(&theme.text)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(entries.iter().enumerate().map(|(j, entry)| {
        Text::new(
            format_value(&entry.value),
            (
                SegmentValue::CenterOf(j as i32),
                entry.value.as_f64() + max * 0.02,
            ),
            label_style.clone(),
        )
    }))?;

    root.present()?;
    Ok(())
}
