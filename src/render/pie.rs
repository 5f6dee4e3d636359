use super::Renderer;
use crate::error::Result;
use crate::model::RankedEntry;
use plotters::prelude::*;
use std::path::Path;

const SIZE: (u32, u32) = (900, 720);

/// Pie or donut chart. Entries are expected to already carry the "Other"
/// collapse; a donut is a pie with the center disc painted over.
pub fn draw(
    renderer: &Renderer,
    path: &Path,
    title: &str,
    entries: &[RankedEntry],
    donut: bool,
) -> Result<()> {
    let theme = renderer.theme;
    let sizes: Vec<f64> = entries.iter().map(|e| e.value.as_f64()).collect();
    if sizes.iter().sum::<f64>() <= 0.0 {
        println!("No data to visualize for {title}");
        return Ok(());
    }

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&theme.background)?;
    let root = root.titled(title, ("sans-serif", 26).into_font().color(&theme.text))?;

    let colors: Vec<RGBColor> = entries
        .iter()
        .map(|e| renderer.color_for(&e.language))
        .collect();
    let labels: Vec<String> = entries.iter().map(|e| e.language.clone()).collect();

    let center = (SIZE.0 as i32 / 2, SIZE.1 as i32 / 2 - 20);
    let radius = 250.0;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(0.0);
    pie.label_style(("sans-serif", 16).into_font().color(&theme.text));
    pie.percentages(("sans-serif", 14).into_font().color(&WHITE));
    root.draw(&pie)?;

    if donut {
        let hole = (radius * 0.6) as i32;
        root.draw(&Circle::new(center, hole, theme.surface.filled()))?;
        root.draw(&Circle::new(center, hole, theme.spine.stroke_width(1)))?;
    }

    root.present()?;
    Ok(())
}
