pub mod bars;
pub mod pie;

use crate::error::Result;
use crate::langs::{collapse_other, RankedViews};
use crate::model::{ChartKind, Config, Metric, RankedEntry, OTHER_LABEL};
use crate::util::hex_color;
use plotters::style::RGBColor;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

const FALLBACK_COLOR: RGBColor = RGBColor(136, 136, 136);
const OTHER_COLOR: RGBColor = RGBColor(208, 208, 208);

/// Chart palette, GitHub-flavored in both modes.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: RGBColor,
    pub surface: RGBColor,
    pub text: RGBColor,
    pub spine: RGBColor,
}

impl Theme {
    fn light() -> Self {
        Self {
            background: RGBColor(255, 255, 255),
            surface: RGBColor(250, 250, 250),
            text: RGBColor(51, 51, 51),
            spine: RGBColor(208, 208, 208),
        }
    }

    fn dark() -> Self {
        Self {
            background: RGBColor(13, 17, 23),
            surface: RGBColor(22, 27, 34),
            text: RGBColor(230, 237, 243),
            spine: RGBColor(48, 54, 61),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LanguageColor {
    color: String,
}

fn load_palette() -> HashMap<String, RGBColor> {
    let raw: HashMap<String, LanguageColor> =
        serde_json::from_str(include_str!("../../assets/languages.json")).unwrap_or_default();
    raw.into_iter()
        .map(|(name, entry)| (name, hex_color(&entry.color)))
        .collect()
}

pub struct Renderer {
    output_dir: PathBuf,
    pub theme: Theme,
    palette: HashMap<String, RGBColor>,
}

impl Renderer {
    pub fn new(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.output_dir)?;
        Ok(Self {
            output_dir: config.output_dir.clone(),
            theme: if config.dark {
                Theme::dark()
            } else {
                Theme::light()
            },
            palette: load_palette(),
        })
    }

    pub fn color_for(&self, language: &str) -> RGBColor {
        if language == OTHER_LABEL {
            return OTHER_COLOR;
        }
        self.palette.get(language).copied().unwrap_or(FALLBACK_COLOR)
    }

    /// Render one chart per ranking metric for the requested kind.
    pub fn render(&self, kind: ChartKind, user: &str, views: &RankedViews) -> Result<()> {
        for metric in Metric::ALL {
            let entries = views.for_metric(metric);
            let entries: Vec<RankedEntry> = match (kind.collapse_top(), kind.truncate_top()) {
                (Some(keep), _) => collapse_other(entries, keep),
                (None, Some(n)) => entries.iter().take(n).cloned().collect(),
                (None, None) => entries.to_vec(),
            };

            let title = title_for(user, kind, metric);
            if entries.is_empty() {
                println!("No data to visualize for {title}");
                continue;
            }

            let file = format!("{}_{}.png", kind.file_prefix(), metric.file_suffix());
            let path = self.output_dir.join(file);

            match kind {
                ChartKind::Leaderboard => bars::horizontal(
                    self,
                    &path,
                    &title,
                    metric.label(),
                    &entries,
                    metric == Metric::Lines,
                )?,
                ChartKind::HorizontalBar => {
                    bars::horizontal(self, &path, &title, metric.label(), &entries, false)?
                }
                ChartKind::Bar => bars::vertical(self, &path, &title, metric.label(), &entries)?,
                ChartKind::Pie => pie::draw(self, &path, &title, &entries, false)?,
                ChartKind::Donut => pie::draw(self, &path, &title, &entries, true)?,
            }

            println!("Saved: {}", path.display());
        }
        Ok(())
    }
}

fn title_for(user: &str, kind: ChartKind, metric: Metric) -> String {
    let fragment = match metric {
        Metric::Repos => "Repository Count",
        Metric::Lines => "Lines of Code",
        Metric::Weighted => "Weighted Score",
    };
    match kind {
        ChartKind::Leaderboard => format!("{user} - Language Leaderboard by {fragment}"),
        _ => format!("{user} - Languages by {fragment}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_palette_parses_and_covers_common_languages() {
        let palette = load_palette();
        assert!(palette.len() > 20);
        assert_eq!(palette["Rust"], RGBColor(0xde, 0xa5, 0x84));
        assert!(palette.contains_key("Python"));
        assert!(palette.contains_key("TypeScript"));
    }

    #[test]
    fn unknown_languages_fall_back_to_grey() {
        let renderer = Renderer {
            output_dir: PathBuf::from("output"),
            theme: Theme::light(),
            palette: load_palette(),
        };
        assert_eq!(renderer.color_for("NotALanguage"), FALLBACK_COLOR);
        assert_eq!(renderer.color_for(OTHER_LABEL), OTHER_COLOR);
    }

    #[test]
    fn titles_match_the_chart_kind() {
        assert_eq!(
            title_for("octocat", ChartKind::Leaderboard, Metric::Repos),
            "octocat - Language Leaderboard by Repository Count"
        );
        assert_eq!(
            title_for("octocat", ChartKind::Pie, Metric::Lines),
            "octocat - Languages by Lines of Code"
        );
    }
}
