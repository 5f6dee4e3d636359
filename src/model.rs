use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::Duration;

pub const SCHEMA_VERSION: u32 = 1;

/// Read-only run configuration, built once from the CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub api_url: String,
    pub include_forks: bool,
    pub exclude_repos: HashSet<String>,
    pub exclude_languages: HashSet<String>,
    pub top_repos: usize,
    pub output_dir: PathBuf,
    pub dark: bool,
    pub timeout: Duration,
}

impl Config {
    pub fn selects_repo(&self, name: &str, fork: bool) -> bool {
        if fork && !self.include_forks {
            return false;
        }
        !self.exclude_repos.contains(name)
    }

    pub fn keeps_language(&self, language: &str) -> bool {
        !self.exclude_languages.contains(language)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoRecord {
    pub full_name: String,
    pub name: String,
    pub fork: bool,
    pub languages: HashMap<String, u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageStat {
    pub lines: u64,
    pub repos: HashMap<String, u64>,
    pub weighted: f64,
}

impl LanguageStat {
    pub fn add_contribution(&mut self, repo: &str, lines: u64) {
        self.lines += lines;
        *self.repos.entry(repo.to_string()).or_insert(0) += lines;
    }

    pub fn repo_count(&self) -> usize {
        self.repos.len()
    }

    pub fn metric_value(&self, metric: Metric) -> MetricValue {
        match metric {
            Metric::Repos => MetricValue::Count(self.repo_count() as u64),
            Metric::Lines => MetricValue::Count(self.lines),
            Metric::Weighted => MetricValue::Score(self.weighted),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LanguageTotals {
    pub languages: HashMap<String, LanguageStat>,
}

impl LanguageTotals {
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Repos,
    Lines,
    Weighted,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Repos, Metric::Lines, Metric::Weighted];

    pub fn file_suffix(&self) -> &'static str {
        match self {
            Metric::Repos => "by_repos",
            Metric::Lines => "by_lines",
            Metric::Weighted => "by_weighted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Repos => "Number of Repositories",
            Metric::Lines => "Lines of Code",
            Metric::Weighted => "Weighted Score",
        }
    }
}

/// Ranking values are either exact counts or normalized scores; counts stay
/// integral so metric sums survive the "Other" collapse without drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(u64),
    Score(f64),
}

impl MetricValue {
    pub fn as_f64(self) -> f64 {
        match self {
            MetricValue::Count(n) => n as f64,
            MetricValue::Score(s) => s,
        }
    }

    pub fn add(self, other: MetricValue) -> MetricValue {
        match (self, other) {
            (MetricValue::Count(a), MetricValue::Count(b)) => MetricValue::Count(a + b),
            (a, b) => MetricValue::Score(a.as_f64() + b.as_f64()),
        }
    }

    pub fn total_cmp(&self, other: &MetricValue) -> Ordering {
        match (self, other) {
            (MetricValue::Count(a), MetricValue::Count(b)) => a.cmp(b),
            (a, b) => a.as_f64().total_cmp(&b.as_f64()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoShare {
    pub repo: String,
    pub lines: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub language: String,
    pub value: MetricValue,
    pub top_repos: Vec<RepoShare>,
}

pub const OTHER_LABEL: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Leaderboard,
    Bar,
    HorizontalBar,
    Pie,
    Donut,
}

impl ChartKind {
    pub fn file_prefix(&self) -> &'static str {
        match self {
            ChartKind::Leaderboard => "leaderboard",
            ChartKind::Bar => "bar",
            ChartKind::HorizontalBar => "horizontal_bar",
            ChartKind::Pie => "pie",
            ChartKind::Donut => "donut",
        }
    }

    /// Pie-style charts fold everything past the top entries into "Other".
    pub fn collapse_top(&self) -> Option<usize> {
        match self {
            ChartKind::Pie | ChartKind::Donut => Some(8),
            _ => None,
        }
    }

    pub fn truncate_top(&self) -> Option<usize> {
        match self {
            ChartKind::Bar => Some(12),
            ChartKind::HorizontalBar => Some(15),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub user: String,
    pub chart: ChartKind,
    pub top_repos_count: usize,
    pub by_repos: Vec<RankedEntry>,
    pub by_lines: Vec<RankedEntry>,
    pub by_weighted: Vec<RankedEntry>,
}
