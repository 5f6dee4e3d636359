use crate::model::{
    LanguageStat, LanguageTotals, Metric, MetricValue, RankedEntry, RepoShare, OTHER_LABEL,
};

/// The three ranked views every chart kind draws from.
pub struct RankedViews {
    pub by_repos: Vec<RankedEntry>,
    pub by_lines: Vec<RankedEntry>,
    pub by_weighted: Vec<RankedEntry>,
}

impl RankedViews {
    pub fn build(totals: &LanguageTotals, top_repos: usize) -> Self {
        Self {
            by_repos: rank(totals, Metric::Repos, top_repos),
            by_lines: rank(totals, Metric::Lines, top_repos),
            by_weighted: rank(totals, Metric::Weighted, top_repos),
        }
    }

    pub fn for_metric(&self, metric: Metric) -> &[RankedEntry] {
        match metric {
            Metric::Repos => &self.by_repos,
            Metric::Lines => &self.by_lines,
            Metric::Weighted => &self.by_weighted,
        }
    }
}

/// Sort languages descending by `metric`, ties broken by name ascending.
pub fn rank(totals: &LanguageTotals, metric: Metric, top_repos: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = totals
        .languages
        .iter()
        .map(|(language, stat)| RankedEntry {
            language: language.clone(),
            value: stat.metric_value(metric),
            top_repos: top_contributors(stat, top_repos),
        })
        .collect();

    entries.sort_by(|a, b| {
        b.value
            .total_cmp(&a.value)
            .then_with(|| a.language.cmp(&b.language))
    });
    entries
}

fn top_contributors(stat: &LanguageStat, count: usize) -> Vec<RepoShare> {
    let mut shares: Vec<RepoShare> = stat
        .repos
        .iter()
        .map(|(repo, &lines)| RepoShare {
            repo: repo.clone(),
            lines,
        })
        .collect();

    shares.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.repo.cmp(&b.repo)));
    shares.truncate(count);
    shares
}

/// Keep the first `keep` entries and fold the rest into a trailing "Other"
/// entry. The fold preserves the metric sum exactly for count metrics.
pub fn collapse_other(entries: &[RankedEntry], keep: usize) -> Vec<RankedEntry> {
    if entries.len() <= keep {
        return entries.to_vec();
    }

    let mut collapsed = entries[..keep].to_vec();
    let other = entries[keep..]
        .iter()
        .map(|e| e.value)
        .reduce(MetricValue::add)
        .unwrap_or(MetricValue::Count(0));

    collapsed.push(RankedEntry {
        language: OTHER_LABEL.to_string(),
        value: other,
        top_repos: Vec::new(),
    });
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn stat(contributions: &[(&str, u64)]) -> LanguageStat {
        let repos: HashMap<String, u64> = contributions
            .iter()
            .map(|(r, n)| (r.to_string(), *n))
            .collect();
        LanguageStat {
            lines: repos.values().sum(),
            repos,
            weighted: 0.0,
        }
    }

    fn totals(languages: &[(&str, LanguageStat)]) -> LanguageTotals {
        LanguageTotals {
            languages: languages
                .iter()
                .map(|(l, s)| (l.to_string(), s.clone()))
                .collect(),
        }
    }

    fn names(entries: &[RankedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.language.as_str()).collect()
    }

    #[test]
    fn ranking_is_descending_by_metric() {
        let totals = totals(&[
            ("Go", stat(&[("me/a", 100), ("me/b", 30)])),
            ("Python", stat(&[("me/a", 50)])),
            ("Rust", stat(&[("me/c", 500)])),
        ]);
        let ranked = rank(&totals, Metric::Lines, 5);
        assert_eq!(names(&ranked), vec!["Rust", "Go", "Python"]);
        assert_eq!(ranked[0].value, MetricValue::Count(500));
    }

    #[test]
    fn ties_break_by_language_name_ascending() {
        let totals = totals(&[
            ("Zig", stat(&[("me/a", 10)])),
            ("Ada", stat(&[("me/b", 10)])),
            ("Nim", stat(&[("me/c", 10)])),
        ]);
        let ranked = rank(&totals, Metric::Lines, 5);
        assert_eq!(names(&ranked), vec!["Ada", "Nim", "Zig"]);

        let by_repos = rank(&totals, Metric::Repos, 5);
        assert_eq!(names(&by_repos), vec!["Ada", "Nim", "Zig"]);
    }

    #[test]
    fn top_contributors_are_capped_and_ordered() {
        let totals = totals(&[("Go", stat(&[("me/a", 100), ("me/b", 30), ("me/c", 30)]))]);
        let ranked = rank(&totals, Metric::Lines, 1);
        assert_eq!(
            ranked[0].top_repos,
            vec![RepoShare {
                repo: "me/a".to_string(),
                lines: 100
            }]
        );

        // Contributor ties break by repository identifier ascending.
        let ranked = rank(&totals, Metric::Lines, 3);
        let repos: Vec<&str> = ranked[0].top_repos.iter().map(|s| s.repo.as_str()).collect();
        assert_eq!(repos, vec!["me/a", "me/b", "me/c"]);
    }

    #[test]
    fn collapse_preserves_the_metric_sum() {
        let entries: Vec<RankedEntry> = (0..12)
            .map(|i| RankedEntry {
                language: format!("L{i:02}"),
                value: MetricValue::Count(100 - i as u64),
                top_repos: Vec::new(),
            })
            .collect();

        let collapsed = collapse_other(&entries, 8);
        assert_eq!(collapsed.len(), 9);
        assert_eq!(collapsed[8].language, OTHER_LABEL);

        let before: u64 = entries
            .iter()
            .map(|e| match e.value {
                MetricValue::Count(n) => n,
                MetricValue::Score(_) => 0,
            })
            .sum();
        let after: u64 = collapsed
            .iter()
            .map(|e| match e.value {
                MetricValue::Count(n) => n,
                MetricValue::Score(_) => 0,
            })
            .sum();
        assert_eq!(before, after);
    }

    #[test]
    fn collapse_is_a_no_op_for_short_lists() {
        let entries = vec![RankedEntry {
            language: "Go".to_string(),
            value: MetricValue::Count(1),
            top_repos: Vec::new(),
        }];
        assert_eq!(collapse_other(&entries, 8), entries);
    }

    #[test]
    fn other_is_appended_last_regardless_of_magnitude() {
        let mut entries: Vec<RankedEntry> = (0..9)
            .map(|i| RankedEntry {
                language: format!("L{i}"),
                value: MetricValue::Count(10),
                top_repos: Vec::new(),
            })
            .collect();
        // The tail outweighs every kept entry; it still lands at the end.
        entries.push(RankedEntry {
            language: "Huge".to_string(),
            value: MetricValue::Count(1_000),
            top_repos: Vec::new(),
        });

        let collapsed = collapse_other(&entries, 8);
        assert_eq!(collapsed.last().unwrap().language, OTHER_LABEL);
        assert_eq!(collapsed.last().unwrap().value, MetricValue::Count(1_010));
    }

    #[test]
    fn score_metrics_collapse_by_summing() {
        let entries: Vec<RankedEntry> = [0.9, 0.5, 0.25, 0.125]
            .iter()
            .enumerate()
            .map(|(i, s)| RankedEntry {
                language: format!("L{i}"),
                value: MetricValue::Score(*s),
                top_repos: Vec::new(),
            })
            .collect();

        let collapsed = collapse_other(&entries, 2);
        assert_eq!(collapsed.last().unwrap().value, MetricValue::Score(0.375));
    }
}
