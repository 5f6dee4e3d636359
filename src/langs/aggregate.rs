use crate::model::{Config, LanguageStat, LanguageTotals, RepoRecord};
use std::collections::HashMap;

/// Fold repository records into per-language totals. Accumulation is purely
/// additive, so the result does not depend on record order.
pub fn aggregate(records: &[RepoRecord], config: &Config) -> LanguageTotals {
    let mut languages: HashMap<String, LanguageStat> = HashMap::new();

    for record in records {
        for (language, &lines) in &record.languages {
            if !config.keeps_language(language) {
                continue;
            }
            languages
                .entry(language.clone())
                .or_default()
                .add_contribution(&record.full_name, lines);
        }
    }

    let mut totals = LanguageTotals { languages };
    compute_weighted(&mut totals);
    totals
}

/// Weighted score: mean of the language's share of the largest repo count and
/// its share of the largest line count, both taken over included languages.
fn compute_weighted(totals: &mut LanguageTotals) {
    let max_lines = totals.languages.values().map(|s| s.lines).max().unwrap_or(0);
    let max_repos = totals
        .languages
        .values()
        .map(|s| s.repo_count())
        .max()
        .unwrap_or(0);

    for stat in totals.languages.values_mut() {
        let lines_part = if max_lines > 0 {
            stat.lines as f64 / max_lines as f64
        } else {
            0.0
        };
        let repos_part = if max_repos > 0 {
            stat.repo_count() as f64 / max_repos as f64
        } else {
            0.0
        };
        stat.weighted = (lines_part + repos_part) / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::time::Duration;

    fn config(exclude_languages: &[&str]) -> Config {
        Config {
            token: "t".to_string(),
            api_url: "http://localhost".to_string(),
            include_forks: false,
            exclude_repos: HashSet::new(),
            exclude_languages: exclude_languages.iter().map(|s| s.to_string()).collect(),
            top_repos: 5,
            output_dir: PathBuf::from("output"),
            dark: false,
            timeout: Duration::from_secs(10),
        }
    }

    fn record(full_name: &str, languages: &[(&str, u64)]) -> RepoRecord {
        RepoRecord {
            full_name: full_name.to_string(),
            name: full_name.rsplit('/').next().unwrap_or(full_name).to_string(),
            fork: false,
            languages: languages
                .iter()
                .map(|(l, n)| (l.to_string(), *n))
                .collect(),
        }
    }

    #[test]
    fn totals_sum_lines_and_track_repos() {
        let records = vec![
            record("me/a", &[("Go", 100), ("Python", 50)]),
            record("me/b", &[("Go", 30)]),
        ];
        let totals = aggregate(&records, &config(&[]));

        let go = &totals.languages["Go"];
        assert_eq!(go.lines, 130);
        assert_eq!(go.repo_count(), 2);
        assert_eq!(go.repos["me/a"], 100);
        assert_eq!(go.repos["me/b"], 30);

        let python = &totals.languages["Python"];
        assert_eq!(python.lines, 50);
        assert_eq!(python.repo_count(), 1);
    }

    #[test]
    fn excluded_languages_never_appear() {
        let records = vec![record("me/c", &[("HTML", 1000), ("Rust", 10)])];
        let totals = aggregate(&records, &config(&["HTML"]));

        assert!(totals.languages.contains_key("Rust"));
        assert!(!totals.languages.contains_key("HTML"));
        assert_eq!(totals.languages["Rust"].lines, 10);
    }

    #[test]
    fn language_names_are_case_sensitive() {
        let records = vec![record("me/c", &[("html", 7)])];
        let totals = aggregate(&records, &config(&["HTML"]));
        assert!(totals.languages.contains_key("html"));
    }

    #[test]
    fn aggregation_is_order_independent() {
        let mut records = vec![
            record("me/a", &[("Go", 100), ("Python", 50)]),
            record("me/b", &[("Go", 30), ("Rust", 7)]),
            record("me/c", &[("Rust", 2)]),
        ];
        let forward = aggregate(&records, &config(&[]));
        records.reverse();
        let backward = aggregate(&records, &config(&[]));

        assert_eq!(forward.languages, backward.languages);
    }

    #[test]
    fn weighted_scores_blend_both_shares() {
        // Go: max lines and max repos -> 1.0; Python: half the repos, ~0.38 of the lines.
        let records = vec![
            record("me/a", &[("Go", 100), ("Python", 50)]),
            record("me/b", &[("Go", 30)]),
        ];
        let totals = aggregate(&records, &config(&[]));

        assert_eq!(totals.languages["Go"].weighted, 1.0);
        let python = totals.languages["Python"].weighted;
        let expected = (50.0 / 130.0 + 1.0 / 2.0) / 2.0;
        assert!((python - expected).abs() < 1e-12);
    }

    #[test]
    fn filtered_forks_contribute_nothing() {
        let cfg = config(&[]);
        let mut b = record("me/b", &[("Go", 30)]);
        b.fork = true;

        let records: Vec<RepoRecord> = vec![record("me/a", &[("Go", 100), ("Python", 50)]), b]
            .into_iter()
            .filter(|r| cfg.selects_repo(&r.name, r.fork))
            .collect();
        let totals = aggregate(&records, &cfg);

        let go = &totals.languages["Go"];
        assert_eq!(go.lines, 100);
        assert_eq!(go.repos.keys().collect::<Vec<_>>(), vec!["me/a"]);
        assert_eq!(totals.languages["Python"].lines, 50);
    }

    #[test]
    fn empty_input_gives_empty_totals() {
        let totals = aggregate(&[], &config(&[]));
        assert!(totals.is_empty());
    }
}
