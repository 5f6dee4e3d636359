use crate::model::{
    ChartKind, Config, Metric, MetricValue, RankingOutput, RepoShare, SCHEMA_VERSION,
};
use super::RankedViews;
use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

pub fn output_json(
    views: &RankedViews,
    user: &str,
    kind: ChartKind,
    config: &Config,
) -> Result<()> {
    let output = RankingOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        user: user.to_string(),
        chart: kind,
        top_repos_count: config.top_repos,
        by_repos: views.by_repos.clone(),
        by_lines: views.by_lines.clone(),
        by_weighted: views.by_weighted.clone(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[derive(Serialize)]
struct Row<'a> {
    metric: Metric,
    language: &'a str,
    value: MetricValue,
    top_repos: &'a [RepoShare],
}

pub fn output_ndjson(views: &RankedViews) -> Result<()> {
    for metric in Metric::ALL {
        for entry in views.for_metric(metric) {
            let row = Row {
                metric,
                language: &entry.language,
                value: entry.value,
                top_repos: &entry.top_repos,
            };
            println!("{}", serde_json::to_string(&row)?);
        }
    }
    Ok(())
}
