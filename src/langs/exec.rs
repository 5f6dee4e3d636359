use super::{aggregate, output_json, output_ndjson, RankedViews};
use crate::cli::CommonArgs;
use crate::github::GitHub;
use crate::model::ChartKind;
use crate::render::Renderer;
use anyhow::Context;
use console::style;

pub fn exec(common: CommonArgs, kind: ChartKind, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let config = common.to_config()?;

    let github = GitHub::new(&config).context("Failed to build GitHub client")?;
    let user = github
        .viewer()
        .context("Failed to authenticate with GitHub")?;

    let records = github
        .collect_records(&config)
        .context("Failed to collect repository language data")?;

    if records.is_empty() {
        println!(
            "{} no repositories found for {user}",
            style("note:").cyan().bold()
        );
        return Ok(());
    }

    let totals = aggregate(&records, &config);
    if totals.is_empty() {
        println!(
            "{} no language data left after filtering",
            style("note:").cyan().bold()
        );
        return Ok(());
    }

    let views = RankedViews::build(&totals, config.top_repos);

    if json {
        output_json(&views, &user, kind, &config)?;
    } else if ndjson {
        output_ndjson(&views)?;
    } else {
        let renderer = Renderer::new(&config).context("Failed to prepare output directory")?;
        renderer
            .render(kind, &user, &views)
            .context("Failed to render charts")?;
    }

    Ok(())
}
