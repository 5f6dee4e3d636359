use crate::error::{LangrankError, Result};
use crate::model::{ChartKind, Config};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "langrank")]
#[command(about = "GitHub language statistics tool for leaderboards and chart generation")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "GitHub token with repository read access")]
    pub token: String,

    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com", help = "GitHub API base URL")]
    pub api_url: String,

    #[arg(long, help = "Include forked repositories", default_value_t = false)]
    pub include_forks: bool,

    #[arg(long = "exclude-repo", value_name = "NAME", help = "Repository name to exclude (repeatable)")]
    pub exclude_repos: Vec<String>,

    #[arg(
        long = "exclude-language",
        value_name = "NAME",
        default_values_t = ["HTML".to_string(), "CSS".to_string()],
        help = "Language to exclude (repeatable)"
    )]
    pub exclude_languages: Vec<String>,

    #[arg(long, default_value_t = 5, help = "Top contributing repositories shown per language")]
    pub top_repos: u32,

    #[arg(long, default_value = "output", help = "Directory for generated charts")]
    pub output: PathBuf,

    #[arg(long, help = "Render charts on a dark background", default_value_t = false)]
    pub dark: bool,

    #[arg(long, default_value = "10s", value_parser = humantime::parse_duration, help = "Per-request timeout")]
    pub timeout: Duration,
}

impl CommonArgs {
    pub fn to_config(&self) -> Result<Config> {
        if self.top_repos == 0 {
            return Err(LangrankError::Config(
                "--top-repos must be at least 1".to_string(),
            ));
        }
        Ok(Config {
            token: self.token.clone(),
            api_url: self.api_url.trim_end_matches('/').to_string(),
            include_forks: self.include_forks,
            exclude_repos: self.exclude_repos.iter().cloned().collect(),
            exclude_languages: self.exclude_languages.iter().cloned().collect(),
            top_repos: self.top_repos as usize,
            output_dir: self.output.clone(),
            dark: self.dark,
            timeout: self.timeout,
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Full language leaderboard with top-repository breakdown")]
    Leaderboard {
        #[arg(long, help = "Output rankings as JSON instead of rendering")]
        json: bool,

        #[arg(long, help = "Output rankings as NDJSON instead of rendering")]
        ndjson: bool,
    },
    #[command(about = "Vertical bar charts of the top languages")]
    Bar {
        #[arg(long, help = "Output rankings as JSON instead of rendering")]
        json: bool,

        #[arg(long, help = "Output rankings as NDJSON instead of rendering")]
        ndjson: bool,
    },
    #[command(about = "Horizontal bar charts of the top languages")]
    HorizontalBar {
        #[arg(long, help = "Output rankings as JSON instead of rendering")]
        json: bool,

        #[arg(long, help = "Output rankings as NDJSON instead of rendering")]
        ndjson: bool,
    },
    #[command(about = "Pie charts with the top languages plus an Other slice")]
    Pie {
        #[arg(long, help = "Output rankings as JSON instead of rendering")]
        json: bool,

        #[arg(long, help = "Output rankings as NDJSON instead of rendering")]
        ndjson: bool,
    },
    #[command(about = "Donut charts with the top languages plus an Other slice")]
    Donut {
        #[arg(long, help = "Output rankings as JSON instead of rendering")]
        json: bool,

        #[arg(long, help = "Output rankings as NDJSON instead of rendering")]
        ndjson: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> anyhow::Result<()> {
        let (kind, json, ndjson) = match self.command {
            Commands::Leaderboard { json, ndjson } => (ChartKind::Leaderboard, json, ndjson),
            Commands::Bar { json, ndjson } => (ChartKind::Bar, json, ndjson),
            Commands::HorizontalBar { json, ndjson } => (ChartKind::HorizontalBar, json, ndjson),
            Commands::Pie { json, ndjson } => (ChartKind::Pie, json, ndjson),
            Commands::Donut { json, ndjson } => (ChartKind::Donut, json, ndjson),
        };
        crate::langs::exec(self.common, kind, json, ndjson)
    }
}
