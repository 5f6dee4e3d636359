use crate::error::{LangrankError, Result};
use crate::model::{Config, RepoRecord};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use std::collections::HashMap;

const PER_PAGE: usize = 100;
const API_VERSION: &str = "2022-11-28";

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRepo {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub fork: bool,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    login: String,
}

pub struct GitHub {
    client: Client,
    base: String,
}

impl GitHub {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| LangrankError::Auth("token contains invalid header characters".to_string()))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("langrank/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base: config.api_url.clone(),
        })
    }

    fn get(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(LangrankError::Auth(format!(
                "GitHub rejected the request with HTTP {status}; \
                 make sure the token is valid and grants repository read access"
            )));
        }
        if !status.is_success() {
            return Err(LangrankError::Api(format!("{url} returned HTTP {status}")));
        }
        Ok(response)
    }

    /// Login of the account the token belongs to.
    pub fn viewer(&self) -> Result<String> {
        let user: ApiUser = self.get(&format!("{}/user", self.base))?.json()?;
        Ok(user.login)
    }

    pub fn repositories(&self) -> Result<Vec<ApiRepo>> {
        let mut repos = Vec::new();
        let mut page = 1usize;
        loop {
            let url = format!(
                "{}/user/repos?affiliation=owner&per_page={PER_PAGE}&page={page}",
                self.base
            );
            let batch: Vec<ApiRepo> = self.get(&url)?.json()?;
            let len = batch.len();
            repos.extend(batch);
            if len < PER_PAGE {
                break;
            }
            page += 1;
        }
        Ok(repos)
    }

    /// Language name to byte count for one repository.
    pub fn languages(&self, full_name: &str) -> Result<HashMap<String, u64>> {
        let url = format!("{}/repos/{full_name}/languages", self.base);
        Ok(self.get(&url)?.json()?)
    }

    /// Fetch the language breakdown for every repository selected by the
    /// configuration. A repository whose breakdown cannot be fetched is
    /// skipped with a warning; authentication failures abort the run.
    pub fn collect_records(&self, config: &Config) -> Result<Vec<RepoRecord>> {
        let selected: Vec<ApiRepo> = self
            .repositories()?
            .into_iter()
            .filter(|repo| config.selects_repo(&repo.name, repo.fork))
            .collect();

        let pb = ProgressBar::new(selected.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut records = Vec::with_capacity(selected.len());
        let mut skipped = 0usize;
        for repo in selected {
            pb.set_message(repo.full_name.clone());
            match self.languages(&repo.full_name) {
                Ok(languages) if !languages.is_empty() => {
                    records.push(RepoRecord {
                        full_name: repo.full_name,
                        name: repo.name,
                        fork: repo.fork,
                        languages,
                    });
                }
                Ok(_) => {}
                Err(err @ LangrankError::Auth(_)) => {
                    pb.finish_and_clear();
                    return Err(err);
                }
                Err(err) => {
                    skipped += 1;
                    pb.suspend(|| {
                        eprintln!(
                            "{} could not fetch languages for {}: {}",
                            style("warning:").yellow().bold(),
                            repo.full_name,
                            err
                        );
                    });
                }
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        if skipped > 0 {
            eprintln!(
                "{} skipped {skipped} repositories with failed language fetches",
                style("warning:").yellow().bold()
            );
        }

        Ok(records)
    }
}
