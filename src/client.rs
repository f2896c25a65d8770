use std::path::Path;

use tracing::instrument;

use crate::error::Result;
use crate::model::*;
use crate::vlr_scraper::{self, BASE_URL};

/// The main entry point for scraping VLR.gg results and overviews.
///
/// `VlrClient` wraps a [`reqwest::Client`] and issues one request per call.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> vlr_overview::Result<()> {
/// use vlr_overview::VlrClient;
///
/// let client = VlrClient::new();
/// let matches = client.list_completed_matches(1).await?;
/// if let Some(first) = matches.first() {
///     let reference = first.reference()?;
///     let overview = client
///         .get_match_overview(reference.match_id, &reference.match_slug, None)
///         .await?;
///     println!("{} rows", overview.rows.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct VlrClient {
    http: reqwest::Client,
    base_url: String,
}

impl VlrClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch one page of the completed match listing.
    #[instrument(skip(self))]
    pub async fn list_completed_matches(&self, page: u32) -> Result<CompletedMatchList> {
        vlr_scraper::results::list_completed_matches(&self.http, &self.base_url, page).await
    }

    /// Fetch per-player overview statistics for a match.
    ///
    /// When `output_dir` is an existing directory the table is also saved
    /// there as `{match_id}_overview.csv`; otherwise saving is skipped.
    #[instrument(skip(self))]
    pub async fn get_match_overview(
        &self,
        match_id: u32,
        match_slug: &str,
        output_dir: Option<&Path>,
    ) -> Result<MatchOverview> {
        let overview = vlr_scraper::overview::get_match_overview(
            &self.http,
            &self.base_url,
            match_id,
            match_slug,
        )
        .await?;
        if let Some(dir) = output_dir {
            overview.save_csv(dir)?;
        }
        Ok(overview)
    }
}

impl Default for VlrClient {
    fn default() -> Self {
        Self::new()
    }
}
