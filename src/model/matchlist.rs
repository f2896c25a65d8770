use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::Result;
use crate::model::MatchReference;

/// A page of completed matches from the results listing.
pub type CompletedMatchList = Vec<CompletedMatch>;

/// A completed match as listed on the results page.
#[derive(Debug, Clone, Serialize)]
pub struct CompletedMatch {
    pub id: String,
    pub slug: String,
    pub href: String,
    pub date_time: Option<NaiveDateTime>,
    pub teams: Vec<CompletedMatchTeam>,
    pub event_text: String,
    pub event_series_text: String,
}

impl CompletedMatch {
    /// The reference needed to fetch this match's overview.
    pub fn reference(&self) -> Result<MatchReference> {
        Ok(MatchReference::new(self.id.parse()?, self.slug.clone()))
    }
}

/// Team info as shown in a results entry.
#[derive(Debug, Clone, Serialize)]
pub struct CompletedMatchTeam {
    pub name: String,
    pub is_winner: bool,
    pub score: Option<u8>,
}
