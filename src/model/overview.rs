use serde::Serialize;

/// Column headers of an overview table, in record order.
///
/// The second "Kills - Deaths" column holds the first kills minus first
/// deaths differential. The site labels both the same way and the header is
/// kept as scraped.
pub const OVERVIEW_HEADERS: [&str; 18] = [
    "Rating",
    "Average Combat Score",
    "Kills",
    "Deaths",
    "Assists",
    "Kills - Deaths",
    "KAST %",
    "Average Damage per Round",
    "Headshot %",
    "First Kills",
    "First Deaths",
    "Kills - Deaths",
    "Player Side",
    "Match ID",
    "Map ID",
    "Agent",
    "Player Name",
    "Org",
];

/// Number of per-side stat values in a player row.
pub const STAT_COLUMNS: usize = 12;

/// Identifies a match detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReference {
    pub match_id: u32,
    pub match_slug: String,
}

impl MatchReference {
    pub fn new(match_id: u32, match_slug: impl Into<String>) -> Self {
        Self {
            match_id,
            match_slug: match_slug.into(),
        }
    }
}

/// The round-side subset a stat value is reported under.
///
/// Variants are declared in extraction order; iterate them with
/// [`strum::IntoEnumIterator`]. The string form is the marker class the site
/// puts on the matching `span` elements.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
)]
pub enum Side {
    /// T side (attack).
    #[strum(serialize = "mod-t")]
    #[serde(rename = "mod-t")]
    Attack,
    /// CT side (defense).
    #[strum(serialize = "mod-ct")]
    #[serde(rename = "mod-ct")]
    Defense,
    /// Both sides together.
    #[strum(serialize = "mod-both")]
    #[serde(rename = "mod-both")]
    Combined,
}

impl Side {
    /// The marker class used on stat spans for this side.
    pub fn class(self) -> &'static str {
        self.into()
    }
}

/// Raw stat values of one player on one side, as shown on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub rating: String,
    pub acs: String,
    pub kills: String,
    pub deaths: String,
    pub assists: String,
    pub kd_diff: String,
    pub kast: String,
    pub adr: String,
    pub hs_pct: String,
    pub first_kills: String,
    pub first_deaths: String,
    pub fk_diff: String,
}

impl StatLine {
    pub(crate) fn from_values(values: [String; STAT_COLUMNS]) -> Self {
        let [
            rating,
            acs,
            kills,
            deaths,
            assists,
            kd_diff,
            kast,
            adr,
            hs_pct,
            first_kills,
            first_deaths,
            fk_diff,
        ] = values;
        Self {
            rating,
            acs,
            kills,
            deaths,
            assists,
            kd_diff,
            kast,
            adr,
            hs_pct,
            first_kills,
            first_deaths,
            fk_diff,
        }
    }

    fn values(&self) -> [&str; STAT_COLUMNS] {
        [
            &self.rating,
            &self.acs,
            &self.kills,
            &self.deaths,
            &self.assists,
            &self.kd_diff,
            &self.kast,
            &self.adr,
            &self.hs_pct,
            &self.first_kills,
            &self.first_deaths,
            &self.fk_diff,
        ]
    }
}

/// One player's stats for one side of one map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerStatRow {
    pub stats: StatLine,
    pub side: Side,
    pub match_id: u32,
    pub map_id: String,
    pub agent: String,
    pub player_name: String,
    pub org: String,
}

impl PlayerStatRow {
    /// The row as a flat record matching [`OVERVIEW_HEADERS`].
    pub fn to_record(&self) -> Vec<String> {
        let mut record = Vec::from(self.stats.values().map(str::to_string));
        record.push(self.side.to_string());
        record.push(self.match_id.to_string());
        record.push(self.map_id.clone());
        record.push(self.agent.clone());
        record.push(self.player_name.clone());
        record.push(self.org.clone());
        record
    }
}

/// All player rows of a match overview, in page order: section, table, side,
/// then player.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchOverview {
    pub match_id: u32,
    pub rows: Vec<PlayerStatRow>,
}
