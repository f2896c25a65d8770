use itertools::Itertools;
use ::scraper::{ElementRef, Selector};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

use crate::error::{Result, VlrError};
use crate::model::{MatchOverview, PlayerStatRow, Side, StatLine, STAT_COLUMNS};
use crate::vlr_scraper::{self, collapsed_text};

const OVERVIEW_QUERY: [(&str, &str); 2] = [("game", "all"), ("tab", "overview")];

#[instrument(skip(client))]
pub(crate) async fn get_match_overview(
    client: &reqwest::Client,
    base_url: &str,
    match_id: u32,
    match_slug: &str,
) -> Result<MatchOverview> {
    let url = format!("{base_url}/{match_id}/{match_slug}");
    let document = vlr_scraper::get_document(client, &url, &OVERVIEW_QUERY).await?;
    let overview = parse_overview(&document, match_id)?;
    debug!(match_id, rows = overview.rows.len(), "parsed match overview");
    Ok(overview)
}

/// A map section of the overview page and the team tables it encloses.
struct MapSection<'a> {
    map_id: String,
    tables: Vec<ElementRef<'a>>,
}

/// A body row of a team table with its identity columns resolved.
struct PlayerEntry<'a> {
    row: ElementRef<'a>,
    player_name: String,
    org: String,
    agent: String,
}

pub(crate) fn parse_overview(
    document: &vlr_scraper::Html,
    match_id: u32,
) -> Result<MatchOverview> {
    let sections = parse_map_sections(document)?;
    let side_selectors = Side::iter()
        .map(|side| -> Result<(Side, Selector)> {
            Ok((side, Selector::parse(&format!("span.{side}"))?))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut rows = vec![];
    for section in &sections {
        for table in &section.tables {
            let players = parse_players(table)?;
            for (side, selector) in &side_selectors {
                for player in &players {
                    rows.push(PlayerStatRow {
                        stats: parse_stats(&player.row, *side, selector)?,
                        side: *side,
                        match_id,
                        map_id: section.map_id.clone(),
                        agent: player.agent.clone(),
                        player_name: player.player_name.clone(),
                        org: player.org.clone(),
                    });
                }
            }
        }
    }
    Ok(MatchOverview { match_id, rows })
}

fn parse_map_sections<'a>(document: &'a vlr_scraper::Html) -> Result<Vec<MapSection<'a>>> {
    let section_selector = Selector::parse("div.vm-stats-game")?;
    let table_selector = Selector::parse("table")?;
    document
        .select(&section_selector)
        .map(|section| -> Result<MapSection<'a>> {
            let map_id = section
                .value()
                .attr("data-game-id")
                .ok_or(VlrError::ElementNotFound {
                    context: "map section id (div.vm-stats-game[data-game-id])",
                })?
                .trim()
                .to_string();
            let tables = section.select(&table_selector).collect_vec();
            if tables.len() != 2 {
                warn!(%map_id, tables = tables.len(), "expected one table per team");
            }
            Ok(MapSection { map_id, tables })
        })
        .collect()
}

fn parse_players<'a>(table: &ElementRef<'a>) -> Result<Vec<PlayerEntry<'a>>> {
    let body_selector = Selector::parse("tbody")?;
    let body = table
        .select(&body_selector)
        .next()
        .ok_or(VlrError::ElementNotFound {
            context: "team table body (tbody)",
        })?;
    let row_selector = Selector::parse("tr")?;
    body.select(&row_selector).map(parse_player).collect()
}

fn parse_player(row: ElementRef<'_>) -> Result<PlayerEntry<'_>> {
    let player_selector = Selector::parse("td.mod-player")?;
    let cell = row
        .select(&player_selector)
        .next()
        .ok_or(VlrError::ElementNotFound {
            context: "player cell (td.mod-player)",
        })?;
    let (player_name, org) = split_player_cell(&collapsed_text(&cell))?;

    let agent_selector = Selector::parse("img")?;
    let agent = row
        .select(&agent_selector)
        .next()
        .ok_or(VlrError::ElementNotFound {
            context: "agent image (img)",
        })?
        .value()
        .attr("alt")
        .ok_or(VlrError::ElementNotFound {
            context: "agent name (img[alt])",
        })?
        .to_string();

    Ok(PlayerEntry {
        row,
        player_name,
        org,
        agent,
    })
}

/// Split player cell text into the player name and org tag.
///
/// The cell must hold exactly two whitespace-separated tokens.
pub(crate) fn split_player_cell(text: &str) -> Result<(String, String)> {
    text.split_whitespace()
        .map(str::to_string)
        .collect_tuple()
        .ok_or_else(|| VlrError::PlayerCell {
            text: text.trim().to_string(),
        })
}

fn parse_stats(row: &ElementRef, side: Side, selector: &Selector) -> Result<StatLine> {
    let values = row
        .select(selector)
        .map(|span| span.text().map(str::trim).collect::<String>())
        .collect_vec();
    let values: [String; STAT_COLUMNS] =
        values.try_into().map_err(|v: Vec<String>| VlrError::StatCount {
            side: side.class(),
            expected: STAT_COLUMNS,
            found: v.len(),
        })?;
    Ok(StatLine::from_values(values))
}
