use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use itertools::Itertools;
use ::scraper::{CaseSensitivity, ElementRef, Selector};
use regex::Regex;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{CompletedMatch, CompletedMatchList, CompletedMatchTeam};
use crate::vlr_scraper::{self, select_text};

const MATCH_DATE_FORMAT: &str = "%a, %B %e, %Y";
const MATCH_DATE_FORMAT_ALT: &str = "%a, %b %e, %Y";
const MATCH_TIME_FORMAT: &str = "%I:%M %p";

static MATCH_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(\d+)/([a-z0-9-]+)").unwrap());

#[instrument(skip(client))]
pub(crate) async fn list_completed_matches(
    client: &reqwest::Client,
    base_url: &str,
    page: u32,
) -> Result<CompletedMatchList> {
    let url = format!("{base_url}/matches/results");
    let page_param = page.to_string();
    let document =
        vlr_scraper::get_document(client, &url, &[("page", page_param.as_str())]).await?;
    let matches = parse_results(&document, base_url)?;
    debug!(count = matches.len(), page, "parsed completed matches");
    Ok(matches)
}

pub(crate) fn parse_results(
    document: &vlr_scraper::Html,
    base_url: &str,
) -> Result<CompletedMatchList> {
    let selector = Selector::parse(":is(div.wf-label.mod-large, a.match-item)")?;
    let mut matches = vec![];
    let mut last_date = None;
    for element in document.select(&selector) {
        if element
            .value()
            .has_class("wf-label", CaseSensitivity::CaseSensitive)
        {
            last_date = element.text().next().and_then(|raw| parse_date(raw.trim()));
        } else if let Some(item) = parse_match_item(&element, last_date, base_url)? {
            matches.push(item);
        }
    }
    Ok(matches)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, MATCH_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, MATCH_DATE_FORMAT_ALT))
        .ok()
}

fn parse_match_item(
    element: &ElementRef,
    date: Option<NaiveDate>,
    base_url: &str,
) -> Result<Option<CompletedMatch>> {
    let href = element.value().attr("href").unwrap_or_default();
    let Some((id, slug)) = MATCH_HREF
        .captures(href)
        .map(|c| (c[1].to_string(), c[2].to_string()))
    else {
        debug!(href, "skipping match item with unrecognised link");
        return Ok(None);
    };
    let href = format!("{base_url}{href}");

    let time_selector = Selector::parse("div.match-item-time")?;
    let time = select_text(element, &time_selector);
    let time = NaiveTime::parse_from_str(&time, MATCH_TIME_FORMAT).ok();
    let date_time = date.and_then(|d| time.map(|t| d.and_time(t)));

    let teams_selector = Selector::parse("div.match-item-vs div.match-item-vs-team")?;
    let teams = element.select(&teams_selector).collect_vec();
    let teams = parse_teams(&teams)?;

    let event_text_selector = Selector::parse("div.match-item-event.text-of")?;
    let event_text = element
        .select(&event_text_selector)
        .filter_map(|t| t.text().last())
        .map(|t| t.trim().to_string())
        .last()
        .unwrap_or_default();

    let event_series_text_selector =
        Selector::parse("div.match-item-event.text-of div.match-item-event-series.text-of")?;
    let event_series_text = select_text(element, &event_series_text_selector);

    Ok(Some(CompletedMatch {
        id,
        slug,
        href,
        date_time,
        teams,
        event_text,
        event_series_text,
    }))
}

fn parse_teams(teams: &[ElementRef]) -> Result<Vec<CompletedMatchTeam>> {
    teams.iter().map(parse_team).collect()
}

fn parse_team(team: &ElementRef) -> Result<CompletedMatchTeam> {
    let is_winner = team
        .value()
        .has_class("mod-winner", CaseSensitivity::CaseSensitive);

    let name_selector = Selector::parse("div.match-item-vs-team-name div.text-of")?;
    let name = select_text(team, &name_selector);

    let score_selector = Selector::parse("div.match-item-vs-team-score")?;
    let score = select_text(team, &score_selector).parse().ok();

    Ok(CompletedMatchTeam {
        name,
        is_winner,
        score,
    })
}
