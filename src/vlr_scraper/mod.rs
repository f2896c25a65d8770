pub(crate) mod overview;
pub(crate) mod results;

pub(crate) use ::scraper::Html;
use ::scraper::{ElementRef, Selector};
use tracing::debug;
use url::Url;

use crate::error::{Result, VlrError};

pub(crate) const BASE_URL: &str = "https://www.vlr.gg";

/// Fetch `url` with `query` appended and parse the response body as an HTML
/// document.
pub(crate) async fn get_document(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<Html> {
    let url = build_url(url, query)?;
    debug!(%url, "fetching page");

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| VlrError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(VlrError::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| VlrError::ResponseBody {
        url: url.to_string(),
        source: e,
    })?;

    Ok(Html::parse_document(&body))
}

fn build_url(url: &str, query: &[(&str, &str)]) -> Result<Url> {
    let result = if query.is_empty() {
        Url::parse(url)
    } else {
        Url::parse_with_params(url, query)
    };
    result.map_err(|e| VlrError::InvalidUrl {
        url: url.to_owned(),
        source: e,
    })
}

/// Extract trimmed text content from the first element matching `selector`
/// inside `element`. Returns an empty string if nothing matches.
pub(crate) fn select_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .and_then(|d| d.text().map(|t| t.trim()).find(|t| !t.is_empty()))
        .unwrap_or_default()
        .trim()
        .replace(['\n', '\t'], "")
        .to_string()
}

/// All text below `element`, with whitespace runs collapsed to single spaces.
pub(crate) fn collapsed_text(element: &ElementRef) -> String {
    element.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_encodes_query() {
        let url = build_url(
            "https://www.vlr.gg/378662/gen-g-vs-sentinels",
            &[("game", "all"), ("tab", "overview")],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.vlr.gg/378662/gen-g-vs-sentinels?game=all&tab=overview"
        );
    }

    #[test]
    fn test_build_url_rejects_relative() {
        let result = build_url("/matches/results", &[("page", "1")]);
        assert!(matches!(result, Err(VlrError::InvalidUrl { .. })));
    }

    #[test]
    fn test_collapsed_text() {
        let html = Html::parse_fragment("<div>\n\t<b> TenZ </b>\n\t<i>SEN</i>\n</div>");
        let selector = Selector::parse("div").unwrap();
        let div = html.select(&selector).next().unwrap();
        assert_eq!(collapsed_text(&div), "TenZ SEN");
        assert_eq!(select_text(&div, &Selector::parse("i").unwrap()), "SEN");
    }
}
