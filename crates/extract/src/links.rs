//! Outbound link harvesting for competition and team pages.

use exn::ResultExt;
use scraper::{ElementRef, Html};
use tracing::instrument;
use url::Url;

use crate::dom::Navigate;
use crate::error::{ErrorKind, Result};
use crate::{TeamRegistry, Vocabulary, consts};

/// Absolute URLs in document order. Duplicates are kept.
pub type LinkSet = Vec<String>;

/// Returns `scheme://host/` of the source page, which every harvested
/// href is resolved against.
pub(crate) fn origin(source: &str) -> Result<Url> {
    let mut origin = Url::parse(source).or_raise(|| ErrorKind::InvalidUrl(source.to_string()))?;
    if origin.cannot_be_a_base() {
        exn::bail!(ErrorKind::InvalidUrl(source.to_string()));
    }
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);
    Ok(origin)
}

/// Resolves a (possibly relative) href against the page origin.
pub(crate) fn resolve(origin: &Url, href: &str) -> Result<String> {
    origin
        .join(href)
        .map(String::from)
        .or_raise(|| ErrorKind::InvalidUrl(href.to_string()))
}

/// Derives a team's display name from its page URL: the last path segment,
/// percent-decoded, with underscores as spaces. Query and fragment are ignored.
///
/// ```
/// use capstat_extract::team_name;
/// let url = "https://ru.wikipedia.org/wiki/%D0%A1%D0%B1%D0%BE%D1%80%D0%BD%D0%B0%D1%8F_%D0%A0%D0%BE%D1%81%D1%81%D0%B8%D0%B8_%D0%BF%D0%BE_%D1%84%D1%83%D1%82%D0%B1%D0%BE%D0%BB%D1%83";
/// assert_eq!(team_name(url), "Сборная России по футболу");
/// ```
pub fn team_name(source: &str) -> String {
    let path = source.split(['?', '#']).next().unwrap_or_default();
    let decoded = urlencoding::decode_binary(path.as_bytes());
    let decoded = String::from_utf8_lossy(&decoded);
    decoded.rsplit('/').next().unwrap_or_default().replace('_', " ").trim().to_string()
}

/// Collects the first-column links of every row of the competition's
/// standings tables.
#[instrument(level = "debug", skip(document), fields(links))]
pub fn competition_links(document: &Html, source: &str) -> Result<LinkSet> {
    let origin = origin(source)?;
    let links = document
        .select(&consts::STANDARD_TABLE_LINK_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(|href| resolve(&origin, href))
        .collect::<Result<LinkSet>>()?;
    tracing::Span::current().record("links", links.len());
    Ok(links)
}

/// Collects player links from the roster sections of a national team page and
/// registers each of them against the team's display name.
///
/// The current roster is preferred over the generic roster section; recent
/// call-ups are appended after it. A missing section is skipped.
#[instrument(level = "debug", skip(document, vocabulary, registry), fields(team, links))]
pub fn team_links(
    document: &Html,
    source: &str,
    vocabulary: &Vocabulary,
    registry: &mut TeamRegistry,
) -> Result<LinkSet> {
    let origin = origin(source)?;
    let roster = section_header(document, &vocabulary.current_roster).or_else(|| {
        tracing::debug!(fallback = %vocabulary.roster, "current roster section not found");
        section_header(document, &vocabulary.roster)
    });
    let call_ups = section_header(document, &vocabulary.recent_call_ups);

    let mut links = LinkSet::new();
    for table in [roster, call_ups].into_iter().flatten().filter_map(|header| following_table(&header)) {
        for row in table.select(&consts::ROW_SELECTOR) {
            let Some(href) = row.first(&consts::ROSTER_LINK_SELECTOR).and_then(|a| a.value().attr("href")) else {
                continue;
            };
            if href.contains(vocabulary.index_link.as_str()) {
                continue;
            }
            links.push(resolve(&origin, href)?);
        }
    }

    let team = team_name(source);
    for link in &links {
        registry.register(link.as_str(), team.as_str());
    }
    let span = tracing::Span::current();
    span.record("team", team.as_str());
    span.record("links", links.len());
    Ok(links)
}

/// Finds the heading element of the section whose anchor id starts with `prefix`.
fn section_header<'a>(document: &'a Html, prefix: &str) -> Option<ElementRef<'a>> {
    document
        .select(&consts::SECTION_ANCHOR_SELECTOR)
        .find(|element| element.value().id().is_some_and(|id| id.starts_with(prefix)))
        .and_then(|anchor| anchor.parent_element())
}

/// Walks forward from a section heading to the first table after it.
fn following_table<'a>(header: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    std::iter::successors(header.next_element(), |element| element.next_element()).find(|element| element.tag() == "table")
}
