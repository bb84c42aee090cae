//! Page kind detection from the info panel marker.

use exn::OptionExt;
use scraper::Html;
use tracing::instrument;

use crate::Vocabulary;
use crate::consts;
use crate::error::{ErrorKind, Result};
use crate::models::PageKind;

/// Reads the info panel's `data-name` marker and decides the page kind.
///
/// A marker containing the competition keyword wins over the national team
/// keyword; anything else is treated as a player profile.
#[instrument(level = "trace", skip_all)]
pub fn classify(document: &Html, vocabulary: &Vocabulary) -> Result<PageKind> {
    let marker = document
        .select(&consts::INFOBOX_SELECTOR)
        .next()
        .and_then(|infobox| infobox.value().attr("data-name"))
        .ok_or_raise(|| ErrorKind::Classification)?;
    Ok(if marker.contains(vocabulary.competition.as_str()) {
        PageKind::Competition
    } else if marker.contains(vocabulary.national_team_page.as_str()) {
        PageKind::Team
    } else {
        PageKind::Player
    })
}
