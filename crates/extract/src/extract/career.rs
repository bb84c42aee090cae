//! Club and national team caps/goals.
//!
//! Career totals appear twice on a profile page: as per-spell rows in the
//! info panel (`"<caps> (<goals>)"`) and as a totals row at the bottom of the
//! career statistics table. Either may be incomplete, so both are read and
//! reconciled. Goalkeepers have their conceded goals written as negative
//! numbers, which is how scored and conceded are told apart.

use exn::{OptionExt, ResultExt};
use scraper::{ElementRef, Html, Selector};
use tracing::instrument;

use crate::Vocabulary;
use crate::consts;
use crate::dom::Navigate;
use crate::error::{ErrorKind, Result};
use crate::models::Tally;

const MINUS_VARIANTS: [char; 2] = ['−', '–'];
const DASHES: [char; 4] = ['-', '−', '–', '—'];

/// Caps and signed goals summed over one source.
type Totals = (u32, i64);

#[derive(Debug)]
pub struct Career<'a> {
    document: &'a Html,
    vocabulary: &'a Vocabulary,
    rows: Vec<ElementRef<'a>>,
}

/// Career Internals
impl<'a> Career<'a> {
    pub(crate) fn new(document: &'a Html, vocabulary: &'a Vocabulary) -> Self {
        Self {
            document,
            vocabulary,
            rows: Self::collect_rows(document),
        }
    }

    /// Info panel rows that don't themselves contain a nested table, so the
    /// same row isn't seen once as a container and again as its children.
    fn collect_rows(document: &'a Html) -> Vec<ElementRef<'a>> {
        document
            .select(&consts::INFOBOX_ROW_SELECTOR)
            .filter(|row| row.first(&consts::ROW_SELECTOR).is_none())
            .collect()
    }

    /// Rows following the first row whose text contains `marker`, or `None`
    /// if no row does.
    fn rows_after(&self, marker: &str) -> Option<&[ElementRef<'a>]> {
        let position = self.rows.iter().position(|row| row.text_content().contains(marker))?;
        Some(&self.rows[position + 1..])
    }

    /// Sums the `"<caps> (<goals>)"` cells under the club career marker.
    #[instrument(level = "trace", skip(self))]
    fn club_rows(&self) -> Result<Option<Totals>> {
        let Some(rows) = self.rows_after(&self.vocabulary.club_career) else {
            return Ok(None);
        };
        self.sum_rows(rows, &consts::THIRD_CELL_SELECTOR, "club_caps", |cell| Ok(Some(cell))).map(Some)
    }

    /// Sums the national team rows. The second cell names the team and the
    /// cell after it holds the numbers; rows whose team carries the pending
    /// marker are not counted.
    #[instrument(level = "trace", skip(self))]
    fn national_rows(&self) -> Result<Option<Totals>> {
        let Some(rows) = self.rows_after(&self.vocabulary.national_career) else {
            return Ok(None);
        };
        let pending = self.vocabulary.pending.as_str();
        self.sum_rows(rows, &consts::SECOND_CELL_SELECTOR, "national_caps", |team| {
            let team_text = team.text_content();
            if contains_token(&team_text, pending) {
                tracing::debug!(team = team_text.trim(), "skipping pending national team row");
                return Ok(None);
            }
            team.next_element().map(Some).ok_or_raise(|| ErrorKind::MalformedStats {
                field: "national_caps",
                value: team_text.trim().to_string(),
            })
        })
        .map(Some)
    }

    /// Walks `rows` until one lacks a cell matching `anchor`, adding up the
    /// stats cell that `stats_cell` picks for each row (`None` skips the row).
    fn sum_rows(
        &self,
        rows: &[ElementRef<'a>],
        anchor: &Selector,
        field: &'static str,
        stats_cell: impl Fn(ElementRef<'a>) -> Result<Option<ElementRef<'a>>>,
    ) -> Result<Totals> {
        let (mut caps, mut goals) = (0u32, 0i64);
        for row in rows {
            let Some(cell) = row.first(anchor) else {
                break;
            };
            let Some(cell) = stats_cell(cell)? else {
                continue;
            };
            let text = cell.text_content();
            let (row_caps, row_goals) = parse_spell(&text, field)?;
            let overflow = || ErrorKind::MalformedStats {
                field,
                value: text.trim().to_string(),
            };
            caps = caps.checked_add(row_caps.unwrap_or(0)).ok_or_raise(overflow)?;
            goals = goals.checked_add(row_goals).ok_or_raise(overflow)?;
        }
        Ok((caps, goals))
    }

    /// Reads the totals row of the first career statistics table.
    #[instrument(level = "trace", skip(self))]
    fn club_summary(&self) -> Result<Option<Totals>> {
        let club_column = self.vocabulary.club_column.as_str();
        for row in self.document.select(&consts::SUMMARY_ROW_SELECTOR) {
            if row.within_class("infobox") {
                continue;
            }
            let headers: Vec<String> = row
                .select(&consts::HEADER_CELL_SELECTOR)
                .map(|th| th.text_content().trim().to_string())
                .collect();
            if headers.len() < 2 || (headers[0] != club_column && headers[1] != club_column) {
                continue;
            }
            return Self::summary_totals(&row).map(Some);
        }
        tracing::debug!("no career statistics table found");
        Ok(None)
    }

    fn summary_totals(header_row: &ElementRef<'a>) -> Result<Totals> {
        let malformed = |value: &str| ErrorKind::MalformedStats {
            field: "club_caps",
            value: value.to_string(),
        };
        let last_row = header_row
            .parent_element()
            .and_then(|body| body.child_elements_vec().into_iter().filter(|e| e.tag() == "tr").last())
            .ok_or_raise(|| malformed("no totals row"))?;
        let last_cell = last_row
            .child_elements_vec()
            .into_iter()
            .filter(|e| matches!(e.tag(), "th" | "td"))
            .last()
            .ok_or_raise(|| malformed("empty totals row"))?;

        let mut caps_cell = last_cell.prev_element().ok_or_raise(|| malformed(&last_cell.text_content()))?;
        // Any dash counts, not only a bare one: a signed goals total sitting
        // before a trailing column is stepped over the same way.
        if caps_cell.text_content().contains(DASHES) {
            caps_cell = caps_cell.prev_element().ok_or_raise(|| malformed(&caps_cell.text_content()))?;
        }
        let caps = parse_caps(&caps_cell.text_content())?;

        let mut goals_cell = caps_cell.next_element().ok_or_raise(|| malformed(&caps_cell.text_content()))?;
        if is_placeholder(&goals_cell.text_content()) {
            goals_cell = goals_cell.next_element().ok_or_raise(|| malformed(&goals_cell.text_content()))?;
        }
        let goals = parse_goals(&goals_cell.text_content(), "club_goals")?;
        Ok((caps, goals))
    }
}

/// Career Public
impl<'a> Career<'a> {
    /// Club tally, reconciled from the info panel rows and the statistics table.
    #[instrument(level = "debug", skip(self))]
    pub fn club(&self) -> Result<Tally> {
        let rows = self.club_rows()?.ok_or_raise(|| ErrorKind::MissingField("club_career"))?;
        let summary = self.club_summary()?.unwrap_or_default();
        tracing::trace!(?rows, ?summary, "club sources");
        Ok(Tally::reconcile(rows, summary))
    }

    /// National team tally; all zero when the player has no national team rows.
    #[instrument(level = "debug", skip(self))]
    pub fn national(&self) -> Result<Tally> {
        Ok(match self.national_rows()? {
            Some((caps, goals)) => Tally::from_signed(caps, goals),
            None => Tally::default(),
        })
    }
}

/// Parses one info panel spell, `"<caps> (<goals>)"`.
///
/// Caps are only returned when purely numeric. Goals stop at the first `)` or
/// `/`, and a `?` placeholder counts as zero.
pub(crate) fn parse_spell(text: &str, field: &'static str) -> Result<(Option<u32>, i64)> {
    let malformed = || ErrorKind::MalformedStats {
        field,
        value: text.trim().to_string(),
    };
    let (caps, rest) = text.trim().split_once('(').ok_or_raise(malformed)?;
    let end = rest.find([')', '/']).ok_or_raise(malformed)?;
    let goals = parse_goals(&rest[..end], field)?;
    let caps = caps.trim();
    let caps = match !caps.is_empty() && caps.chars().all(|c| c.is_ascii_digit()) {
        true => Some(caps.parse::<u32>().or_raise(malformed)?),
        false => None,
    };
    Ok((caps, goals))
}

/// Parses a caps total; `?` counts as zero.
fn parse_caps(text: &str) -> Result<u32> {
    if text.contains('?') {
        return Ok(0);
    }
    text.trim().parse::<u32>().or_raise(|| ErrorKind::MalformedStats {
        field: "club_caps",
        value: text.trim().to_string(),
    })
}

/// Parses a signed goals total, normalizing typographic minus signs; `?`
/// counts as zero.
fn parse_goals(text: &str, field: &'static str) -> Result<i64> {
    if text.contains('?') {
        return Ok(0);
    }
    text.replace(MINUS_VARIANTS, "-").trim().parse::<i64>().or_raise(|| ErrorKind::MalformedStats {
        field,
        value: text.trim().to_string(),
    })
}

/// Whether `token` appears in `text` as a whole word.
fn contains_token(text: &str, token: &str) -> bool {
    !token.is_empty()
        && text.match_indices(token).any(|(start, _)| {
            let before = text[..start].chars().next_back();
            let after = text[start + token.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
}

/// A cell holding nothing but a dash.
fn is_placeholder(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && text.chars().all(|c| DASHES.contains(&c))
}
