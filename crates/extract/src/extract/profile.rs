use exn::OptionExt;
use scraper::{Html, Selector};
use tracing::instrument;

use crate::consts;
use crate::dom::Navigate;
use crate::error::{ErrorKind, Result};
use crate::models::Name;

/// Scalar profile fields, keyed by their Wikidata property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Height,
    Position,
    CurrentClub,
    Birth,
}
impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Height => "height",
            Field::Position => "position",
            Field::CurrentClub => "current_club",
            Field::Birth => "birth",
        }
    }

    fn selector(&self) -> &'static Selector {
        match self {
            Field::Height => &*consts::HEIGHT_SELECTOR,
            Field::Position => &*consts::POSITION_SELECTOR,
            Field::CurrentClub => &*consts::CLUB_SELECTOR,
            Field::Birth => &*consts::BIRTH_SELECTOR,
        }
    }
}

#[derive(Debug)]
pub struct Profile<'a> {
    document: &'a Html,
}
impl<'a> Profile<'a> {
    pub(crate) fn new(document: &'a Html) -> Self {
        Self { document }
    }

    /// Trimmed text of a field, if the page has it.
    pub fn field(&self, field: Field) -> Option<String> {
        self.document.select(field.selector()).next().map(|el| el.text_content().trim().to_string())
    }

    /// Like [`field`](Self::field), but a missing field is an error.
    #[instrument(level = "trace", skip(self))]
    pub fn require(&self, field: Field) -> Result<String> {
        self.field(field).ok_or_raise(|| ErrorKind::MissingField(field.as_str()))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn name(&self) -> Result<Name> {
        self.document
            .select(&consts::NAME_SELECTOR)
            .next()
            .map(|el| Name::from_heading(&el.text_content()))
            .ok_or_raise(|| ErrorKind::MissingField("name"))
    }
}
