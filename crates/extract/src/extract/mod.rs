//! Per-document parsing for competition, team and player pages.

mod career;
mod profile;

use std::convert::Infallible;
use std::str::FromStr;

pub use self::career::Career;
pub use self::profile::{Field, Profile};
use crate::error::{ErrorKind, Result};
use crate::links::{self, LinkSet};
use crate::models::{PageKind, PlayerRecord};
use crate::{TeamRegistry, Vocabulary, classify, normalize};
use exn::OptionExt;
use scraper::Html;
use tracing::instrument;

/// The result of parsing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "data", rename_all = "lowercase"))]
pub enum Page {
    /// Links to the team pages of a competition.
    Competition(LinkSet),
    /// Links to the player pages of a team roster, already registered.
    Team(LinkSet),
    Player(Box<PlayerRecord>),
}
impl Page {
    pub fn kind(&self) -> PageKind {
        match self {
            Page::Competition(_) => PageKind::Competition,
            Page::Team(_) => PageKind::Team,
            Page::Player(_) => PageKind::Player,
        }
    }

    /// Outbound links; empty for player pages.
    pub fn links(&self) -> &[String] {
        match self {
            Page::Competition(links) | Page::Team(links) => links,
            Page::Player(_) => &[],
        }
    }

    pub fn into_player(self) -> Option<PlayerRecord> {
        match self {
            Page::Player(record) => Some(*record),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Parser {
    document: Html,
    vocabulary: Vocabulary,
}
impl Parser {
    pub fn from_document(document: Html) -> Self {
        Self {
            document,
            vocabulary: Vocabulary::default(),
        }
    }

    pub fn from_html(html: &str) -> Self {
        Self::from_document(Html::parse_document(html))
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn kind(&self) -> Result<PageKind> {
        classify::classify(&self.document, &self.vocabulary)
    }

    /// Classifies the document and runs the matching handler.
    ///
    /// Team pages register their player links in `registry`; player pages
    /// consume the registration for `url`, so every roster page must be
    /// parsed before the profiles it links to.
    #[instrument(skip(self, registry), fields(kind))]
    pub fn parse(&self, url: &str, registry: &mut TeamRegistry) -> Result<Page> {
        let kind = self.kind()?;
        tracing::Span::current().record("kind", kind.as_str());
        Ok(match kind {
            PageKind::Competition => Page::Competition(self.competition_links(url)?),
            PageKind::Team => Page::Team(self.team_links(url, registry)?),
            PageKind::Player => Page::Player(Box::new(self.player(url, registry)?)),
        })
    }

    pub fn competition_links(&self, url: &str) -> Result<LinkSet> {
        links::competition_links(&self.document, url)
    }

    pub fn team_links(&self, url: &str, registry: &mut TeamRegistry) -> Result<LinkSet> {
        links::team_links(&self.document, url, &self.vocabulary, registry)
    }

    /// Extracts a player record.
    ///
    /// The registry entry for `url` is only consumed once every other field
    /// has been extracted, so a failed parse leaves the registry untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A profile field is missing or cannot be normalized
    /// - A caps/goals cell cannot be parsed
    /// - No team page registered `url`
    #[instrument(skip(self, registry))]
    pub fn player(&self, url: &str, registry: &mut TeamRegistry) -> Result<PlayerRecord> {
        let profile = self.profile();
        let career = self.career();
        let name = profile.name()?;
        let height = normalize::height(&profile.require(Field::Height)?)?;
        let position = profile.require(Field::Position)?;
        let current_club = profile.require(Field::CurrentClub)?;
        let birth = normalize::birth(&profile.require(Field::Birth)?)?;
        let club = career.club()?;
        let national = career.national()?;
        let national_team = registry.take(url).ok_or_raise(|| ErrorKind::TeamLookup(url.to_string()))?;
        Ok(PlayerRecord {
            url: url.to_string(),
            name,
            height,
            position,
            current_club,
            birth,
            club_caps: club.caps,
            club_scored: club.scored,
            club_conceded: club.conceded,
            national_caps: national.caps,
            national_scored: national.scored,
            national_conceded: national.conceded,
            national_team,
        })
    }

    pub fn profile(&self) -> Profile<'_> {
        Profile::new(&self.document)
    }

    pub fn career(&self) -> Career<'_> {
        Career::new(&self.document, &self.vocabulary)
    }
}
impl FromStr for Parser {
    type Err = Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_html(s))
    }
}
impl From<Html> for Parser {
    fn from(document: Html) -> Self {
        Self::from_document(document)
    }
}
