//! Site-language markers used by the page heuristics.
//!
//! Structural selectors (table classes, Wikidata property ids) are shared by
//! every language edition, but the visible labels and section ids are not.
//! [`Vocabulary::default`] is the Russian Wikipedia vocabulary.

/// Marker strings matched against page text, header ids and hrefs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Vocabulary {
    /// Info panel marker contained by competition pages.
    pub competition: String,
    /// Info panel marker contained by national team pages.
    pub national_team_page: String,
    /// Info panel row text that opens the club career rows.
    pub club_career: String,
    /// Info panel row text that opens the national team rows.
    pub national_career: String,
    /// Token marking a national team row that must not be counted.
    pub pending: String,
    /// Header label of the club column in the career summary table.
    pub club_column: String,
    /// Header id prefix of the current roster section.
    pub current_roster: String,
    /// Header id prefix of the generic roster section (fallback).
    pub roster: String,
    /// Header id prefix of the recent call-ups section.
    pub recent_call_ups: String,
    /// Substring of hrefs pointing at internal index pages.
    pub index_link: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            competition: "Соревнование".to_string(),
            national_team_page: "Сборная".to_string(),
            club_career: "Клубная карьера".to_string(),
            national_career: "Национальная сборная".to_string(),
            pending: "до".to_string(),
            club_column: "Клуб".to_string(),
            current_roster: "Текущий_состав".to_string(),
            roster: "Состав".to_string(),
            recent_call_ups: "Недавние_вызовы".to_string(),
            index_link: "index.php".to_string(),
        }
    }
}
