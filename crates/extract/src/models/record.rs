use super::Name;

/// Everything extracted from a single player profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerRecord {
    /// Canonical URL of the profile page
    pub url: String,
    pub name: Name,
    /// Height in centimetres
    pub height: u32,
    pub position: String,
    pub current_club: String,
    /// Date of birth as seconds since the Unix epoch (midnight UTC)
    pub birth: i64,
    pub club_caps: u32,
    pub club_scored: u32,
    pub club_conceded: u32,
    pub national_caps: u32,
    pub national_scored: u32,
    pub national_conceded: u32,
    /// Display name of the national team whose roster linked to this page
    pub national_team: String,
}
