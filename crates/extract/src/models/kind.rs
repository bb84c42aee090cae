use std::fmt::{Display, Formatter, Result as FmtResult};

/// The three page families the parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PageKind {
    /// Competition listing, links to team pages.
    Competition,
    /// National team roster, links to player pages.
    Team,
    /// Player profile.
    Player,
}
impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Competition => "competition",
            PageKind::Team => "team",
            PageKind::Player => "player",
        }
    }
}
impl Display for PageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
