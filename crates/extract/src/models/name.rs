use std::fmt::{Display, Formatter, Result as FmtResult};

/// A player's name.
///
/// Profile headings present names surname-first ("Акинфеев Игорь"); the
/// final token is taken as the given name and everything before it as the
/// surname.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Name {
    /// Given name (final token of the heading)
    pub first: String,
    /// Surname (everything before the final token, may be empty)
    pub last: String,
}
impl Name {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    /// Parses a surname-first heading, dropping everything from the first `(`
    /// onward unless the heading opens with it.
    ///
    /// ```
    /// use capstat_extract::models::Name;
    /// let name = Name::from_heading("Акинфеев Игорь Владимирович (футболист)");
    /// assert_eq!(name, Name::new("Владимирович", "Акинфеев Игорь"));
    /// ```
    pub fn from_heading(heading: &str) -> Self {
        let heading = match heading.find('(') {
            Some(bracket) if bracket > 0 => &heading[..bracket],
            _ => heading,
        };
        match heading.trim().rsplit_once(char::is_whitespace) {
            Some((last, first)) => Self::new(first.trim(), last.trim()),
            None => Self::new(heading.trim(), ""),
        }
    }
}
impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.last.is_empty() {
            true => write!(f, "{}", self.first),
            false => write!(f, "{} {}", self.first, self.last),
        }
    }
}
