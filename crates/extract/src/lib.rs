mod classify;
mod consts;
mod dom;
pub mod error;
mod extract;
mod links;
pub mod models;
pub mod normalize;
mod registry;
mod vocab;

use tracing::instrument;

pub use crate::classify::classify;
use crate::error::Result;
pub use crate::extract::{Career, Field, Page, Parser, Profile};
pub use crate::links::{LinkSet, competition_links, team_links, team_name};
pub use crate::registry::TeamRegistry;
pub use crate::vocab::Vocabulary;

/// Easy, top-level entrypoint for parsing one document with the default
/// (Russian Wikipedia) vocabulary.
///
/// `url` is the canonical absolute URL the document was fetched from. See
/// [`Parser`] for choosing another [`Vocabulary`].
///
/// # Examples
///
/// ```rust
/// use capstat_extract::{Page, TeamRegistry, parse};
/// let html = r#"
///     <html><body><div>
///         <table class="infobox" data-name="Соревнование"></table>
///         <table class="standard">
///             <tr><td><a href="/wiki/Team_A">Team A</a></td><td>9</td></tr>
///         </table>
///     </div></body></html>
/// "#;
///
/// let mut registry = TeamRegistry::new();
/// let page = parse(html, "https://ru.wikipedia.org/wiki/Cup", &mut registry).unwrap();
/// assert_eq!(page, Page::Competition(vec!["https://ru.wikipedia.org/wiki/Team_A".to_string()]));
/// assert!(registry.is_empty());
/// ```
#[instrument(skip(html, registry), fields(html_size = html.len()))]
pub fn parse(html: &str, url: &str, registry: &mut TeamRegistry) -> Result<Page> {
    Parser::from_html(html).parse(url, registry)
}
