//! Typed navigation over the parsed document tree.
//!
//! The heuristics only ever need a handful of moves: step to a neighbouring
//! element (ignoring text and comment nodes), select the first match below an
//! element, and read the collected text. Keeping them behind one trait lets the
//! statistics code be tested against tiny synthetic fragments.

use scraper::{ElementRef, Selector};

pub(crate) trait Navigate<'a>: Sized {
    /// The next sibling that is an element.
    fn next_element(&self) -> Option<Self>;
    /// The previous sibling that is an element.
    fn prev_element(&self) -> Option<Self>;
    /// The first descendant matching `selector`.
    fn first(&self, selector: &Selector) -> Option<Self>;
    /// All text below this element, concatenated.
    fn text_content(&self) -> String;
    /// Whether this element or any ancestor carries `class`.
    fn within_class(&self, class: &str) -> bool;
    /// The closest ancestor element.
    fn parent_element(&self) -> Option<Self>;
    /// Child elements, in document order.
    fn child_elements_vec(&self) -> Vec<Self>;
    /// Tag name of the element.
    fn tag(&self) -> &str;
}

impl<'a> Navigate<'a> for ElementRef<'a> {
    fn next_element(&self) -> Option<Self> {
        self.next_siblings().find_map(ElementRef::wrap)
    }

    fn prev_element(&self) -> Option<Self> {
        self.prev_siblings().find_map(ElementRef::wrap)
    }

    fn first(&self, selector: &Selector) -> Option<Self> {
        self.select(selector).next()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn within_class(&self, class: &str) -> bool {
        std::iter::once(**self)
            .chain(self.ancestors())
            .filter_map(ElementRef::wrap)
            .any(|element| element.value().classes().any(|c| c == class))
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent().and_then(ElementRef::wrap)
    }

    fn child_elements_vec(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn tag(&self) -> &str {
        self.value().name()
    }
}
