use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Info panel carrying the `data-name` page kind marker.
selector!(INFOBOX_SELECTOR, "body div .infobox");
selector!(INFOBOX_ROW_SELECTOR, ".infobox tr");
selector!(ROW_SELECTOR, "tr");
selector!(HEADER_CELL_SELECTOR, "th");
selector!(SECOND_CELL_SELECTOR, "td:nth-child(2)");
selector!(THIRD_CELL_SELECTOR, "td:nth-child(3)");
// Summary tables outside the info panel ("career statistics").
selector!(SUMMARY_ROW_SELECTOR, "table:not(.infobox) tr");

// Competition pages.
selector!(STANDARD_TABLE_LINK_SELECTOR, "table.standard tr td:nth-child(1) > a");
// Team pages.
selector!(SECTION_ANCHOR_SELECTOR, "[id]");
selector!(ROSTER_LINK_SELECTOR, "td:nth-child(3) > a");

// Player pages, keyed by Wikidata property.
selector!(NAME_SELECTOR, ".infobox .ts_Спортсмен_имя");
selector!(HEIGHT_SELECTOR, r#"span[data-wikidata-property-id="P2048"]"#);
selector!(POSITION_SELECTOR, r#"span[data-wikidata-property-id="P413"]"#);
selector!(CLUB_SELECTOR, r#"span[data-wikidata-property-id="P54"]"#);
selector!(BIRTH_SELECTOR, r#"span[data-wikidata-property-id="P569"]"#);

regex!(DIGITS_REGEX, r"[0-9]+");
regex!(BIRTH_REGEX, r"^(\d{1,2})\s+(\S+)\s+(\d{1,4})$");
