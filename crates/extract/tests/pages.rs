use capstat_extract::error::ErrorKind;
use capstat_extract::models::{Name, PageKind, PlayerRecord};
use capstat_extract::{Page, Parser, TeamRegistry, Vocabulary, parse};
use time::macros::datetime;

const COMPETITION: &str = include_str!("fixtures/competition.html");
const TEAM: &str = include_str!("fixtures/team.html");
const GOALKEEPER: &str = include_str!("fixtures/goalkeeper.html");
const FORWARD: &str = include_str!("fixtures/forward.html");

const COMPETITION_URL: &str = "https://ru.wikipedia.org/wiki/%D0%A7%D0%B5%D0%BC%D0%BF%D0%B8%D0%BE%D0%BD%D0%B0%D1%82_%D0%BC%D0%B8%D1%80%D0%B0";
const TEAM_URL: &str = "https://ru.wikipedia.org/wiki/%D0%A1%D0%B1%D0%BE%D1%80%D0%BD%D0%B0%D1%8F_%D0%A0%D0%BE%D1%81%D1%81%D0%B8%D0%B8_%D0%BF%D0%BE_%D1%84%D1%83%D1%82%D0%B1%D0%BE%D0%BB%D1%83";
const GOALKEEPER_URL: &str = "https://ru.wikipedia.org/wiki/%D0%90%D0%BA%D0%B8%D0%BD%D1%84%D0%B5%D0%B5%D0%B2,_%D0%98%D0%B3%D0%BE%D1%80%D1%8C_%D0%92%D0%BB%D0%B0%D0%B4%D0%B8%D0%BC%D0%B8%D1%80%D0%BE%D0%B2%D0%B8%D1%87";
const FORWARD_URL: &str = "https://ru.wikipedia.org/wiki/Fedor_Smolov";
const TEAM_NAME: &str = "Сборная России по футболу";

fn registered() -> TeamRegistry {
    let mut registry = TeamRegistry::new();
    parse(TEAM, TEAM_URL, &mut registry).unwrap();
    registry
}

#[test]
fn competition_page_links_to_teams() {
    let mut registry = TeamRegistry::new();
    registry.register(FORWARD_URL, "Сборная Испании");
    let before = registry.clone();

    let page = parse(COMPETITION, COMPETITION_URL, &mut registry).unwrap();
    assert_eq!(page.kind(), PageKind::Competition);
    assert_eq!(
        page.links(),
        [
            "https://ru.wikipedia.org/wiki/%D0%A1%D0%B1%D0%BE%D1%80%D0%BD%D0%B0%D1%8F_%D0%A3%D1%80%D1%83%D0%B3%D0%B2%D0%B0%D1%8F",
            "https://ru.wikipedia.org/wiki/%D0%A1%D0%B1%D0%BE%D1%80%D0%BD%D0%B0%D1%8F_%D0%A0%D0%BE%D1%81%D1%81%D0%B8%D0%B8",
            "https://ru.wikipedia.org/wiki/%D0%A1%D0%B1%D0%BE%D1%80%D0%BD%D0%B0%D1%8F_%D0%98%D1%81%D0%BF%D0%B0%D0%BD%D0%B8%D0%B8",
        ]
    );
    assert_eq!(registry, before);
}

#[test]
fn team_page_harvests_both_roster_sections() {
    let mut registry = TeamRegistry::new();
    let page = parse(TEAM, TEAM_URL, &mut registry).unwrap();
    assert_eq!(page.kind(), PageKind::Team);
    assert_eq!(page.links(), [GOALKEEPER_URL, FORWARD_URL, "https://ru.wikipedia.org/wiki/Ignashevich"]);
    assert!(page.links().iter().all(|link| !link.contains("index.php")));
    assert_eq!(registry.len(), 3);
    for link in page.links() {
        assert_eq!(registry.get(link), Some(TEAM_NAME));
    }
}

#[test]
fn goalkeeper_record() {
    let mut registry = registered();
    let record = parse(GOALKEEPER, GOALKEEPER_URL, &mut registry).unwrap().into_player().unwrap();
    assert_eq!(
        record,
        PlayerRecord {
            url: GOALKEEPER_URL.to_string(),
            name: Name::new("Игорь", "Акинфеев"),
            height: 185,
            position: "вратарь".to_string(),
            current_club: "ЦСКА".to_string(),
            birth: datetime!(1986-04-08 00:00 UTC).unix_timestamp(),
            club_caps: 12,
            club_scored: 0,
            club_conceded: 3,
            national_caps: 111,
            national_scored: 0,
            national_conceded: 107,
            national_team: TEAM_NAME.to_string(),
        }
    );
    assert!(!registry.contains(GOALKEEPER_URL));
}

#[test]
fn forward_record() {
    let mut registry = registered();
    let record = parse(FORWARD, FORWARD_URL, &mut registry).unwrap().into_player().unwrap();
    assert_eq!(record.name, Name::new("Фёдор", "Смолов"));
    assert_eq!(record.height, 187);
    assert_eq!(record.current_club, "Динамо (Москва)");
    assert_eq!(record.birth, datetime!(1990-02-09 00:00 UTC).unix_timestamp());
    // Rows give 110 caps and 53 goals, the statistics table unknown caps and 60 goals.
    assert_eq!((record.club_caps, record.club_scored, record.club_conceded), (110, 60, 0));
    assert_eq!((record.national_caps, record.national_scored, record.national_conceded), (45, 15, 0));
}

#[test]
fn player_team_is_consumed_once() {
    let mut registry = registered();
    parse(GOALKEEPER, GOALKEEPER_URL, &mut registry).unwrap();
    let err = parse(GOALKEEPER, GOALKEEPER_URL, &mut registry).unwrap_err();
    assert!(matches!(&*err, ErrorKind::TeamLookup(url) if url == GOALKEEPER_URL));
}

#[test]
fn player_before_roster_fails() {
    let mut registry = TeamRegistry::new();
    let err = parse(FORWARD, FORWARD_URL, &mut registry).unwrap_err();
    assert!(matches!(&*err, ErrorKind::TeamLookup(_)));
}

#[test]
fn failed_player_keeps_registration() {
    let mut registry = registered();
    let broken = GOALKEEPER.replace(r#"data-wikidata-property-id="P569""#, r#"data-wikidata-property-id="P0""#);
    let err = parse(&broken, GOALKEEPER_URL, &mut registry).unwrap_err();
    assert!(matches!(&*err, ErrorKind::MissingField("birth")));
    assert_eq!(registry.get(GOALKEEPER_URL), Some(TEAM_NAME));

    let malformed = GOALKEEPER.replace("4 (−1)", "4 −1");
    let err = parse(&malformed, GOALKEEPER_URL, &mut registry).unwrap_err();
    assert!(matches!(&*err, ErrorKind::MalformedStats { .. }));
    assert!(registry.contains(GOALKEEPER_URL));

    parse(GOALKEEPER, GOALKEEPER_URL, &mut registry).unwrap();
    assert!(!registry.contains(GOALKEEPER_URL));
}

#[test]
fn unmarked_document_is_unclassifiable() {
    let mut registry = TeamRegistry::new();
    let err = parse("<html><body><p>Ничего</p></body></html>", FORWARD_URL, &mut registry).unwrap_err();
    assert!(matches!(&*err, ErrorKind::Classification));
}

#[test]
fn reconciled_goals_never_both_non_zero() {
    let mut registry = registered();
    for (html, url) in [(GOALKEEPER, GOALKEEPER_URL), (FORWARD, FORWARD_URL)] {
        let record = parse(html, url, &mut registry).unwrap().into_player().unwrap();
        assert!(record.club_scored == 0 || record.club_conceded == 0);
        assert!(record.national_scored == 0 || record.national_conceded == 0);
    }
}

#[test]
fn custom_vocabulary() {
    let html = r#"<html><body><div>
        <table class="infobox" data-name="National football team"></table>
        <h2><span id="Current_squad">Current squad</span></h2>
        <table><tbody><tr><td>1</td><td>GK</td><td><a href="/wiki/Keeper">Keeper</a></td></tr></tbody></table>
    </div></body></html>"#;
    let vocabulary = Vocabulary {
        national_team_page: "National".to_string(),
        current_roster: "Current_squad".to_string(),
        ..Vocabulary::default()
    };
    let mut registry = TeamRegistry::new();
    let page = Parser::from_html(html)
        .with_vocabulary(vocabulary)
        .parse("https://en.wikipedia.org/wiki/England_national_football_team", &mut registry)
        .unwrap();
    assert_eq!(page, Page::Team(vec!["https://en.wikipedia.org/wiki/Keeper".to_string()]));
    assert_eq!(registry.get("https://en.wikipedia.org/wiki/Keeper"), Some("England national football team"));
}
