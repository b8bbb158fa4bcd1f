//! Player listing page parsing.
//!
//! All player data lives on one listing page: one `div.playersBox` per
//! player, with a fixed positional layout (photo, name/link, team/number).

use crate::extract::{first_attr, first_text, joined_text, nth_child_div};
use crate::model::PlayerRecord;
use crate::teams::lookup_team_name;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

const SITE_BASE: &str = "https://www.pba.ph";

static PLAYER_BOX: Lazy<Selector> = Lazy::new(|| Selector::parse("div.playersBox").unwrap());
static PLAYER_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[href*="players/"]"#).unwrap());
static PLAYER_LINK_NAME: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[href*="players/"] h5"#).unwrap());
static ANCHOR_IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("a img").unwrap());
static IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());
static NUMBER_LINE: Lazy<Selector> = Lazy::new(|| Selector::parse("h6").unwrap());

static JERSEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#(\d+)").unwrap());

/// One record per player box, in document order.
pub fn parse_players(html: &str) -> Vec<PlayerRecord> {
    let document = Html::parse_document(html);
    document.select(&PLAYER_BOX).map(parse_player_box).collect()
}

fn parse_player_box(el: ElementRef) -> PlayerRecord {
    let photo = nth_child_div(el, 1);
    let profile = nth_child_div(el, 2);
    let meta = nth_child_div(el, 3);

    let team_name = meta
        .and_then(|d| first_attr(d, &IMG, "src"))
        .and_then(|src| lookup_team_name(&src))
        .map(str::to_string);

    // Number and position both come from the single "#<digits> | <position>"
    // line, matched once.
    let raw_number_line = meta.and_then(|d| {
        d.select(&NUMBER_LINE)
            .map(joined_text)
            .find(|t| t.starts_with('#'))
    });
    let jersey_number = raw_number_line
        .as_deref()
        .and_then(|raw| JERSEY.captures(raw))
        .map(|caps| caps[1].to_string());
    let position = raw_number_line
        .as_deref()
        .and_then(|raw| raw.split('|').nth(1))
        .map(|s| s.trim().to_string());

    PlayerRecord {
        team_name,
        player_name: profile.and_then(|d| first_text(d, &PLAYER_LINK_NAME)),
        jersey_number,
        position,
        source_url: profile
            .and_then(|d| first_attr(d, &PLAYER_LINK, "href"))
            .map(resolve_player_url),
        mugshot_url: photo.and_then(|d| first_attr(d, &ANCHOR_IMG, "src")),
    }
}

/// Site-relative hrefs get the base prefixed; anything else is taken as
/// already absolute.
fn resolve_player_url(href: String) -> String {
    if href.starts_with('/') {
        format!("{SITE_BASE}{href}")
    } else {
        href
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_box(name: &str, href: &str, number_line: &str, logo: &str) -> String {
        format!(
            r#"
            <div class="playersBox">
              <div class="photo"><a href="{href}"><img src="https://dashboard.pba.ph/mugs/{name}.png"></a></div>
              <div class="profile"><a href="{href}"><h5>  {name}  </h5></a></div>
              <div class="meta"><img src="{logo}"><h6>{number_line}</h6></div>
            </div>
            "#
        )
    }

    #[test]
    fn parses_one_record_per_box_in_document_order() {
        let html = format!(
            "{}{}",
            player_box(
                "Scottie Thompson",
                "/players/scottie-thompson",
                "#6 | GUARD",
                "https://dashboard.pba.ph/assets/logo/Ginebra150.png",
            ),
            player_box(
                "June Mar Fajardo",
                "/players/june-mar-fajardo",
                "#15 | CENTER",
                "https://dashboard.pba.ph/assets/logo/SMB2020_web.png",
            ),
        );
        let records = parse_players(&html);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].player_name.as_deref(), Some("Scottie Thompson"));
        assert_eq!(records[0].team_name.as_deref(), Some("Ginebra San Miguel"));
        assert_eq!(records[1].player_name.as_deref(), Some("June Mar Fajardo"));
        assert_eq!(records[1].team_name.as_deref(), Some("San Miguel"));
    }

    #[test]
    fn jersey_and_position_derive_from_the_same_line() {
        let html = player_box("A", "/players/a", "#23 | GUARD", "x.png");
        let rec = &parse_players(&html)[0];
        assert_eq!(rec.jersey_number.as_deref(), Some("23"));
        assert_eq!(rec.position.as_deref(), Some("GUARD"));
    }

    #[test]
    fn number_without_digit_run_is_absent_but_position_still_parses() {
        let html = player_box("A", "/players/a", "#C | CENTER", "x.png");
        let rec = &parse_players(&html)[0];
        assert!(rec.jersey_number.is_none());
        assert_eq!(rec.position.as_deref(), Some("CENTER"));
    }

    #[test]
    fn missing_number_line_leaves_both_fields_absent() {
        let html = r#"
            <div class="playersBox">
              <div></div>
              <div><a href="/players/a"><h5>A</h5></a></div>
              <div><h6>FORWARD</h6></div>
            </div>
        "#;
        let rec = &parse_players(html)[0];
        assert!(rec.jersey_number.is_none());
        assert!(rec.position.is_none());
    }

    #[test]
    fn number_without_pipe_keeps_jersey_and_drops_position() {
        let html = player_box("A", "/players/a", "#7", "x.png");
        let rec = &parse_players(&html)[0];
        assert_eq!(rec.jersey_number.as_deref(), Some("7"));
        assert!(rec.position.is_none());
    }

    #[test]
    fn relative_profile_links_get_the_site_base() {
        let html = player_box("A", "/players/a", "#1 | GUARD", "x.png");
        let rec = &parse_players(&html)[0];
        assert_eq!(
            rec.source_url.as_deref(),
            Some("https://www.pba.ph/players/a"),
        );
    }

    #[test]
    fn absolute_profile_links_are_kept_as_is() {
        let html = player_box(
            "A",
            "https://www.pba.ph/players/a",
            "#1 | GUARD",
            "x.png",
        );
        let rec = &parse_players(&html)[0];
        assert_eq!(
            rec.source_url.as_deref(),
            Some("https://www.pba.ph/players/a"),
        );
    }

    #[test]
    fn unknown_team_logo_leaves_team_name_absent() {
        let html = player_box("A", "/players/a", "#1 | GUARD", "https://example.com/new-team.png");
        let rec = &parse_players(&html)[0];
        assert!(rec.team_name.is_none());
    }

    #[test]
    fn name_fragments_are_joined_with_single_spaces() {
        let html = r#"
            <div class="playersBox">
              <div></div>
              <div><a href="/players/a"><h5><span> Robert </span><span>Bolick
              </span></h5></a></div>
              <div></div>
            </div>
        "#;
        let rec = &parse_players(html)[0];
        assert_eq!(rec.player_name.as_deref(), Some("Robert Bolick"));
    }

    #[test]
    fn box_with_no_children_is_all_absent() {
        let rec = &parse_players(r#"<div class="playersBox"></div>"#)[0];
        assert!(rec.team_name.is_none());
        assert!(rec.player_name.is_none());
        assert!(rec.jersey_number.is_none());
        assert!(rec.position.is_none());
        assert!(rec.source_url.is_none());
        assert!(rec.mugshot_url.is_none());
    }
}
