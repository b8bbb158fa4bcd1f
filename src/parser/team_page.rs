//! Team index and team detail page parsing.

use crate::extract::{first_attr, first_text, sibling_after_label};
use crate::model::TeamRecord;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static TEAM_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"div.row a[href*="pba.ph/teams"]"#).unwrap());
static PERSONAL_BAR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"div[class*="team-personal-bar"]"#).unwrap());
static NAME: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").unwrap());
static LABEL: Lazy<Selector> = Lazy::new(|| Selector::parse("h5").unwrap());
static LOGO: Lazy<Selector> = Lazy::new(|| Selector::parse("center img").unwrap());

/// Detail-page URLs discovered on the team index page, in document order.
pub fn parse_team_urls(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&TEAM_LINK)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Extract the team profile from a detail page. Fields the page does not
/// yield stay absent; a page without the profile bar yields an all-absent
/// record that still carries `source_url`.
pub fn parse_team(html: &str, source_url: &str) -> TeamRecord {
    let document = Html::parse_document(html);

    let Some(bar) = document.select(&PERSONAL_BAR).next() else {
        return TeamRecord::empty(source_url.to_string());
    };

    TeamRecord {
        name: first_text(bar, &NAME),
        head_coach: sibling_after_label(bar, &LABEL, "HEAD COACH", "h5"),
        manager: sibling_after_label(bar, &LABEL, "MANAGER", "h5"),
        source_url: source_url.to_string(),
        logo_url: first_attr(bar, &LOGO, "src"),
    }
}
