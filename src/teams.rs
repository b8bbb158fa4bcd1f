//! Static logo-URL → canonical team name table.
//!
//! The dashboard serves team logos under stable asset URLs, so the URL itself
//! identifies the franchise. Unknown URLs resolve to `None`, never an error.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static TEAM_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "https://dashboard.pba.ph/assets/logo/Ginebra150.png",
            "Ginebra San Miguel",
        ),
        (
            "https://dashboard.pba.ph/assets/logo/Blackwater_new_logo_2021.png",
            "Blackwater",
        ),
        (
            "https://dashboard.pba.ph/assets/logo/converge-logo2.png",
            "Converge",
        ),
        (
            "https://dashboard.pba.ph/assets/logo/magnolia-2022-logo.png",
            "Magnolia",
        ),
        ("https://dashboard.pba.ph/assets/logo/web_mer.png", "Meralco"),
        ("https://dashboard.pba.ph/assets/logo/web_nlx.png", "NLEX"),
        ("https://dashboard.pba.ph/assets/logo/GLO_web.png", "North Port"),
        (
            "https://dashboard.pba.ph/assets/logo/viber_image_2024-03-05_17-18-02-823.png",
            "Phoenix",
        ),
        (
            "https://dashboard.pba.ph/assets/logo/web_ros.png",
            "Rain or Shine",
        ),
        (
            "https://dashboard.pba.ph/assets/logo/SMB2020_web.png",
            "San Miguel",
        ),
        (
            "https://dashboard.pba.ph/assets/logo/terrafirma.png",
            "TerraFirma",
        ),
        (
            "https://dashboard.pba.ph/assets/logo/tropang_giga_pba.png",
            "Talk N Text",
        ),
    ])
});

/// Look up the display name for a known logo URL.
pub fn lookup_team_name(logo_url: &str) -> Option<&'static str> {
    TEAM_NAMES.get(logo_url).copied()
}
