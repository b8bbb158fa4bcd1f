// Core structs: TeamRecord, PlayerRecord, FetchResult + error types
use thiserror::Error;

/// One row of the team output file. Field set and column order are fixed at
/// compile time; fields the page did not yield stay `None` and serialize as
/// empty cells.
#[derive(Debug, Clone, Default)]
pub struct TeamRecord {
    pub name: Option<String>,
    pub head_coach: Option<String>,
    pub manager: Option<String>,
    pub source_url: String,
    pub logo_url: Option<String>,
}

impl TeamRecord {
    pub const FIELDS: [&'static str; 5] =
        ["Team Name", "Head Coach", "Manager", "Url", "Logo Link"];

    /// Record for a detail page that could not be fetched or parsed:
    /// everything absent except the URL we tried.
    pub fn empty(source_url: String) -> Self {
        Self {
            source_url,
            ..Self::default()
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone().unwrap_or_default(),
            self.head_coach.clone().unwrap_or_default(),
            self.manager.clone().unwrap_or_default(),
            self.source_url.clone(),
            self.logo_url.clone().unwrap_or_default(),
        ]
    }
}

/// One row of the player output file, extracted from a single listing-page
/// sub-tree. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct PlayerRecord {
    pub team_name: Option<String>,
    pub player_name: Option<String>,
    pub jersey_number: Option<String>,
    pub position: Option<String>,
    pub source_url: Option<String>,
    pub mugshot_url: Option<String>,
}

impl PlayerRecord {
    pub const FIELDS: [&'static str; 6] =
        ["Team Name", "Player Name", "Number", "Position", "Url", "Mugshot"];

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.team_name.clone().unwrap_or_default(),
            self.player_name.clone().unwrap_or_default(),
            self.jersey_number.clone().unwrap_or_default(),
            self.position.clone().unwrap_or_default(),
            self.source_url.clone().unwrap_or_default(),
            self.mugshot_url.clone().unwrap_or_default(),
        ]
    }
}

/// Outcome of one scheduled fetch. Produced by the scheduler, consumed
/// exactly once by the assembler for that URL.
#[derive(Debug)]
pub struct FetchResult {
    pub url: String,
    pub body: Result<String, FetchError>,
}

/// Per-item fetch failure. Recorded, never thrown across the scheduler
/// boundary.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
}

/// Run-level failures. An index-page fetch failure is the only error that
/// crosses the assembler boundary; per-item failures become absent fields.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("index page fetch failed ({url}): {source}")]
    IndexFetch {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("failed to parse config {path}: {reason}")]
    Parse { path: String, reason: String },
    #[error("max_concurrency must be at least 1")]
    InvalidConcurrency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_team_record_keeps_source_url() {
        let rec = TeamRecord::empty("https://www.pba.ph/teams/1".into());
        assert_eq!(rec.source_url, "https://www.pba.ph/teams/1");
        assert!(rec.name.is_none());
        assert!(rec.head_coach.is_none());
        assert!(rec.manager.is_none());
        assert!(rec.logo_url.is_none());
    }

    #[test]
    fn rows_align_with_field_headers() {
        let team = TeamRecord::empty("u".into());
        assert_eq!(team.to_row().len(), TeamRecord::FIELDS.len());

        let player = PlayerRecord::default();
        assert_eq!(player.to_row().len(), PlayerRecord::FIELDS.len());
    }

    #[test]
    fn absent_fields_serialize_as_empty_cells() {
        let rec = PlayerRecord {
            player_name: Some("June Mar Fajardo".into()),
            ..PlayerRecord::default()
        };
        let row = rec.to_row();
        assert_eq!(row[1], "June Mar Fajardo");
        assert_eq!(row[0], "");
        assert_eq!(row[2], "");
    }
}
