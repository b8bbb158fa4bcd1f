pub mod player_page;
pub mod team_page;
