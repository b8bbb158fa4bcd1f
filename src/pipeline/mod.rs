pub mod players;
pub mod teams;

pub use players::PlayerScraper;
pub use teams::TeamScraper;
