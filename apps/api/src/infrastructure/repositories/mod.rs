// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces on MongoDB

mod documents;
pub mod mongo_player_repository;
pub mod mongo_team_repository;

pub use mongo_player_repository::MongoPlayerRepository;
pub use mongo_team_repository::MongoTeamRepository;

/// Collection holding standalone players
pub const PLAYERS_COLLECTION: &str = "players";

/// Collection holding teams with their embedded rosters
pub const TEAMS_COLLECTION: &str = "teams";
