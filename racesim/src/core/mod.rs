pub mod competitor;
pub mod handle_race;
pub mod race;
