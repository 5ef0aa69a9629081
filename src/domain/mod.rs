pub mod auth;
pub mod greeting;
pub mod health;
pub mod ingredient;
pub mod player;
pub mod recipe;
pub mod team;
