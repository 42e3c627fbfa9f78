pub mod auth;
pub mod browse;
pub mod dispatch;
pub mod health;
pub mod open;
pub mod profile;
pub mod resources;
pub mod shared;
