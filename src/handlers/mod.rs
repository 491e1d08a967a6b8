pub mod user;
pub mod videos;
