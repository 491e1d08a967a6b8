pub mod query;
pub mod response;
pub mod users;
pub mod videos;
