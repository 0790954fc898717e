pub mod media;
pub mod news;
pub mod twitter;
pub mod users;
pub mod video;
pub mod weather;
