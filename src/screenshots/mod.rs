pub mod discover;
pub mod mapping;
