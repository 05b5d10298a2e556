pub mod flatten;
pub mod playwright;
