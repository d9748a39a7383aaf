pub mod cli;
pub mod config;
pub mod error;
pub mod graphql;
pub mod problem;
pub mod scraper;
