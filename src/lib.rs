pub mod config;
pub mod crawl;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod record;
