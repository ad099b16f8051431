pub mod database;

pub use database::{DocumentCache, DEFAULT_DATABASE_URL};
