mod loader;
mod ninja_api;

pub use loader::{
    read_or_load,
    DocumentLoader,
};

pub use ninja_api::{
    DocumentKind,
    NinjaClient,
    DEFAULT_NINJA_URL,
    DEFAULT_QUALITY_URL,
};
