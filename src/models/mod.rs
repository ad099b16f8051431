pub mod gem;
pub mod ninja;
pub mod quality;
pub mod rules;

pub use gem::{
    GemIdentity,
    GemListing,
};

pub use ninja::{
    CurrencyLine,
    CurrencySnapshot,
    GemLine,
    GemSnapshot,
};

pub use quality::QualityVariant;

pub use rules::GemRules;
