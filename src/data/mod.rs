pub mod quality_table;

pub use quality_table::{
    parse_quality_page,
    parse_quality_table,
    OutcomeChances,
    OutcomeDistributions,
    QUALITY_TABLE_ANCHOR,
};
