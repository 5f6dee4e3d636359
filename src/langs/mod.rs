pub mod aggregate;
pub mod exec;
pub mod output;
pub mod rank;

pub use aggregate::aggregate;
pub use exec::exec;
pub use output::{output_json, output_ndjson};
pub use rank::{collapse_other, rank, RankedViews};
