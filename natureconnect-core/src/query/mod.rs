//! Filter, sort and limit pipelines over catalogue records.
//!
//! Filters combine with AND semantics across dimensions and membership
//! semantics within a multi-valued filter. An empty filter set means "no
//! filter". Sorting is stable, so records that compare equal keep their
//! catalogue order.

mod events;
mod trails;

pub use events::EventQuery;
pub use trails::{RankedTrail, TrailQuery};

fn truncate_to<T>(records: &mut Vec<T>, limit: Option<usize>) {
    if let Some(limit) = limit {
        records.truncate(limit);
    }
}
