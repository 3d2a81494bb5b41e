mod gap;
mod index;
mod load;
mod record;

pub use gap::{GapOutcome, GapReport, largest_gap};
pub use index::{AgeGapIndex, PositionIndex, RelationshipEntry, RelationshipIndex};
pub use load::load_records;
pub use record::{Category, CategoryKeys};

#[cfg(test)]
pub use gap::NO_MOVIE_LABEL;
#[cfg(test)]
pub use record::RawRecord;
