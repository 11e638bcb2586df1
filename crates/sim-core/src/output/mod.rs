//! Read-only output for external collaborators: the census metric and
//! world snapshots. Nothing here mutates simulation state.

pub mod census;
pub mod snapshot;

pub use census::{census, CensusCollector};
pub use snapshot::{generate_snapshot, write_current_state, write_snapshot_to_dir};
