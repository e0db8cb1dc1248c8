//! Core module - domain types and the link-resolution pipeline

pub mod card;
pub mod identity;
pub mod index;
pub mod lookup;
pub mod normalize;
pub mod overrides;
pub mod resolve;

pub use card::{load_dataset, load_raw, save_dataset, Card, Connection, Dataset, SnapshotError};
pub use identity::{CardId, IdParseError};
pub use index::{comma_inversion, load_index, EntryKind, IndexEntry, InversionRule};
pub use lookup::LookupTable;
pub use overrides::build_overrides;
pub use resolve::{
    resolve, resolve_target, valid_link_count, Resolution, ResolveOptions, ResolveStats,
    DEFAULT_SIMILARITY_CUTOFF,
};
