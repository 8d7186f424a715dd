pub mod index_mapper;
pub mod position_table;
pub mod selection;
pub mod types;

pub use index_mapper::{IdentityIndex, indices_for_selection, nearest_index, slice_selection};
pub use position_table::PositionTable;
pub use selection::{SelectionRange, effective_min_span};
pub use types::{DataPoint, GraphRangeElement, Identifiable};
