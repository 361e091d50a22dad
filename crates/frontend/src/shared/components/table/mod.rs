pub mod sortable_header_cell;
pub mod table_header_checkbox;

pub use sortable_header_cell::SortableHeaderCell;
pub use table_header_checkbox::{SelectionState, TableHeaderCheckbox};
