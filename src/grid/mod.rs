//! Grid integration
//!
//! - [`CellEditor`]: search-select field behind a grid's cell-editor contract
//! - [`GridColumn`]: column presets that pair a registry domain with an editor

mod cell_editor;
mod columns;

pub use cell_editor::{CellEditor, CellEditorConfig, CellEditorHandle, DataSource};
pub use columns::{inventory_columns, GridColumn};
