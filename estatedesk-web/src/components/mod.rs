pub mod confirm_delete;
pub mod daisy_ui;
pub mod data_grid;

pub use confirm_delete::ConfirmDelete;
pub use data_grid::{DataGrid, DataGridProps, GridRow};
