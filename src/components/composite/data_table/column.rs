//! Column Definition
//!
//! Defines table columns with their properties and cell renderers.

use gpui::{AnyElement, IntoElement, ParentElement, SharedString, Styled, div};

use crate::domain::column::{ColumnType, ProcessedColumn};
use crate::domain::record::{Record, cell_text};
use crate::utils::format::{MAX_CELL_CHARS, truncate};

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier (record field for record tables)
    pub id: SharedString,
    /// Column header label
    pub label: SharedString,
    /// Column width (in pixels, or flexible)
    pub width: ColumnWidth,
    /// Whether the column is sortable
    pub sortable: bool,
    /// Cell renderer function
    pub render: Box<dyn Fn(&R) -> AnyElement + Send + Sync>,
}

/// Column width
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Takes a share of the remaining space, never narrower than `min`
    Flex { min: f32 },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: 120.0 }
    }
}

impl<R: 'static> Column<R> {
    /// Create a new column
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        render: impl Fn(&R) -> AnyElement + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            sortable: false,
            render: Box::new(render),
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> AnyElement {
        (self.render)(row)
    }
}

/// Fixed pixel width for narrow value types; text columns flex
pub fn width_for(column_type: ColumnType) -> Option<f32> {
    match column_type {
        ColumnType::Boolean => Some(90.0),
        ColumnType::Number => Some(110.0),
        ColumnType::Date => Some(160.0),
        ColumnType::Text => None,
    }
}

impl Column<Record> {
    /// Text column showing the descriptor's field
    pub fn from_processed(column: &ProcessedColumn) -> Self {
        let field = column.descriptor.field.clone();
        let built = Column::new(
            column.descriptor.field.clone(),
            column.descriptor.header_label().to_string(),
            move |row: &Record| {
                div()
                    .child(truncate(&cell_text(row, &field), MAX_CELL_CHARS))
                    .into_any_element()
            },
        )
        .sortable(column.descriptor.sortable);

        match width_for(column.descriptor.column_type) {
            Some(width) => built.fixed_width(width),
            None => built,
        }
    }
}

/// Record columns for a processed column list
pub fn record_columns(columns: &[ProcessedColumn]) -> Vec<Column<Record>> {
    columns.iter().map(Column::from_processed).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::column::{ColumnDescriptor, process_columns};

    #[test]
    fn narrow_types_get_fixed_widths() {
        let columns = process_columns(&[
            ColumnDescriptor::new("name"),
            ColumnDescriptor::new("age").kind(ColumnType::Number),
            ColumnDescriptor::new("active").kind(ColumnType::Boolean),
        ]);
        let widths: Vec<ColumnWidth> = record_columns(&columns).iter().map(|c| c.width).collect();
        assert_eq!(
            widths,
            vec![
                ColumnWidth::default(),
                ColumnWidth::Fixed(110.0),
                ColumnWidth::Fixed(90.0),
            ]
        );
    }
}
