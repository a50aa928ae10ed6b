//! Grid column presets for registry-backed columns

use std::sync::Arc;

use crate::config::WidgetConfig;
use crate::registry::{EntityDomain, OptionLookup};

use super::cell_editor::{CellEditor, CellEditorConfig, DataSource};

/// A grid column whose cells are edited with a search-select editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    /// Field name in the row data
    pub key: String,
    pub header: String,
    pub domain: EntityDomain,
    pub editable: bool,
}

impl GridColumn {
    pub fn for_domain(key: impl Into<String>, domain: EntityDomain) -> Self {
        Self {
            key: key.into(),
            header: domain.title().to_string(),
            domain,
            editable: true,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    /// Editor configuration for this column backed by `lookup`
    pub fn editor_config(
        &self,
        lookup: Arc<dyn OptionLookup>,
        settings: &WidgetConfig,
    ) -> CellEditorConfig {
        let field = settings.field_config(self.domain);
        let mut config = CellEditorConfig::new(DataSource::Async(lookup))
            .with_placeholder(field.placeholder)
            .with_debounce_ms(field.debounce_ms);
        config.create_noun = field.noun;
        config
    }

    /// Mount an editor for a cell of this column, or None if read-only
    pub fn editor(
        &self,
        value: impl Into<String>,
        lookup: Arc<dyn OptionLookup>,
        settings: &WidgetConfig,
    ) -> Option<CellEditor> {
        if !self.editable {
            return None;
        }
        Some(CellEditor::new(value, self.editor_config(lookup, settings)))
    }
}

/// Columns of the inventory grid, one per registry domain
pub fn inventory_columns() -> Vec<GridColumn> {
    vec![
        GridColumn::for_domain("supplier", EntityDomain::Supplier),
        GridColumn::for_domain("facility", EntityDomain::Facility),
        GridColumn::for_domain("location", EntityDomain::Location),
        GridColumn::for_domain("item_type", EntityDomain::ItemType),
        GridColumn::for_domain("use_case", EntityDomain::UseCase),
    ]
}
