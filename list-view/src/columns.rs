//! Column and export descriptors derived from per-entity field tables.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

type Accessor<T> = Rc<dyn Fn(&T) -> Value>;
type CellRenderer<T> = Rc<dyn Fn(&T) -> String>;

/// Static declaration of one field of an entity listing.
pub struct FieldSpec<T> {
    pub name: &'static str,
    /// Key handed to the localizer to produce the header.
    pub label_key: &'static str,
    pub sortable: bool,
    /// Backend sort key when it differs from `name`.
    pub sort_field: Option<&'static str>,
    accessor: Accessor<T>,
    formatter: Option<CellRenderer<T>>,
}

impl<T> FieldSpec<T> {
    pub fn new(
        name: &'static str,
        label_key: &'static str,
        accessor: impl Fn(&T) -> Value + 'static,
    ) -> Self {
        Self {
            name,
            label_key,
            sortable: false,
            sort_field: None,
            accessor: Rc::new(accessor),
            formatter: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sortable, ordering by `field` on the backend.
    pub fn sort_by(mut self, field: &'static str) -> Self {
        self.sortable = true;
        self.sort_field = Some(field);
        self
    }

    pub fn format_with(
        mut self,
        renderer: impl Fn(&T) -> String + 'static,
    ) -> Self {
        self.formatter = Some(Rc::new(renderer));
        self
    }
}

pub struct ColumnDescriptor<T> {
    pub name: &'static str,
    pub label: String,
    /// Present only for sortable columns.
    pub sort_key: Option<String>,
    accessor: Accessor<T>,
    cell_renderer: Option<CellRenderer<T>>,
}

impl<T> ColumnDescriptor<T> {
    pub fn is_sortable(&self) -> bool {
        self.sort_key.is_some()
    }

    pub fn value(&self, record: &T) -> Value {
        (self.accessor)(record)
    }

    pub fn render(&self, record: &T) -> String {
        match &self.cell_renderer {
            Some(renderer) => renderer(record),
            None => display_value(&self.value(record)),
        }
    }
}

impl<T> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            label: self.label.clone(),
            sort_key: self.sort_key.clone(),
            accessor: self.accessor.clone(),
            cell_renderer: self.cell_renderer.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("sort_key", &self.sort_key)
            .finish_non_exhaustive()
    }
}

/// Text shown for a plain value: strings without quotes, `null` as blank.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

pub fn build_columns<T>(
    fields: &[FieldSpec<T>],
    localize: impl Fn(&str) -> String,
) -> Vec<ColumnDescriptor<T>> {
    fields
        .iter()
        .map(|field| ColumnDescriptor {
            name: field.name,
            label: localize(field.label_key),
            sort_key: field
                .sortable
                .then(|| field.sort_field.unwrap_or(field.name).to_string()),
            accessor: field.accessor.clone(),
            cell_renderer: field.formatter.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDescriptor {
    pub keys: Vec<String>,
    pub labels: BTreeMap<String, String>,
}

impl ExportDescriptor {
    /// `(key, label)` pairs in export order.
    pub fn headers(&self) -> Vec<(String, String)> {
        self.keys
            .iter()
            .map(|key| {
                let label = self.labels.get(key).cloned().unwrap_or_default();
                (key.clone(), label)
            })
            .collect()
    }
}

pub fn build_export_descriptor(
    keys: &[&str],
    localize: impl Fn(&str) -> String,
) -> ExportDescriptor {
    ExportDescriptor {
        keys: keys.iter().map(|key| key.to_string()).collect(),
        labels: keys
            .iter()
            .map(|&key| (key.to_string(), localize(key)))
            .collect(),
    }
}

/// Export row: exactly the descriptor's keys, in descriptor order.
pub type ExportRow = Map<String, Value>;

/// Pick the export keys out of a serialized row. Keys the row lacks come
/// out as `null`.
pub fn project_row_for_export(
    row: &Value,
    descriptor: &ExportDescriptor,
) -> ExportRow {
    descriptor
        .keys
        .iter()
        .map(|key| {
            let value = row.get(key).cloned().unwrap_or(Value::Null);
            (key.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Item {
        id: u32,
        name: String,
        price_cents: i64,
    }

    fn fields() -> Vec<FieldSpec<Item>> {
        vec![
            FieldSpec::new("id", "menu.id", |item: &Item| json!(item.id)),
            FieldSpec::new("name", "menu.name", |item: &Item| {
                json!(item.name)
            })
            .sortable(),
            FieldSpec::new("price", "menu.price", |item: &Item| {
                json!(item.price_cents)
            })
            .sort_by("price_cents")
            .format_with(|item| {
                let cents = item.price_cents;
                format!("${}.{:02}", cents / 100, cents % 100)
            }),
        ]
    }

    #[test]
    fn sort_keys_follow_field_flags() {
        let columns = build_columns(&fields(), |key| key.to_uppercase());
        assert_eq!(columns[0].label, "MENU.ID");
        assert!(!columns[0].is_sortable());
        assert_eq!(columns[1].sort_key.as_deref(), Some("name"));
        assert_eq!(columns[2].sort_key.as_deref(), Some("price_cents"));
    }

    #[test]
    fn renderer_overrides_plain_value() {
        let columns = build_columns(&fields(), str::to_string);
        let item = Item {
            id: 4,
            name: "Latte".into(),
            price_cents: 350,
        };
        assert_eq!(columns[1].render(&item), "Latte");
        assert_eq!(columns[2].render(&item), "$3.50");
        assert_eq!(columns[2].value(&item), json!(350));
    }

    #[test]
    fn projection_keeps_only_export_keys() {
        let descriptor =
            build_export_descriptor(&["id", "name"], str::to_string);
        let row = json!({"id": 1, "name": "X", "extra": "Y"});
        let projected = project_row_for_export(&row, &descriptor);
        assert_eq!(Value::Object(projected), json!({"id": 1, "name": "X"}));
    }

    #[test]
    fn projection_follows_descriptor_order() {
        let descriptor =
            build_export_descriptor(&["name", "missing", "id"], str::to_string);
        let row = json!({"id": 1, "name": "X"});
        let projected = project_row_for_export(&row, &descriptor);
        let keys: Vec<_> = projected.keys().cloned().collect();
        assert_eq!(keys, vec!["name", "missing", "id"]);
        assert_eq!(projected["missing"], Value::Null);
    }

    #[test]
    fn export_labels_are_localized() {
        let descriptor = build_export_descriptor(&["id", "name"], |key| {
            format!("label:{key}")
        });
        assert_eq!(
            descriptor.headers(),
            vec![
                ("id".to_string(), "label:id".to_string()),
                ("name".to_string(), "label:name".to_string()),
            ]
        );
    }

    #[test]
    fn null_displays_blank() {
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!("a")), "a");
        assert_eq!(display_value(&json!(true)), "true");
    }
}
