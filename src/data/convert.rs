use serde::Serialize;
use serde_json::Value as JsonValue;

use super::improve::{improve_list, improve_table};
use super::model::{List, NumberList, StringList, Table, TypedList, Value};

// ---------------------------------------------------------------------------
// List conversions – unconditional coercion, not classification
// ---------------------------------------------------------------------------

/// Loose numeric reading of a single cell. Scalars coerce, compound
/// values are per-element failures (NaN); nothing here can error.
fn coerce_number(v: &Value) -> f64 {
    match v {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Integer(i) => *i as f64,
        Value::Float(x) => *x,
        Value::Str(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Interval(_) | Value::Array(_) => f64::NAN,
    }
}

/// Coerce every element of `list` to a number, keeping the name.
/// Absent input gives an absent result; present input always converts
/// fully, with unparseable cells surfacing as NaN.
pub fn to_number_list(list: Option<&List>) -> Option<NumberList> {
    let list = list?;
    Some(NumberList {
        name: list.name.clone(),
        values: list.values.iter().map(coerce_number).collect(),
    })
}

/// Coerce every element of `list` to a string, keeping the name.
/// Numbers go through the standard numeric formatting; everything else
/// through its generic display form.
pub fn to_string_list(list: Option<&List>) -> Option<StringList> {
    let list = list?;
    let values = list
        .values
        .iter()
        .map(|v| match v {
            Value::Integer(i) => i.to_string(),
            Value::Float(x) => x.to_string(),
            other => other.to_string(),
        })
        .collect();
    Some(StringList {
        name: list.name.clone(),
        values,
    })
}

// ---------------------------------------------------------------------------
// Table conversions
// ---------------------------------------------------------------------------

/// Row-object export wrapper: `{ "array": [ {..}, {..}, ... ] }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSet {
    pub array: Vec<JsonValue>,
}

/// Export a table as one object per row.
///
/// Field names default to the column names (`column_<i>` for an unnamed
/// column). Row count is the first column's length. A `fields` slice
/// shorter than the column list consults only that many columns; a
/// longer one never indexes past the available columns.
pub fn table_to_objects(table: &Table, fields: Option<&[String]>) -> RowSet {
    let derived: Vec<String>;
    let fields: &[String] = match fields {
        Some(f) => f,
        None => {
            derived = table
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    col.name()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("column_{i}"))
                })
                .collect();
            &derived
        }
    };

    let rows = table.row_count();
    let mut array = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut obj = serde_json::Map::new();
        for (field, col) in fields.iter().zip(&table.columns) {
            let cell = col
                .value_at(row)
                .map(|v| JsonValue::from(&v))
                .unwrap_or(JsonValue::Null);
            obj.insert(field.clone(), cell);
        }
        array.push(JsonValue::Object(obj));
    }
    RowSet { array }
}

/// Build a table from a JSON array of arrays, one column per inner
/// array, each column narrowed by the specialisation engine. Entries
/// that are not arrays are skipped; a non-array (or null) input is
/// absent, not an error.
pub fn array_of_arrays_to_table(value: &JsonValue) -> Option<Table> {
    let entries = value.as_array()?;
    let mut columns = Vec::new();
    for entry in entries {
        let Some(items) = entry.as_array() else {
            continue;
        };
        let list = List::new(items.iter().map(Value::from).collect());
        columns.push(improve_list(list));
    }
    Some(improve_table(Table::new(columns)))
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// `n` copies of `element` as a generic list.
pub fn create_list_with_same_element(n: usize, element: Value) -> List {
    List::new(vec![element; n])
}

/// `n_lists` columns of `n_rows` copies of `element`, columns optionally
/// named from `column_names`, the whole run through the table-level
/// specialisation before return.
pub fn create_table_with_same_element(
    n_lists: usize,
    n_rows: usize,
    element: Value,
    column_names: Option<&[String]>,
) -> Table {
    let mut columns = Vec::with_capacity(n_lists);
    for i in 0..n_lists {
        let mut list = create_list_with_same_element(n_rows, element.clone());
        list.name = column_names.and_then(|names| names.get(i)).cloned();
        columns.push(TypedList::Generic(list));
    }
    improve_table(Table::new(columns))
}
