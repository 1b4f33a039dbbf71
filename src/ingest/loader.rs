use serde_json::Value as JsonValue;

use super::IngestError;
use crate::data::improve::improve_table;
use crate::data::model::{List, Table, TypedList, Value};

// ---------------------------------------------------------------------------
// Quasi-JSON reader
// ---------------------------------------------------------------------------

/// Parse a string as JSON, recovering line-delimited pseudo-JSON.
///
/// Strict parse first. On failure the text is reread line by line:
/// blank lines are skipped, a line that trims to `{` greedily consumes
/// lines (space-joined) until one trims to `}` or the input ends, and
/// any other line is one item on its own. The items are reassembled
/// into a JSON array literal and parsed strictly again; a second
/// failure yields `None`. Best-effort on purpose — nested or malformed
/// multi-line objects may come out wrong rather than erroring.
pub fn string_to_object(text: &str) -> Option<JsonValue> {
    match serde_json::from_str(text) {
        Ok(value) => return Some(value),
        Err(e) => log::debug!("strict parse failed ({e}), trying line recovery"),
    }

    let mut items: Vec<String> = Vec::new();
    let mut lines = text.split('\n').map(str::trim);
    while let Some(line) = lines.next() {
        if line.is_empty() {
            continue;
        }
        if line == "{" {
            let mut parts = vec!["{"];
            for inner in lines.by_ref() {
                parts.push(inner);
                if inner == "}" {
                    break;
                }
            }
            items.push(parts.join(" "));
        } else {
            items.push(line.to_string());
        }
    }

    let rebuilt = format!("[\n{}\n]", items.join(",\n"));
    match serde_json::from_str(&rebuilt) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("line recovery failed: {e}");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Delimited text reader
// ---------------------------------------------------------------------------

/// Parse delimited text into a table, one column per header field.
///
/// Cells are classified into their most plausible value type and the
/// columns are run through the specialisation engine. Ragged or
/// otherwise malformed records surface as [`IngestError::Delimited`].
pub fn delimited_to_table(text: &str, delimiter: u8) -> Result<Table, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let mut columns: Vec<List> = headers
        .iter()
        .map(|h| List::with_name(h.clone(), Vec::new()))
        .collect();

    for result in reader.records() {
        let record = result?;
        for (i, cell) in record.iter().enumerate() {
            if let Some(col) = columns.get_mut(i) {
                col.values.push(guess_cell(cell));
            }
        }
    }

    let table = Table::new(columns.into_iter().map(TypedList::Generic).collect());
    Ok(improve_table(table))
}

/// Classify one delimited-text cell into its most plausible value type.
fn guess_cell(s: &str) -> Value {
    if s.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return Value::Float(f);
    }
    if s == "true" || s == "false" {
        return Value::Bool(s == "true");
    }
    Value::Str(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_json_parses_strictly() {
        assert_eq!(
            string_to_object(r#"{"a":1}"#),
            Some(serde_json::json!({ "a": 1 }))
        );
    }

    #[test]
    fn line_delimited_scalars_become_an_array() {
        let parsed = string_to_object("1\n2\n\n3\n").expect("recovered");
        assert_eq!(parsed, serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn multi_line_objects_are_greedily_joined() {
        let text = "{\n \"a\":1\n}\n{\n \"a\":2\n}";
        let parsed = string_to_object(text).expect("recovered");
        assert_eq!(parsed, serde_json::json!([{ "a": 1 }, { "a": 2 }]));
    }

    #[test]
    fn windows_line_endings_recover_too() {
        let text = "{\r\n \"a\":1\r\n}\r\n4\r\n";
        let parsed = string_to_object(text).expect("recovered");
        assert_eq!(parsed, serde_json::json!([{ "a": 1 }, 4]));
    }

    #[test]
    fn unquoted_keys_defeat_recovery() {
        assert_eq!(string_to_object("{\n a:1\n}\n{\n a:2\n}"), None);
    }

    #[test]
    fn unterminated_object_consumes_to_the_end() {
        let parsed = string_to_object("{\n \"a\":1\n").unwrap_or(JsonValue::Null);
        // No closing brace anywhere: the span stays unbalanced
        assert_eq!(parsed, JsonValue::Null);
    }

    #[test]
    fn delimited_text_builds_typed_columns() {
        let text = "id,label,score\n1,alpha,0.5\n2,beta,0.75\n";
        let table = delimited_to_table(text, b',').expect("valid csv");
        assert_eq!(table.len(), 3);
        assert_eq!(table.columns[0].name(), Some("id"));
        assert_eq!(table.columns[0].kind(), "numbers");
        assert_eq!(table.columns[1].kind(), "strings");
        assert_eq!(
            table.columns[2].as_numbers().unwrap().values,
            vec![0.5, 0.75]
        );
    }

    #[test]
    fn empty_cells_keep_a_column_generic() {
        let text = "a;b\n1;\n2;x\n";
        let table = delimited_to_table(text, b';').expect("valid csv");
        assert_eq!(table.columns[0].kind(), "numbers");
        assert_eq!(table.columns[1].kind(), "generic");
        assert_eq!(
            table.columns[1].as_generic().unwrap().values,
            vec![Value::Null, Value::Str("x".into())]
        );
    }

    #[test]
    fn ragged_records_report_a_typed_error() {
        let text = "a,b\n1,2,3\n";
        assert!(matches!(
            delimited_to_table(text, b','),
            Err(IngestError::Delimited(_))
        ));
    }
}
