use super::model::{Interval, IntervalList, List, NumberList, StringList, Table, TypedList, Value};

// ---------------------------------------------------------------------------
// Specialisation engine: narrow a generic list to its best variant
// ---------------------------------------------------------------------------

/// Return the most specific [`TypedList`] whose element contract every
/// value of `list` already satisfies.
///
/// This classifies, it never coerces: a list of numeric-looking strings
/// stays a string list. Heterogeneous contents and empty lists come back
/// as `Generic`, unchanged. The name survives every path.
pub fn improve_list(list: List) -> TypedList {
    if list.values.is_empty() {
        return TypedList::Generic(list);
    }

    // One pass, three running predicates. Checked in fixed priority
    // order below; the predicates are mutually exclusive anyway.
    let mut all_numbers = true;
    let mut all_strings = true;
    let mut all_intervals = true;
    for v in &list.values {
        all_numbers &= v.is_numeric();
        all_strings &= matches!(v, Value::Str(_));
        all_intervals &= matches!(v, Value::Interval(_));
        if !(all_numbers || all_strings || all_intervals) {
            break;
        }
    }

    if all_numbers {
        let values = list
            .values
            .iter()
            .map(|v| v.as_f64().unwrap_or(f64::NAN))
            .collect();
        return TypedList::Numbers(NumberList {
            name: list.name,
            values,
        });
    }
    if all_strings {
        let values = list
            .values
            .into_iter()
            .map(|v| match v {
                Value::Str(s) => s,
                other => other.to_string(),
            })
            .collect();
        return TypedList::Strings(StringList {
            name: list.name,
            values,
        });
    }
    if all_intervals {
        let values = list
            .values
            .iter()
            .map(|v| match v {
                Value::Interval(iv) => *iv,
                _ => Interval::new(f64::NAN, f64::NAN),
            })
            .collect();
        return TypedList::Intervals(IntervalList {
            name: list.name,
            values,
        });
    }

    TypedList::Generic(list)
}

/// Apply [`improve_list`] to every still-generic column independently.
/// Already-specialised columns pass through untouched; the table itself
/// gains no variant beyond being a container of improved columns.
pub fn improve_table(table: Table) -> Table {
    Table {
        name: table.name,
        columns: table
            .columns
            .into_iter()
            .map(|col| match col {
                TypedList::Generic(l) => improve_list(l),
                other => other,
            })
            .collect(),
    }
}
