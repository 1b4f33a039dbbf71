use super::model::{Interval, IntervalList, NumberList, Table, TypedList};

// ---------------------------------------------------------------------------
// Nullable – explicit null marker for table-level operators
// ---------------------------------------------------------------------------

/// Explicit null sentinel, distinct from the `Option` absence used by
/// the list-level operators. Table-level interval scaling returns a true
/// null on invalid input and callers must handle the two contracts
/// separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nullable<T> {
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Nullable::Null => None,
            Nullable::Value(v) => Some(v),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Null => None,
            Nullable::Value(v) => Some(v),
        }
    }
}

// ---------------------------------------------------------------------------
// Interval operators
// ---------------------------------------------------------------------------

/// Zip two number lists pairwise into intervals, truncating to the
/// shorter input. The lower-bound list's name carries over. Either input
/// absent, result absent.
pub fn number_lists_to_interval_list(
    lower: Option<&NumberList>,
    upper: Option<&NumberList>,
) -> Option<IntervalList> {
    let lower = lower?;
    let upper = upper?;
    let values = lower
        .values
        .iter()
        .zip(&upper.values)
        .map(|(&lo, &up)| Interval::new(lo, up))
        .collect();
    Some(IntervalList {
        name: lower.name.clone(),
        values,
    })
}

/// Scale every interval of a list by `factor`, keeping the name.
/// A factor of 1.0 is the identity on bounds.
pub fn scale_intervals(list: Option<&IntervalList>, factor: f64) -> Option<IntervalList> {
    let list = list?;
    Some(IntervalList {
        name: list.name.clone(),
        values: list.values.iter().map(|iv| iv.scaled(factor)).collect(),
    })
}

/// Table-level scaling: every interval column scaled by `factor`, other
/// columns passed through unchanged, table name kept. Absent input
/// returns the explicit [`Nullable::Null`] marker, not absence.
pub fn scale_interval_table(table: Option<&Table>, factor: f64) -> Nullable<Table> {
    let Some(table) = table else {
        return Nullable::Null;
    };
    let columns = table
        .columns
        .iter()
        .map(|col| match col {
            TypedList::Intervals(l) => {
                // Present list in, present list out
                let scaled = scale_intervals(Some(l), factor).unwrap_or_default();
                TypedList::Intervals(scaled)
            }
            other => other.clone(),
        })
        .collect();
    Nullable::Value(Table {
        name: table.name.clone(),
        columns,
    })
}
