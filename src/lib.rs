//! Runtime type-specialisation and conversion for list and table data.
//!
//! Untyped collections (JSON values, delimited text, RGBA pixel
//! buffers) come in as generic [`List`]s or [`Table`]s; the
//! specialisation engine narrows each one to the most specific variant
//! its contents satisfy ([`TypedList`]); conversions move losslessly
//! between the typed forms and plain structural data without dropping
//! the `name` tag.
//!
//! ```
//! use rusty_tabula::{array_of_arrays_to_table, table_to_objects};
//!
//! let table = array_of_arrays_to_table(&serde_json::json!([[1, 2, 3], ["a", "b", "c"]])).unwrap();
//! assert_eq!(table.columns[0].kind(), "numbers");
//! assert_eq!(table.columns[1].kind(), "strings");
//!
//! let rows = table_to_objects(&table, None);
//! assert_eq!(rows.array.len(), 3);
//! ```

pub mod data;
pub mod ingest;

pub use data::convert::{
    array_of_arrays_to_table, create_list_with_same_element, create_table_with_same_element,
    table_to_objects, to_number_list, to_string_list, RowSet,
};
pub use data::improve::{improve_list, improve_table};
pub use data::interval::{
    number_lists_to_interval_list, scale_interval_table, scale_intervals, Nullable,
};
pub use data::model::{Interval, IntervalList, List, NumberList, StringList, Table, TypedList, Value};
pub use ingest::image::{image_to_table_of_rgba, EncodedImage, PixelSource, RgbaFrame};
pub use ingest::loader::{delimited_to_table, string_to_object};
pub use ingest::IngestError;
