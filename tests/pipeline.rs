use rusty_tabula::{
    array_of_arrays_to_table, image_to_table_of_rgba, improve_table, number_lists_to_interval_list,
    scale_interval_table, string_to_object, table_to_objects, to_number_list, Interval, RgbaFrame,
    Table, TypedList, Value,
};

fn column_values(table: &Table, index: usize) -> Vec<Value> {
    let col = table.column(index).expect("column exists");
    (0..col.len()).filter_map(|row| col.value_at(row)).collect()
}

#[test]
fn recovered_text_flows_into_a_typed_table() {
    // Two pseudo-JSON lines, no enclosing array
    let text = "[1, 2, 3]\n[\"a\", \"b\", \"c\"]\n";
    let value = string_to_object(text).expect("line recovery");
    let table = array_of_arrays_to_table(&value).expect("array of arrays");

    assert_eq!(table.len(), 2);
    assert_eq!(table.column(0).unwrap().kind(), "numbers");
    assert_eq!(table.column(1).unwrap().kind(), "strings");
}

#[test]
fn table_survives_the_object_round_trip() {
    let source = serde_json::json!([[10, 20], ["x", "y"]]);
    let table = array_of_arrays_to_table(&source).unwrap();
    let rows = table_to_objects(&table, None);

    // Reassemble the columns from the row objects and rebuild the table.
    let rebuilt = serde_json::Value::Array(vec![
        serde_json::Value::Array(rows.array.iter().map(|r| r["column_0"].clone()).collect()),
        serde_json::Value::Array(rows.array.iter().map(|r| r["column_1"].clone()).collect()),
    ]);
    let again = array_of_arrays_to_table(&rebuilt).unwrap();

    assert_eq!(column_values(&again, 0), column_values(&table, 0));
    assert_eq!(column_values(&again, 1), column_values(&table, 1));
}

#[test]
fn intervals_assemble_and_scale_end_to_end() {
    let source = serde_json::json!([["1", "2", "3"], ["10", "20", "30"]]);
    let table = array_of_arrays_to_table(&source).unwrap();

    // Digit strings classify as strings; the unconditional coercion
    // turns them into numbers.
    let lower = to_number_list(Some(&table.columns[0].clone().into_generic())).unwrap();
    let upper = to_number_list(Some(&table.columns[1].clone().into_generic())).unwrap();
    let intervals = number_lists_to_interval_list(Some(&lower), Some(&upper)).unwrap();
    assert_eq!(intervals.len(), 3);
    assert_eq!(intervals.values[2], Interval::new(3.0, 30.0));

    let interval_table = Table::with_name("spans", vec![TypedList::Intervals(intervals)]);
    let scaled = scale_interval_table(Some(&interval_table), 2.0)
        .into_option()
        .expect("present table");
    assert_eq!(
        scaled.columns[0].as_intervals().unwrap().values[0],
        Interval::new(2.0, 20.0)
    );

    assert!(scale_interval_table(None, 2.0).is_null());
}

#[test]
fn delimited_text_exports_as_row_objects() {
    let text = "id,label\n1,alpha\n2,beta\n";
    let table = rusty_tabula::delimited_to_table(text, b',').expect("valid csv");
    let rows = table_to_objects(&table, None);

    assert_eq!(rows.array.len(), 2);
    assert_eq!(rows.array[0]["id"], serde_json::json!(1.0));
    assert_eq!(rows.array[1]["label"], serde_json::json!("beta"));
}

#[test]
fn pixel_buffer_becomes_an_improvable_table() {
    let frame = RgbaFrame {
        data: vec![10, 20, 30, 255, 40, 50, 60, 128],
        width: 2,
        height: 1,
    };
    let table = image_to_table_of_rgba(Some(&frame), true)
        .expect("no decode step")
        .expect("valid frame");
    let improved = improve_table(table);

    assert_eq!(improved.len(), 2);
    assert_eq!(improved.column(0).unwrap().kind(), "strings");
    assert_eq!(
        improved.column(0).unwrap().as_strings().unwrap().values[0],
        "rgba(10,20,30,1)"
    );
}
