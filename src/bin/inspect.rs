use std::path::Path;

use anyhow::{bail, Context, Result};

use rusty_tabula::{
    array_of_arrays_to_table, delimited_to_table, image_to_table_of_rgba, improve_table,
    string_to_object, EncodedImage, Table, TypedList,
};

/// Load a file into a table. Dispatch by extension.
///
/// Supported formats:
/// * `.json` – array-of-arrays (columns), parsed with line recovery
/// * `.csv`  – delimited text with a header row
/// * `.png`  – decoded into per-column rgba cells
fn load_file(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            let value = string_to_object(&text)
                .context("input is not JSON, even after line recovery")?;
            array_of_arrays_to_table(&value).context("expected a JSON array of arrays")
        }
        "csv" => {
            let text = std::fs::read_to_string(path).context("reading CSV file")?;
            Ok(delimited_to_table(&text, b',')?)
        }
        "png" => {
            let bytes = std::fs::read(path).context("reading image file")?;
            let source = EncodedImage::new(bytes);
            let table = image_to_table_of_rgba(Some(&source), false)?
                .context("image has no pixels")?;
            Ok(improve_table(table))
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

fn preview(column: &TypedList) -> String {
    let shown: Vec<String> = (0..column.len().min(3))
        .filter_map(|row| column.value_at(row))
        .map(|v| v.to_string())
        .collect();
    let mut out = shown.join(", ");
    if column.len() > 3 {
        out.push_str(", …");
    }
    out
}

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: inspect <file.json|file.csv|file.png>")?;
    let path = Path::new(&path);

    let table = load_file(path)?;
    log::info!(
        "loaded {} columns x {} rows from {}",
        table.len(),
        table.row_count(),
        path.display()
    );

    for (i, column) in table.columns.iter().enumerate() {
        println!(
            "{i:>3}  {:<12} {:<10} len={:<5} {}",
            column.name().unwrap_or("-"),
            column.kind(),
            column.len(),
            preview(column)
        );
    }
    Ok(())
}
