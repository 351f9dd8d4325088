//! SQL statement synthesis.
//!
//! Table and column names are interpolated verbatim, without quoting or
//! escaping. Schemas are trusted input; callers that need protection run
//! `Schema::validate_identifiers` first.

use crate::ir::{Column, Table};

/// Separator between column definitions.
pub const COLUMN_SEPARATOR: &str = ", ";

/// `<name> <TYPE>`
pub fn column_definition(column: &Column) -> String {
    format!("{} {}", column.name, column.ty)
}

/// `CREATE TABLE IF NOT EXISTS <table> (<col> <TYPE>, ...)`
///
/// A table without columns renders an empty column list.
pub fn create_table(table: &Table) -> String {
    let columns = table
        .columns
        .iter()
        .map(column_definition)
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR);

    format!("CREATE TABLE IF NOT EXISTS {} ({})", table.name, columns)
}

/// `SELECT * FROM <table>`
pub fn select_all(table: &str) -> String {
    format!("SELECT * FROM {}", table)
}

/// `INSERT INTO <table>`; the column list and placeholders are appended by
/// the target at request time.
pub fn insert_into(table: &str) -> String {
    format!("INSERT INTO {}", table)
}

/// `DELETE FROM <table> WHERE id = ?`
pub fn delete_by_id(table: &str) -> String {
    format!("DELETE FROM {} WHERE id = ?", table)
}
