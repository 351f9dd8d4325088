//! Generated file renderers.

mod db_js;
mod package_json;
mod server_js;

pub use db_js::DbJs;
pub use package_json::PackageJson;
pub use server_js::ServerJs;

/// Module path `server.js` loads the data layer from.
pub const DB_MODULE: &str = "./db";

/// Name of the database initializer exported by `db.js`.
pub const INIT_DB: &str = "initDB";

/// Leading comment of every generated source file.
///
/// Line terminators in the app name, including U+2028 and U+2029, become
/// spaces so the comment stays on one line.
pub(crate) fn header(app_name: &str) -> String {
    let app_name = app_name.replace(['\r', '\n', '\u{2028}', '\u{2029}'], " ");
    format!(
        "Generated by crudgen for {}. Re-running crudgen overwrites this file.",
        app_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        assert_eq!(
            header("NotesApp"),
            "Generated by crudgen for NotesApp. Re-running crudgen overwrites this file."
        );
    }

    #[test]
    fn test_header_strips_line_terminators() {
        let header = header("A\nB\rC\u{2028}D\u{2029}E");

        assert!(header.starts_with("Generated by crudgen for A B C D E."));
        assert!(!header.contains(['\n', '\r', '\u{2028}', '\u{2029}']));
    }
}
