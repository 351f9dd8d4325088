//! End-to-end writes through the real file system.

use std::fs;

use crudgen_codegen_express::generate_to;
use crudgen_core::FsSink;
use crudgen_schema::{Model, Route, Schema};
use tempfile::TempDir;

fn notes_schema() -> Schema {
    Schema::new("NotesApp")
        .model(
            Model::new("Note")
                .field("id", "number")
                .field("title", "string"),
        )
        .route(Route::new("Note", ["GET", "POST"]))
}

#[test]
fn test_writes_into_app_directory() {
    let temp = TempDir::new().unwrap();

    let result = generate_to(notes_schema(), &mut FsSink, temp.path()).unwrap();

    let app_dir = temp.path().join("NotesApp");
    assert_eq!(result.output_dir, app_dir);
    assert_eq!(result.written, vec!["db.js", "server.js"]);
    assert!(app_dir.join("db.js").is_file());
    assert!(app_dir.join("server.js").is_file());
}

#[test]
fn test_rerun_overwrites_with_identical_bytes() {
    let temp = TempDir::new().unwrap();
    let server = temp.path().join("NotesApp/server.js");

    generate_to(notes_schema(), &mut FsSink, temp.path()).unwrap();
    let first = fs::read(&server).unwrap();

    fs::write(&server, "// local edit\n").unwrap();
    generate_to(notes_schema(), &mut FsSink, temp.path()).unwrap();

    assert_eq!(fs::read(&server).unwrap(), first);
}

#[cfg(unix)]
#[test]
fn test_generated_files_are_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();

    generate_to(notes_schema(), &mut FsSink, temp.path()).unwrap();

    for name in ["db.js", "server.js"] {
        let path = temp.path().join("NotesApp").join(name);
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644, "{name}");
    }
}

#[test]
fn test_invalid_schema_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let schema = notes_schema().route(Route::new("Tag", ["GET"]));

    let err = generate_to(schema, &mut FsSink, temp.path()).unwrap_err();

    assert!(err.as_schema_error().is_some());
    assert!(!temp.path().join("NotesApp").exists());
}

#[test]
fn test_write_failure_is_generation_error() {
    let temp = TempDir::new().unwrap();
    // A file where the app directory should go.
    fs::write(temp.path().join("NotesApp"), "").unwrap();

    let err = generate_to(notes_schema(), &mut FsSink, temp.path()).unwrap_err();

    assert!(matches!(err, crudgen_codegen::Error::Generation(_)));
}
