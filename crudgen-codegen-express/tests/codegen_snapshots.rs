//! Snapshot tests for Express + SQLite code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use crudgen_codegen::{BackendCodegen, pipeline::Pipeline};
use crudgen_codegen_express::Generator;
use crudgen_schema::Schema;

const NOTES_APP: &str = r#"{
    "appName": "NotesApp",
    "models": [
        { "name": "Note", "fields": { "id": "number", "title": "string" } }
    ],
    "routes": [
        { "model": "Note", "methods": ["DELETE", "GET", "POST"] }
    ]
}"#;

/// Generate files from a JSON schema as `(filename, content)` pairs.
fn generate_files(schema_json: &str, package_json: bool) -> Vec<(String, String)> {
    let schema = Schema::from_json_str(schema_json).expect("Failed to parse schema");
    let ctx = Pipeline::new().run(schema).expect("Pipeline failed");
    Generator::from_context(ctx)
        .with_package_json(package_json)
        .artifacts()
        .into_iter()
        .map(|a| (a.filename().to_string(), a.content().to_string()))
        .collect()
}

fn get_file<'a>(files: &'a [(String, String)], name: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_notes_db_js() {
    let files = generate_files(NOTES_APP, false);
    let db = get_file(&files, "db.js").expect("db.js not found");
    insta::assert_snapshot!("notes_db_js", db);
}

#[test]
fn test_notes_server_js() {
    let files = generate_files(NOTES_APP, false);
    let server = get_file(&files, "server.js").expect("server.js not found");
    insta::assert_snapshot!("notes_server_js", server);
}

#[test]
fn test_notes_package_json() {
    let files = generate_files(NOTES_APP, true);
    let package = get_file(&files, "package.json").expect("package.json not found");
    insta::assert_snapshot!("notes_package_json", package);
}

#[test]
fn test_get_and_post_only() {
    let files = generate_files(
        r#"{
            "appName": "NotesApp",
            "models": [{ "name": "Note", "fields": { "id": "number", "title": "string" } }],
            "routes": [{ "model": "Note", "methods": ["GET", "POST"] }]
        }"#,
        false,
    );

    let db = get_file(&files, "db.js").unwrap();
    assert!(db.contains("CREATE TABLE IF NOT EXISTS Note (id INTEGER, title TEXT)"));

    let server = get_file(&files, "server.js").unwrap();
    assert!(server.contains("app.get(\"/api/note\", async (req, res) => {"));
    assert!(server.contains("app.post(\"/api/note\", async (req, res) => {"));
    assert!(!server.contains("app.delete("));
    assert!(!server.contains("DELETE FROM"));
}

#[test]
fn test_unsupported_method_still_generates_both_files() {
    let files = generate_files(
        r#"{
            "appName": "PatchApp",
            "models": [{ "name": "Item", "fields": { "label": "string" } }],
            "routes": [{ "model": "Item", "methods": ["PATCH"] }]
        }"#,
        false,
    );

    assert_eq!(files.len(), 2);
    let server = get_file(&files, "server.js").unwrap();
    assert!(!server.contains("async (req, res)"));
    assert!(server.contains("PatchApp server running on port ${PORT}"));
}

#[test]
fn test_handler_order_ignores_declaration_order() {
    let files = generate_files(NOTES_APP, false);
    let server = get_file(&files, "server.js").unwrap();

    let get = server.find("app.get(").unwrap();
    let post = server.find("app.post(").unwrap();
    let delete = server.find("app.delete(").unwrap();
    assert!(get < post && post < delete);
}

#[test]
fn test_paths_lowercase_tables_verbatim() {
    let files = generate_files(
        r#"{
            "appName": "Blog",
            "models": [{ "name": "BlogPost", "fields": { "views": "number", "body": "markdown" } }],
            "routes": [{ "model": "BlogPost", "methods": ["GET", "POST", "DELETE"] }]
        }"#,
        false,
    );

    let db = get_file(&files, "db.js").unwrap();
    assert!(db.contains("CREATE TABLE IF NOT EXISTS BlogPost (views INTEGER, body TEXT)"));

    let server = get_file(&files, "server.js").unwrap();
    assert!(server.contains("app.get(\"/api/blogpost\""));
    assert!(server.contains("app.delete(\"/api/blogpost/:id\""));
    assert!(server.contains("SELECT * FROM BlogPost"));
    assert!(server.contains("INSERT INTO BlogPost ("));
    assert!(server.contains("{ message: \"BlogPost created\" }"));
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(
        generate_files(NOTES_APP, true),
        generate_files(NOTES_APP, true)
    );
}

#[test]
fn test_duplicate_models_rejected() {
    let err = Schema::from_json_str(
        r#"{
            "appName": "Dup",
            "models": [
                { "name": "Note", "fields": {} },
                { "name": "Note", "fields": {} }
            ],
            "routes": []
        }"#,
    )
    .unwrap_err();

    assert!(matches!(
        *err,
        crudgen_schema::SchemaError::DuplicateModel { .. }
    ));
}

#[test]
fn test_generate_convenience() {
    let schema = Schema::from_json_str(NOTES_APP).unwrap();
    let artifacts = crudgen_codegen_express::generate(schema).unwrap();

    let names: Vec<_> = artifacts.iter().map(|a| a.filename()).collect();
    assert_eq!(names, vec!["db.js", "server.js"]);
}
