use std::path::{Path, PathBuf};

use clap::Args;
use crudgen_core::{Artifact, FileRules, FsSink, Sink, WriteResult};
use crudgen_schema::SchemaFormat;
use eyre::{Context, Result};

const EXAMPLE_JSON: &str = r#"{
  "appName": "NotesApp",
  "models": [
    {
      "name": "Note",
      "fields": {
        "id": "number",
        "title": "string",
        "content": "string"
      }
    }
  ],
  "routes": [
    {
      "model": "Note",
      "methods": ["GET", "POST", "DELETE"]
    }
  ]
}
"#;

const EXAMPLE_TOML: &str = r#"appName = "NotesApp"

[[models]]
name = "Note"

[models.fields]
id = "number"
title = "string"
content = "string"

[[routes]]
model = "Note"
methods = ["GET", "POST", "DELETE"]
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the example schema (.json, or .toml)
    #[arg(default_value = "schema.json")]
    pub path: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let (dir, filename) = split_path(&self.path)?;
        let content = match SchemaFormat::from_path(&self.path) {
            SchemaFormat::Json => EXAMPLE_JSON,
            SchemaFormat::Toml => EXAMPLE_TOML,
        };

        let mut sink = FsSink::new();
        if !dir.as_os_str().is_empty() {
            sink.create_dir_all(dir)
                .wrap_err_with(|| format!("Failed to create {}", dir.display()))?;
        }

        let result = Artifact::new(filename, content)
            .with_rules(FileRules::if_missing())
            .write(&mut sink, dir)
            .wrap_err_with(|| format!("Failed to write {}", self.path.display()))?;

        match result {
            WriteResult::Written => {
                println!("Created {}", self.path.display());
                println!();
                println!("Next:");
                println!("  crudgen generate {}", self.path.display());
            }
            WriteResult::Skipped => {
                println!("{} already exists, leaving it untouched", self.path.display());
            }
        }

        Ok(())
    }
}

fn split_path(path: &Path) -> Result<(&Path, String)> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| eyre::eyre!("{} is not a file path", path.display()))?
        .to_string();
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    Ok((dir, filename))
}

#[cfg(test)]
mod tests {
    use crudgen_schema::Schema;

    use super::*;

    #[test]
    fn test_examples_parse_to_same_schema() {
        let json = Schema::from_json_str(EXAMPLE_JSON).unwrap();
        let toml = Schema::from_toml_str(EXAMPLE_TOML).unwrap();

        assert_eq!(json, toml);
        assert_eq!(json.app_name, "NotesApp");
    }

    #[test]
    fn test_split_path() {
        let (dir, name) = split_path(Path::new("schemas/app.toml")).unwrap();
        assert_eq!(dir, Path::new("schemas"));
        assert_eq!(name, "app.toml");
    }
}
