//! `package.json` for the generated project.

use crudgen_core::{FileRules, GeneratedFile};

use crate::{
    adapters::{Dependency, ExpressAdapter, SqliteAdapter},
    ast::string_literal,
};

const DEFAULT_VERSION: &str = "1.0.0";

/// The package.json manifest. Only written if missing, so local edits
/// survive regeneration.
pub struct PackageJson {
    pub name: String,
    pub version: String,
    pub description: String,
    pub dependencies: Vec<Dependency>,
}

impl PackageJson {
    pub fn new(app_name: &str) -> Self {
        let mut dependencies = ExpressAdapter::new().dependencies();
        dependencies.extend(SqliteAdapter::new().dependencies());

        Self {
            name: package_name(app_name),
            version: DEFAULT_VERSION.to_string(),
            description: format!("{} backend generated by crudgen", app_name),
            dependencies,
        }
    }

    fn render_dependencies(deps: &[Dependency]) -> String {
        deps.iter()
            .map(|d| {
                format!(
                    "    {}: {}",
                    string_literal(&d.name),
                    string_literal(&d.version)
                )
            })
            .collect::<Vec<_>>()
            .join(",\n")
    }
}

impl GeneratedFile for PackageJson {
    fn filename(&self) -> &'static str {
        "package.json"
    }

    fn rules(&self) -> FileRules {
        FileRules::if_missing()
    }

    fn render(&self) -> String {
        format!(
            r#"{{
  "name": {},
  "version": {},
  "description": {},
  "main": "server.js",
  "scripts": {{
    "start": "node server.js"
  }},
  "dependencies": {{
{}
  }}
}}
"#,
            string_literal(&self.name),
            string_literal(&self.version),
            string_literal(&self.description),
            Self::render_dependencies(&self.dependencies)
        )
    }
}

/// npm package name: lower-cased, with anything outside `[a-z0-9._-]`
/// replaced by `-`.
fn package_name(app_name: &str) -> String {
    let name: String = app_name
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' | '_' | '.' => c,
            _ => '-',
        })
        .collect();

    let name = name.trim_start_matches(['.', '_']);
    if name.is_empty() {
        "app".to_string()
    } else {
        name.to_string()
    }
}
