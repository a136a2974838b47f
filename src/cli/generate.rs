use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::project::{validate_bundle_id, validate_project_name};
use crate::models::{FileEntry, ProjectIds, ProjectSpec};
use crate::services::{discover_sources, render_pbxproj, render_scheme, write_project};
use crate::utils::error::{Result, XcgenError};

/// Generate a fresh Xcode project descriptor and shared scheme
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Project name (default: current directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Bundle identifier (default: "com.example.<name>")
    #[arg(long)]
    pub bundle_id: Option<String>,

    /// Directory scanned for source files (default: "./<name>")
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Source file extension to include, without the dot
    #[arg(long, default_value = "swift")]
    pub extension: String,

    /// Directory the .xcodeproj bundle is written into
    #[arg(long, default_value = ".")]
    pub output: PathBuf,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for the generate command
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub status: String,
    pub project_name: String,
    pub bundle_id: String,
    pub source_files: usize,
    pub project_path: String,
    pub scheme_path: String,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn run(&self) -> Result<()> {
        let current_dir = std::env::current_dir().map_err(XcgenError::IoError)?;

        // Determine project name
        let project_name = match &self.name {
            Some(name) => {
                validate_project_name(name)?;
                name.clone()
            }
            None => {
                let dir_name = current_dir
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("unnamed-project")
                    .to_string();

                // If directory name is not valid, use a default name
                if validate_project_name(&dir_name).is_ok() {
                    dir_name
                } else {
                    "unnamed-project".to_string()
                }
            }
        };

        // Determine bundle identifier
        let bundle_id = match &self.bundle_id {
            Some(id) => {
                validate_bundle_id(id)?;
                id.clone()
            }
            None => {
                let default = format!("com.example.{}", project_name.replace('_', "-"));
                validate_bundle_id(&default)?;
                default
            }
        };

        // The scanned directory doubles as the source group's path inside
        // the descriptor
        let source_dir = self
            .source_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&project_name));
        let source_root = source_dir.to_string_lossy().into_owned();

        let files = discover_sources(&source_dir, &self.extension)?;
        let entries = FileEntry::assign(files);
        let ids = ProjectIds::mint();

        let spec = ProjectSpec {
            name: project_name.clone(),
            bundle_id: bundle_id.clone(),
            source_root,
            extension: self.extension.clone(),
        };

        let pbxproj = render_pbxproj(&spec, &ids, &entries);
        let scheme = render_scheme(&spec.name, &ids.target);
        let generated = write_project(&self.output, &spec.name, &pbxproj, &scheme)?;

        // Output response
        if self.json {
            let response = GenerateResponse {
                status: "success".to_string(),
                project_name,
                bundle_id,
                source_files: entries.len(),
                project_path: generated.pbxproj_path.display().to_string(),
                scheme_path: generated.scheme_path.display().to_string(),
            };

            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                XcgenError::ValidationError(format!("Failed to serialize JSON response: {}", e))
            })?;

            println!("{}", json_output);
        } else {
            println!("Created {}", generated.project_dir.display());
            println!("Added {} {} files", entries.len(), self.extension);
            println!("Bundle ID: {}", bundle_id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &std::path::Path, rel: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "// source\n").unwrap();
    }

    fn command(sources: &std::path::Path, output: &std::path::Path) -> GenerateCommand {
        GenerateCommand {
            name: Some("TestApp".to_string()),
            bundle_id: None,
            source_dir: Some(sources.to_path_buf()),
            extension: "swift".to_string(),
            output: output.to_path_buf(),
            json: false,
        }
    }

    #[test]
    fn test_generate_writes_both_artifacts() {
        let temp = TempDir::new().unwrap();
        let sources = temp.path().join("TestApp");
        touch(&sources, "App.swift");
        touch(&sources, "Views/ContentView.swift");

        let cmd = command(&sources, temp.path());
        cmd.run().unwrap();

        let pbxproj_path = temp.path().join("TestApp.xcodeproj/project.pbxproj");
        let scheme_path = temp
            .path()
            .join("TestApp.xcodeproj/xcshareddata/xcschemes/TestApp.xcscheme");
        assert!(pbxproj_path.exists());
        assert!(scheme_path.exists());

        let pbxproj = fs::read_to_string(&pbxproj_path).unwrap();
        assert!(pbxproj.contains("/* App.swift */"));
        assert!(pbxproj.contains("path = \"Views/ContentView.swift\";"));
        assert!(pbxproj.contains("PRODUCT_BUNDLE_IDENTIFIER = com.example.TestApp;"));
    }

    #[test]
    fn test_generate_rerun_preserves_files_but_not_ids() {
        let temp = TempDir::new().unwrap();
        let sources = temp.path().join("TestApp");
        touch(&sources, "A.swift");
        touch(&sources, "B.swift");

        let cmd = command(&sources, temp.path());
        cmd.run().unwrap();
        let pbxproj_path = temp.path().join("TestApp.xcodeproj/project.pbxproj");
        let first = fs::read_to_string(&pbxproj_path).unwrap();

        cmd.run().unwrap();
        let second = fs::read_to_string(&pbxproj_path).unwrap();

        // Same interpolated filenames, fresh identifiers
        assert_ne!(first, second);
        for content in [&first, &second] {
            let a = content.find("/* A.swift */,").unwrap();
            let b = content.find("/* B.swift */,").unwrap();
            assert!(a < b);
        }
    }

    #[test]
    fn test_generate_missing_source_dir_fails() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp.path().join("nope"), temp.path());

        let result = cmd.run();
        assert!(matches!(result, Err(XcgenError::ValidationError(_))));
    }

    #[test]
    fn test_generate_rejects_invalid_bundle_id() {
        let temp = TempDir::new().unwrap();
        let sources = temp.path().join("TestApp");
        touch(&sources, "App.swift");

        let mut cmd = command(&sources, temp.path());
        cmd.bundle_id = Some("not-a-bundle-id".to_string());

        let result = cmd.run();
        assert!(matches!(result, Err(XcgenError::ValidationError(_))));
    }
}
