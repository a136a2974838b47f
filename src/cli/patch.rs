use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::ObjectId;
use crate::services::patcher::{group_child_line, insert_after_anchor, DEFAULT_ANCHOR};
use crate::utils::error::{Result, XcgenError};

/// Insert file entries into an existing project descriptor
#[derive(Debug, Args)]
pub struct PatchCommand {
    /// Path to the project.pbxproj to modify
    /// (default: "<dir>.xcodeproj/project.pbxproj" for the current directory)
    pub project_file: Option<PathBuf>,

    /// File name to insert into the source group (repeatable)
    #[arg(long = "add", value_name = "FILE", required = true)]
    pub add: Vec<String>,

    /// Literal anchor text locating the insertion point
    #[arg(long, default_value = DEFAULT_ANCHOR)]
    pub anchor: String,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for the patch command
#[derive(Debug, Serialize, Deserialize)]
pub struct PatchResponse {
    pub status: String,
    pub project_file: String,
    pub anchor: String,
    pub insertions: usize,
    pub added: Vec<AddedFile>,
}

/// One inserted entry: the minted identifier and the file it names
#[derive(Debug, Serialize, Deserialize)]
pub struct AddedFile {
    pub id: String,
    pub file: String,
}

impl PatchCommand {
    /// Execute the patch command
    pub fn run(&self) -> Result<()> {
        let project_file = match &self.project_file {
            Some(path) => path.clone(),
            None => default_project_file()?,
        };

        if !project_file.is_file() {
            return Err(XcgenError::ValidationError(format!(
                "project file '{}' not found",
                project_file.display()
            )));
        }

        let content = fs::read_to_string(&project_file).map_err(XcgenError::IoError)?;

        // One freshly minted identifier per added file
        let mut added = Vec::new();
        let mut block = String::new();
        for file in &self.add {
            let id = ObjectId::mint();
            block.push_str(&group_child_line(&id, file));
            added.push(AddedFile {
                id: id.to_string(),
                file: file.clone(),
            });
        }

        let patched = insert_after_anchor(&content, &self.anchor, &block)?;
        fs::write(&project_file, &patched.content).map_err(XcgenError::IoError)?;

        // Output response
        if self.json {
            let response = PatchResponse {
                status: "success".to_string(),
                project_file: project_file.display().to_string(),
                anchor: self.anchor.clone(),
                insertions: patched.insertions,
                added,
            };

            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                XcgenError::ValidationError(format!("Failed to serialize JSON response: {}", e))
            })?;

            println!("{}", json_output);
        } else {
            println!(
                "Added {} entries to {}",
                added.len(),
                project_file.display()
            );
        }

        Ok(())
    }
}

/// Default descriptor location: the .xcodeproj named after the current
/// directory, matching where the generator writes it.
fn default_project_file() -> Result<PathBuf> {
    let current_dir = std::env::current_dir().map_err(XcgenError::IoError)?;
    let dir_name = current_dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unnamed-project")
        .to_string();

    Ok(current_dir.join(format!("{}.xcodeproj", dir_name)).join("project.pbxproj"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DESCRIPTOR: &str = "\t\t\t\tAAAA /* App.swift */,\n\
\t\t\t\tBBBB /* Info.plist */,\n\
\t\t\t);\n";

    fn command(project_file: &std::path::Path, add: Vec<&str>) -> PatchCommand {
        PatchCommand {
            project_file: Some(project_file.to_path_buf()),
            add: add.into_iter().map(String::from).collect(),
            anchor: DEFAULT_ANCHOR.to_string(),
            json: false,
        }
    }

    #[test]
    fn test_patch_inserts_entries_after_anchor() {
        let temp = TempDir::new().unwrap();
        let project_file = temp.path().join("project.pbxproj");
        fs::write(&project_file, DESCRIPTOR).unwrap();

        let cmd = command(&project_file, vec!["New.swift", "Badge.swift"]);
        cmd.run().unwrap();

        let patched = fs::read_to_string(&project_file).unwrap();
        let plist = patched.find("/* Info.plist */,").unwrap();
        let new = patched.find("/* New.swift */,").unwrap();
        let badge = patched.find("/* Badge.swift */,").unwrap();
        assert!(plist < new && new < badge);
    }

    #[test]
    fn test_patch_missing_anchor_leaves_file_unchanged() {
        let temp = TempDir::new().unwrap();
        let project_file = temp.path().join("project.pbxproj");
        fs::write(&project_file, "no anchor here\n").unwrap();

        let cmd = command(&project_file, vec!["New.swift"]);
        let result = cmd.run();

        assert!(matches!(result, Err(XcgenError::PatchError(_))));
        assert_eq!(fs::read_to_string(&project_file).unwrap(), "no anchor here\n");
    }

    #[test]
    fn test_patch_missing_project_file_is_validation_error() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp.path().join("absent.pbxproj"), vec!["New.swift"]);

        let result = cmd.run();
        assert!(matches!(result, Err(XcgenError::ValidationError(_))));
    }
}
