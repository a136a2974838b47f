use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::error::Result;

/// Paths of the artifacts written by one generation run.
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    pub project_dir: PathBuf,
    pub pbxproj_path: PathBuf,
    pub scheme_path: PathBuf,
}

/// Write the descriptor and scheme under `<output_root>/<name>.xcodeproj/`,
/// creating the directory structure if absent. Existing files at those paths
/// are overwritten without confirmation; re-running is idempotent in
/// structure but not in content, since every run mints fresh identifiers.
pub fn write_project(
    output_root: &Path,
    name: &str,
    pbxproj: &str,
    scheme: &str,
) -> Result<GeneratedProject> {
    let project_dir = output_root.join(format!("{}.xcodeproj", name));
    let schemes_dir = project_dir.join("xcshareddata").join("xcschemes");
    fs::create_dir_all(&schemes_dir)?;

    let pbxproj_path = project_dir.join("project.pbxproj");
    fs::write(&pbxproj_path, pbxproj)?;

    let scheme_path = schemes_dir.join(format!("{}.xcscheme", name));
    fs::write(&scheme_path, scheme)?;

    Ok(GeneratedProject {
        project_dir,
        pbxproj_path,
        scheme_path,
    })
}
