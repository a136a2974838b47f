use crate::models::object_id::ObjectId;
use crate::utils::error::{Result, XcgenError};

/// Project-level parameters interpolated into the descriptor and scheme.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    /// Target and product name, e.g. "IngredientCheck"
    pub name: String,
    /// Bundle identifier, e.g. "com.example.ingredient-check"
    pub bundle_id: String,
    /// Group path of the scanned source root, relative to the project dir
    pub source_root: String,
    /// Extension of the discovered source files, without the dot
    pub extension: String,
}

/// The fixed set of structural identifiers minted once per generation run.
/// Every cross-reference in the rendered descriptor resolves to one of
/// these or to a per-file identifier.
#[derive(Debug, Clone)]
pub struct ProjectIds {
    pub project: ObjectId,
    pub main_group: ObjectId,
    pub source_group: ObjectId,
    pub products_group: ObjectId,
    pub target: ObjectId,
    pub sources_phase: ObjectId,
    pub frameworks_phase: ObjectId,
    pub resources_phase: ObjectId,
    pub project_config_list: ObjectId,
    pub target_config_list: ObjectId,
    pub project_debug_config: ObjectId,
    pub project_release_config: ObjectId,
    pub target_debug_config: ObjectId,
    pub target_release_config: ObjectId,
    pub product_ref: ObjectId,
    pub info_plist: ObjectId,
}

impl ProjectIds {
    /// Mint the full structural identifier set for one run.
    pub fn mint() -> Self {
        Self {
            project: ObjectId::mint(),
            main_group: ObjectId::mint(),
            source_group: ObjectId::mint(),
            products_group: ObjectId::mint(),
            target: ObjectId::mint(),
            sources_phase: ObjectId::mint(),
            frameworks_phase: ObjectId::mint(),
            resources_phase: ObjectId::mint(),
            project_config_list: ObjectId::mint(),
            target_config_list: ObjectId::mint(),
            project_debug_config: ObjectId::mint(),
            project_release_config: ObjectId::mint(),
            target_debug_config: ObjectId::mint(),
            target_release_config: ObjectId::mint(),
            product_ref: ObjectId::mint(),
            info_plist: ObjectId::mint(),
        }
    }
}

/// Validate a project name: alphanumeric plus hyphens and underscores, not
/// starting or ending with either.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(XcgenError::ValidationError(
            "Invalid project name '' (must be valid identifier)".to_string(),
        ));
    }

    if !name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
        return Err(XcgenError::ValidationError(format!(
            "Invalid project name '{}' (must be valid identifier)",
            name
        )));
    }

    if name.starts_with('-') || name.starts_with('_') || name.ends_with('-') || name.ends_with('_') {
        return Err(XcgenError::ValidationError(format!(
            "Invalid project name '{}' (must be valid identifier)",
            name
        )));
    }

    Ok(())
}

/// Validate a bundle identifier: two or more dot-separated segments, each
/// starting with a letter and containing only letters, digits, and hyphens.
pub fn validate_bundle_id(bundle_id: &str) -> Result<()> {
    let segments: Vec<&str> = bundle_id.split('.').collect();

    let segment_ok = |s: &&str| {
        s.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    };

    if segments.len() < 2 || !segments.iter().all(segment_ok) {
        return Err(XcgenError::ValidationError(format!(
            "Invalid bundle identifier '{}' (must be reverse-DNS, e.g. com.example.app)",
            bundle_id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_validate_project_name_valid() {
        assert!(validate_project_name("MyApp").is_ok());
        assert!(validate_project_name("my-app").is_ok());
        assert!(validate_project_name("my_app").is_ok());
        assert!(validate_project_name("app123").is_ok());
    }

    #[test]
    fn test_validate_project_name_invalid() {
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("my app").is_err());
        assert!(validate_project_name("my.app").is_err());
        assert!(validate_project_name("-myapp").is_err());
        assert!(validate_project_name("myapp_").is_err());
    }

    #[test]
    fn test_validate_bundle_id_valid() {
        assert!(validate_bundle_id("com.example.app").is_ok());
        assert!(validate_bundle_id("com.o1o1intl.IngredientCheck").is_ok());
        assert!(validate_bundle_id("io.my-org.my-app").is_ok());
    }

    #[test]
    fn test_validate_bundle_id_invalid() {
        assert!(validate_bundle_id("").is_err());
        assert!(validate_bundle_id("app").is_err());
        assert!(validate_bundle_id("com..app").is_err());
        assert!(validate_bundle_id("com.1app").is_err());
        assert!(validate_bundle_id("com.my_app").is_err());
        assert!(validate_bundle_id(".com.app").is_err());
    }

    #[test]
    fn test_project_ids_mint_all_distinct() {
        let ids = ProjectIds::mint();
        let all = [
            &ids.project,
            &ids.main_group,
            &ids.source_group,
            &ids.products_group,
            &ids.target,
            &ids.sources_phase,
            &ids.frameworks_phase,
            &ids.resources_phase,
            &ids.project_config_list,
            &ids.target_config_list,
            &ids.project_debug_config,
            &ids.project_release_config,
            &ids.target_debug_config,
            &ids.target_release_config,
            &ids.product_ref,
            &ids.info_plist,
        ];
        let unique: HashSet<&str> = all.iter().map(|id| id.as_str()).collect();
        assert_eq!(unique.len(), all.len());
    }
}
