// Project descriptor rendering.
//
// The descriptor is assembled once per run by straight string interpolation:
// per-file lines for the build-file, file-reference, group, and sources
// sections, and fixed blocks for everything else. All cross-references use
// identifiers minted by the caller, so every reference resolves to a
// definition emitted in the same output.

use crate::models::{FileEntry, ProjectIds, ProjectSpec};

/// Xcode's `lastKnownFileType` for a source extension.
fn last_known_file_type(extension: &str) -> String {
    match extension {
        "swift" => "sourcecode.swift".to_string(),
        "m" => "sourcecode.c.objc".to_string(),
        "c" => "sourcecode.c.c".to_string(),
        "cpp" | "cc" => "sourcecode.cpp.cpp".to_string(),
        other => format!("sourcecode.{}", other),
    }
}

const PROJECT_DEBUG_SETTINGS: &str = "\
\t\t\t\tALWAYS_SEARCH_USER_PATHS = NO;
\t\t\t\tCLANG_ANALYZER_NONNULL = YES;
\t\t\t\tCLANG_ANALYZER_NUMBER_OBJECT_CONVERSION = YES_AGGRESSIVE;
\t\t\t\tCLANG_CXX_LANGUAGE_STANDARD = \"gnu++20\";
\t\t\t\tCLANG_ENABLE_MODULES = YES;
\t\t\t\tCLANG_ENABLE_OBJC_ARC = YES;
\t\t\t\tCLANG_ENABLE_OBJC_WEAK = YES;
\t\t\t\tCLANG_WARN_BLOCK_CAPTURE_AUTORELEASING = YES;
\t\t\t\tCLANG_WARN_BOOL_CONVERSION = YES;
\t\t\t\tCLANG_WARN_COMMA = YES;
\t\t\t\tCLANG_WARN_CONSTANT_CONVERSION = YES;
\t\t\t\tCLANG_WARN_DEPRECATED_OBJC_IMPLEMENTATIONS = YES;
\t\t\t\tCLANG_WARN_DIRECT_OBJC_ISA_USAGE = YES_ERROR;
\t\t\t\tCLANG_WARN_DOCUMENTATION_COMMENTS = YES;
\t\t\t\tCLANG_WARN_EMPTY_BODY = YES;
\t\t\t\tCLANG_WARN_ENUM_CONVERSION = YES;
\t\t\t\tCLANG_WARN_INFINITE_RECURSION = YES;
\t\t\t\tCLANG_WARN_INT_CONVERSION = YES;
\t\t\t\tCLANG_WARN_NON_LITERAL_NULL_CONVERSION = YES;
\t\t\t\tCLANG_WARN_OBJC_IMPLICIT_RETAIN_SELF = YES;
\t\t\t\tCLANG_WARN_OBJC_LITERAL_CONVERSION = YES;
\t\t\t\tCLANG_WARN_OBJC_ROOT_CLASS = YES_ERROR;
\t\t\t\tCLANG_WARN_QUOTED_INCLUDE_IN_FRAMEWORK_HEADER = YES;
\t\t\t\tCLANG_WARN_RANGE_LOOP_ANALYSIS = YES;
\t\t\t\tCLANG_WARN_STRICT_PROTOTYPES = YES;
\t\t\t\tCLANG_WARN_SUSPICIOUS_MOVE = YES;
\t\t\t\tCLANG_WARN_UNGUARDED_AVAILABILITY = YES_AGGRESSIVE;
\t\t\t\tCLANG_WARN_UNREACHABLE_CODE = YES;
\t\t\t\tCLANG_WARN__DUPLICATE_METHOD_MATCH = YES;
\t\t\t\tCOPY_PHASE_STRIP = NO;
\t\t\t\tDEBUG_INFORMATION_FORMAT = dwarf;
\t\t\t\tENABLE_STRICT_OBJC_MSGSEND = YES;
\t\t\t\tENABLE_TESTABILITY = YES;
\t\t\t\tENABLE_USER_SCRIPT_SANDBOXING = YES;
\t\t\t\tGCC_C_LANGUAGE_STANDARD = gnu17;
\t\t\t\tGCC_DYNAMIC_NO_PIC = NO;
\t\t\t\tGCC_NO_COMMON_BLOCKS = YES;
\t\t\t\tGCC_OPTIMIZATION_LEVEL = 0;
\t\t\t\tGCC_PREPROCESSOR_DEFINITIONS = (
\t\t\t\t\t\"DEBUG=1\",
\t\t\t\t\t\"$(inherited)\",
\t\t\t\t);
\t\t\t\tGCC_WARN_64_TO_32_BIT_CONVERSION = YES;
\t\t\t\tGCC_WARN_ABOUT_RETURN_TYPE = YES_ERROR;
\t\t\t\tGCC_WARN_UNDECLARED_SELECTOR = YES;
\t\t\t\tGCC_WARN_UNINITIALIZED_AUTOS = YES_AGGRESSIVE;
\t\t\t\tGCC_WARN_UNUSED_FUNCTION = YES;
\t\t\t\tGCC_WARN_UNUSED_VARIABLE = YES;
\t\t\t\tIPHONEOS_DEPLOYMENT_TARGET = 16.0;
\t\t\t\tMTL_ENABLE_DEBUG_INFO = INCLUDE_SOURCE;
\t\t\t\tMTL_FAST_MATH = YES;
\t\t\t\tONLY_ACTIVE_ARCH = YES;
\t\t\t\tSDKROOT = iphoneos;
\t\t\t\tSWIFT_ACTIVE_COMPILATION_CONDITIONS = \"DEBUG $(inherited)\";
\t\t\t\tSWIFT_OPTIMIZATION_LEVEL = \"-Onone\";
";

const PROJECT_RELEASE_SETTINGS: &str = "\
\t\t\t\tALWAYS_SEARCH_USER_PATHS = NO;
\t\t\t\tCLANG_ANALYZER_NONNULL = YES;
\t\t\t\tCLANG_ANALYZER_NUMBER_OBJECT_CONVERSION = YES_AGGRESSIVE;
\t\t\t\tCLANG_CXX_LANGUAGE_STANDARD = \"gnu++20\";
\t\t\t\tCLANG_ENABLE_MODULES = YES;
\t\t\t\tCLANG_ENABLE_OBJC_ARC = YES;
\t\t\t\tCLANG_ENABLE_OBJC_WEAK = YES;
\t\t\t\tCLANG_WARN_BLOCK_CAPTURE_AUTORELEASING = YES;
\t\t\t\tCLANG_WARN_BOOL_CONVERSION = YES;
\t\t\t\tCLANG_WARN_COMMA = YES;
\t\t\t\tCLANG_WARN_CONSTANT_CONVERSION = YES;
\t\t\t\tCLANG_WARN_DEPRECATED_OBJC_IMPLEMENTATIONS = YES;
\t\t\t\tCLANG_WARN_DIRECT_OBJC_ISA_USAGE = YES_ERROR;
\t\t\t\tCLANG_WARN_DOCUMENTATION_COMMENTS = YES;
\t\t\t\tCLANG_WARN_EMPTY_BODY = YES;
\t\t\t\tCLANG_WARN_ENUM_CONVERSION = YES;
\t\t\t\tCLANG_WARN_INFINITE_RECURSION = YES;
\t\t\t\tCLANG_WARN_INT_CONVERSION = YES;
\t\t\t\tCLANG_WARN_NON_LITERAL_NULL_CONVERSION = YES;
\t\t\t\tCLANG_WARN_OBJC_IMPLICIT_RETAIN_SELF = YES;
\t\t\t\tCLANG_WARN_OBJC_LITERAL_CONVERSION = YES;
\t\t\t\tCLANG_WARN_OBJC_ROOT_CLASS = YES_ERROR;
\t\t\t\tCLANG_WARN_QUOTED_INCLUDE_IN_FRAMEWORK_HEADER = YES;
\t\t\t\tCLANG_WARN_RANGE_LOOP_ANALYSIS = YES;
\t\t\t\tCLANG_WARN_STRICT_PROTOTYPES = YES;
\t\t\t\tCLANG_WARN_SUSPICIOUS_MOVE = YES;
\t\t\t\tCLANG_WARN_UNGUARDED_AVAILABILITY = YES_AGGRESSIVE;
\t\t\t\tCLANG_WARN_UNREACHABLE_CODE = YES;
\t\t\t\tCLANG_WARN__DUPLICATE_METHOD_MATCH = YES;
\t\t\t\tCOPY_PHASE_STRIP = NO;
\t\t\t\tDEBUG_INFORMATION_FORMAT = \"dwarf-with-dsym\";
\t\t\t\tENABLE_NS_ASSERTIONS = NO;
\t\t\t\tENABLE_STRICT_OBJC_MSGSEND = YES;
\t\t\t\tENABLE_USER_SCRIPT_SANDBOXING = YES;
\t\t\t\tGCC_C_LANGUAGE_STANDARD = gnu17;
\t\t\t\tGCC_NO_COMMON_BLOCKS = YES;
\t\t\t\tGCC_WARN_64_TO_32_BIT_CONVERSION = YES;
\t\t\t\tGCC_WARN_ABOUT_RETURN_TYPE = YES_ERROR;
\t\t\t\tGCC_WARN_UNDECLARED_SELECTOR = YES;
\t\t\t\tGCC_WARN_UNINITIALIZED_AUTOS = YES_AGGRESSIVE;
\t\t\t\tGCC_WARN_UNUSED_FUNCTION = YES;
\t\t\t\tGCC_WARN_UNUSED_VARIABLE = YES;
\t\t\t\tIPHONEOS_DEPLOYMENT_TARGET = 16.0;
\t\t\t\tMTL_ENABLE_DEBUG_INFO = NO;
\t\t\t\tMTL_FAST_MATH = YES;
\t\t\t\tSDKROOT = iphoneos;
\t\t\t\tSWIFT_COMPILATION_MODE = wholemodule;
\t\t\t\tVALIDATE_PRODUCT = YES;
";

/// Target-level build settings. Identical for Debug and Release; only the
/// bundle identifier and the Info.plist location vary per project.
fn target_build_settings(spec: &ProjectSpec) -> String {
    format!(
        "\
\t\t\t\tASSETCATALOG_COMPILER_APPICON_NAME = AppIcon;
\t\t\t\tASSETCATALOG_COMPILER_GLOBAL_ACCENT_COLOR_NAME = AccentColor;
\t\t\t\tCODE_SIGN_STYLE = Automatic;
\t\t\t\tCURRENT_PROJECT_VERSION = 1;
\t\t\t\tDEVELOPMENT_ASSET_PATHS = \"\";
\t\t\t\tDEVELOPMENT_TEAM = \"\";
\t\t\t\tENABLE_PREVIEWS = YES;
\t\t\t\tGENERATE_INFOPLIST_FILE = NO;
\t\t\t\tINFOPLIST_FILE = {source_root}/Resources/Info.plist;
\t\t\t\tINFOPLIST_KEY_UIApplicationSceneManifest_Generation = YES;
\t\t\t\tINFOPLIST_KEY_UIApplicationSupportsIndirectInputEvents = YES;
\t\t\t\tINFOPLIST_KEY_UILaunchScreen_Generation = YES;
\t\t\t\tINFOPLIST_KEY_UISupportedInterfaceOrientations = \"UIInterfaceOrientationPortrait UIInterfaceOrientationLandscapeLeft UIInterfaceOrientationLandscapeRight\";
\t\t\t\tINFOPLIST_KEY_UISupportedInterfaceOrientations_iPad = \"UIInterfaceOrientationPortrait UIInterfaceOrientationPortraitUpsideDown UIInterfaceOrientationLandscapeLeft UIInterfaceOrientationLandscapeRight\";
\t\t\t\tIPHONEOS_DEPLOYMENT_TARGET = 16.0;
\t\t\t\tLD_RUNPATH_SEARCH_PATHS = (
\t\t\t\t\t\"$(inherited)\",
\t\t\t\t\t\"@executable_path/Frameworks\",
\t\t\t\t);
\t\t\t\tMARKETING_VERSION = 1.0.0;
\t\t\t\tPRODUCT_BUNDLE_IDENTIFIER = {bundle_id};
\t\t\t\tPRODUCT_NAME = \"$(TARGET_NAME)\";
\t\t\t\tSWIFT_EMIT_LOC_STRINGS = YES;
\t\t\t\tSWIFT_VERSION = 5.0;
\t\t\t\tTARGETED_DEVICE_FAMILY = \"1,2\";
",
        source_root = spec.source_root,
        bundle_id = spec.bundle_id,
    )
}

/// Render the complete project descriptor for one generation run.
pub fn render_pbxproj(spec: &ProjectSpec, ids: &ProjectIds, entries: &[FileEntry]) -> String {
    let name = &spec.name;
    let file_type = last_known_file_type(&spec.extension);
    let mut out = String::new();

    out.push_str(
        "// !$*UTF8*$!\n{\n\tarchiveVersion = 1;\n\tclasses = {\n\t};\n\tobjectVersion = 56;\n\tobjects = {\n\n",
    );

    // PBXBuildFile
    out.push_str("/* Begin PBXBuildFile section */\n");
    for e in entries {
        out.push_str(&format!(
            "\t\t{} /* {} in Sources */ = {{isa = PBXBuildFile; fileRef = {} /* {} */; }};\n",
            e.build_file, e.source.name, e.file_ref, e.source.name
        ));
    }
    out.push_str("/* End PBXBuildFile section */\n\n");

    // PBXFileReference
    out.push_str("/* Begin PBXFileReference section */\n");
    for e in entries {
        out.push_str(&format!(
            "\t\t{} /* {} */ = {{isa = PBXFileReference; fileEncoding = 4; lastKnownFileType = {}; path = \"{}\"; sourceTree = \"<group>\"; }};\n",
            e.file_ref, e.source.name, file_type, e.source.relative
        ));
    }
    out.push_str(&format!(
        "\t\t{} /* Info.plist */ = {{isa = PBXFileReference; fileEncoding = 4; lastKnownFileType = text.plist.xml; path = Resources/Info.plist; sourceTree = \"<group>\"; }};\n",
        ids.info_plist
    ));
    out.push_str(&format!(
        "\t\t{} /* {name}.app */ = {{isa = PBXFileReference; explicitFileType = wrapper.application; includeInIndex = 0; path = {name}.app; sourceTree = BUILT_PRODUCTS_DIR; }};\n",
        ids.product_ref
    ));
    out.push_str("/* End PBXFileReference section */\n\n");

    // PBXFrameworksBuildPhase
    out.push_str(&format!(
        "/* Begin PBXFrameworksBuildPhase section */\n\
\t\t{} /* Frameworks */ = {{\n\
\t\t\tisa = PBXFrameworksBuildPhase;\n\
\t\t\tbuildActionMask = 2147483647;\n\
\t\t\tfiles = (\n\
\t\t\t);\n\
\t\t\trunOnlyForDeploymentPostprocessing = 0;\n\
\t\t}};\n\
/* End PBXFrameworksBuildPhase section */\n\n",
        ids.frameworks_phase
    ));

    // PBXGroup
    out.push_str("/* Begin PBXGroup section */\n");
    out.push_str(&format!(
        "\t\t{} = {{\n\
\t\t\tisa = PBXGroup;\n\
\t\t\tchildren = (\n\
\t\t\t\t{} /* {name} */,\n\
\t\t\t\t{} /* Products */,\n\
\t\t\t);\n\
\t\t\tsourceTree = \"<group>\";\n\
\t\t}};\n",
        ids.main_group, ids.source_group, ids.products_group
    ));
    out.push_str(&format!(
        "\t\t{} /* Products */ = {{\n\
\t\t\tisa = PBXGroup;\n\
\t\t\tchildren = (\n\
\t\t\t\t{} /* {name}.app */,\n\
\t\t\t);\n\
\t\t\tname = Products;\n\
\t\t\tsourceTree = \"<group>\";\n\
\t\t}};\n",
        ids.products_group, ids.product_ref
    ));
    out.push_str(&format!(
        "\t\t{} /* {name} */ = {{\n\t\t\tisa = PBXGroup;\n\t\t\tchildren = (\n",
        ids.source_group
    ));
    for e in entries {
        out.push_str(&format!("\t\t\t\t{} /* {} */,\n", e.file_ref, e.source.name));
    }
    out.push_str(&format!("\t\t\t\t{} /* Info.plist */,\n", ids.info_plist));
    out.push_str(&format!(
        "\t\t\t);\n\t\t\tpath = {};\n\t\t\tsourceTree = \"<group>\";\n\t\t}};\n",
        spec.source_root
    ));
    out.push_str("/* End PBXGroup section */\n\n");

    // PBXNativeTarget
    out.push_str(&format!(
        "/* Begin PBXNativeTarget section */\n\
\t\t{target} /* {name} */ = {{\n\
\t\t\tisa = PBXNativeTarget;\n\
\t\t\tbuildConfigurationList = {config_list} /* Build configuration list for PBXNativeTarget \"{name}\" */;\n\
\t\t\tbuildPhases = (\n\
\t\t\t\t{sources} /* Sources */,\n\
\t\t\t\t{frameworks} /* Frameworks */,\n\
\t\t\t\t{resources} /* Resources */,\n\
\t\t\t);\n\
\t\t\tbuildRules = (\n\
\t\t\t);\n\
\t\t\tdependencies = (\n\
\t\t\t);\n\
\t\t\tname = {name};\n\
\t\t\tproductName = {name};\n\
\t\t\tproductReference = {product} /* {name}.app */;\n\
\t\t\tproductType = \"com.apple.product-type.application\";\n\
\t\t}};\n\
/* End PBXNativeTarget section */\n\n",
        target = ids.target,
        config_list = ids.target_config_list,
        sources = ids.sources_phase,
        frameworks = ids.frameworks_phase,
        resources = ids.resources_phase,
        product = ids.product_ref,
    ));

    // PBXProject
    out.push_str(&format!(
        "/* Begin PBXProject section */\n\
\t\t{project} /* Project object */ = {{\n\
\t\t\tisa = PBXProject;\n\
\t\t\tattributes = {{\n\
\t\t\t\tBuildIndependentTargetsInParallel = 1;\n\
\t\t\t\tLastSwiftUpdateCheck = 1500;\n\
\t\t\t\tLastUpgradeCheck = 1500;\n\
\t\t\t\tTargetAttributes = {{\n\
\t\t\t\t\t{target} = {{\n\
\t\t\t\t\t\tCreatedOnToolsVersion = 15.0;\n\
\t\t\t\t\t}};\n\
\t\t\t\t}};\n\
\t\t\t}};\n\
\t\t\tbuildConfigurationList = {config_list} /* Build configuration list for PBXProject \"{name}\" */;\n\
\t\t\tcompatibilityVersion = \"Xcode 14.0\";\n\
\t\t\tdevelopmentRegion = en;\n\
\t\t\thasScannedForEncodings = 0;\n\
\t\t\tknownRegions = (\n\
\t\t\t\ten,\n\
\t\t\t\tBase,\n\
\t\t\t);\n\
\t\t\tmainGroup = {main_group};\n\
\t\t\tproductRefGroup = {products_group} /* Products */;\n\
\t\t\tprojectDirPath = \"\";\n\
\t\t\tprojectRoot = \"\";\n\
\t\t\ttargets = (\n\
\t\t\t\t{target} /* {name} */,\n\
\t\t\t);\n\
\t\t}};\n\
/* End PBXProject section */\n\n",
        project = ids.project,
        target = ids.target,
        config_list = ids.project_config_list,
        main_group = ids.main_group,
        products_group = ids.products_group,
    ));

    // PBXResourcesBuildPhase
    out.push_str(&format!(
        "/* Begin PBXResourcesBuildPhase section */\n\
\t\t{} /* Resources */ = {{\n\
\t\t\tisa = PBXResourcesBuildPhase;\n\
\t\t\tbuildActionMask = 2147483647;\n\
\t\t\tfiles = (\n\
\t\t\t);\n\
\t\t\trunOnlyForDeploymentPostprocessing = 0;\n\
\t\t}};\n\
/* End PBXResourcesBuildPhase section */\n\n",
        ids.resources_phase
    ));

    // PBXSourcesBuildPhase
    out.push_str(&format!(
        "/* Begin PBXSourcesBuildPhase section */\n\
\t\t{} /* Sources */ = {{\n\
\t\t\tisa = PBXSourcesBuildPhase;\n\
\t\t\tbuildActionMask = 2147483647;\n\
\t\t\tfiles = (\n",
        ids.sources_phase
    ));
    for e in entries {
        out.push_str(&format!(
            "\t\t\t\t{} /* {} in Sources */,\n",
            e.build_file, e.source.name
        ));
    }
    out.push_str(
        "\t\t\t);\n\
\t\t\trunOnlyForDeploymentPostprocessing = 0;\n\
\t\t};\n\
/* End PBXSourcesBuildPhase section */\n\n",
    );

    // XCBuildConfiguration
    let target_settings = target_build_settings(spec);
    out.push_str("/* Begin XCBuildConfiguration section */\n");
    for (id, config_name, settings) in [
        (&ids.project_debug_config, "Debug", PROJECT_DEBUG_SETTINGS),
        (&ids.project_release_config, "Release", PROJECT_RELEASE_SETTINGS),
        (&ids.target_debug_config, "Debug", target_settings.as_str()),
        (&ids.target_release_config, "Release", target_settings.as_str()),
    ] {
        out.push_str(&format!(
            "\t\t{id} /* {config_name} */ = {{\n\
\t\t\tisa = XCBuildConfiguration;\n\
\t\t\tbuildSettings = {{\n\
{settings}\
\t\t\t}};\n\
\t\t\tname = {config_name};\n\
\t\t}};\n",
        ));
    }
    out.push_str("/* End XCBuildConfiguration section */\n\n");

    // XCConfigurationList
    out.push_str(&format!(
        "/* Begin XCConfigurationList section */\n\
\t\t{project_list} /* Build configuration list for PBXProject \"{name}\" */ = {{\n\
\t\t\tisa = XCConfigurationList;\n\
\t\t\tbuildConfigurations = (\n\
\t\t\t\t{project_debug} /* Debug */,\n\
\t\t\t\t{project_release} /* Release */,\n\
\t\t\t);\n\
\t\t\tdefaultConfigurationIsVisible = 0;\n\
\t\t\tdefaultConfigurationName = Release;\n\
\t\t}};\n\
\t\t{target_list} /* Build configuration list for PBXNativeTarget \"{name}\" */ = {{\n\
\t\t\tisa = XCConfigurationList;\n\
\t\t\tbuildConfigurations = (\n\
\t\t\t\t{target_debug} /* Debug */,\n\
\t\t\t\t{target_release} /* Release */,\n\
\t\t\t);\n\
\t\t\tdefaultConfigurationIsVisible = 0;\n\
\t\t\tdefaultConfigurationName = Release;\n\
\t\t}};\n\
/* End XCConfigurationList section */\n",
        project_list = ids.project_config_list,
        project_debug = ids.project_debug_config,
        project_release = ids.project_release_config,
        target_list = ids.target_config_list,
        target_debug = ids.target_debug_config,
        target_release = ids.target_release_config,
    ));

    out.push_str(&format!(
        "\t}};\n\trootObject = {} /* Project object */;\n}}\n",
        ids.project
    ));

    out
}
