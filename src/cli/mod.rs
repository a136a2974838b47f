// CLI module for command-line interface

pub mod generate;
pub mod patch;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::services::patcher::DEFAULT_ANCHOR;
use crate::utils::error::Result;

use self::generate::GenerateCommand;
use self::patch::PatchCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "xcgen")]
#[command(about = "Generate and patch Xcode project files for iOS applications")]
#[command(long_about = r#"xcgen renders a complete Xcode project descriptor (project.pbxproj) and a
shared run scheme from a directory of source files, and can later insert new
file entries into a descriptor it generated.

Features:
  • Deterministic source discovery (lexicographic order)
  • Fresh 24-character object identifiers minted per run
  • Companion .xcscheme referencing the generated native target
  • Anchor-based descriptor patching that fails loudly when the anchor
    is missing

Examples:
  xcgen generate --name MyApp           Generate MyApp.xcodeproj from ./MyApp
  xcgen generate --bundle-id com.acme.app --source-dir Sources
  xcgen patch --add NewView.swift       Insert an entry after the Info.plist line
  xcgen patch MyApp.xcodeproj/project.pbxproj --add A.swift --add B.swift"#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a project descriptor and scheme from a source tree
    #[command(long_about = r#"Generate a fresh Xcode project descriptor and shared scheme.

Scans the source directory recursively for files with the given extension,
mints an identifier pair per file plus the fixed set of structural
identifiers, and writes:
  • <output>/<name>.xcodeproj/project.pbxproj
  • <output>/<name>.xcodeproj/xcshareddata/xcschemes/<name>.xcscheme

Existing files at those paths are overwritten. Every run mints fresh
identifiers, so re-running changes every identifier even when the source
tree is unchanged.

Examples:
  xcgen generate                        Use the current directory name
  xcgen generate --name MyApp --bundle-id com.acme.myapp
  xcgen generate --source-dir Sources --extension swift
  xcgen generate --output build --json"#)]
    Generate {
        /// Project name (default: current directory name)
        #[arg(long)]
        name: Option<String>,

        /// Bundle identifier (default: "com.example.<name>")
        #[arg(long)]
        bundle_id: Option<String>,

        /// Directory scanned for source files (default: "./<name>")
        #[arg(long)]
        source_dir: Option<PathBuf>,

        /// Source file extension to include, without the dot
        #[arg(long, default_value = "swift")]
        extension: String,

        /// Directory the .xcodeproj bundle is written into
        #[arg(long, default_value = ".")]
        output: PathBuf,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Insert file entries into an existing project descriptor
    #[command(long_about = r#"Insert group-children entries into an existing project.pbxproj.

Reads the descriptor, locates every line containing the literal anchor text,
and inserts one entry per --add file immediately after each of them. Each
entry carries a freshly minted identifier.

A missing anchor is an error: the file is left untouched and the command
exits non-zero instead of silently reporting success.

Examples:
  xcgen patch --add NewView.swift                 Use the default descriptor path
  xcgen patch App.xcodeproj/project.pbxproj --add A.swift --add B.swift
  xcgen patch --anchor "/* App.swift */," --add Helper.swift
  xcgen patch --add Data.json --json"#)]
    Patch {
        /// Path to the project.pbxproj to modify
        /// (default: "<dir>.xcodeproj/project.pbxproj" for the current directory)
        project_file: Option<PathBuf>,

        /// File name to insert into the source group (repeatable)
        #[arg(long = "add", value_name = "FILE", required = true)]
        add: Vec<String>,

        /// Literal anchor text locating the insertion point
        #[arg(long, default_value = DEFAULT_ANCHOR)]
        anchor: String,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::Generate {
                name,
                bundle_id,
                source_dir,
                extension,
                output,
                json,
            } => {
                let cmd = GenerateCommand {
                    name,
                    bundle_id,
                    source_dir,
                    extension,
                    output,
                    json,
                };
                cmd.run()
            }

            Commands::Patch {
                project_file,
                add,
                anchor,
                json,
            } => {
                let cmd = PatchCommand {
                    project_file,
                    add,
                    anchor,
                    json,
                };
                cmd.run()
            }
        }
    }
}
