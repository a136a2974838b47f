use regex::Regex;

use crate::models::ObjectId;
use crate::utils::error::{Result, XcgenError};

/// Literal anchor the generator always emits in the main group's children
/// list, independent of the identifiers minted for a particular run.
pub const DEFAULT_ANCHOR: &str = "/* Info.plist */,";

/// Render one group-children entry for an added file.
pub fn group_child_line(id: &ObjectId, file_name: &str) -> String {
    format!("\t\t\t\t{} /* {} */,\n", id, file_name)
}

/// Result of a successful patch: the rewritten content and the number of
/// anchor lines the block was inserted after.
#[derive(Debug, Clone)]
pub struct Patched {
    pub content: String,
    pub insertions: usize,
}

/// Insert `block` immediately after every line containing the literal
/// `anchor`. Zero matches is an error, never a silent success: a missing
/// anchor means the pattern has drifted from the file contents, and masking
/// that would leave the caller believing the entries were added.
pub fn insert_after_anchor(content: &str, anchor: &str, block: &str) -> Result<Patched> {
    let pattern = format!("(?m)^.*{}.*\n", regex::escape(anchor));
    let re = Regex::new(&pattern)
        .map_err(|e| XcgenError::PatchError(format!("invalid anchor '{}': {}", anchor, e)))?;

    let insertions = re.find_iter(content).count();
    if insertions == 0 {
        return Err(XcgenError::PatchError(format!(
            "anchor '{}' not found in project file",
            anchor
        )));
    }

    let patched = re.replace_all(content, |caps: &regex::Captures| {
        format!("{}{}", &caps[0], block)
    });

    Ok(Patched {
        content: patched.into_owned(),
        insertions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = "\t\t\t\tAAAA /* App.swift */,\n\
\t\t\t\tBBBB /* Info.plist */,\n\
\t\t\t);\n";

    #[test]
    fn test_insert_after_anchor_places_block_after_anchor_line() {
        let block = "\t\t\t\tCCCC /* New.swift */,\n";
        let patched = insert_after_anchor(DESCRIPTOR, DEFAULT_ANCHOR, block).unwrap();

        assert_eq!(patched.insertions, 1);
        assert_eq!(
            patched.content,
            "\t\t\t\tAAAA /* App.swift */,\n\
\t\t\t\tBBBB /* Info.plist */,\n\
\t\t\t\tCCCC /* New.swift */,\n\
\t\t\t);\n"
        );
    }

    #[test]
    fn test_insert_leaves_other_bytes_unchanged() {
        let block = "\t\t\t\tCCCC /* New.swift */,\n";
        let patched = insert_after_anchor(DESCRIPTOR, DEFAULT_ANCHOR, block).unwrap().content;

        let anchor_line = "\t\t\t\tBBBB /* Info.plist */,\n";
        let anchor_end = DESCRIPTOR.find(anchor_line).unwrap() + anchor_line.len();
        assert_eq!(&patched[..anchor_end], &DESCRIPTOR[..anchor_end]);
        assert_eq!(&patched[anchor_end + block.len()..], &DESCRIPTOR[anchor_end..]);
    }

    #[test]
    fn test_missing_anchor_is_an_error() {
        let result = insert_after_anchor(DESCRIPTOR, "/* Missing.plist */,", "inserted\n");
        match result {
            Err(XcgenError::PatchError(msg)) => assert!(msg.contains("not found")),
            other => panic!("expected PatchError, got {:?}", other),
        }
    }

    #[test]
    fn test_anchor_with_regex_metacharacters_is_literal() {
        // The anchor contains '*' and '/'; both must match literally
        let patched = insert_after_anchor(DESCRIPTOR, "/* App.swift */,", "X\n").unwrap();
        assert!(patched.content.starts_with("\t\t\t\tAAAA /* App.swift */,\nX\n"));
    }

    #[test]
    fn test_every_anchor_occurrence_is_patched() {
        let content = "one /* Info.plist */,\ntwo /* Info.plist */,\n";
        let patched = insert_after_anchor(content, DEFAULT_ANCHOR, "X\n").unwrap();
        assert_eq!(patched.insertions, 2);
        assert_eq!(patched.content, "one /* Info.plist */,\nX\ntwo /* Info.plist */,\nX\n");
    }

    #[test]
    fn test_group_child_line_shape() {
        let id = ObjectId::mint();
        let line = group_child_line(&id, "RegulatoryBadgeView.swift");
        assert_eq!(
            line,
            format!("\t\t\t\t{} /* RegulatoryBadgeView.swift */,\n", id)
        );
    }
}
