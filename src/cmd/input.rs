//! Build output input handling
//!
//! Reads the `next build` output from a file or stdin.

use crate::error::BuildParserError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::Result;
use std::io::Read;
use std::path::Path;

/// Text of a build report and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInput {
    /// Full report text
    pub text: String,
    /// File path or "stdin"
    pub source_name: String,
}

/// Read build output from `file`, or from stdin when it is `None` or `-`
pub fn read_input(file: Option<&str>) -> Result<BuildInput> {
    read_input_with(file, &RealFileSystem, std::io::stdin().lock())
}

/// Read build output with injectable filesystem and stdin
pub fn read_input_with<FS: FileSystem, R: Read>(
    file: Option<&str>,
    fs: &FS,
    mut stdin: R,
) -> Result<BuildInput> {
    match file {
        None | Some("-") => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .map_err(|source| BuildParserError::Io {
                    context: "stdin".to_string(),
                    source,
                })?;
            log::debug!("Read {} bytes from stdin", text.len());
            Ok(BuildInput {
                text,
                source_name: "stdin".to_string(),
            })
        }
        Some(path) => {
            let path = Path::new(path);
            let text = fs.read_to_string(path).map_err(|source| {
                if source.kind() == std::io::ErrorKind::NotFound {
                    BuildParserError::InputNotFound {
                        path: path.to_path_buf(),
                    }
                } else {
                    BuildParserError::Io {
                        context: path.display().to_string(),
                        source,
                    }
                }
            })?;
            log::debug!("Read {} bytes from {}", text.len(), path.display());
            Ok(BuildInput {
                text,
                source_name: path.display().to_string(),
            })
        }
    }
}
