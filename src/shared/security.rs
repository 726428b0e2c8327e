use crate::shared::error::HarvestError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum config file size (1 MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Validates a single upstream-provided path component (os, architecture, version).
///
/// # Security
/// These values come straight from the release feed and are joined into the
/// storage path, so they must not be able to climb out of the `sboms/` tree.
///
/// # Errors
/// Returns an error if the component is empty, is `.` or `..`, or contains
/// a path separator or NUL byte
pub fn validate_path_component(component: &str, component_type: &str) -> Result<()> {
    if component.is_empty() {
        return Err(HarvestError::Validation {
            message: format!("{} must not be empty", component_type),
        }
        .into());
    }

    if component == "." || component == ".." {
        return Err(HarvestError::Validation {
            message: format!(
                "Security: {} {:?} is a relative path reference",
                component_type, component
            ),
        }
        .into());
    }

    if component.contains(['/', '\\', '\0']) {
        return Err(HarvestError::Validation {
            message: format!(
                "Security: {} {:?} contains path separators which are not allowed",
                component_type, component
            ),
        }
        .into());
    }

    Ok(())
}

/// Validates that an existing path is not a symbolic link.
///
/// A path that does not exist yet passes; it will be created as a regular file.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn validate_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    Ok(())
}
