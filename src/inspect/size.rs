//! 检查点磁盘占用统计

use std::fs;
use std::path::Path;

use crate::metadata::{CHECKPOINT_DIRECTORY, ROOTFS_DIFF_TAR};
use crate::utils::{CpviewError, Result};

/// Fresh per inspection; never cached.
#[derive(Debug, Clone, Copy)]
pub struct CheckpointSizeMetrics {
    /// Bytes under the `checkpoint/` subtree only.
    pub total_size: u64,
    /// Present only when `rootfs-diff.tar` exists with non-zero size.
    pub rootfs_diff_size: Option<u64>,
}

pub fn collect(dir: &Path) -> Result<CheckpointSizeMetrics> {
    Ok(CheckpointSizeMetrics {
        total_size: dir_size(&dir.join(CHECKPOINT_DIRECTORY))?,
        rootfs_diff_size: rootfs_diff_size(dir),
    })
}

/// Depth-first byte sum of every non-directory entry. Symlinks count with
/// their own lstat size, hardlinks are not deduplicated. Any traversal
/// failure discards the partial sum.
pub fn dir_size(path: &Path) -> Result<u64> {
    let mut size = 0u64;

    let entries = fs::read_dir(path)
        .map_err(|e| CpviewError::Traversal(format!("{}: {}", path.display(), e)))?;

    for entry in entries {
        let entry = entry.map_err(|e| CpviewError::Traversal(format!("{}: {}", path.display(), e)))?;
        let meta = entry
            .metadata()
            .map_err(|e| CpviewError::Traversal(format!("{}: {}", entry.path().display(), e)))?;

        if meta.is_dir() {
            size += dir_size(&entry.path())?;
        } else {
            size += meta.len();
        }
    }

    Ok(size)
}

fn rootfs_diff_size(dir: &Path) -> Option<u64> {
    fs::symlink_metadata(dir.join(ROOTFS_DIFF_TAR))
        .ok()
        .map(|m| m.len())
        .filter(|len| *len > 0)
}
