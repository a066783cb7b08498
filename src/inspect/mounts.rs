//! 挂载概览

use crate::metadata::Mount;

/// One (destination, type, source) display triple per mount, spec order
/// preserved. Shortened sources are display-only and lossy.
pub fn overview(mounts: &[Mount], full_paths: bool) -> Vec<Vec<String>> {
    mounts
        .iter()
        .map(|m| {
            let source = if full_paths {
                m.source.clone()
            } else {
                shorten_path(&m.source)
            };
            vec![m.destination.clone(), m.mount_type.clone(), source]
        })
        .collect()
}

/// Keep the last two path components, replace the rest with "..".
/// Two or fewer components pass through unchanged.
pub fn shorten_path(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    if parts.len() <= 2 {
        return path.to_string();
    }
    format!("../{}/{}", parts[parts.len() - 2], parts[parts.len() - 1])
}
