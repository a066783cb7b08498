//! 报表装配：表头与数据行成对构建，可选列要么整列存在要么整列缺席

use crate::inspect::identity::ContainerIdentity;
use crate::inspect::size::CheckpointSizeMetrics;
use crate::metadata::{self, ContainerConfig};

const SHORT_ID_LEN: usize = 12;

/// Build the base report table. Header and row grow in lockstep, so
/// `header.len() == row.len()` holds at hand-off to the renderer.
pub fn assemble(
    ci: &ContainerIdentity,
    config: &ContainerConfig,
    metrics: &CheckpointSizeMetrics,
) -> (Vec<String>, Vec<String>) {
    let mut header: Vec<String> = ["Container", "Image", "ID", "Runtime", "Created", "Engine"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut row = vec![
        ci.name.clone(),
        config.rootfs_image_name.clone(),
        short_id(&config.id),
        config.oci_runtime.clone(),
        ci.created.clone(),
        ci.engine.to_string(),
    ];

    if let Some(ip) = &ci.ip {
        header.push("IP".to_string());
        row.push(ip.clone());
    }
    if let Some(mac) = &ci.mac {
        header.push("MAC".to_string());
        row.push(mac.clone());
    }

    header.push("CHKPT Size".to_string());
    row.push(metadata::byte_to_string(metrics.total_size));

    if let Some(diff) = metrics.rootfs_diff_size {
        header.push("Root Fs Diff Size".to_string());
        row.push(metadata::byte_to_string(diff));
    }

    (header, row)
}

fn short_id(id: &str) -> String {
    if id.len() > SHORT_ID_LEN {
        id[..SHORT_ID_LEN].to_string()
    } else {
        id.to_string()
    }
}
