//! 检查点元数据层
//! 来源：config.dump / spec.dump / status（containerd）

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::utils::{CpviewError, Result};

// ── 检查点目录内的文件名 ─────────────────────────────────────────────────────

pub const CONFIG_DUMP_FILE: &str = "config.dump";
pub const SPEC_DUMP_FILE: &str = "spec.dump";
pub const STATUS_FILE: &str = "status";
pub const CHECKPOINT_DIRECTORY: &str = "checkpoint";
pub const ROOTFS_DIFF_TAR: &str = "rootfs-diff.tar";

// ── 数据结构 ────────────────────────────────────────────────────────────────

/// Engine-side container configuration, as dumped into `config.dump`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rootfs_image_name: String,
    #[serde(default, rename = "runtime")]
    pub oci_runtime: String,
    pub created_time: DateTime<Utc>,
}

/// The slice of the OCI runtime spec (`spec.dump`) this tool reads:
/// annotations drive engine classification, mounts feed the overview table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeSpec {
    #[serde(default)]
    pub annotations: HashMap<String, String>,
    #[serde(default)]
    pub mounts: Vec<Mount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Mount {
    #[serde(default)]
    pub destination: String,
    #[serde(default, rename = "type")]
    pub mount_type: String,
    #[serde(default)]
    pub source: String,
}

/// containerd writes a `status` file instead of annotating the spec;
/// timestamps are nanoseconds since the epoch.
#[derive(Debug, Clone, Deserialize)]
pub struct ContainerdStatus {
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub started_at: i64,
    #[serde(default)]
    pub finished_at: i64,
    #[serde(default)]
    pub exit_code: i32,
    #[serde(default)]
    pub pid: u32,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub message: String,
}

// ── 读取入口 ────────────────────────────────────────────────────────────────

pub fn read_config_dump(dir: &Path) -> Result<ContainerConfig> {
    read_json(dir, CONFIG_DUMP_FILE)
}

pub fn read_spec_dump(dir: &Path) -> Result<RuntimeSpec> {
    read_json(dir, SPEC_DUMP_FILE)
}

/// A missing status file is not an error here — only the classifier knows
/// whether it needed one. A present but unreadable file still fails.
pub fn read_containerd_status(dir: &Path) -> Result<Option<ContainerdStatus>> {
    let path = dir.join(STATUS_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(CpviewError::MetadataRead(format!("{}: {}", STATUS_FILE, e)));
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| CpviewError::MetadataRead(format!("{}: {}", STATUS_FILE, e)))
}

fn read_json<T: serde::de::DeserializeOwned>(dir: &Path, file: &str) -> Result<T> {
    let path = dir.join(file);
    let content = fs::read_to_string(&path)
        .map_err(|e| CpviewError::MetadataRead(format!("{}: {}", file, e)))?;

    serde_json::from_str(&content)
        .map_err(|e| CpviewError::MetadataRead(format!("{}: {}", file, e)))
}

// ── 格式化工具 ───────────────────────────────────────────────────────────────

pub fn byte_to_string(b: u64) -> String {
    if b >= 1 << 30 {
        format!("{:.1} GiB", b as f64 / (1u64 << 30) as f64)
    } else if b >= 1 << 20 {
        format!("{:.1} MiB", b as f64 / (1u64 << 20) as f64)
    } else if b >= 1 << 10 {
        format!("{:.1} KiB", b as f64 / (1u64 << 10) as f64)
    } else {
        format!("{} B", b)
    }
}
