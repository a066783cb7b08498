//! 引擎识别与容器身份提取
//! 三个引擎把同一份事实放在不同的地方：Podman 在 config.dump，
//! CRI-O 在 spec 注解，containerd 在独立的 status 文件

use chrono::{DateTime, SecondsFormat};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::metadata::{self, ContainerConfig, ContainerdStatus, RuntimeSpec};
use crate::utils::{CpviewError, Result};

// ── 注解键 ──────────────────────────────────────────────────────────────────

const CONTAINER_MANAGER: &str = "io.container.manager";
const CRI_CONTAINER_NAME: &str = "io.kubernetes.cri.container-name";
const CRIO_METADATA: &str = "io.kubernetes.cri-o.Metadata";
const CRIO_IP_0: &str = "io.kubernetes.cri-o.IP.0";
const CRIO_CREATED: &str = "io.kubernetes.cri-o.Created";

// ── 数据结构 ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Podman,
    Containerd,
    CriO,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Podman => write!(f, "Podman"),
            Engine::Containerd => write!(f, "containerd"),
            Engine::CriO => write!(f, "CRI-O"),
        }
    }
}

/// One normalized identity per checkpoint, whichever engine produced it.
/// `mac` is reserved — no current engine annotates it.
#[derive(Debug, Clone)]
pub struct ContainerIdentity {
    pub name: String,
    pub ip: Option<String>,
    pub mac: Option<String>,
    pub created: String,
    pub engine: Engine,
}

/// Nested JSON blob inside the CRI-O metadata annotation.
#[derive(Debug, Deserialize)]
struct CrioMetadata {
    #[serde(default)]
    name: String,
}

// ── 识别入口 ────────────────────────────────────────────────────────────────

pub fn classify(dir: &Path, config: &ContainerConfig, spec: &RuntimeSpec) -> Result<ContainerIdentity> {
    let manager = spec
        .annotations
        .get(CONTAINER_MANAGER)
        .map(String::as_str)
        .unwrap_or_default();

    match manager {
        "libpod" => Ok(podman_identity(config)),
        "cri-o" => crio_identity(spec),
        other => match metadata::read_containerd_status(dir)? {
            Some(status) => Ok(containerd_identity(&status, spec)),
            None => Err(CpviewError::UnknownManager(other.to_string())),
        },
    }
}

fn podman_identity(config: &ContainerConfig) -> ContainerIdentity {
    ContainerIdentity {
        name: config.name.clone(),
        ip: None,
        mac: None,
        created: config
            .created_time
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        engine: Engine::Podman,
    }
}

fn containerd_identity(status: &ContainerdStatus, spec: &RuntimeSpec) -> ContainerIdentity {
    ContainerIdentity {
        name: annotation(spec, CRI_CONTAINER_NAME),
        ip: None,
        mac: None,
        created: DateTime::from_timestamp_nanos(status.created_at)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        engine: Engine::Containerd,
    }
}

fn crio_identity(spec: &RuntimeSpec) -> Result<ContainerIdentity> {
    let blob = annotation(spec, CRIO_METADATA);
    let cm: CrioMetadata = serde_json::from_str(&blob)
        .map_err(|e| CpviewError::MetadataParse(format!("failed to read {}: {}", CRIO_METADATA, e)))?;

    let ip = annotation(spec, CRIO_IP_0);

    Ok(ContainerIdentity {
        name: cm.name,
        ip: if ip.is_empty() { None } else { Some(ip) },
        mac: None,
        // CRI-O 已经存成显示格式，原样透传
        created: annotation(spec, CRIO_CREATED),
        engine: Engine::CriO,
    })
}

fn annotation(spec: &RuntimeSpec, key: &str) -> String {
    spec.annotations.get(key).cloned().unwrap_or_default()
}
