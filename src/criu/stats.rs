//! stats-dump 镜像文件读取
use prost::Message;
use std::fs;
use std::path::Path;

use super::proto::{DumpStatsEntry, StatsEntry};
use crate::utils::{CpviewError, Result};

pub const STATS_DUMP_FILE: &str = "stats-dump";

// CRIU image header: service magic, per-type magic, payload size (all LE u32)
const IMG_SERVICE_MAGIC: u32 = 0x5510_5940;
const STATS_MAGIC: u32 = 0x5709_3306;
const HEADER_LEN: usize = 12;

/// Read and decode the dump-side statistics of `<dir>/stats-dump`.
pub fn read_dump_stats(dir: &Path) -> Result<DumpStatsEntry> {
    let path = dir.join(STATS_DUMP_FILE);
    let buf = fs::read(&path)
        .map_err(|e| CpviewError::Statistics(format!("{}: {}", path.display(), e)))?;

    if buf.len() < HEADER_LEN {
        return Err(CpviewError::Statistics(format!(
            "{} is too small (< {} bytes)",
            STATS_DUMP_FILE, HEADER_LEN
        )));
    }

    let service = u32::from_le_bytes(buf[0..4].try_into().unwrap());
    let stats = u32::from_le_bytes(buf[4..8].try_into().unwrap());
    if service != IMG_SERVICE_MAGIC || stats != STATS_MAGIC {
        return Err(CpviewError::Statistics(format!(
            "{} has unexpected magic {:#010x}/{:#010x}",
            STATS_DUMP_FILE, service, stats
        )));
    }

    let size = u32::from_le_bytes(buf[8..12].try_into().unwrap()) as usize;
    let payload = buf
        .get(HEADER_LEN..HEADER_LEN + size)
        .ok_or_else(|| {
            CpviewError::Statistics(format!(
                "{} payload truncated (expected {} bytes)",
                STATS_DUMP_FILE, size
            ))
        })?;

    let entry = StatsEntry::decode(payload)
        .map_err(|e| CpviewError::Statistics(format!("decoding {}: {}", STATS_DUMP_FILE, e)))?;

    entry
        .dump
        .ok_or_else(|| {
            CpviewError::Statistics(format!("{} carries no dump statistics", STATS_DUMP_FILE))
        })
}
