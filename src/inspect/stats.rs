//! CRIU dump 统计的展示适配
//! 仅做单位/形状转换，计数来自 criu 层

use std::path::Path;

use crate::criu;
use crate::utils::Result;

pub fn header() -> Vec<String> {
    [
        "Freezing Time",
        "Frozen Time",
        "Memdump Time",
        "Memwrite Time",
        "Pages Scanned",
        "Pages Written",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Only called when statistics were requested; opens nothing otherwise.
pub fn dump_statistics_row(dir: &Path) -> Result<Vec<String>> {
    let stats = criu::stats::read_dump_stats(dir)?;

    Ok(vec![
        format!("{} us", stats.freezing_time),
        format!("{} us", stats.frozen_time),
        format!("{} us", stats.memdump_time),
        format!("{} us", stats.memwrite_time),
        format!("{}", stats.pages_scanned),
        format!("{}", stats.pages_written),
    ])
}
