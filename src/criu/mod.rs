// CRIU image handling (stats-dump only)
pub mod proto;
pub mod stats;
