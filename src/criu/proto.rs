//! CRIU `images/stats.proto` 的 dump 部分，手写 prost 消息
//! restore 侧（tag 2）不需要，prost 解码时会跳过未知字段

/// Dump-side performance counters recorded by CRIU.
/// Times are microseconds, page counts are raw.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DumpStatsEntry {
    #[prost(uint32, required, tag = "1")]
    pub freezing_time: u32,
    #[prost(uint32, required, tag = "2")]
    pub frozen_time: u32,
    #[prost(uint32, required, tag = "3")]
    pub memdump_time: u32,
    #[prost(uint32, required, tag = "4")]
    pub memwrite_time: u32,

    #[prost(uint64, required, tag = "5")]
    pub pages_scanned: u64,
    #[prost(uint64, required, tag = "6")]
    pub pages_skipped_parent: u64,
    #[prost(uint64, required, tag = "7")]
    pub pages_written: u64,

    #[prost(uint32, optional, tag = "8")]
    pub irmap_resolve: ::core::option::Option<u32>,

    #[prost(uint64, required, tag = "9")]
    pub pages_lazy: u64,
    #[prost(uint64, optional, tag = "10")]
    pub page_pipes: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag = "11")]
    pub page_pipe_bufs: ::core::option::Option<u64>,

    #[prost(uint64, optional, tag = "12")]
    pub shpages_scanned: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag = "13")]
    pub shpages_skipped_parent: ::core::option::Option<u64>,
    #[prost(uint64, optional, tag = "14")]
    pub shpages_written: ::core::option::Option<u64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StatsEntry {
    #[prost(message, optional, tag = "1")]
    pub dump: ::core::option::Option<DumpStatsEntry>,
}
