// src/config/consts.rs

// Net config
pub const HOST: &str = "wiki.skland.com";
pub const DETAIL_PATH: &str = "/endfield/detail";
pub const MAIN_TYPE_ID: u32 = 1;

// subTypeId per page kind
pub const SUBTYPE_OPERATOR: u32 = 1;
pub const SUBTYPE_WEAPON: u32 = 2;
pub const SUBTYPE_EQUIPMENT: u32 = 4;

// Title shown for entry ids that resolve to nothing
pub const PLACEHOLDER_TITLE: &str = "森空岛";
pub const TITLE_SEP: &str = " - ";

// Fetch behavior
pub const PROBE_TIMEOUT_SECS: u64 = 10;
pub const DETAIL_TIMEOUT_SECS: u64 = 30;
pub const REQUEST_PAUSE_MS: u64 = 300; // be polite

// Probe defaults: gold equipment lives in roughly this id band
pub const DEFAULT_ID_LOW: u32 = 1000;
pub const DEFAULT_ID_HIGH: u32 = 1200;
pub const DEFAULT_TARGET_COUNT: usize = 74;
pub const PROGRESS_EVERY: u32 = 20;

// Export
pub const DEFAULT_OUT_DIR: &str = "out/equipment";
pub const SETS_SUBDIR: &str = "sets";
pub const INDEX_FILE: &str = "index.json";
