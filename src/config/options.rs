// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Equipment,
    Operator,
    Weapon,
}

impl PageKind {
    pub fn sub_type_id(&self) -> u32 {
        match self {
            PageKind::Equipment => SUBTYPE_EQUIPMENT,
            PageKind::Operator => SUBTYPE_OPERATOR,
            PageKind::Weapon => SUBTYPE_WEAPON,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Params {
    pub page: PageKind,              // equipment scrape, or operator/weapon dump
    pub id_low: u32,                 // probe range, inclusive
    pub id_high: u32,
    pub limit: usize,                // stop probing after this many hits
    pub entry_id: Option<u32>,       // single entry for dump pages
    pub out: PathBuf,                // output directory for equipment exports
    pub tables: Option<PathBuf>,     // JSON override for the static tables
    pub list_targets: bool,          // print target names then exit
}

impl Params {
    pub fn new() -> Self {
        Self {
            page: PageKind::Equipment,
            id_low: DEFAULT_ID_LOW,
            id_high: DEFAULT_ID_HIGH,
            limit: DEFAULT_TARGET_COUNT,
            entry_id: None,
            out: PathBuf::from(DEFAULT_OUT_DIR),
            tables: None,
            list_targets: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
