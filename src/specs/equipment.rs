// src/specs/equipment.rs
//! Extraction spec for equipment detail pages.
//!
//! Layout assumptions (by design, matched to the live pages):
//! - the page title is `<name> - <site suffix>`; the bare site name
//!   means the entry id resolved to nothing
//! - scalar fields sit on a label line (品质 / 部位 / 装备套组) with the
//!   value on the following line
//! - the base-attribute table is the first table that is neither the
//!   refine table nor a recommendation table; exactly one such table
//!   contributes, and its cells read as label/value pairs
//! - the refine table's header row contains 精锻1级; data rows carry
//!   base + three refine tiers
//! - set-effect text lives in paragraphs mentioning 件套组效果

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::consts::{PLACEHOLDER_TITLE, TITLE_SEP};
use crate::data::{Tables, VALID_ATTRS};
use crate::ident::Normalizer;
use crate::page::PageSnapshot;

const LABEL_QUALITY: &str = "品质";
const LABEL_SLOT: &str = "部位";
const LABEL_SET: &str = "装备套组";

const REFINE_MARK: &str = "精锻";
const RECOMMEND_MARK: &str = "推荐";
const REFINE_HEADER_MARK: &str = "精锻1级";
const ACCUM_MARK: &str = "精锻积累";
const SET_EFFECT_MARK: &str = "件套组效果";

/// Stat values at refine tiers: unrefined plus tiers 1–3.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RefineRow {
    pub base: String,
    pub level1: String,
    pub level2: String,
    pub level3: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRecord {
    pub id: String,
    pub name: String,
    pub quality: String,
    pub slot: String,
    pub set_name: String,
    pub set_id: String,
    pub base_stats: BTreeMap<String, String>,
    pub refine_data: BTreeMap<String, RefineRow>,
    pub set_effect: Vec<String>,
    pub source_id: u32,
}

/// Extract one equipment record from a rendered page, or `None` when
/// the page is the placeholder for a nonexistent entry. Missing labels
/// or tables leave the matching field empty; they are never errors.
pub fn extract(
    snap: &PageSnapshot,
    source_id: u32,
    tables: &Tables,
    norm: &Normalizer,
) -> Option<EquipmentRecord> {
    let name = page_name(&snap.title)?;

    let (quality, slot, set_name) = scalar_fields(snap);
    let set_id = tables.set_id_for(&set_name);

    Some(EquipmentRecord {
        id: norm.normalize(&name),
        name,
        quality,
        slot,
        set_name,
        set_id,
        base_stats: base_stats(snap),
        refine_data: refine_data(snap),
        set_effect: set_effect(snap),
        source_id,
    })
}

/// First title segment, unless the page is the site placeholder.
pub fn page_name(title: &str) -> Option<String> {
    let name = title.split(TITLE_SEP).next().unwrap_or("").trim();
    if name.is_empty() || name == PLACEHOLDER_TITLE {
        return None;
    }
    Some(name.to_string())
}

/// 品质 / 部位 / 装备套组 by label-line scan; first match wins,
/// absence leaves the field empty.
fn scalar_fields(snap: &PageSnapshot) -> (String, String, String) {
    let mut quality = s!();
    let mut slot = s!();
    let mut set_name = s!();

    let lines: Vec<&str> = snap.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        let line = line.trim();
        let next = || lines.get(i + 1).map(|l| l.trim().to_string());

        if line == LABEL_QUALITY && quality.is_empty() {
            if let Some(v) = next() { quality = v; }
        }
        if line == LABEL_SLOT && slot.is_empty() {
            if let Some(v) = next() { slot = v; }
        }
        if line == LABEL_SET && set_name.is_empty() {
            if let Some(v) = next() { set_name = v; }
        }
    }
    (quality, slot, set_name)
}

/// Base attributes from the first qualifying table. Refine and
/// recommendation tables are skipped; once a table has contributed one
/// allow-listed pair, no further table is scanned.
fn base_stats(snap: &PageSnapshot) -> BTreeMap<String, String> {
    let mut stats = BTreeMap::new();
    let mut found_attr_table = false;

    for table in &snap.tables {
        let header = table.first_row_text();
        if header.contains(REFINE_MARK) || header.contains(RECOMMEND_MARK) {
            continue;
        }
        if found_attr_table {
            break;
        }

        for row in &table.rows {
            // Only data cells pair up; header cells are sniffed, not read.
            let cells = &row.cells;
            let mut i = 0usize;
            while i + 1 < cells.len() {
                let key = cells[i].trim();
                let val = cells[i + 1].trim();
                if !key.is_empty()
                    && !val.is_empty()
                    && VALID_ATTRS.iter().any(|a| key.contains(a))
                {
                    stats.insert(key.to_string(), val.to_string());
                    found_attr_table = true;
                }
                i += 2;
            }
        }
    }
    stats
}

/// Refine tiers from the table whose header row names tier 1.
/// Accumulation rows are bookkeeping, not stats; they are dropped.
fn refine_data(snap: &PageSnapshot) -> BTreeMap<String, RefineRow> {
    let mut refine = BTreeMap::new();

    for table in &snap.tables {
        if !table.first_row_text().contains(REFINE_HEADER_MARK) {
            continue;
        }
        for row in table.rows.iter().skip(1) {
            let cells = &row.cells;
            if cells.len() < 5 {
                continue;
            }
            let attr = cells[0].trim();
            if attr.is_empty() || attr.contains(ACCUM_MARK) {
                continue;
            }
            refine.insert(
                attr.to_string(),
                RefineRow {
                    base: cells[1].trim().to_string(),
                    level1: cells[2].trim().to_string(),
                    level2: cells[3].trim().to_string(),
                    level3: cells[4].trim().to_string(),
                },
            );
        }
    }
    refine
}

/// Every paragraph describing an N-piece set bonus, document order.
fn set_effect(snap: &PageSnapshot) -> Vec<String> {
    snap.paragraphs
        .iter()
        .map(|p| p.trim())
        .filter(|p| p.contains(SET_EFFECT_MARK))
        .map(|p| p.to_string())
        .collect()
}
