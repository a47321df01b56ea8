// src/file.rs
//
// Output boundary: one JSON document per set plus the global index,
// written once at the end of a run.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::config::consts::{INDEX_FILE, SETS_SUBDIR};
use crate::core::sanitize::sanitize_file_stem;
use crate::scrape::EquipmentBundle;
use crate::specs::equipment::{EquipmentRecord, RefineRow};

/// Per-set document: the set record plus its equipment with the
/// redundant set fields dropped.
#[derive(Serialize)]
struct SetDoc<'a> {
    set: &'a crate::aggregate::SetRecord,
    equipment: Vec<SetItem<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SetItem<'a> {
    id: &'a str,
    name: &'a str,
    slot: &'a str,
    base_stats: &'a BTreeMap<String, String>,
    refine_data: &'a BTreeMap<String, RefineRow>,
    source_id: u32,
}

impl<'a> SetItem<'a> {
    fn from(rec: &'a EquipmentRecord) -> Self {
        Self {
            id: &rec.id,
            name: &rec.name,
            slot: &rec.slot,
            base_stats: &rec.base_stats,
            refine_data: &rec.refine_data,
            source_id: rec.source_id,
        }
    }
}

/// Write `<out>/sets/<setId>.json` per set and `<out>/index.json`.
/// Returns every path written, sets first.
pub fn write_outputs(
    out_dir: &Path,
    bundle: &EquipmentBundle,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let sets_dir = out_dir.join(SETS_SUBDIR);
    ensure_directory(&sets_dir)?;

    let mut written = Vec::with_capacity(bundle.sets.len() + 1);

    for (i, set) in bundle.sets.iter().enumerate() {
        let doc = SetDoc {
            set,
            equipment: bundle
                .records
                .iter()
                .filter(|r| r.set_id == set.id)
                .map(SetItem::from)
                .collect(),
        };
        let path = sets_dir.join(format!("{}.json", sanitize_file_stem(&set.id, i as u32)));
        fs::write(&path, to_pretty_json(&doc)?)?;
        logf!("Saved set: {}", set.id);
        written.push(path);
    }

    let index_path = out_dir.join(INDEX_FILE);
    fs::write(&index_path, to_pretty_json(&bundle.index)?)?;
    written.push(index_path);

    Ok(written)
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, Box<dyn std::error::Error>> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
