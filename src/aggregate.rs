// src/aggregate.rs
//
// Group extracted records into per-set collections and build the
// global index. Pure shaping; no IO.

use serde::Serialize;

use crate::specs::equipment::EquipmentRecord;

#[derive(Clone, Debug, Serialize)]
pub struct SetRecord {
    pub id: String,
    pub name: String,
    pub effect: Vec<String>,
    pub equipment: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub id: String,
    pub name: String,
    pub set_id: String,
    pub slot: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDoc {
    pub total_count: usize,
    pub sets: Vec<String>,
    pub equipment: Vec<IndexEntry>,
}

/// Fold records (in discovery order) into set records plus the flat
/// index. The first record seen for a set id seeds that set's name and
/// effect text; every record with the id joins its equipment list in
/// encounter order. Records without a set id stay out of the sets but
/// always appear in the index.
pub fn aggregate(records: &[EquipmentRecord]) -> (Vec<SetRecord>, IndexDoc) {
    let mut sets: Vec<SetRecord> = Vec::new();

    for rec in records {
        if rec.set_id.is_empty() {
            continue;
        }
        let pos = match sets.iter().position(|s| s.id == rec.set_id) {
            Some(p) => p,
            None => {
                sets.push(SetRecord {
                    id: rec.set_id.clone(),
                    name: rec.set_name.clone(),
                    effect: rec.set_effect.clone(),
                    equipment: Vec::new(),
                });
                sets.len() - 1
            }
        };
        sets[pos].equipment.push(rec.id.clone());
    }

    let index = IndexDoc {
        total_count: records.len(),
        sets: sets.iter().map(|s| s.id.clone()).collect(),
        equipment: records
            .iter()
            .map(|r| IndexEntry {
                id: r.id.clone(),
                name: r.name.clone(),
                set_id: r.set_id.clone(),
                slot: r.slot.clone(),
            })
            .collect(),
    };

    (sets, index)
}
