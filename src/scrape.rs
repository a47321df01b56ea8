// src/scrape.rs
//
// Orchestration: probe the id range, fetch each discovered page,
// extract, aggregate. Strictly sequential, one in-flight fetch; a bad
// page is logged and skipped, never fatal.

use std::error::Error;

use crate::{
    aggregate::{self, IndexDoc, SetRecord},
    config::options::Params,
    data::Tables,
    ident::Normalizer,
    page::{PageSnapshot, PageSource},
    probe,
    progress::Progress,
    specs::equipment::{self, EquipmentRecord},
};

/// Everything one equipment run produces, in memory.
pub struct EquipmentBundle {
    pub records: Vec<EquipmentRecord>,
    pub sets: Vec<SetRecord>,
    pub index: IndexDoc,
}

/// Probe, extract and aggregate. Returns the full in-memory bundle;
/// writing files is the caller's business.
pub fn collect_equipment(
    source: &mut dyn PageSource,
    tables: &Tables,
    params: &Params,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<EquipmentBundle, Box<dyn Error>> {
    let norm = Normalizer::new(&tables.tokens);

    let ids = probe::discover(
        source,
        tables,
        params.id_low,
        params.id_high,
        params.limit,
        progress.as_deref_mut(),
    );
    logf!("Probe finished: {} ids in range {}-{}", ids.len(), params.id_low, params.id_high);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
        p.log(&format!("Fetching {} detail pages...", ids.len()));
    }

    let mut records: Vec<EquipmentRecord> = Vec::with_capacity(ids.len());
    for id in ids {
        let snap = match source.fetch(id) {
            Ok(s) => s,
            Err(e) => {
                loge!("Fetch entry {id}: {e}");
                continue;
            }
        };
        match equipment::extract(&snap, id, tables, &norm) {
            Some(rec) => {
                logf!("Scraped: {} ({})", rec.name, rec.id);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(id);
                }
                records.push(rec);
            }
            // Placeholder page slipped past the probe; treat as absent.
            None => logd!("Entry {id}: no extractable record"),
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let (sets, index) = aggregate::aggregate(&records);
    Ok(EquipmentBundle { records, sets, index })
}

/// Fetch a single detail page and return its rendered body text.
/// Used by the operator/weapon dump modes for eyeballing page layout.
pub fn dump_page(
    source: &mut dyn PageSource,
    entry_id: u32,
) -> Result<PageSnapshot, Box<dyn Error>> {
    let snap = source.fetch(entry_id)?;
    logf!("Dumped entry {entry_id}: title '{}'", snap.title);
    Ok(snap)
}
