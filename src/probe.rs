// src/probe.rs
//
// Entry-id discovery: walk a closed id range in ascending order and
// keep the ids whose page title names a known target. One title fetch
// per id; a failed fetch is "no match", never a reason to stop.

use crate::config::consts::PROGRESS_EVERY;
use crate::data::Tables;
use crate::page::PageSource;
use crate::progress::Progress;
use crate::specs::equipment;

/// Scan `[id_low, id_high]` for pages whose title matches a target
/// name. Result is ascending by id and never longer than `limit`.
pub fn discover(
    source: &mut dyn PageSource,
    tables: &Tables,
    id_low: u32,
    id_high: u32,
    limit: usize,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<u32> {
    let mut ids: Vec<u32> = Vec::new();

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Scanning ids {id_low}-{id_high} for {limit} targets..."));
    }

    for id in id_low..=id_high {
        if ids.len() >= limit {
            break;
        }

        match source.title(id) {
            Ok(title) => {
                if let Some(name) = equipment::page_name(&title) {
                    if tables.is_target(&name) {
                        logf!("Found: {name} (id {id})");
                        if let Some(p) = progress.as_deref_mut() {
                            p.log(&format!("Found: {name} (id {id})"));
                        }
                        ids.push(id);
                    }
                }
            }
            // Dead id or timeout; skip and keep scanning.
            Err(e) => logd!("Probe id {id}: {e}"),
        }

        if id % PROGRESS_EVERY == 0 {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Progress: {id}/{id_high}, found {}", ids.len()));
            }
        }
    }

    ids
}
