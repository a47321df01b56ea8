// tests/scrape_e2e.rs
//
// Full pipeline over a canned source: probe, extract, aggregate,
// plus the single-page dump mode.

use std::collections::HashMap;
use std::error::Error;

use ef_scrape::config::options::Params;
use ef_scrape::data::Tables;
use ef_scrape::page::{PageSnapshot, PageSource, Table};
use ef_scrape::scrape::{collect_equipment, dump_page};

fn equipment_page(name: &str, set_name: &str) -> PageSnapshot {
    PageSnapshot {
        title: format!("{name} - 森空岛"),
        text: [
            name,
            "品质", "金色",
            "部位", "手部",
            "装备套组", set_name,
        ]
        .join("\n"),
        tables: vec![Table::new(vec![vec![
            "防御力".into(),
            "120".into(),
        ]])],
        paragraphs: vec!["2件套组效果：防御力提升10%".into()],
    }
}

struct CannedSite {
    pages: HashMap<u32, PageSnapshot>,
    broken: Vec<u32>,
}

impl PageSource for CannedSite {
    fn fetch(&mut self, entry_id: u32) -> Result<PageSnapshot, Box<dyn Error>> {
        if self.broken.contains(&entry_id) {
            return Err(format!("timeout on entry {entry_id}").into());
        }
        Ok(self.pages.get(&entry_id).cloned().unwrap_or(PageSnapshot {
            title: "森空岛".into(),
            ..PageSnapshot::default()
        }))
    }

    // Titles stay reachable even when the detail fetch breaks, so a
    // probe hit can still fail later during extraction.
    fn title(&mut self, entry_id: u32) -> Result<String, Box<dyn Error>> {
        Ok(self
            .pages
            .get(&entry_id)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| "森空岛".into()))
    }
}

#[test]
fn probe_extract_aggregate_round() {
    let tables = Tables::builtin();

    let mut pages = HashMap::new();
    pages.insert(1001, equipment_page("长息护手", "长息装备组"));
    pages.insert(1004, equipment_page("长息护手·壹型", "长息装备组"));
    pages.insert(1007, equipment_page("长息蓄电核", "长息装备组"));
    pages.insert(1009, equipment_page("潮涌手甲", "潮涌装备组"));
    let mut site = CannedSite { pages, broken: vec![1005] };

    let mut params = Params::new();
    params.id_low = 1000;
    params.id_high = 1010;
    params.limit = 74;

    let bundle = collect_equipment(&mut site, &tables, &params, None).unwrap();

    assert_eq!(bundle.records.len(), 4);
    assert_eq!(
        bundle.records.iter().map(|r| r.source_id).collect::<Vec<_>>(),
        vec![1001, 1004, 1007, 1009]
    );

    assert_eq!(bundle.sets.len(), 2);
    assert_eq!(bundle.sets[0].id, "changxi");
    assert_eq!(
        bundle.sets[0].equipment,
        vec![
            "changxi-hushou".to_string(),
            "changxi-hushou-1".to_string(),
            "changxi-xudianahe".to_string(),
        ]
    );
    assert_eq!(bundle.sets[1].id, "chaoyong");

    assert_eq!(bundle.index.total_count, 4);
    assert_eq!(bundle.index.sets, vec!["changxi".to_string(), "chaoyong".to_string()]);
}

#[test]
fn broken_pages_do_not_abort_the_run() {
    let tables = Tables::builtin();

    let mut pages = HashMap::new();
    pages.insert(1001, equipment_page("长息护手", "长息装备组"));
    // Probe sees the title, the detail fetch then breaks: record
    // dropped, run continues
    pages.insert(1002, equipment_page("长息装甲", "长息装备组"));
    let mut site = CannedSite { pages, broken: vec![1002] };

    let mut params = Params::new();
    params.id_low = 1001;
    params.id_high = 1002;

    let bundle = collect_equipment(&mut site, &tables, &params, None).unwrap();
    assert_eq!(bundle.records.len(), 1);
    assert_eq!(bundle.records[0].name, "长息护手");
}

#[test]
fn dump_returns_the_rendered_page() {
    let mut pages = HashMap::new();
    pages.insert(7, equipment_page("黎风", "长息装备组"));
    let mut site = CannedSite { pages, broken: vec![] };

    let snap = dump_page(&mut site, 7).unwrap();
    assert_eq!(snap.title, "黎风 - 森空岛");
    let lines: Vec<&str> = snap.lines().collect();
    let qi = lines.iter().position(|l| *l == "品质").expect("label line");
    assert_eq!(lines[qi + 1], "金色");
}

#[test]
fn dump_propagates_fetch_errors() {
    let mut site = CannedSite { pages: HashMap::new(), broken: vec![70] };
    let err = dump_page(&mut site, 70).unwrap_err();
    assert!(err.to_string().contains("70"));
}

#[test]
fn limit_caps_discovered_records() {
    let tables = Tables::builtin();

    let mut pages = HashMap::new();
    pages.insert(1001, equipment_page("长息护手", "长息装备组"));
    pages.insert(1002, equipment_page("长息装甲", "长息装备组"));
    let mut site = CannedSite { pages, broken: vec![] };

    let mut params = Params::new();
    params.id_low = 1000;
    params.id_high = 1010;
    params.limit = 1;

    let bundle = collect_equipment(&mut site, &tables, &params, None).unwrap();
    assert_eq!(bundle.records.len(), 1);
    assert_eq!(bundle.records[0].name, "长息护手");
}
