// tests/extract.rs
//
// Record extractor against hand-built page snapshots: placeholder
// handling, label/value scanning, base-stat table selection, refine
// rows, and set-effect paragraphs.

use ef_scrape::data::{Tables, VALID_ATTRS};
use ef_scrape::ident::Normalizer;
use ef_scrape::page::{PageSnapshot, Row, Table};
use ef_scrape::specs::equipment::{self, RefineRow};

fn tables() -> Tables {
    Tables::builtin()
}

fn norm(tables: &Tables) -> Normalizer {
    Normalizer::new(&tables.tokens)
}

fn sample_page() -> PageSnapshot {
    PageSnapshot {
        title: "长息护手 - 森空岛".into(),
        text: [
            "长息护手",
            "品质",
            "金色",
            "部位",
            "手部",
            "装备套组",
            "长息装备组",
        ]
        .join("\n"),
        tables: vec![
            // Recommendation table, must be skipped
            Table::new(vec![vec!["推荐搭配".into(), "某某干员".into()]]),
            // The base attribute table
            Table::new(vec![
                vec!["防御力".into(), "120".into(), "生命值".into(), "300".into()],
                vec!["暴击率".into(), "5%".into(), "装备描述".into(), "不是属性".into()],
            ]),
            // Refine table
            Table::new(vec![
                vec![
                    "属性".into(),
                    "基础".into(),
                    "精锻1级".into(),
                    "精锻2级".into(),
                    "精锻3级".into(),
                ],
                vec![
                    "攻击力".into(),
                    "10".into(),
                    "12".into(),
                    "14".into(),
                    "16".into(),
                ],
                vec![
                    "精锻积累值".into(),
                    "1".into(),
                    "2".into(),
                    "3".into(),
                    "4".into(),
                ],
                vec!["残缺行".into(), "x".into()],
            ]),
            // A later plain table; the base table already matched, so
            // this one must not contribute
            Table::new(vec![vec!["攻击力".into(), "999".into()]]),
        ],
        paragraphs: vec![
            "2件套组效果：防御力提升10%".into(),
            "装备背景故事，无关段落。".into(),
            "4件套组效果：受到伤害降低8%".into(),
        ],
    }
}

#[test]
fn extracts_full_record() {
    let t = tables();
    let n = norm(&t);
    let rec = equipment::extract(&sample_page(), 1042, &t, &n).expect("record");

    assert_eq!(rec.id, "changxi-hushou");
    assert_eq!(rec.name, "长息护手");
    assert_eq!(rec.quality, "金色");
    assert_eq!(rec.slot, "手部");
    assert_eq!(rec.set_name, "长息装备组");
    assert_eq!(rec.set_id, "changxi");
    assert_eq!(rec.source_id, 1042);

    assert_eq!(rec.base_stats.len(), 3);
    assert_eq!(rec.base_stats["防御力"], "120");
    assert_eq!(rec.base_stats["生命值"], "300");
    assert_eq!(rec.base_stats["暴击率"], "5%");

    assert_eq!(
        rec.refine_data["攻击力"],
        RefineRow {
            base: "10".into(),
            level1: "12".into(),
            level2: "14".into(),
            level3: "16".into(),
        }
    );
    assert!(!rec.refine_data.contains_key("精锻积累值"));
    assert!(!rec.refine_data.contains_key("残缺行"));

    assert_eq!(
        rec.set_effect,
        vec![
            "2件套组效果：防御力提升10%".to_string(),
            "4件套组效果：受到伤害降低8%".to_string(),
        ]
    );
}

#[test]
fn placeholder_title_yields_absent() {
    let t = tables();
    let n = norm(&t);
    let mut page = sample_page();
    page.title = "森空岛".into();
    assert!(equipment::extract(&page, 1000, &t, &n).is_none());

    page.title = "".into();
    assert!(equipment::extract(&page, 1000, &t, &n).is_none());
}

#[test]
fn base_stats_keys_pass_allow_list() {
    let t = tables();
    let n = norm(&t);
    let rec = equipment::extract(&sample_page(), 1042, &t, &n).expect("record");
    for key in rec.base_stats.keys() {
        assert!(
            VALID_ATTRS.iter().any(|a| key.contains(a)),
            "{key} not allow-listed"
        );
    }
}

#[test]
fn later_tables_never_contribute_base_stats() {
    let t = tables();
    let n = norm(&t);
    let rec = equipment::extract(&sample_page(), 1042, &t, &n).expect("record");
    // 攻击力 appears only in the refine table and the trailing table
    assert!(!rec.base_stats.contains_key("攻击力"));
}

#[test]
fn header_cells_never_pair_into_base_stats() {
    let t = tables();
    let n = norm(&t);
    let mut page = sample_page();
    // A qualifying table whose th header names an attribute right next
    // to a value; only the td row may contribute
    page.tables = vec![Table {
        rows: vec![
            Row {
                text: "攻击力 加成".into(),
                cells: vec![],
            },
            Row {
                text: "防御力 120".into(),
                cells: vec!["防御力".into(), "120".into()],
            },
        ],
    }];
    let rec = equipment::extract(&page, 1042, &t, &n).expect("record");
    assert_eq!(rec.base_stats.len(), 1);
    assert_eq!(rec.base_stats["防御力"], "120");
    assert!(!rec.base_stats.contains_key("攻击力"));
}

#[test]
fn missing_labels_leave_fields_empty() {
    let t = tables();
    let n = norm(&t);
    let page = PageSnapshot {
        title: "长息护手 - 森空岛".into(),
        text: "长息护手".into(),
        tables: Vec::new(),
        paragraphs: Vec::new(),
    };
    let rec = equipment::extract(&page, 1042, &t, &n).expect("record");
    assert_eq!(rec.quality, "");
    assert_eq!(rec.slot, "");
    assert_eq!(rec.set_name, "");
    assert_eq!(rec.set_id, "");
    assert!(rec.base_stats.is_empty());
    assert!(rec.refine_data.is_empty());
    assert!(rec.set_effect.is_empty());
}

#[test]
fn unknown_set_name_keeps_record_without_set_id() {
    let t = tables();
    let n = norm(&t);
    let mut page = sample_page();
    page.text = page.text.replace("长息装备组", "无名装备组");
    let rec = equipment::extract(&page, 1042, &t, &n).expect("record");
    assert_eq!(rec.set_name, "无名装备组");
    assert_eq!(rec.set_id, "");
}
