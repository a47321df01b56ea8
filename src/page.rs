// src/page.rs
//
// Rendered-page boundary. Extraction code never touches the network or
// raw HTML; it consumes a `PageSnapshot` (title, body text, tables,
// paragraphs) delivered by a `PageSource`. `HttpSource` is the stock
// source: one blocking GET per entry id against the wiki's detail
// endpoint, fixed timeouts, a polite pause between requests.

use std::error::Error;
use std::thread;
use std::time::Duration;

use crate::config::consts::{
    DETAIL_PATH, DETAIL_TIMEOUT_SECS, HOST, MAIN_TYPE_ID, PROBE_TIMEOUT_SECS, REQUEST_PAUSE_MS,
};
use crate::core::html;

/// One table row. `text` is every cell joined, header cells included;
/// `cells` holds the data (`<td>`) cell text only, so header cells can
/// be sniffed but never read as values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub text: String,
    pub cells: Vec<String>,
}

/// One table from the rendered page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    /// Build a table of plain data rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|cells| Row {
                    text: cells.join(" "),
                    cells,
                })
                .collect(),
        }
    }

    /// Full text of the first row, header cells included.
    pub fn first_row_text(&self) -> String {
        match self.rows.first() {
            Some(row) => row.text.clone(),
            None => s!(),
        }
    }
}

/// Snapshot of a rendered detail page.
#[derive(Clone, Debug, Default)]
pub struct PageSnapshot {
    pub title: String,
    pub text: String,
    pub tables: Vec<Table>,
    pub paragraphs: Vec<String>,
}

impl PageSnapshot {
    pub fn from_html(doc: &str) -> Self {
        Self {
            title: html::extract_title(doc),
            text: html::extract_text(doc),
            tables: html::extract_tables(doc)
                .into_iter()
                .map(|rows| Table {
                    rows: rows
                        .into_iter()
                        .map(|(text, cells)| Row { text, cells })
                        .collect(),
                })
                .collect(),
            paragraphs: html::extract_paragraphs(doc),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Where pages come from. The probe only needs titles; `title` exists
/// so a source can answer that more cheaply than a full snapshot.
pub trait PageSource {
    fn fetch(&mut self, entry_id: u32) -> Result<PageSnapshot, Box<dyn Error>>;

    fn title(&mut self, entry_id: u32) -> Result<String, Box<dyn Error>> {
        Ok(self.fetch(entry_id)?.title)
    }
}

/// HTTP source over the wiki's detail endpoint.
pub struct HttpSource {
    agent: ureq::Agent,
    sub_type_id: u32,
}

impl HttpSource {
    pub fn new(sub_type_id: u32) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .user_agent(concat!("ef_scrape/", env!("CARGO_PKG_VERSION")))
                .build(),
            sub_type_id,
        }
    }

    fn get(&self, entry_id: u32, timeout: Duration) -> Result<String, Box<dyn Error>> {
        let url = format!("https://{}{}", HOST, DETAIL_PATH);
        let body = self
            .agent
            .get(&url)
            .query("mainTypeId", &MAIN_TYPE_ID.to_string())
            .query("subTypeId", &self.sub_type_id.to_string())
            .query("gameEntryId", &entry_id.to_string())
            .timeout(timeout)
            .call()?
            .into_string()?;
        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
        Ok(body)
    }
}

impl PageSource for HttpSource {
    fn fetch(&mut self, entry_id: u32) -> Result<PageSnapshot, Box<dyn Error>> {
        let doc = self.get(entry_id, Duration::from_secs(DETAIL_TIMEOUT_SECS))?;
        Ok(PageSnapshot::from_html(&doc))
    }

    fn title(&mut self, entry_id: u32) -> Result<String, Box<dyn Error>> {
        let doc = self.get(entry_id, Duration::from_secs(PROBE_TIMEOUT_SECS))?;
        Ok(html::extract_title(&doc))
    }
}
