// src/core/html.rs
//
// Tolerant, case-insensitive HTML block scanning. No DOM, no regex:
// find tag blocks by name, strip markup, normalize the text. Enough
// for the wiki's rendered detail pages.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next `<o ...> ... </c>` block at or after `from`.
/// Returns byte offsets spanning the whole block including both tags.
/// The open pattern must end at a tag-name boundary, so `<p` matches
/// `<p>` and `<p class=...>` but never `<pre` or `<path`.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let mut search = from;
    let start = loop {
        let cand = lc.get(search..)?.find(&ol)? + search;
        match s.as_bytes().get(cand + ol.len()) {
            Some(&b) if b == b'>' || b == b'/' || b.is_ascii_whitespace() => break cand,
            None => return None,
            _ => search = cand + ol.len(),
        }
    };
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Inner content of a block: between the first `>` and the last `<`.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Clean text of one tag block: entities first, then tags, then whitespace.
pub fn block_text(block: &str) -> String {
    strip_tags(normalize_entities(&inner_after_open_tag(block)))
}

/// `<title>` contents, or empty when the page has none.
pub fn extract_title(doc: &str) -> String {
    match next_tag_block_ci(doc, "<title", "</title>", 0) {
        Some((ts, te)) => block_text(&doc[ts..te]),
        None => s!(),
    }
}

/// All `<table>` blocks. Each row comes back as its full text (`<th>`
/// and `<td>` alike, for header sniffing) plus the `<td>`-only cell
/// list; header cells never appear as data cells.
pub fn extract_tables(doc: &str) -> Vec<Vec<(String, Vec<String>)>> {
    let mut tables = Vec::new();
    let mut pos = 0usize;
    while let Some((ts, te)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        let table = &doc[ts..te];
        pos = te;

        let mut rows = Vec::new();
        let mut tr_pos = 0usize;
        while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", tr_pos) {
            let tr = &table[tr_s..tr_e];
            tr_pos = tr_e;
            rows.push(extract_row(tr));
        }
        tables.push(rows);
    }
    tables
}

fn extract_row(tr: &str) -> (String, Vec<String>) {
    // <td> and <th> can interleave; take whichever comes first each step.
    let mut parts = Vec::new();
    let mut cells = Vec::new();
    let mut pos = 0usize;
    loop {
        let td = next_tag_block_ci(tr, "<td", "</td>", pos);
        let th = next_tag_block_ci(tr, "<th", "</th>", pos);
        let (block, is_data) = match (td, th) {
            (Some(a), Some(b)) => {
                if a.0 <= b.0 {
                    (a, true)
                } else {
                    (b, false)
                }
            }
            (Some(a), None) => (a, true),
            (None, Some(b)) => (b, false),
            (None, None) => break,
        };
        let text = block_text(&tr[block.0..block.1]);
        parts.push(text.clone());
        if is_data {
            cells.push(text);
        }
        pos = block.1;
    }
    (parts.join(" "), cells)
}

/// All `<p>` blocks as clean text, document order.
pub fn extract_paragraphs(doc: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((ps, pe)) = next_tag_block_ci(doc, "<p", "</p>", pos) {
        out.push(block_text(&doc[ps..pe]));
        pos = pe;
    }
    out
}

/// Rendered body text, one line per block-ish element. Block-level close
/// tags and <br> become newlines so label/value pairs land on adjacent
/// lines the way the browser lays them out.
pub fn extract_text(doc: &str) -> String {
    let body = match next_tag_block_ci(doc, "<body", "</body>", 0) {
        Some((bs, be)) => &doc[bs..be],
        None => doc,
    };

    let mut with_breaks = String::with_capacity(body.len());
    let lc = to_lower(body);
    let mut i = 0usize;
    while i < body.len() {
        if body[i..].starts_with('<') {
            let rest = &lc[i..];
            let breaks = ["</div>", "</p>", "</td>", "</th>", "</tr>", "</li>",
                "</h1>", "</h2>", "</h3>", "<br>", "<br/>", "<br />"];
            if breaks.iter().any(|t| rest.starts_with(t)) {
                with_breaks.push('\n');
            }
            match body[i..].find('>') {
                Some(gt) => i += gt + 1,
                None => break,
            }
        } else {
            let ch = body[i..].chars().next().unwrap_or('\0');
            with_breaks.push(ch);
            i += ch.len_utf8();
        }
    }

    with_breaks
        .lines()
        .map(|l| normalize_ws(&normalize_entities(l)))
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
