// src/ident.rs
//
// Display name → stable machine id. Pure function of the name and the
// injected token table; the same name always yields the same id.

/// Ordinal glyphs used in tier markers (`·壹型`, `·贰型`, ...).
const TIER_GLYPHS: &[char] = &['壹', '贰', '叄', '肆', '伍', '陆', '柒', '捌', '玖'];

pub struct Normalizer {
    tokens: Vec<(String, String)>,
}

impl Normalizer {
    pub fn new(tokens: &[(String, String)]) -> Self {
        Self { tokens: tokens.to_vec() }
    }

    /// Slug for a display name:
    /// strip the `·<tier>型` marker, substitute each known substring
    /// with its romanized token (table order, first occurrence only),
    /// rewrite the literal `50式` / `M.I.` prefixes, collapse and trim
    /// separators, lowercase, then re-append `-1`/`-2`/`-3` when a
    /// tier marker was stripped.
    ///
    /// Names with no mapped substrings still come out lowercased and
    /// trimmed; unmapped text is accepted as-is.
    pub fn normalize(&self, name: &str) -> String {
        let tier = tier_of(name);

        let mut id = strip_tier_markers(name);

        for (src, token) in &self.tokens {
            id = id.replacen(src.as_str(), &format!("{token}-"), 1);
        }

        id = id.replace("50式", "50shi-");
        id = id.replace("M.I.", "mi-");

        id = collapse_separators(&id);
        id = id.trim_matches('-').to_string();
        id = id.to_ascii_lowercase();

        match tier {
            Some(n) => format!("{id}-{n}"),
            None => id,
        }
    }
}

/// Which tier suffix to re-append. Only the first three ordinals map to
/// a numeric suffix; higher ones are stripped without one.
fn tier_of(name: &str) -> Option<u8> {
    if name.contains("·壹型") {
        Some(1)
    } else if name.contains("·贰型") {
        Some(2)
    } else if name.contains("·叄型") {
        Some(3)
    } else {
        None
    }
}

fn strip_tier_markers(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let chars: Vec<char> = name.chars().collect();
    let mut i = 0usize;
    while i < chars.len() {
        if chars[i] == '·'
            && i + 2 < chars.len()
            && TIER_GLYPHS.contains(&chars[i + 1])
            && chars[i + 2] == '型'
        {
            i += 3;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

fn collapse_separators(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_dash = false;
    for ch in s.chars() {
        if ch == '-' {
            if !prev_dash { out.push('-'); prev_dash = true; }
        } else {
            out.push(ch);
            prev_dash = false;
        }
    }
    out
}
