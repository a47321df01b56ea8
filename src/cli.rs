// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{PageKind, Params};
use crate::data::Tables;
use crate::file;
use crate::page::HttpSource;
use crate::progress::ConsoleProgress;
use crate::scrape;

pub fn parse() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params, env::args().skip(1))?;
    Ok(params)
}

pub fn run(params: Params) -> Result<(), Box<dyn std::error::Error>> {
    let tables = match &params.tables {
        Some(path) => Tables::load(path)?,
        None => Tables::builtin(),
    };

    if params.list_targets {
        for name in &tables.targets {
            println!("{name}");
        }
        return Ok(());
    }

    let mut source = HttpSource::new(params.page.sub_type_id());

    // Single-page dump: print the rendered text and stop.
    if let Some(entry_id) = params.entry_id {
        let snap = scrape::dump_page(&mut source, entry_id)?;
        println!("=== {} ===", snap.title);
        println!("{}", snap.text);
        return Ok(());
    }

    match params.page {
        PageKind::Equipment => {
            let mut progress = ConsoleProgress::new();
            let bundle =
                scrape::collect_equipment(&mut source, &tables, &params, Some(&mut progress))?;
            let written = file::write_outputs(&params.out, &bundle)?;
            println!(
                "\nDone! Scraped {} equipment in {} sets.",
                bundle.records.len(),
                bundle.sets.len()
            );
            println!("Wrote {} files under {}", written.len(), params.out.display());
            Ok(())
        }
        PageKind::Operator | PageKind::Weapon => {
            Err("operator/weapon pages are dump-only; pass --entry <ID>".into())
        }
    }
}

pub fn parse_cli(
    params: &mut Params,
    mut args: impl Iterator<Item = String>,
) -> Result<(), Box<dyn std::error::Error>> {
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--page" => {
                let v = args.next().ok_or("Missing value for --page")?;
                params.page = match v.to_ascii_lowercase().as_str() {
                    "equipment" => PageKind::Equipment,
                    "operator" => PageKind::Operator,
                    "weapon" => PageKind::Weapon,
                    other => return Err(format!("Unknown page: {}", other).into()),
                };}
            "--range" => {
                let v = args.next().ok_or("Missing value for --range")?;
                let (lo, hi) = parse_range(&v)?;
                params.id_low = lo;
                params.id_high = hi;}
            "--limit" => {
                let v = args.next().ok_or("Missing value for --limit")?;
                params.limit = v.parse()?;}
            "--entry" => {
                let v = args.next().ok_or("Missing value for --entry")?;
                params.entry_id = Some(v.parse()?);}
            "-o" | "--out" => params.out = PathBuf::from(args.next().ok_or("Missing output path")?),
            "--tables" => params.tables = Some(PathBuf::from(args.next().ok_or("Missing tables path")?)),
            "--list-targets" => params.list_targets = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

fn parse_range(s: &str) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    let dash = s.find('-').ok_or_else(|| format!("Invalid range (want LO-HI): {}", s))?;
    let lo: u32 = s[..dash].trim().parse()?;
    let hi: u32 = s[dash + 1..].trim().parse()?;
    if lo > hi {
        return Err(format!("Invalid range: {}", s).into());
    }
    Ok((lo, hi))
}
