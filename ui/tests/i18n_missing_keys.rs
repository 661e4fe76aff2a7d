//! Translation completeness guard.
//!
//! Every locale under `i18n/` must define every message of the fallback
//! (en-US) file, and every key used in `src/` (through `t!("...")` or a scene
//! descriptor's `*_key: "..."` field) must exist in the fallback. Parsing is line-based: `key = value` lines count as messages;
//! comments, group headers and continuation lines are skipped.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "soundstage-ui.ftl";
const FALLBACK: &str = "en-US";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn message_keys(src: &str) -> Vec<String> {
    src.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with(' '))
        .filter_map(|line| line.split_once('='))
        .map(|(key, _)| key.trim())
        .filter(|key| !key.is_empty() && key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'))
        .map(str::to_string)
        .collect()
}

fn read_locale(locale: &str) -> String {
    let path = crate_root().join("i18n").join(locale).join(FTL_FILENAME);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("cannot read {path:?}: {err}"))
}

fn locales() -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(crate_root().join("i18n"))
        .expect("i18n directory exists")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    dirs.sort();
    dirs
}

fn source_keys(dir: &Path, found: &mut BTreeSet<String>) {
    for entry in fs::read_dir(dir).expect("readable source dir").flatten() {
        let path = entry.path();
        if path.is_dir() {
            source_keys(&path, found);
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let content = fs::read_to_string(&path).unwrap_or_default();
        let chunks = content
            .split("t!(\"")
            .skip(1)
            .chain(content.split("_key: \"").skip(1));
        for chunk in chunks {
            if let Some((key, _)) = chunk.split_once('"') {
                if !key.is_empty() && key.chars().all(|c| c.is_ascii_lowercase() || c == '-') {
                    found.insert(key.to_string());
                }
            }
        }
    }
}

#[test]
fn fallback_has_no_duplicate_keys() {
    let keys = message_keys(&read_locale(FALLBACK));
    assert!(!keys.is_empty(), "fallback locale defines no messages");

    let mut seen = BTreeSet::new();
    let dups: Vec<_> = keys.iter().filter(|k| !seen.insert(k.as_str())).collect();
    assert!(dups.is_empty(), "duplicate keys in {FALLBACK}: {dups:?}");
}

#[test]
fn every_locale_covers_the_fallback() {
    let fallback: BTreeSet<_> = message_keys(&read_locale(FALLBACK)).into_iter().collect();
    let mut failures = Vec::new();

    for locale in locales() {
        let keys: BTreeSet<_> = message_keys(&read_locale(&locale)).into_iter().collect();
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing:\n  {}", missing.join("\n  ")));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}",
        failures.join("\n\n")
    );
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback: BTreeSet<_> = message_keys(&read_locale(FALLBACK)).into_iter().collect();
    let mut referenced = BTreeSet::new();
    source_keys(&crate_root().join("src"), &mut referenced);

    assert!(!referenced.is_empty(), "no t!() usages found under src/");
    let missing: Vec<_> = referenced.difference(&fallback).cloned().collect();
    assert!(missing.is_empty(), "keys used in src/ but missing from {FALLBACK}: {missing:?}");
}
