// SPDX-License-Identifier: PMPL-1.0-or-later

//! Export, reload and verification of the built-in bundles

use locale_symbols::export::{self, ExportFormat};
use locale_symbols::source::{self, BundleDocument, DocumentFormat};
use locale_symbols::{bundles, verify, LocaleId, SymbolTable, SymbolValue};
use std::fs;
use tempfile::TempDir;

fn hi_in() -> &'static SymbolTable {
    let locale = LocaleId::parse("hi_IN").unwrap();
    bundles::table_for(&locale).expect("hi_IN is built in")
}

#[test]
fn builtin_bundle_verifies_clean() {
    let findings = verify::check(hi_in());
    assert!(findings.is_empty(), "unexpected findings: {:?}", findings);
}

#[test]
fn json_export_reloads_to_equal_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out/hi_IN.json");
    export::write(hi_in(), ExportFormat::Json, &path).unwrap();

    let reloaded = source::load_file(&path).unwrap();
    assert_eq!(&reloaded, hi_in());
    assert_eq!(verify::fingerprint(&reloaded), verify::fingerprint(hi_in()));
}

#[test]
fn yaml_export_preserves_sharing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hi_IN.yaml");
    export::write(hi_in(), ExportFormat::Yaml, &path).unwrap();

    let reloaded = source::load_file(&path).unwrap();
    let lists: Vec<_> = ["QuarterNames", "islamic.QuarterNames", "roc.QuarterNames"]
        .iter()
        .map(|k| match reloaded.get(k).unwrap() {
            SymbolValue::List(list) => list.clone(),
            other => panic!("{} should be a list, got {:?}", k, other),
        })
        .collect();
    assert!(lists[0].shares_storage_with(&lists[1]));
    assert!(lists[1].shares_storage_with(&lists[2]));
}

#[test]
fn exported_document_names_shared_lists() {
    let doc = export::to_document(hi_in());
    // eleven shared lists in the source data, each used by two or more keys
    assert_eq!(doc.shared.len(), 11);
    assert!(doc.shared.contains_key("QuarterNames"));
    assert!(doc.shared.contains_key("java.time.buddhist.DatePatterns"));
    assert_eq!(doc.entries.len(), hi_in().len());

    let json = serde_json::to_string(&doc).unwrap();
    let parsed = BundleDocument::parse(&json, DocumentFormat::Json).unwrap();
    assert_eq!(parsed, doc);
}

#[test]
fn nickel_export_is_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hi_IN.ncl");
    export::write(hi_in(), ExportFormat::Nickel, &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(r#"locale = "hi_IN","#));
    assert!(content.contains(r#""field.year" = "वर्ष","#));
}

#[test]
fn directory_bundles_load_alongside_builtins() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("en_US.yaml"),
        "locale: en_US\nentries:\n  field.year: Year\n",
    )
    .unwrap();
    export::write(hi_in(), ExportFormat::Json, &dir.path().join("hi_IN.json")).unwrap();

    let tables = source::load_dir(dir.path()).unwrap();
    let locales: Vec<String> = tables.iter().map(|t| t.locale().to_string()).collect();
    assert_eq!(locales, vec!["en_US", "hi_IN"]);

    let listed = source::list_bundles(&[dir.path().to_path_buf()]);
    assert_eq!(listed.len(), 2);
}
