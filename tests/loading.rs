use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use wind_prices::{
    BrowserConfig, CatalogDocument, CatalogError, CatalogSource, DocumentFormat, FileSource,
    TextSource,
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json")
}

fn gzip(bytes: &[u8]) -> Result<Vec<u8>> {
    use flate2::{Compression, GzBuilder};
    use std::io::Write;
    let mut encoder = GzBuilder::new()
        .mtime(0)
        .write(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}

#[test]
fn fixture_loads_with_metadata_and_policy() -> Result<()> {
    let doc = CatalogDocument::load_path(&fixture_path())?;

    assert_eq!(doc.format, DocumentFormat::Json);
    assert_eq!(doc.title, "Винд цены");
    assert_eq!(doc.version, "1.21.4");
    assert_eq!(doc.currency, "ар");
    assert_eq!(doc.items.len(), 6);
    assert_eq!(doc.source_path.as_deref(), Some(fixture_path().as_path()));

    let policy = doc.policy.as_ref().ok_or("policy missing")?;
    assert_eq!(policy.code_title, "Экономический кодекс сервера WIND");
    assert_eq!(policy.anti_dumping.minimum_prices.len(), 2);
    assert_eq!(policy.licenses_spawn.trading_ars, Some(32.0));
    Ok(())
}

#[test]
fn price_ars_derives_both_prices() -> Result<()> {
    let doc = CatalogDocument::load_path(&fixture_path())?;

    let diamond = doc.item_by_key("diamond").ok_or("diamond missing")?;
    assert_eq!(diamond.price_stack, Some(128.0));
    assert_eq!(diamond.price_unit, Some(2.0));
    assert_eq!(diamond.trade_unit_count, 64);
    assert_eq!(diamond.trade_unit_label, "стак");

    let elytra = doc.item_by_key("elytra").ok_or("elytra missing")?;
    assert_eq!(elytra.price_stack, None);
    assert_eq!(elytra.price_unit, None);
    assert_eq!(elytra.price_note.as_deref(), Some("неопределенно"));

    // Zero is a real price, not an unknown one.
    let sapling = doc.item_by_key("spruce_sapling").ok_or("sapling missing")?;
    assert_eq!(sapling.price_stack, Some(0.0));
    assert_eq!(sapling.name_alt, "spruce sapling");

    assert_eq!(doc.display_name("beacon"), Some("Маяк"));
    assert_eq!(doc.display_name("netherite_ingot"), None);
    Ok(())
}

#[test]
fn gzip_catalog_is_detected_by_extension_and_magic() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let gz = gzip(&std::fs::read(fixture_path())?)?;

    let named = dir.path().join("items.json.gz");
    std::fs::write(&named, &gz)?;
    let doc = CatalogDocument::load_path(&named)?;
    assert_eq!(doc.format, DocumentFormat::GzipJson);
    assert_eq!(doc.items.len(), 6);

    // Same bytes without the extension: the magic number decides.
    let unnamed = dir.path().join("items.bin");
    std::fs::write(&unnamed, &gz)?;
    let doc = CatalogDocument::load_path(&unnamed)?;
    assert_eq!(doc.format, DocumentFormat::GzipJson);
    Ok(())
}

#[test]
fn bad_gzip_header_is_rejected() {
    let err = CatalogDocument::from_bytes(b"{ \"items\": [] }", DocumentFormat::GzipJson)
        .expect_err("plain text is not gzip");
    assert!(matches!(err, CatalogError::Gzip(_)), "got {err:?}");
}

#[test]
fn missing_file_reports_path() {
    let path = Path::new("/nonexistent/wind/items.json");
    let err = CatalogDocument::load_path(path).expect_err("missing file must fail");
    match err {
        CatalogError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn missing_null_and_zero_prices_stay_distinct() -> Result<()> {
    let text = r#"{
        "items": [
            { "key": "a", "name_ru": "А", "category": "C", "price_unit": 0 },
            { "key": "b", "name_ru": "Б", "category": "C", "price_unit": null },
            { "key": "c", "name_ru": "В", "category": "C" }
        ]
    }"#;
    let doc = CatalogDocument::parse(text)?;
    let prices: Vec<Option<f64>> = doc.items.iter().map(|i| i.price_unit).collect();
    assert_eq!(prices, vec![Some(0.0), None, None]);
    Ok(())
}

#[test]
fn invalid_documents_are_rejected_whole() {
    let cases = [
        (
            "zero trade count",
            r#"{ "items": [{ "key": "a", "name_ru": "А", "category": "C", "trade_count": 0 }] }"#,
        ),
        (
            "blank name",
            r#"{ "items": [{ "key": "a", "name_ru": "  ", "category": "C" }] }"#,
        ),
        (
            "duplicate key",
            r#"{ "items": [
                { "key": "a", "name_ru": "А", "category": "C" },
                { "key": "a", "name_ru": "Б", "category": "C" }
            ] }"#,
        ),
        (
            "count mismatch",
            r#"{ "items_count": 2, "items": [{ "key": "a", "name_ru": "А", "category": "C" }] }"#,
        ),
        ("no items", r#"{ "title": "empty" }"#),
        ("not json", "<html></html>"),
    ];
    for (label, text) in cases {
        assert!(CatalogDocument::parse(text).is_err(), "{label} was accepted");
    }
}

#[test]
fn sources_describe_themselves_and_load() -> Result<()> {
    let file = FileSource::new(fixture_path());
    assert!(file.describe().ends_with("catalog.json"));
    assert_eq!(file.load()?.items.len(), 6);

    let text = TextSource {
        name: "inline".to_string(),
        text: r#"{ items: [{ key: "a", name_ru: "А", category: "C", price_ars: 3, }] }"#
            .to_string(),
    };
    assert_eq!(text.describe(), "inline");
    let doc = text.load()?;
    assert_eq!(doc.currency, "ар");
    assert_eq!(doc.items[0].price_unit, Some(3.0));
    Ok(())
}

#[test]
fn config_file_overrides_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("wind-prices.json5");
    std::fs::write(
        &path,
        "{\n  // show fewer rows per page\n  page_step: 20,\n  default_sort: 'name_asc',\n}\n",
    )?;

    let config = BrowserConfig::load_path(&path)?;
    assert_eq!(config.page_step, 20);
    assert_eq!(config.default_sort, wind_prices::SortMode::NameAsc);
    assert_eq!(config.default_price_mode, wind_prices::PriceMode::Stack);

    let missing = BrowserConfig::load_path(&dir.path().join("absent.json5"));
    assert!(matches!(missing, Err(CatalogError::Io { .. })));
    Ok(())
}
