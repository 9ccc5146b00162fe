use crate::error::{CatalogError, Result};
use crate::item::{Item, ItemRecord};
use crate::policy::EconomyPolicy;
use crate::statics;
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::{
    collections::HashMap,
    fs,
    io::Read,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    GzipJson,
}

/// The catalog document as produced by the generator.
#[derive(Debug, Deserialize)]
struct DocumentRecord {
    #[serde(default)]
    title: String,
    #[serde(default, alias = "version")]
    mc_version: String,
    #[serde(default)]
    generated_at: String,
    #[serde(default)]
    currency: String,
    #[serde(default)]
    currency_note: String,
    #[serde(default)]
    pricing_note: String,
    #[serde(default, alias = "policy")]
    economy_policy: Option<EconomyPolicy>,
    #[serde(default)]
    items_count: Option<usize>,
    items: Vec<ItemRecord>,
}

/// A fully validated catalog. Either every record loads, or the whole document is
/// rejected; callers never see a partial item list.
#[derive(Debug, Clone)]
pub struct CatalogDocument {
    pub source_path: Option<PathBuf>,
    pub format: DocumentFormat,
    pub title: String,
    pub version: String,
    pub generated_at: String,
    pub currency: String,
    pub currency_note: String,
    pub pricing_note: String,
    pub policy: Option<EconomyPolicy>,
    pub items: Vec<Item>,
    /// `key -> position in items`, built once on load.
    key_index: HashMap<String, usize>,
}

impl CatalogDocument {
    pub fn load_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let format = detect_format(path, &bytes);
        let mut doc = Self::from_bytes(&bytes, format)?;
        doc.source_path = Some(path.to_path_buf());
        Ok(doc)
    }

    pub fn from_bytes(bytes: &[u8], format: DocumentFormat) -> Result<Self> {
        let text_bytes = match format {
            DocumentFormat::Json => bytes.to_vec(),
            DocumentFormat::GzipJson => {
                let mut decoder = GzDecoder::new(bytes);
                let mut out = Vec::new();
                decoder
                    .read_to_end(&mut out)
                    .map_err(CatalogError::Gzip)?;
                out
            }
        };
        let text = std::str::from_utf8(&text_bytes)?;
        let mut doc = Self::parse(text)?;
        doc.format = format;
        Ok(doc)
    }

    /// Parse and validate document text (JSON, or JSON5 for hand-edited catalogs).
    pub fn parse(text: &str) -> Result<Self> {
        let record: DocumentRecord =
            json5::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?;

        if let Some(declared) = record.items_count
            && declared != record.items.len()
        {
            return Err(CatalogError::ItemCountMismatch {
                declared,
                actual: record.items.len(),
            });
        }

        let items = record
            .items
            .into_iter()
            .enumerate()
            .map(|(idx, rec)| Item::from_record(idx, rec))
            .collect::<Result<Vec<_>>>()?;
        let key_index = build_key_index(&items)?;

        let currency = if record.currency.trim().is_empty() {
            statics::DEFAULT_CURRENCY.to_string()
        } else {
            record.currency
        };

        Ok(Self {
            source_path: None,
            format: DocumentFormat::Json,
            title: record.title,
            version: record.mc_version,
            generated_at: record.generated_at,
            currency,
            currency_note: record.currency_note,
            pricing_note: record.pricing_note,
            policy: record.economy_policy,
            items,
            key_index,
        })
    }

    pub fn item_by_key(&self, key: &str) -> Option<&Item> {
        self.key_index.get(key).and_then(|&idx| self.items.get(idx))
    }

    /// Display name for an item key, used by the anti-dumping table.
    pub fn display_name(&self, key: &str) -> Option<&str> {
        self.item_by_key(key).map(|item| item.name_display.as_str())
    }
}

fn detect_format(path: &Path, bytes: &[u8]) -> DocumentFormat {
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        return DocumentFormat::GzipJson;
    }
    // Gzip magic: 1F 8B
    if bytes.len() >= 2 && bytes[0] == 0x1F && bytes[1] == 0x8B {
        return DocumentFormat::GzipJson;
    }
    DocumentFormat::Json
}

fn build_key_index(items: &[Item]) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        if index.insert(item.key.clone(), idx).is_some() {
            return Err(CatalogError::DuplicateKey(item.key.clone()));
        }
    }
    Ok(index)
}

/// Where a catalog document comes from. The store only cares about the result.
pub trait CatalogSource: Send {
    fn describe(&self) -> String;
    fn load(&self) -> Result<CatalogDocument>;
}

/// A catalog file on disk (`.json`, `.json5` or `.gz`).
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<CatalogDocument> {
        CatalogDocument::load_path(&self.path)
    }
}

/// Catalog text already in memory (embedded constant, clipboard, test fixture).
#[derive(Debug, Clone)]
pub struct TextSource {
    pub name: String,
    pub text: String,
}

impl CatalogSource for TextSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn load(&self) -> Result<CatalogDocument> {
        CatalogDocument::parse(&self.text)
    }
}
