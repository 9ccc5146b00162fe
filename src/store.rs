//! The catalog store: canonical item list, the current view parameters, and the
//! pure functions that turn one into the other.
//!
//! `compute_visible` is the whole filtering/sorting contract. The store only caches
//! its result between events so that "show more" can slice without re-sorting; a
//! full recompute always yields the same rows.

use crate::config::BrowserConfig;
use crate::document::CatalogDocument;
use crate::error::CatalogError;
use crate::item::Item;
use crate::normalize;
use crate::policy::PolicyTable;
use crate::projection::{PriceMode, RowView, active_value, project_row};
use crate::stats::{CatalogStats, compute_stats};
use crate::statics;
use clap::ValueEnum;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::NameAsc,
        SortMode::NameDesc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortMode::PriceAsc => statics::EN_SORT_PRICE_ASC,
            SortMode::PriceDesc => statics::EN_SORT_PRICE_DESC,
            SortMode::NameAsc => statics::EN_SORT_NAME_ASC,
            SortMode::NameDesc => statics::EN_SORT_NAME_DESC,
        }
    }
}

/// An exact-match filter, or no filter at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Exact(String),
}

impl Filter {
    /// `"all"` (or an empty value) clears the filter; anything else must match exactly.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == statics::FILTER_ALL {
            Filter::All
        } else {
            Filter::Exact(value.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Exact(want) => want == value,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => statics::FILTER_ALL,
            Filter::Exact(v) => v,
        }
    }
}

/// Everything that decides which rows match and in what order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewParams {
    /// Raw query text; folded at filter time.
    pub query: String,
    pub category: Filter,
    pub obtainability: Filter,
    pub sort: SortMode,
    pub price_mode: PriceMode,
}

fn passes(item: &Item, view: &ViewParams, folded_query: &str) -> bool {
    view.category.matches(&item.category)
        && view.obtainability.matches(&item.obtainability)
        && (folded_query.is_empty() || item.search_index.contains(folded_query))
}

fn by_name(a: &Item, b: &Item) -> Ordering {
    normalize::collate(&a.collation_key, &b.collation_key)
}

/// Ordering used by every sort mode.
///
/// Price modes: unknown prices go last in both directions; two unknowns fall back
/// to ascending name even when sorting by price descending. Equal keys compare
/// `Equal` so a stable sort keeps insertion order.
pub fn compare_items(a: &Item, b: &Item, sort: SortMode, mode: PriceMode) -> Ordering {
    match sort {
        SortMode::PriceAsc | SortMode::PriceDesc => {
            match (active_value(a, mode), active_value(b, mode)) {
                (Some(pa), Some(pb)) if sort == SortMode::PriceAsc => pa.total_cmp(&pb),
                (Some(pa), Some(pb)) => pb.total_cmp(&pa),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => by_name(a, b),
            }
        }
        SortMode::NameAsc => by_name(a, b),
        SortMode::NameDesc => by_name(b, a),
    }
}

/// Positions into `items` of the matching rows, in display order.
pub fn compute_visible_indices(items: &[Item], view: &ViewParams) -> Vec<usize> {
    let folded_query = normalize::fold(&view.query);
    let mut matched: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| passes(item, view, &folded_query))
        .map(|(idx, _)| idx)
        .collect();
    // `sort_by` is stable: ties keep insertion order.
    matched.sort_by(|&a, &b| compare_items(&items[a], &items[b], view.sort, view.price_mode));
    matched
}

/// Filtered and sorted rows for `view`. Deterministic, no hidden state.
pub fn compute_visible<'a>(items: &'a [Item], view: &ViewParams) -> Vec<&'a Item> {
    compute_visible_indices(items, view)
        .into_iter()
        .map(|idx| &items[idx])
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Terminal: the session has to be restarted with a new store.
    Failed(String),
}

/// Session state plus the command/query surface the viewer talks to.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    load: LoadState,
    document: Option<CatalogDocument>,
    view: ViewParams,
    page_step: usize,
    visible_limit: usize,
    matched: Vec<usize>,
}

impl CatalogStore {
    pub fn new(config: &BrowserConfig) -> Self {
        let page_step = config.page_step.max(1);
        Self {
            load: LoadState::Loading,
            document: None,
            view: ViewParams {
                sort: config.default_sort,
                price_mode: config.default_price_mode,
                ..ViewParams::default()
            },
            page_step,
            visible_limit: page_step,
            matched: Vec::new(),
        }
    }

    /// Complete the one load of this session. Returns `false` if a load already
    /// finished; the result is then ignored.
    pub fn finish_load(
        &mut self,
        result: std::result::Result<CatalogDocument, CatalogError>,
    ) -> bool {
        if self.load != LoadState::Loading {
            log::warn!("ignoring catalog load result: store is already {:?}", self.load);
            return false;
        }
        match result {
            Ok(doc) => {
                log::info!(
                    "catalog loaded: {} items, version {:?}, generated {:?}",
                    doc.items.len(),
                    doc.version,
                    doc.generated_at
                );
                self.document = Some(doc);
                self.load = LoadState::Ready;
            }
            Err(e) => {
                log::warn!("catalog load failed: {e}");
                self.document = None;
                self.load = LoadState::Failed(e.to_string());
            }
        }
        self.visible_limit = self.page_step;
        self.recompute();
        true
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn document(&self) -> Option<&CatalogDocument> {
        self.document.as_ref()
    }

    pub fn items(&self) -> &[Item] {
        match self.document.as_ref() {
            Some(doc) => &doc.items,
            None => &[],
        }
    }

    pub fn currency(&self) -> &str {
        self.document
            .as_ref()
            .map_or(statics::DEFAULT_CURRENCY, |d| d.currency.as_str())
    }

    pub fn view(&self) -> &ViewParams {
        &self.view
    }

    pub fn visible_limit(&self) -> usize {
        self.visible_limit
    }

    pub fn page_step(&self) -> usize {
        self.page_step
    }

    fn recompute(&mut self) {
        self.matched = compute_visible_indices(self.items(), &self.view);
        log::debug!(
            "recomputed view {:?}: {} of {} match, limit {}",
            self.view,
            self.matched.len(),
            self.items().len(),
            self.visible_limit
        );
    }

    fn reset_and_recompute(&mut self) {
        self.visible_limit = self.page_step;
        self.recompute();
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.view.query = text.into();
        self.reset_and_recompute();
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    pub fn set_category_filter(&mut self, value: &str) {
        self.view.category = Filter::parse(value);
        self.reset_and_recompute();
    }

    pub fn set_obtainability_filter(&mut self, value: &str) {
        self.view.obtainability = Filter::parse(value);
        self.reset_and_recompute();
    }

    pub fn set_sort_mode(&mut self, sort: SortMode) {
        self.view.sort = sort;
        self.reset_and_recompute();
    }

    /// Switching unit/stack display keeps the current page depth; the order is
    /// still recomputed because price sorting follows the active price.
    pub fn set_price_mode(&mut self, mode: PriceMode) {
        self.view.price_mode = mode;
        self.recompute();
    }

    pub fn show_more(&mut self) {
        self.visible_limit = self.visible_limit.saturating_add(self.page_step);
    }

    pub fn has_more(&self) -> bool {
        self.matched.len() > self.visible_limit
    }

    /// All matching items in display order, ignoring the page limit.
    pub fn matched_items(&self) -> Vec<&Item> {
        let items = self.items();
        self.matched.iter().map(|&idx| &items[idx]).collect()
    }

    /// The first `visible_limit` matching items.
    pub fn visible_items(&self) -> Vec<&Item> {
        let items = self.items();
        self.matched
            .iter()
            .take(self.visible_limit)
            .map(|&idx| &items[idx])
            .collect()
    }

    pub fn visible_rows(&self) -> Vec<RowView> {
        let policy = self.document.as_ref().and_then(|d| d.policy.as_ref());
        let currency = self.currency();
        self.visible_items()
            .into_iter()
            .map(|item| project_row(item, self.view.price_mode, currency, policy))
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        compute_stats(
            self.items(),
            &self.matched_items(),
            self.visible_limit,
            self.view.price_mode,
        )
    }

    /// Items per category over the full set, in first-appearance order.
    pub fn category_counts(&self) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for item in self.items() {
            *counts.entry(item.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct obtainability tags, in first-appearance order.
    pub fn obtainability_options(&self) -> Vec<String> {
        let mut seen = IndexSet::new();
        for item in self.items() {
            if !item.obtainability.is_empty() {
                seen.insert(item.obtainability.as_str());
            }
        }
        seen.into_iter().map(str::to_string).collect()
    }

    pub fn policy_tables(&self) -> Vec<PolicyTable> {
        let Some(doc) = self.document.as_ref() else {
            return Vec::new();
        };
        let Some(policy) = doc.policy.as_ref() else {
            return Vec::new();
        };
        policy.tables(&doc.currency, |key| doc.display_name(key))
    }
}
