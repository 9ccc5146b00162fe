// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

// Catalog defaults
pub const DEFAULT_PAGE_STEP: usize = 60;
pub const DEFAULT_CURRENCY: &str = "ар";
pub const FILTER_ALL: &str = "all";

// Obtainability tags as they appear in generated catalogs (plus English aliases).
pub const TAG_FARMABLE: &str = "Фармится";
pub const TAG_LIMITED: &str = "Ограниченный";
pub const TAG_STANDARD: &str = "Обычный";
pub const TAG_FARMABLE_EN: &str = "farmable";
pub const TAG_LIMITED_EN: &str = "limited";
pub const TAG_STANDARD_EN: &str = "standard";

// CSS-like badge classes (also used to pick badge colors in the viewer).
pub const BADGE_FARMABLE: &str = "badge-farmable";
pub const BADGE_LIMITED: &str = "badge-limited";
pub const BADGE_STANDARD: &str = "badge-standard";
pub const BADGE_OTHER: &str = "badge-other";

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "Wind Prices";

pub const EN_BTN_OPEN: &str = "Open...";
pub const EN_BTN_POLICY: &str = "Economic Code";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";
pub const EN_BTN_CLEAR: &str = "Clear";
pub const EN_BTN_SHOW_MORE: &str = "Show more";

pub const EN_WINDOW_POLICY: &str = "Economic Code";

pub const EN_HOME_LOADING: &str = "Loading catalog...";
pub const EN_HOME_FAILED: &str = "The catalog could not be loaded. Open another file to start over.";
pub const EN_HOME_INSTRUCTIONS: &str = "Open a price catalog (.json/.gz) to begin.";

pub const EN_HEADING_FILTERS: &str = "Filters";
pub const EN_HEADING_CATEGORIES: &str = "Categories";
pub const EN_HEADING_OBTAINABILITY: &str = "Obtainability";

pub const EN_LABEL_SEARCH: &str = "Search:";
pub const EN_HINT_SEARCH: &str = "name, key or category";
pub const EN_LABEL_SORT: &str = "Sort:";
pub const EN_LABEL_PRICE: &str = "Price:";
pub const EN_LABEL_ALL: &str = "All";
pub const EN_SEARCH_NO_MATCHES: &str = "Nothing matches the current filters.";

pub const EN_SORT_PRICE_ASC: &str = "Price ^";
pub const EN_SORT_PRICE_DESC: &str = "Price v";
pub const EN_SORT_NAME_ASC: &str = "Name A-Z";
pub const EN_SORT_NAME_DESC: &str = "Name Z-A";

pub const EN_PRICE_MODE_UNIT: &str = "Per unit";
pub const EN_PRICE_MODE_STACK: &str = "Per trade unit";

pub const EN_COL_NAME: &str = "Name";
pub const EN_COL_CATEGORY: &str = "Category";
pub const EN_COL_OBTAINABILITY: &str = "Obtainability";
pub const EN_COL_TRADE_UNIT: &str = "Unit";
pub const EN_COL_PRICE: &str = "Price";
pub const EN_COL_MINIMUM: &str = "Min. price";

pub const EN_PRICE_UNDETERMINED: &str = "undetermined";
pub const EN_PER_UNIT: &str = "per unit";
pub const EN_PER_PREFIX: &str = "per";

pub const EN_STATS_TOTAL: &str = "total";
pub const EN_STATS_MATCHED: &str = "matched";
pub const EN_STATS_SHOWN: &str = "shown";
pub const EN_STATS_UNKNOWN: &str = "undetermined";
pub const EN_STATS_AVERAGE: &str = "avg";

// Policy tables
pub const EN_TABLE_TAXES: &str = "Taxes";
pub const EN_TABLE_LICENSES: &str = "Licenses";
pub const EN_TABLE_SANCTIONS: &str = "Sanctions";
pub const EN_TABLE_ANTI_DUMPING: &str = "Anti-dumping minimums";
pub const EN_TABLE_ARTICLES: &str = "Articles";

pub const EN_COL_TAX: &str = "Tax";
pub const EN_COL_RATE: &str = "Rate";
pub const EN_COL_PERIOD: &str = "Period";
pub const EN_COL_TRADING: &str = "Trading";
pub const EN_COL_SERVICE: &str = "Service";
pub const EN_COL_PREMIUM: &str = "Premium";
pub const EN_COL_CODE: &str = "Code";
pub const EN_COL_VIOLATION: &str = "Violation";
pub const EN_COL_FIRST: &str = "First";
pub const EN_COL_REPEAT: &str = "Repeat";
pub const EN_COL_SYSTEMATIC: &str = "Systematic";
pub const EN_COL_ITEM: &str = "Item";
pub const EN_COL_QUANTITY: &str = "Qty";
pub const EN_COL_ARTICLE: &str = "Article";
pub const EN_COL_TITLE: &str = "Title";
pub const EN_COL_SUMMARY: &str = "Summary";

pub const EN_TAX_TURNOVER_TRADING: &str = "Turnover (trading)";
pub const EN_TAX_TURNOVER_SERVICE: &str = "Turnover (service)";
pub const EN_TAX_TURNOVER_PREMIUM: &str = "Turnover (premium)";
pub const EN_TAX_FORMULA: &str = "Turnover formula";
pub const EN_TAX_BUSINESS_SALE: &str = "Business sale";
pub const EN_TAX_LAND_PER_BLOCK: &str = "Spawn land, per block";
pub const EN_TAX_MONTHLY_RENT: &str = "Business rent, monthly";
pub const EN_LICENSE_SPAWN: &str = "Spawn";
pub const EN_LICENSE_OUTSIDE: &str = "Outside spawn";

pub const EN_LABEL_APPROVED: &str = "Approved:";
pub const EN_LITERAL_DASH: &str = "-";
pub const EN_EMPTY: &str = "";
