//! The economic-code sub-document that ships alongside the price list, and the
//! reference tables derived from it.
//!
//! Every field is defaulted: catalogs produced by older generators may carry only
//! part of the code, and an absent section simply yields an empty table.

use crate::{projection::format_amount, statics};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EconomyPolicy {
    pub code_title: String,
    pub approval: Approval,
    pub system_type: String,
    pub principles: Vec<String>,
    pub turnover_tax: TurnoverTax,
    pub business_sale_tax_percent: Option<f64>,
    pub business_sale_tax_note: String,
    pub mandatory_payments: Vec<String>,
    pub spawn_land_price_per_block_ars: Option<f64>,
    pub monthly_business_rent_ars: Option<f64>,
    pub size_coefficients: Vec<String>,
    pub business_types: Vec<String>,
    pub licenses_spawn: LicenseFees,
    #[serde(alias = "licenses_outside_spawn")]
    pub licenses_outside_spawn_2weeks: LicenseFees,
    pub sanctions: Vec<Sanction>,
    pub anti_dumping: AntiDumping,
    pub article_summary: Vec<ArticleSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Approval {
    pub date: String,
    pub officials: Vec<Official>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Official {
    pub role: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TurnoverTax {
    pub formula: String,
    pub trading: String,
    pub service: String,
    pub premium: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LicenseFees {
    pub period: String,
    pub trading_ars: Option<f64>,
    pub service_ars: Option<f64>,
    pub premium_ars: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Sanction {
    pub code: String,
    pub violation: String,
    pub first: String,
    pub repeat: String,
    pub systematic: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AntiDumping {
    pub rule: String,
    pub minimum_prices: Vec<MinimumPrice>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MinimumPrice {
    pub key: String,
    pub trade_count: u32,
    #[serde(alias = "min_price")]
    pub min_price_ars: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArticleSummary {
    pub article: String,
    pub title: String,
    pub summary: String,
}

/// A titled grid of display strings; the viewer renders these verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyTable {
    pub title: &'static str,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl PolicyTable {
    fn new(title: &'static str, columns: &[&'static str]) -> Self {
        Self {
            title,
            columns: columns.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn money(value: Option<f64>, currency: &str) -> String {
    match value {
        Some(v) => format!("{} {currency}", format_amount(v)),
        None => statics::EN_LITERAL_DASH.to_string(),
    }
}

fn or_dash(text: &str) -> String {
    if text.trim().is_empty() {
        statics::EN_LITERAL_DASH.to_string()
    } else {
        text.to_string()
    }
}

impl EconomyPolicy {
    /// Anti-dumping floor for an item key, if the code sets one.
    pub fn minimum_price_for(&self, key: &str) -> Option<&MinimumPrice> {
        self.anti_dumping
            .minimum_prices
            .iter()
            .find(|m| m.key == key)
    }

    pub fn tax_table(&self, currency: &str) -> PolicyTable {
        let mut table = PolicyTable::new(
            statics::EN_TABLE_TAXES,
            &[statics::EN_COL_TAX, statics::EN_COL_RATE],
        );
        let tax = &self.turnover_tax;
        if !tax.formula.trim().is_empty() {
            table
                .rows
                .push(vec![statics::EN_TAX_FORMULA.to_string(), tax.formula.clone()]);
        }
        for (label, rate) in [
            (statics::EN_TAX_TURNOVER_TRADING, &tax.trading),
            (statics::EN_TAX_TURNOVER_SERVICE, &tax.service),
            (statics::EN_TAX_TURNOVER_PREMIUM, &tax.premium),
        ] {
            if !rate.trim().is_empty() {
                table.rows.push(vec![label.to_string(), rate.clone()]);
            }
        }
        if let Some(pct) = self.business_sale_tax_percent {
            let mut rate = format!("{}%", format_amount(pct));
            if !self.business_sale_tax_note.trim().is_empty() {
                rate = format!("{rate} ({})", self.business_sale_tax_note.trim());
            }
            table
                .rows
                .push(vec![statics::EN_TAX_BUSINESS_SALE.to_string(), rate]);
        }
        if self.spawn_land_price_per_block_ars.is_some() {
            table.rows.push(vec![
                statics::EN_TAX_LAND_PER_BLOCK.to_string(),
                money(self.spawn_land_price_per_block_ars, currency),
            ]);
        }
        if self.monthly_business_rent_ars.is_some() {
            table.rows.push(vec![
                statics::EN_TAX_MONTHLY_RENT.to_string(),
                money(self.monthly_business_rent_ars, currency),
            ]);
        }
        table
    }

    pub fn license_table(&self, currency: &str) -> PolicyTable {
        let mut table = PolicyTable::new(
            statics::EN_TABLE_LICENSES,
            &[
                statics::EN_COL_PERIOD,
                statics::EN_COL_TRADING,
                statics::EN_COL_SERVICE,
                statics::EN_COL_PREMIUM,
            ],
        );
        for (zone, fees) in [
            (statics::EN_LICENSE_SPAWN, &self.licenses_spawn),
            (statics::EN_LICENSE_OUTSIDE, &self.licenses_outside_spawn_2weeks),
        ] {
            if fees == &LicenseFees::default() {
                continue;
            }
            let period = if fees.period.trim().is_empty() {
                zone.to_string()
            } else {
                format!("{zone}: {}", fees.period.trim())
            };
            table.rows.push(vec![
                period,
                money(fees.trading_ars, currency),
                money(fees.service_ars, currency),
                money(fees.premium_ars, currency),
            ]);
        }
        table
    }

    pub fn sanction_table(&self) -> PolicyTable {
        let mut table = PolicyTable::new(
            statics::EN_TABLE_SANCTIONS,
            &[
                statics::EN_COL_CODE,
                statics::EN_COL_VIOLATION,
                statics::EN_COL_FIRST,
                statics::EN_COL_REPEAT,
                statics::EN_COL_SYSTEMATIC,
            ],
        );
        table.rows = self
            .sanctions
            .iter()
            .map(|s| {
                vec![
                    or_dash(&s.code),
                    or_dash(&s.violation),
                    or_dash(&s.first),
                    or_dash(&s.repeat),
                    or_dash(&s.systematic),
                ]
            })
            .collect();
        table
    }

    /// `item_name` resolves a key to a display name through the catalog; keys the
    /// catalog does not know are shown raw.
    pub fn anti_dumping_table<'a>(
        &self,
        currency: &str,
        item_name: impl Fn(&str) -> Option<&'a str>,
    ) -> PolicyTable {
        let mut table = PolicyTable::new(
            statics::EN_TABLE_ANTI_DUMPING,
            &[
                statics::EN_COL_ITEM,
                statics::EN_COL_QUANTITY,
                statics::EN_COL_MINIMUM,
            ],
        );
        table.rows = self
            .anti_dumping
            .minimum_prices
            .iter()
            .map(|m| {
                vec![
                    item_name(&m.key).unwrap_or(m.key.as_str()).to_string(),
                    m.trade_count.to_string(),
                    money(Some(m.min_price_ars), currency),
                ]
            })
            .collect();
        table
    }

    pub fn article_table(&self) -> PolicyTable {
        let mut table = PolicyTable::new(
            statics::EN_TABLE_ARTICLES,
            &[
                statics::EN_COL_ARTICLE,
                statics::EN_COL_TITLE,
                statics::EN_COL_SUMMARY,
            ],
        );
        table.rows = self
            .article_summary
            .iter()
            .map(|a| vec![or_dash(&a.article), or_dash(&a.title), or_dash(&a.summary)])
            .collect();
        table
    }

    /// All reference tables in display order, skipping empty ones.
    pub fn tables<'a>(
        &self,
        currency: &str,
        item_name: impl Fn(&str) -> Option<&'a str>,
    ) -> Vec<PolicyTable> {
        [
            self.tax_table(currency),
            self.license_table(currency),
            self.sanction_table(),
            self.anti_dumping_table(currency, item_name),
            self.article_table(),
        ]
        .into_iter()
        .filter(|t| !t.is_empty())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{EconomyPolicy, LicenseFees, MinimumPrice, Sanction};
    use pretty_assertions::assert_eq;

    fn sample() -> EconomyPolicy {
        let mut policy = EconomyPolicy::default();
        policy.turnover_tax.formula = "area / 2 + rate".to_string();
        policy.turnover_tax.trading = "10%".to_string();
        policy.business_sale_tax_percent = Some(7.0);
        policy.licenses_spawn = LicenseFees {
            period: "1 месяц".to_string(),
            trading_ars: Some(32.0),
            service_ars: Some(48.0),
            premium_ars: None,
        };
        policy.sanctions.push(Sanction {
            code: "ЭКС 4.1".to_string(),
            violation: "Демпинг".to_string(),
            first: "50 АР".to_string(),
            repeat: "100 АР".to_string(),
            systematic: String::new(),
        });
        policy.anti_dumping.minimum_prices.push(MinimumPrice {
            key: "beacon".to_string(),
            trade_count: 1,
            min_price_ars: 50.0,
        });
        policy.anti_dumping.minimum_prices.push(MinimumPrice {
            key: "elytra".to_string(),
            trade_count: 1,
            min_price_ars: 120.0,
        });
        policy
    }

    #[test]
    fn minimum_price_lookup_by_key() {
        let policy = sample();
        assert_eq!(
            policy.minimum_price_for("beacon").map(|m| m.min_price_ars),
            Some(50.0)
        );
        assert!(policy.minimum_price_for("dirt").is_none());
    }

    #[test]
    fn tax_table_lists_present_rates_only() {
        let table = sample().tax_table("ар");
        assert_eq!(
            table.rows,
            vec![
                vec!["Turnover formula".to_string(), "area / 2 + rate".to_string()],
                vec!["Turnover (trading)".to_string(), "10%".to_string()],
                vec!["Business sale".to_string(), "7%".to_string()],
            ]
        );
    }

    #[test]
    fn license_table_skips_missing_zone_and_dashes_missing_fee() {
        let table = sample().license_table("ар");
        assert_eq!(
            table.rows,
            vec![vec![
                "Spawn: 1 месяц".to_string(),
                "32 ар".to_string(),
                "48 ар".to_string(),
                "-".to_string(),
            ]]
        );
    }

    #[test]
    fn sanction_table_dashes_blank_cells() {
        let table = sample().sanction_table();
        assert_eq!(table.rows[0][0], "ЭКС 4.1");
        assert_eq!(table.rows[0][4], "-");
    }

    #[test]
    fn anti_dumping_table_resolves_known_names() {
        let table = sample().anti_dumping_table("ар", |key| match key {
            "beacon" => Some("Маяк"),
            _ => None,
        });
        assert_eq!(table.rows[0], vec!["Маяк", "1", "50 ар"]);
        assert_eq!(table.rows[1], vec!["elytra", "1", "120 ар"]);
    }

    #[test]
    fn empty_policy_has_no_tables() {
        let tables = EconomyPolicy::default().tables("ар", |_| None);
        assert!(tables.is_empty());
    }
}
