//! Aggregation helpers exposed to the presentation layer.
//!
//! Every helper is a pure, order-independent reduction over the view it is
//! called on: identical inputs always produce identical outputs, so callers
//! may cache results keyed by dataset identity.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::Sale;
use crate::pipeline::dataset::DatasetView;
use crate::types::Season;

/// Revenue contribution of one product within its category.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductMix {
    pub category: &'static str,
    pub product: String,
    pub revenue: Decimal,
    /// Fraction of the view's total revenue, 0-1.
    pub share: Decimal
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreRevenue {
    pub store: &'static str,
    pub region: &'static str,
    pub revenue: Decimal
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionalPerformance {
    pub region: &'static str,
    pub revenue: Decimal,
    pub orders: u64
}

/// Per-product price, volume, and margin metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductProfitability {
    pub product: String,
    pub revenue: Decimal,
    pub units: u64,
    pub margin: Decimal,
    pub average_price: Decimal,
    pub margin_rate: Decimal
}

impl<'a> DatasetView<'a> {
    /// Sum of all ticket amounts in the view.
    pub fn total_revenue(&self) -> Decimal {
        self.iter().map(|sale| sale.amount).sum()
    }

    /// Mean ticket amount, rounded to cents. Zero for an empty view.
    pub fn average_ticket(&self) -> Decimal {
        if self.is_empty() {
            return Decimal::ZERO;
        }

        self.total_revenue()
            .checked_div(Decimal::from(self.len() as u64))
            .unwrap_or(Decimal::ZERO)
            .round_dp(2)
    }

    pub fn order_count(&self) -> u64 {
        self.len() as u64
    }

    /// Sum of gross margin values in the view.
    pub fn total_margin(&self) -> Decimal {
        self.iter().map(|sale| sale.margin).sum()
    }

    /// Groups ticket revenue by an arbitrary categorical key.
    pub fn revenue_by<K, F>(&self, key: F) -> BTreeMap<K, Decimal>
    where
        K: Ord,
        F: Fn(&Sale) -> K
    {
        let mut grouped = BTreeMap::new();
        for sale in self.iter() {
            *grouped.entry(key(sale)).or_insert(Decimal::ZERO) += sale.amount;
        }

        grouped
    }

    /// Revenue per calendar day, for the seasonality line.
    pub fn daily_revenue(&self) -> BTreeMap<NaiveDate, Decimal> {
        self.revenue_by(|sale| sale.date())
    }

    /// Mean ticket per season, rounded to cents.
    pub fn seasonal_average_ticket(&self) -> BTreeMap<Season, Decimal> {
        let mut totals: BTreeMap<Season, (Decimal, u64)> = BTreeMap::new();
        for sale in self.iter() {
            let entry = totals.entry(sale.season).or_insert((Decimal::ZERO, 0));
            entry.0 += sale.amount;
            entry.1 += 1;
        }

        totals
            .into_iter()
            .map(|(season, (total, count))| {
                let mean = total
                    .checked_div(Decimal::from(count))
                    .unwrap_or(Decimal::ZERO)
                    .round_dp(2);
                (season, mean)
            })
            .collect()
    }

    /// Revenue and revenue share per (category, product) pair.
    pub fn product_mix(&self) -> Vec<ProductMix> {
        let grouped = self.revenue_by(|sale| (sale.category, sale.product.clone()));
        let total: Decimal = grouped.values().copied().sum();

        grouped
            .into_iter()
            .map(|((category, product), revenue)| ProductMix {
                category,
                product,
                revenue,
                share: revenue.checked_div(total).unwrap_or(Decimal::ZERO)
            })
            .collect()
    }

    /// Top stores by revenue, descending.
    pub fn store_leaderboard(&self, top_n: usize) -> Vec<StoreRevenue> {
        let grouped = self.revenue_by(|sale| (sale.store, sale.region));

        let mut ranking: Vec<StoreRevenue> = grouped
            .into_iter()
            .map(|((store, region), revenue)| StoreRevenue { store, region, revenue })
            .collect();
        ranking.sort_by(|a, b| b.revenue.cmp(&a.revenue));
        ranking.truncate(top_n);

        ranking
    }

    /// Revenue and order volume per region.
    pub fn regional_performance(&self) -> Vec<RegionalPerformance> {
        let mut grouped: BTreeMap<&'static str, (Decimal, u64)> = BTreeMap::new();
        for sale in self.iter() {
            let entry = grouped.entry(sale.region).or_insert((Decimal::ZERO, 0));
            entry.0 += sale.amount;
            entry.1 += 1;
        }

        grouped
            .into_iter()
            .map(|(region, (revenue, orders))| RegionalPerformance { region, revenue, orders })
            .collect()
    }

    /// Per-product revenue, unit count, margin, average price, and realized
    /// margin rate, for the price-versus-volume scatter.
    pub fn profitability(&self) -> Vec<ProductProfitability> {
        let mut grouped: BTreeMap<String, (Decimal, u64, Decimal)> = BTreeMap::new();
        for sale in self.iter() {
            let entry = grouped
                .entry(sale.product.clone())
                .or_insert((Decimal::ZERO, 0, Decimal::ZERO));
            entry.0 += sale.amount;
            entry.1 += 1;
            entry.2 += sale.margin;
        }

        grouped
            .into_iter()
            .map(|(product, (revenue, units, margin))| {
                let average_price = revenue
                    .checked_div(Decimal::from(units))
                    .unwrap_or(Decimal::ZERO)
                    .round_dp(2);
                let margin_rate = margin.checked_div(revenue).unwrap_or(Decimal::ZERO);

                ProductProfitability {
                    product,
                    revenue,
                    units,
                    margin,
                    average_price,
                    margin_rate
                }
            })
            .collect()
    }

    /// Percent revenue change between the two most recent years in the view,
    /// rounded to one decimal place. Zero when fewer than two years are
    /// present or the earlier year had no revenue.
    pub fn yoy_growth(&self) -> Decimal {
        let yearly = self.revenue_by(|sale| sale.date().year());

        let mut recent = yearly.values().rev();
        let (Some(last), Some(previous)) = (recent.next(), recent.next()) else {
            return Decimal::ZERO;
        };

        (*last - *previous)
            .checked_div(*previous)
            .map(|growth| (growth * Decimal::ONE_HUNDRED).round_dp(1))
            .unwrap_or(Decimal::ZERO)
    }
}
