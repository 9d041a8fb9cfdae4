use crate::{aws::instance::Instance, pricing::rates::RateEntry};
use rust_decimal::Decimal;
use std::{collections::HashMap, str::FromStr};

/// Discounted usage type to price, last rate wins on duplicate usage types.
#[derive(Debug, Default)]
pub struct PriceTable(HashMap<String, String>);

impl PriceTable {
    pub fn from_rates(rates: &[RateEntry]) -> Self {
        PriceTable(
            rates
                .iter()
                .map(|rate| {
                    (
                        rate.discounted_usage_type.clone(),
                        rate.discounted_rate.price.clone(),
                    )
                })
                .collect(),
        )
    }

    pub fn get(&self, discounted_usage_type: &str) -> Option<&str> {
        self.0.get(discounted_usage_type).map(String::as_str)
    }
}

/// `APN1` + `-BoxUsage` + `:` + `r5a.xlarge`.
pub fn discounted_usage_type(region_abbr: &str, suffix: &str, instance_type: &str) -> String {
    format!("{region_abbr}{suffix}:{instance_type}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedInstance {
    pub instance_type: String,
    pub name: String,
    pub price: Option<String>,
}

impl PricedInstance {
    fn quoted_name(&self) -> String {
        format!("'{}'", self.name)
    }

    /// Missing or unparseable prices count as zero.
    fn hourly(&self) -> Decimal {
        self.price
            .as_deref()
            .and_then(|price| Decimal::from_str(price).ok())
            .unwrap_or(Decimal::ZERO)
    }
}

#[derive(Debug, Default)]
pub struct Report(Vec<PricedInstance>);

impl Report {
    pub fn build(
        instances: &[Instance],
        prices: &PriceTable,
        region_abbr: &str,
        suffix: &str,
    ) -> Self {
        let mut priced = instances
            .iter()
            .map(|instance| PricedInstance {
                instance_type: instance.instance_type.clone(),
                name: instance.name.clone(),
                price: prices
                    .get(&discounted_usage_type(
                        region_abbr,
                        suffix,
                        &instance.instance_type,
                    ))
                    .map(str::to_owned),
            })
            .collect::<Vec<_>>();

        // Raw string order on the printed fields, prices are not compared numerically.
        priced.sort_by_cached_key(|row| {
            (row.instance_type.clone(), row.quoted_name(), row.price.clone())
        });

        let unpriced = priced.iter().filter(|row| row.price.is_none()).count();
        if unpriced > 0 {
            log::info!("{} instances have no matching savings plan rate", unpriced);
        }

        Report(priced)
    }

    pub fn rows(&self) -> &[PricedInstance] {
        &self.0
    }

    pub fn total(&self) -> Decimal {
        self.0.iter().map(PricedInstance::hourly).sum::<Decimal>().normalize()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.0 {
            writeln!(
                f,
                "{},{},{}",
                row.instance_type,
                row.quoted_name(),
                row.price.as_deref().unwrap_or("")
            )?;
        }

        writeln!(f, "{}", self.total())
    }
}
