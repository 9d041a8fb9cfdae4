use crate::{
    error::{Error, Result},
    options::Options,
    pricing::SavingsPlanDocument,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// Which savings plan rates to keep.
#[derive(Debug, Clone, Copy)]
pub struct RateQuery<'a> {
    pub product_family: &'a str,
    pub usage_type: &'a str,
    pub discounted_operation: &'a str,
}

impl<'a> From<&'a Options> for RateQuery<'a> {
    fn from(options: &'a Options) -> Self {
        Self {
            product_family: &options.product_family,
            usage_type: &options.usage_type,
            discounted_operation: &options.discounted_operation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    #[serde(default)]
    pub discounted_sku: String,
    /// `{region abbreviation}{suffix}:{instance type}`, e.g. `APN1-BoxUsage:r5a.xlarge`.
    pub discounted_usage_type: String,
    pub discounted_operation: String,
    pub discounted_rate: DiscountedRate,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiscountedRate {
    /// Decimal string, kept as published.
    pub price: String,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Product {
    sku: String,
    product_family: Option<String>,
    usage_type: Option<String>,
}

impl Product {
    fn matches(&self, query: &RateQuery) -> bool {
        self.product_family.as_deref() == Some(query.product_family)
            && self.usage_type.as_deref() == Some(query.usage_type)
    }
}

#[derive(Debug, Deserialize)]
struct Term {
    #[serde(default)]
    rates: Vec<RateEntry>,
}

impl SavingsPlanDocument {
    /// Rates of the plans matching `query`, in document order.
    pub fn rates(&self, query: &RateQuery) -> Result<Vec<RateEntry>> {
        let skus = Vec::<Product>::deserialize(self.field("products")?)?
            .into_iter()
            .filter(|product| product.matches(query))
            .map(|product| product.sku)
            .collect::<HashSet<_>>();

        log::debug!("{} products match {:?}", skus.len(), query);

        let terms = self
            .field("terms")?
            .get("savingsPlan")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::MissingKey("terms.savingsPlan".to_owned()))?
            .iter()
            .filter(|term| {
                term.get("sku")
                    .and_then(Value::as_str)
                    .map_or(false, |sku| skus.contains(sku))
            })
            .map(Term::deserialize)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let rates = terms
            .into_iter()
            .flat_map(|term| term.rates)
            .filter(|rate| rate.discounted_operation == query.discounted_operation)
            .collect::<Vec<_>>();

        log::info!("Selected {} savings plan rates", rates.len());

        Ok(rates)
    }
}
