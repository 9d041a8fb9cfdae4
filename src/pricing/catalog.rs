use crate::{
    error::{Error, Result},
    pricing::{cache::DocumentCache, SavingsPlanDocument},
};
use serde::{de::DeserializeOwned, Deserialize};
use std::collections::HashMap;

pub const PRICING_BASE_URL: &str = "https://pricing.us-east-1.amazonaws.com";
pub const OFFER_INDEX_PATH: &str = "/offers/v1.0/aws/index.json";
const OFFER_CODE: &str = "AmazonEC2";

#[derive(Debug, Deserialize)]
struct OfferIndex {
    offers: HashMap<String, Offer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Offer {
    current_savings_plan_index_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RegionIndex {
    regions: Vec<RegionVersion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegionVersion {
    region_code: String,
    version_url: String,
}

/// Client of the AWS pricing bulk API, backed by a document cache.
pub struct Catalog<C> {
    http: reqwest::Client,
    base_url: String,
    region_code: String,
    cache: C,
}

impl<C: DocumentCache> Catalog<C> {
    pub fn new(base_url: &str, region_code: &str, cache: C) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            region_code: region_code.to_owned(),
            cache,
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// The cached document if there is one, otherwise the current version
    /// downloaded for the region and stored in the cache.
    pub async fn savings_plan_version(&self) -> Result<SavingsPlanDocument> {
        if let Some(document) = self.cache.load()? {
            return Ok(document);
        }

        let document = self.download().await?;
        self.cache.store(&document)?;

        Ok(document)
    }

    async fn download(&self) -> Result<SavingsPlanDocument> {
        log::info!(
            "Downloading savings plan document for {} ...",
            self.region_code
        );

        let index: OfferIndex = self.fetch_json(OFFER_INDEX_PATH).await?;
        let region_index_path = index
            .offers
            .get(OFFER_CODE)
            .and_then(|offer| offer.current_savings_plan_index_url.as_deref())
            .ok_or_else(|| {
                Error::MissingKey(format!("offers.{OFFER_CODE}.currentSavingsPlanIndexUrl"))
            })?;

        let region_index: RegionIndex = self.fetch_json(region_index_path).await?;
        let region = region_index
            .regions
            .iter()
            .find(|region| region.region_code == self.region_code)
            .ok_or_else(|| Error::RegionNotFound(self.region_code.clone()))?;

        self.fetch_json(&region.version_url).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }
}
