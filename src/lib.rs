pub mod aws;
pub mod error;
pub mod options;
pub mod pricing;
pub mod report;

use crate::{
    aws::instance::Instances,
    error::Result,
    options::Options,
    pricing::{cache::DocumentCache, catalog::Catalog, rates::RateQuery},
    report::{PriceTable, Report},
};
use aws_sdk_ec2::Client;

/// Prices the region's running on-demand instances at the savings plan rates.
pub async fn estimate<C: DocumentCache>(
    ec2_client: &Client,
    catalog: &Catalog<C>,
    options: &Options,
) -> Result<Report> {
    let instances = Instances::running_ondemand(ec2_client).await?;

    let rates = catalog
        .savings_plan_version()
        .await?
        .rates(&RateQuery::from(options))?;
    let prices = PriceTable::from_rates(&rates);

    Ok(Report::build(
        instances.as_slice(),
        &prices,
        &options.region_abbr,
        &options.discounted_usage_type_suffix,
    ))
}
