use clap::Parser;
use std::path::PathBuf;

/// Estimate the cost of running on-demand EC2 instances under a Compute Savings Plan.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Options {
    /// Region whose instances and savings plan rates are compared.
    #[clap(long = "region_code", default_value = "ap-northeast-1")]
    pub region_code: String,

    /// Region prefix of the discounted usage types.
    #[clap(long = "region_abbr", default_value = "APN1")]
    pub region_abbr: String,

    /// Usage type part between the region prefix and the instance type.
    #[clap(long = "discounted_usage_type_suffix", default_value = "-BoxUsage")]
    pub discounted_usage_type_suffix: String,

    /// Product family of the savings plan.
    #[clap(long = "product_family", default_value = "ComputeSavingsPlans")]
    pub product_family: String,

    /// Savings plan term and payment option.
    #[clap(long = "usage_type", default_value = "ComputeSP:1yrAllUpfront")]
    pub usage_type: String,

    /// RunInstances is Linux/UNIX.
    #[clap(long = "discounted_operation", default_value = "RunInstances")]
    pub discounted_operation: String,

    /// Custom EC2 endpoint for testing purpose.
    #[clap(long)]
    pub endpoint: Option<String>,

    /// AWS price list bulk API, overridable for testing purpose.
    #[clap(
        long = "pricing_base_url",
        default_value = "https://pricing.us-east-1.amazonaws.com"
    )]
    pub pricing_base_url: String,

    /// Where the downloaded savings plan document is kept.
    #[clap(
        long = "cache_path",
        default_value = "savings_plan_version.json",
        parse(from_os_str)
    )]
    pub cache_path: PathBuf,
}
