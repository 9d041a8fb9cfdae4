use aws_config::BehaviorVersion;
use aws_sdk_ec2::{config::Region, Client};
use clap::{CommandFactory, ErrorKind, Parser};
use savings_estimate::{
    error::Result,
    options::Options,
    pricing::{cache::FileCache, catalog::Catalog},
};
use std::{io::stdout, process::exit};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let options = parse_options()?;

    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(options.region_code.clone()));
    if let Some(endpoint) = &options.endpoint {
        loader = loader.endpoint_url(endpoint);
    }
    let ec2_client = Client::new(&loader.load().await);

    let catalog = Catalog::new(
        &options.pricing_base_url,
        &options.region_code,
        FileCache::new(options.cache_path.clone()),
    );

    let report = savings_estimate::estimate(&ec2_client, &catalog, &options).await?;
    print!("{report}");

    Ok(())
}

/// Usage errors print the help and the error on stdout and exit with 1.
fn parse_options() -> Result<Options> {
    match Options::try_parse() {
        Ok(options) => Ok(options),
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            error.exit()
        }
        Err(error) => {
            Options::command().write_help(&mut stdout())?;
            println!();
            println!("{error}");
            exit(1)
        }
    }
}
