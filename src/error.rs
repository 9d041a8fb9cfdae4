use aws_sdk_ec2::{error::SdkError, operation::describe_instances::DescribeInstancesError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    DescribeInstances(#[from] SdkError<DescribeInstancesError>),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("missing key `{0}` in pricing document")]
    MissingKey(String),

    #[error("region `{0}` not found in savings plan region index")]
    RegionNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
