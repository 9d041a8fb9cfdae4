use crate::error::Result;
use aws_sdk_ec2::{
    operation::describe_instances::DescribeInstancesOutput,
    types::{Filter, Instance as Ec2Instance},
    Client,
};

/// `DescribeInstances` caps a single page at 1000 results. Only that first page
/// is read, so accounts running more instances than this are truncated.
pub const MAX_RESULTS: i32 = 1000;

/// A running instance, reduced to what the report needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub instance_type: String,
    pub name: String,
    /// `spot` or `scheduled`, `None` for on-demand.
    pub lifecycle: Option<String>,
}

impl Instance {
    pub fn is_ondemand(&self) -> bool {
        self.lifecycle.is_none()
    }
}

impl From<&Ec2Instance> for Instance {
    fn from(instance: &Ec2Instance) -> Self {
        Self {
            instance_type: instance
                .instance_type()
                .map(|instance_type| instance_type.as_str().to_owned())
                .unwrap_or_default(),
            name: instance
                .tags()
                .iter()
                .find(|tag| tag.key() == Some("Name"))
                .and_then(|tag| tag.value())
                .unwrap_or("")
                .to_owned(),
            lifecycle: instance
                .instance_lifecycle()
                .map(|lifecycle| lifecycle.as_str().to_owned()),
        }
    }
}

struct Filters(Vec<Filter>);

impl Filters {
    fn running() -> Self {
        Filters(vec![Filter::builder()
            .name("instance-state-name")
            .values("running")
            .build()])
    }
}

#[derive(Debug, Default)]
pub struct Instances(Vec<Instance>);

impl Instances {
    /// Running instances without a lifecycle marker, from a single page of results.
    pub async fn running_ondemand(client: &Client) -> Result<Self> {
        let output = client
            .describe_instances()
            .set_filters(Some(Filters::running().0))
            .max_results(MAX_RESULTS)
            .send()
            .await?;

        if output.next_token().is_some() {
            log::warn!(
                "More than {} running instances, only the first page is priced",
                MAX_RESULTS
            );
        }

        Ok(Self::from(&output))
    }

    pub fn as_slice(&self) -> &[Instance] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&DescribeInstancesOutput> for Instances {
    fn from(output: &DescribeInstancesOutput) -> Self {
        let running = output
            .reservations()
            .iter()
            .flat_map(|reservation| reservation.instances())
            .map(Instance::from)
            .collect::<Vec<_>>();

        log::info!("Found {} running instances", running.len());

        let ondemand = running
            .into_iter()
            .filter(Instance::is_ondemand)
            .collect::<Vec<_>>();

        log::info!("Kept {} on-demand instances", ondemand.len());

        Instances(ondemand)
    }
}
