#![allow(dead_code)]

use serde_json::{json, Value};

pub const REGION_INDEX_PATH: &str =
    "/savingsPlan/v1.0/aws/AWSComputeSavingsPlan/current/region_index.json";
pub const VERSION_PATH: &str =
    "/savingsPlan/v1.0/aws/AWSComputeSavingsPlan/20240101000000/ap-northeast-1/index.json";

pub fn offer_index() -> Value {
    json!({
        "formatVersion": "v1.0",
        "offers": {
            "AmazonEC2": {
                "offerCode": "AmazonEC2",
                "currentVersionUrl": "/offers/v1.0/aws/AmazonEC2/current/index.json",
                "currentSavingsPlanIndexUrl": REGION_INDEX_PATH,
            },
        },
    })
}

pub fn region_index() -> Value {
    json!({
        "regions": [
            {
                "regionCode": "us-east-1",
                "versionUrl": "/savingsPlan/v1.0/aws/AWSComputeSavingsPlan/20240101000000/us-east-1/index.json",
            },
            {
                "regionCode": "ap-northeast-1",
                "versionUrl": VERSION_PATH,
            },
        ],
    })
}

pub fn version_document() -> Value {
    json!({
        "regionCode": "ap-northeast-1",
        "products": [{
            "sku": "SKU1YR",
            "productFamily": "ComputeSavingsPlans",
            "usageType": "ComputeSP:1yrAllUpfront",
        }],
        "terms": {
            "savingsPlan": [{
                "sku": "SKU1YR",
                "rates": [{
                    "discountedSku": "DSKU",
                    "discountedUsageType": "APN1-BoxUsage:r5a.xlarge",
                    "discountedOperation": "RunInstances",
                    "discountedRate": { "price": "0.185", "currency": "USD" },
                }],
            }],
        },
    })
}

/// `r5a.xlarge` named app1, an unnamed `m5.large` and a spot `m5.large`.
pub const DESCRIBE_INSTANCES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DescribeInstancesResponse xmlns="http://ec2.amazonaws.com/doc/2016-11-15/">
    <requestId>8f7724cf-496f-496e-8fe3-example</requestId>
    <reservationSet>
        <item>
            <reservationId>r-1234567890abcdef0</reservationId>
            <ownerId>123456789012</ownerId>
            <instancesSet>
                <item>
                    <instanceId>i-0a1b2c3d4e5f60001</instanceId>
                    <instanceType>r5a.xlarge</instanceType>
                    <instanceState>
                        <code>16</code>
                        <name>running</name>
                    </instanceState>
                    <tagSet>
                        <item>
                            <key>Name</key>
                            <value>app1</value>
                        </item>
                    </tagSet>
                </item>
                <item>
                    <instanceId>i-0a1b2c3d4e5f60002</instanceId>
                    <instanceType>m5.large</instanceType>
                    <instanceState>
                        <code>16</code>
                        <name>running</name>
                    </instanceState>
                </item>
                <item>
                    <instanceId>i-0a1b2c3d4e5f60003</instanceId>
                    <instanceType>m5.large</instanceType>
                    <instanceState>
                        <code>16</code>
                        <name>running</name>
                    </instanceState>
                    <instanceLifecycle>spot</instanceLifecycle>
                    <tagSet>
                        <item>
                            <key>Name</key>
                            <value>batch</value>
                        </item>
                    </tagSet>
                </item>
            </instancesSet>
        </item>
    </reservationSet>
</DescribeInstancesResponse>"#;

pub const EXPECTED_REPORT: &str = "m5.large,'',\nr5a.xlarge,'app1',0.185\n0.185\n";
