use crate::error::{Error, Result};
use crate::flows::{FlowCatalog, FlowOutput, FlowPage};

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_mediaconnect::Client;
use log::info;

/// Flow catalog backed by AWS Elemental MediaConnect
pub struct MediaConnectCatalog {
    client: Client,
}

pub fn create_mediaconnect_catalog(shared_config: &SdkConfig) -> MediaConnectCatalog {
    MediaConnectCatalog {
        client: Client::new(shared_config),
    }
}

/// SDK accessors return either `&str` or `Option<&str>` depending on the
/// member being modelled as required
fn required<'a>(value: impl Into<Option<&'a str>>, field: &'static str) -> Result<String> {
    value
        .into()
        .map(str::to_string)
        .ok_or(Error::MissingField(field))
}

#[async_trait]
impl FlowCatalog for MediaConnectCatalog {
    async fn list_flows(&self, next_token: Option<String>) -> Result<FlowPage> {
        info!("Listing MediaConnect flows (token {:?})", next_token);
        let resp = self
            .client
            .list_flows()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(Error::mediaconnect)?;

        let flow_arns = resp
            .flows()
            .iter()
            .map(|flow| required(flow.flow_arn(), "FlowArn"))
            .collect::<Result<Vec<String>>>()?;
        Ok(FlowPage {
            flow_arns,
            next_token: resp.next_token().map(str::to_string),
        })
    }

    async fn describe_flow_outputs(&self, flow_arn: &str) -> Result<Vec<FlowOutput>> {
        info!("Describing MediaConnect flow {}", flow_arn);
        let resp = self
            .client
            .describe_flow()
            .flow_arn(flow_arn)
            .send()
            .await
            .map_err(Error::mediaconnect)?;

        let flow = resp.flow().ok_or(Error::MissingField("Flow"))?;
        flow.outputs()
            .iter()
            .map(|output| -> Result<FlowOutput> {
                Ok(FlowOutput {
                    name: required(output.name(), "Output.Name")?,
                    arn: required(output.output_arn(), "Output.OutputArn")?,
                })
            })
            .collect()
    }
}
