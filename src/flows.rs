use crate::config::ListingMode;
use crate::error::Result;

use async_trait::async_trait;
use log::{debug, info};

/// One page of a flow listing
#[derive(Debug, Clone, Default)]
pub struct FlowPage {
    pub flow_arns: Vec<String>,
    pub next_token: Option<String>,
}

/// Destination endpoint attached to a flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowOutput {
    pub name: String,
    pub arn: String,
}

/// Source of flows and their outputs
#[async_trait]
pub trait FlowCatalog {
    async fn list_flows(&self, next_token: Option<String>) -> Result<FlowPage>;

    async fn describe_flow_outputs(&self, flow_arn: &str) -> Result<Vec<FlowOutput>>;
}

/// Collect ARNs of all outputs whose name contains `search_string`
pub async fn list_filtered_outputs<C>(
    catalog: &C,
    search_string: &str,
    mode: ListingMode,
) -> Result<Vec<String>>
where
    C: FlowCatalog + Sync + ?Sized,
{
    let mut desired_outputs = vec![];
    let mut next_token: Option<String> = None;
    let mut pages = 0;

    loop {
        let page = catalog.list_flows(next_token.take()).await?;
        pages += 1;
        info!("Listed {} flows on page {}", page.flow_arns.len(), pages);

        for flow_arn in &page.flow_arns {
            for output in catalog.describe_flow_outputs(flow_arn).await? {
                if output.name.contains(search_string) {
                    debug!("Output {} of flow {} matches", output.name, flow_arn);
                    desired_outputs.push(output.arn);
                }
            }
        }

        if mode == ListingMode::SinglePage {
            break;
        }
        // an empty token ends the listing as well
        match page.next_token.filter(|token| !token.is_empty()) {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    info!(
        "Found {} outputs matching '{}' across {} pages",
        desired_outputs.len(),
        search_string,
        pages
    );
    Ok(desired_outputs)
}
