use crate::dashboard::DashboardStore;
use crate::error::{Error, Result};

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cloudwatch::types::DashboardValidationMessage;
use aws_sdk_cloudwatch::Client;
use log::{info, warn};

/// Store implementation that reads and writes CloudWatch dashboards
pub struct CloudwatchDashboards {
    client: Client,
}

pub fn create_cloudwatch_dashboards(shared_config: &SdkConfig) -> CloudwatchDashboards {
    CloudwatchDashboards {
        client: Client::new(shared_config),
    }
}

/// One-line rendering of a PutDashboard validation message
fn describe_validation_message(message: &DashboardValidationMessage) -> String {
    format!(
        "{}: {}",
        message.data_path().unwrap_or("/"),
        message.message().unwrap_or("no details")
    )
}

#[async_trait]
impl DashboardStore for CloudwatchDashboards {
    async fn load(&self, dashboard_name: &str) -> Result<String> {
        info!("Fetching CloudWatch dashboard {}", dashboard_name);
        let resp = self
            .client
            .get_dashboard()
            .dashboard_name(dashboard_name)
            .send()
            .await
            .map_err(Error::cloudwatch)?;
        resp.dashboard_body()
            .map(str::to_string)
            .ok_or(Error::MissingField("DashboardBody"))
    }

    async fn save(&self, dashboard_name: &str, body: String) -> Result<()> {
        info!("Putting CloudWatch dashboard {}", dashboard_name);
        let resp = self
            .client
            .put_dashboard()
            .dashboard_name(dashboard_name)
            .dashboard_body(body)
            .send()
            .await
            .map_err(Error::cloudwatch)?;
        for message in resp.dashboard_validation_messages() {
            warn!(
                "Dashboard {} validation: {}",
                dashboard_name,
                describe_validation_message(message)
            );
        }
        Ok(())
    }
}
