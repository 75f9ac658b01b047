pub mod config;
pub mod dashboard;
pub mod error;
pub mod flows;
pub mod widget;
mod cloudwatch;
mod mediaconnect;

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use log::info;

use crate::cloudwatch::create_cloudwatch_dashboards;
use crate::config::{resolve_region, DashboardConfig, WidgetConfig};
use crate::dashboard::{update_dashboard, ConsoleStore, DashboardStore};
use crate::flows::{list_filtered_outputs, FlowCatalog};
use crate::mediaconnect::create_mediaconnect_catalog;
use crate::widget::create_widget;

pub use crate::error::{Error, Result};

/// What a run did to the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No output matched, dashboard untouched
    NothingFound,
    /// Widget appended for these output ARNs
    Updated { outputs: Vec<String> },
}

/// Load shared AWS config, explicit region first then the default chain
async fn load_sdk_config(region: Option<String>) -> SdkConfig {
    let region_provider =
        RegionProviderChain::first_try(region.map(Region::new)).or_default_provider();
    aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}

/// Discover outputs, build the widget and append it to the dashboard
pub async fn run_with<C, S>(
    catalog: &C,
    store: &S,
    config: &DashboardConfig,
    widget_config: &WidgetConfig,
) -> Result<Outcome>
where
    C: FlowCatalog + Sync + ?Sized,
    S: DashboardStore + Sync + ?Sized,
{
    let output_arns =
        list_filtered_outputs(catalog, &config.search_string, config.listing_mode).await?;

    if output_arns.is_empty() {
        println!("List of ARNS empty, exiting without creating dashboard.");
        return Ok(Outcome::NothingFound);
    }

    let widget = create_widget(&output_arns, &config.search_string, widget_config);
    update_dashboard(store, &config.dashboard_name, widget).await?;
    println!("Dashboard updated successfully.");
    Ok(Outcome::Updated {
        outputs: output_arns,
    })
}

/// Entry point that wires AWS clients into the pipeline
pub async fn main_runner(config: DashboardConfig) -> Result<Outcome> {
    let shared_config = load_sdk_config(config.region.clone()).await;
    let region = resolve_region(
        config.region.as_deref(),
        shared_config.region().map(|region| region.as_ref()),
    );
    info!(
        "Looking for outputs matching '{}' for dashboard {} in {}",
        config.search_string, config.dashboard_name, region
    );
    let widget_config = config.widget_config(&region);

    let catalog = create_mediaconnect_catalog(&shared_config);
    let dashboards = create_cloudwatch_dashboards(&shared_config);

    // create a store implementation
    let outcome = if config.dryrun {
        let store = ConsoleStore::new(dashboards);
        run_with(&catalog, &store, &config, &widget_config).await?
    } else {
        run_with(&catalog, &dashboards, &config, &widget_config).await?
    };
    info!("Run finished: {:?}", outcome);
    Ok(outcome)
}

/// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListingMode;
    use crate::flows::{FlowOutput, FlowPage};
    use async_trait::async_trait;
    use more_asserts::*;
    use serde_json::Value;
    use std::sync::Mutex;

    /// Two flows on two pages
    struct FakeCatalog {
        describe_calls: Mutex<u32>,
    }

    #[async_trait]
    impl FlowCatalog for FakeCatalog {
        async fn list_flows(&self, next_token: Option<String>) -> Result<FlowPage> {
            Ok(match next_token.as_deref() {
                None => FlowPage {
                    flow_arns: vec!["flow-1".to_string()],
                    next_token: Some("more".to_string()),
                },
                _ => FlowPage {
                    flow_arns: vec!["flow-2".to_string()],
                    next_token: None,
                },
            })
        }

        async fn describe_flow_outputs(&self, flow_arn: &str) -> Result<Vec<FlowOutput>> {
            *self.describe_calls.lock().unwrap() += 1;
            Ok(vec![
                FlowOutput {
                    name: format!("{}-primary", flow_arn),
                    arn: format!("arn:aws:mediaconnect:eu-west-1:1:output:{}:primary", flow_arn),
                },
                FlowOutput {
                    name: format!("{}-backup", flow_arn),
                    arn: format!("arn:aws:mediaconnect:eu-west-1:1:output:{}:backup", flow_arn),
                },
            ])
        }
    }

    struct FakeStore {
        body: Mutex<String>,
        loads: Mutex<u32>,
        saves: Mutex<u32>,
    }

    impl FakeStore {
        fn new(body: &str) -> Self {
            FakeStore {
                body: Mutex::new(body.to_string()),
                loads: Mutex::new(0),
                saves: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl DashboardStore for FakeStore {
        async fn load(&self, _dashboard_name: &str) -> Result<String> {
            *self.loads.lock().unwrap() += 1;
            Ok(self.body.lock().unwrap().clone())
        }

        async fn save(&self, _dashboard_name: &str, body: String) -> Result<()> {
            *self.saves.lock().unwrap() += 1;
            *self.body.lock().unwrap() = body;
            Ok(())
        }
    }

    /// Store that fails every write
    struct FailureStore {}

    #[async_trait]
    impl DashboardStore for FailureStore {
        async fn load(&self, _dashboard_name: &str) -> Result<String> {
            Ok(r#"{"widgets":[]}"#.to_string())
        }

        async fn save(&self, _dashboard_name: &str, _body: String) -> Result<()> {
            Err(Error::MissingField("DashboardArn"))
        }
    }

    fn dashboard_config(search_string: &str, listing_mode: ListingMode) -> DashboardConfig {
        DashboardConfig {
            dashboard_name: "broadcast".to_string(),
            search_string: search_string.to_string(),
            listing_mode,
            region: None,
            period: 60,
            stat: "Maximum".to_string(),
            connection_limit: 4,
            dryrun: false,
        }
    }

    fn catalog() -> FakeCatalog {
        FakeCatalog {
            describe_calls: Mutex::new(0),
        }
    }

    #[tokio::test]
    async fn test_run_appends_widget() {
        let catalog = catalog();
        let store = FakeStore::new(r#"{"widgets":[{"type":"text"}]}"#);
        let config = dashboard_config("primary", ListingMode::Paginated);

        let outcome = run_with(&catalog, &store, &config, &WidgetConfig::default())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Updated {
                outputs: vec![
                    "arn:aws:mediaconnect:eu-west-1:1:output:flow-1:primary".to_string(),
                    "arn:aws:mediaconnect:eu-west-1:1:output:flow-2:primary".to_string(),
                ]
            }
        );
        assert_eq!(*store.saves.lock().unwrap(), 1);
        let body: Value = serde_json::from_str(&store.body.lock().unwrap()).unwrap();
        let widgets = body["widgets"].as_array().unwrap();
        assert_eq!(widgets.len(), 2);
        assert_eq!(widgets[1]["properties"]["title"], "primary Connections");
        assert_eq!(widgets[1]["properties"]["yAxis"]["left"]["max"], 2);
    }

    #[tokio::test]
    async fn test_run_without_matches_leaves_dashboard() {
        let catalog = catalog();
        let original = r#"{"widgets":[]}"#;
        let store = FakeStore::new(original);
        let config = dashboard_config("tertiary", ListingMode::Paginated);

        let outcome = run_with(&catalog, &store, &config, &WidgetConfig::default())
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::NothingFound);
        assert_eq!(*store.loads.lock().unwrap(), 0);
        assert_eq!(*store.saves.lock().unwrap(), 0);
        assert_eq!(*store.body.lock().unwrap(), original);
        assert_ge!(*catalog.describe_calls.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_run_single_page() {
        let catalog = catalog();
        let store = FakeStore::new(r#"{"widgets":[]}"#);
        let config = dashboard_config("flow", ListingMode::SinglePage);

        let outcome = run_with(&catalog, &store, &config, &WidgetConfig::default())
            .await
            .unwrap();

        match outcome {
            Outcome::Updated { outputs } => assert_eq!(outputs.len(), 2),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(*catalog.describe_calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_run_dryrun_does_not_write() {
        let catalog = catalog();
        let store = ConsoleStore::new(FailureStore {});
        let config = dashboard_config("backup", ListingMode::Paginated);

        let outcome = run_with(&catalog, &store, &config, &WidgetConfig::default())
            .await
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Updated {
                outputs: vec![
                    "arn:aws:mediaconnect:eu-west-1:1:output:flow-1:backup".to_string(),
                    "arn:aws:mediaconnect:eu-west-1:1:output:flow-2:backup".to_string(),
                ]
            }
        );
    }

    /// Ensures that a failed write is reported to the caller
    #[tokio::test]
    async fn test_run_save_failure_propagates() {
        let catalog = catalog();
        let config = dashboard_config("backup", ListingMode::Paginated);

        let res = run_with(&catalog, &FailureStore {}, &config, &WidgetConfig::default()).await;
        assert!(matches!(res, Err(Error::MissingField("DashboardArn"))));
    }
}
