use crate::error::{Error, Result};

use async_trait::async_trait;
use log::info;
use serde_json::Value;

/// Generic trait for reading and writing dashboard bodies
#[async_trait]
pub trait DashboardStore {
    async fn load(&self, dashboard_name: &str) -> Result<String>;

    async fn save(&self, dashboard_name: &str, body: String) -> Result<()>;
}

/// Dry-run store: reads through the wrapped store and prints instead of writing
pub struct ConsoleStore<S> {
    inner: S,
}

impl<S> ConsoleStore<S> {
    pub fn new(inner: S) -> Self {
        ConsoleStore { inner }
    }
}

#[async_trait]
impl<S> DashboardStore for ConsoleStore<S>
where
    S: DashboardStore + Send + Sync,
{
    async fn load(&self, dashboard_name: &str) -> Result<String> {
        self.inner.load(dashboard_name).await
    }

    async fn save(&self, dashboard_name: &str, body: String) -> Result<()> {
        println!("Dashboard {} would be updated to:\n{}", dashboard_name, body);
        Ok(())
    }
}

/// Append `widget` to the `widgets` array of a dashboard body
pub fn append_widget(body: &str, widget: Value) -> Result<String> {
    let mut dashboard: Value = serde_json::from_str(body)?;
    let widgets = dashboard
        .get_mut("widgets")
        .and_then(Value::as_array_mut)
        .ok_or(Error::MissingWidgets)?;
    widgets.push(widget);
    info!("Dashboard now has {} widgets", widgets.len());
    Ok(serde_json::to_string(&dashboard)?)
}

/// Read-modify-write of a dashboard
pub async fn update_dashboard<S>(store: &S, dashboard_name: &str, widget: Value) -> Result<()>
where
    S: DashboardStore + Sync + ?Sized,
{
    let current_body = store.load(dashboard_name).await?;
    let new_body = append_widget(&current_body, widget)?;
    store.save(dashboard_name, new_body).await
}
