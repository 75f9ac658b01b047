/// Region used for widget metrics when nothing else provides one
pub const DEFAULT_REGION: &str = "eu-west-1";

/// How flows are listed from MediaConnect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingMode {
    /// One ListFlows call, continuation token ignored
    SinglePage,
    /// Follow continuation tokens until the listing is exhausted
    #[default]
    Paginated,
}

/// Knobs of the generated dashboard widget
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub region: String,
    /// Metric period in seconds
    pub period: u32,
    pub stat: String,
    /// Value of the horizontal annotation separating healthy and overloaded
    pub connection_limit: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            region: DEFAULT_REGION.to_string(),
            period: 60,
            stat: "Maximum".to_string(),
            connection_limit: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub dashboard_name: String,
    pub search_string: String,
    pub listing_mode: ListingMode,
    /// Explicit AWS region, otherwise the default provider chain decides
    pub region: Option<String>,
    pub period: u32,
    pub stat: String,
    pub connection_limit: u32,
    /// Print the new dashboard body instead of writing it
    pub dryrun: bool,
}

impl DashboardConfig {
    /// Widget settings, with the region already resolved by the caller
    pub fn widget_config(&self, region: &str) -> WidgetConfig {
        WidgetConfig {
            region: region.to_string(),
            period: self.period,
            stat: self.stat.clone(),
            connection_limit: self.connection_limit,
        }
    }
}

/// Pick the widget region: explicit one first, then the SDK one, then the default
pub fn resolve_region(explicit: Option<&str>, sdk: Option<&str>) -> String {
    explicit
        .or(sdk)
        .filter(|region| !region.is_empty())
        .unwrap_or(DEFAULT_REGION)
        .to_string()
}
