use clap::Parser;
use log::info;
use mediaconnect_dashboard::config::{DashboardConfig, ListingMode};
use mediaconnect_dashboard::main_runner;

/// Update a CloudWatch dashboard with MediaConnect flow outputs
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opt {
    /// Name of the CloudWatch dashboard
    dashboard_name: String,

    /// String to search for in MediaConnect flow output names
    search_string: String,

    /// AWS region, defaults to the environment
    #[arg(short, long)]
    region: Option<String>,

    /// Metric period in seconds
    #[arg(short, long, default_value_t = 60)]
    period: u32,

    /// Metric statistic
    #[arg(long, default_value = "Maximum")]
    stat: String,

    /// Connection count marked as the limit on the gauge
    #[arg(long, default_value_t = 4)]
    connection_limit: u32,

    /// Only look at the first page of flows
    #[arg(long)]
    single_page: bool,

    /// Whether to print the new dashboard body instead of writing it
    #[arg(short, long)]
    dryrun: bool,
}

#[tokio::main]
async fn main() -> Result<(), mediaconnect_dashboard::Error> {
    env_logger::Builder::from_default_env().init();

    let opt = Opt::parse();
    let config = DashboardConfig {
        dashboard_name: opt.dashboard_name,
        search_string: opt.search_string,
        listing_mode: if opt.single_page {
            ListingMode::SinglePage
        } else {
            ListingMode::Paginated
        },
        region: opt.region,
        period: opt.period,
        stat: opt.stat,
        connection_limit: opt.connection_limit,
        dryrun: opt.dryrun,
    };

    let outcome = main_runner(config).await?;

    info!("Done: {:?}", outcome);
    Ok(())
}
