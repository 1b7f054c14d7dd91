//! Dashboard summary from the command line.
//!
//! Usage: `gym-dashboard [--json] [--csv] [--log-json]`

use anyhow::Context;
use gym_client::export::{export_csv, export_json};
use gym_client::{ClientConfig, MemberApi, MemberStore, logger};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let has_flag = |flag: &str| args.iter().any(|a| a == flag);

    logger::init_logger(has_flag("--log-json"));

    let config = ClientConfig::from_env();
    info!(base_url = %config.base_url, timeout_ms = config.timeout.as_millis() as u64, "Starting");

    let api = config
        .build_api_client()
        .context("Failed to build API client")?;
    if !api.health_check().await {
        warn!("Health check failed, continuing anyway");
    }

    let store = MemberStore::new(api);
    store.start().await;
    if let Some(err) = store.error() {
        anyhow::bail!("Unable to load members: {err}");
    }

    let members = store.members();
    if has_flag("--json") {
        println!("{}", export_json(&members)?);
        return Ok(());
    }
    if has_flag("--csv") {
        print!("{}", export_csv(&members));
        return Ok(());
    }

    let stats = store.stats();
    println!("Dashboard Overview");
    println!("  Active Members : {}", stats.active_members);
    println!("  New This Month : {}", stats.new_this_month);
    println!("  Expiring Soon  : {}", stats.expiring_soon);
    println!("  Expired        : {}", stats.expired);
    println!("  Total          : {}", members.len());
    Ok(())
}
