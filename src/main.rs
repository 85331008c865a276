use anyhow::Result;
use iran_carrier_codes::{mnc_table, prefix_table};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    info!("=== Iranian Carrier Code Registry ===");

    let entries = mnc_table::entries();
    info!("MCC/MNC registry: {} entries under MCC {}", entries.len(), mnc_table::IRAN_MCC);

    println!("\nMCC  MNC  Carrier");
    println!("{}", "-".repeat(40));
    for e in &entries {
        println!("{}  {:>3}  {}", e.mcc, e.mnc, e.carrier);
    }

    let groups = prefix_table::groups();
    info!(
        "Prefix table: {} operators, {} assigned prefixes",
        groups.len(),
        prefix_table::all_prefixes().len()
    );

    println!("\n{}", serde_json::to_string_pretty(&groups)?);

    Ok(())
}
