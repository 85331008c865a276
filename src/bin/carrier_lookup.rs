use anyhow::Result;
use clap::Parser;
use iran_carrier_codes::{mnc_table, prefix_table};
use serde_json::json;
use tracing::debug;

/// Iranian carrier code lookup
#[derive(Parser, Debug)]
#[command(name = "carrier_lookup")]
#[command(about = "Look up Iranian carriers by MCC/MNC, dialing prefix, or number")]
struct Args {
    /// Mobile Country Code
    #[arg(long, default_value = "432")]
    mcc: String,

    /// Mobile Network Code to look up
    #[arg(long)]
    mnc: Option<String>,

    /// Four-digit dialing prefix to look up
    #[arg(long)]
    prefix: Option<String>,

    /// Full subscriber number to look up
    #[arg(long)]
    number: Option<String>,

    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .init();

    let args = Args::parse();
    debug!("args: {:?}", args);

    let (query, carrier) = if let Some(mnc) = &args.mnc {
        (format!("{}/{}", args.mcc, mnc), mnc_table::lookup(&args.mcc, mnc))
    } else if let Some(prefix) = &args.prefix {
        (prefix.clone(), prefix_table::carrier_for_prefix(prefix))
    } else if let Some(number) = &args.number {
        (number.clone(), prefix_table::carrier_for_number(number))
    } else {
        anyhow::bail!("one of --mnc, --prefix, or --number is required");
    };

    if args.json {
        let out = json!({
            "query": query,
            "carrier": carrier,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        match carrier {
            Some(name) => println!("{} -> {}", query, name),
            None => println!("{} -> no match", query),
        }
    }

    Ok(())
}
