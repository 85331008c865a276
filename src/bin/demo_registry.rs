//! Carrier Registry Walkthrough Demo
//! Run: ./target/release/demo_registry

use anyhow::Result;
use iran_carrier_codes::{mnc_table, prefix_table};

fn main() -> Result<()> {
    println!("\n{}", "=".repeat(80));
    println!("                    IRANIAN CARRIER CODE REGISTRY");
    println!("{}\n", "=".repeat(80));

    println!("MCC/MNC REGISTRY (MCC {})", mnc_table::IRAN_MCC);
    println!("{}", "-".repeat(60));
    println!("  {:>4} {:>4}  {:28}", "MCC", "MNC", "Carrier");
    println!("  {}", "-".repeat(54));
    for e in mnc_table::entries() {
        println!("  {:>4} {:>4}  {:28}", e.mcc, e.mnc, e.carrier);
    }

    println!("\n\nPREFIX BLOCKS PER OPERATOR");
    println!("{}", "-".repeat(60));
    for (carrier, count) in prefix_table::prefix_counts() {
        let codes = prefix_table::codes_for_carrier(carrier).unwrap_or(&[]);
        println!("  {:10} {:>3} blocks   {}", carrier, count, codes.join(", "));
    }

    println!("\n\nSAMPLE MCC/MNC LOOKUPS");
    println!("{}", "-".repeat(60));
    let pairs = [("432", "11"), ("432", "35"), ("432", "999"), ("310", "11")];
    for (mcc, mnc) in pairs {
        match mnc_table::lookup(mcc, mnc) {
            Some(name) => println!("  {}/{:<4} -> {}", mcc, mnc, name),
            None => println!("  {}/{:<4} -> no match", mcc, mnc),
        }
    }

    println!("\n\nSAMPLE NUMBER LOOKUPS");
    println!("{}", "-".repeat(60));
    let numbers = ["09123456789", "+989351234567", "9021234567", "02188776655"];
    for number in numbers {
        match prefix_table::carrier_for_number(number) {
            Some(name) => println!("  {:15} -> {}", number, name),
            None => println!("  {:15} -> no match", number),
        }
    }

    println!("\n{}", "=".repeat(80));
    println!();

    Ok(())
}
