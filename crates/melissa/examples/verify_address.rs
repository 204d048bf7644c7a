//! Verify a single address against GlobalAddress.
//!
//! Run with: cargo run --example verify_address
//!
//! Set the MELISSA_API_KEY environment variable before running.

use melissa::{AddressLine, AddressQuery, MelissaClient, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Get API key from environment
    let api_key = std::env::var("MELISSA_API_KEY")
        .expect("MELISSA_API_KEY environment variable is required");

    let client = MelissaClient::new(api_key)?;

    println!("=== Ping ===");
    client.ping().await?;
    println!("GlobalAddress is reachable");
    println!();

    let query = AddressQuery::new()
        .address_line(AddressLine::Line1, "22382 Avenida Empresa")
        .locality("Rancho Santa Margarita")
        .administrative_area("CA")
        .postal_code("92688")
        .country("US")
        .transmission_reference("verify_address example");

    println!("=== Query ===");
    let response = client.query(&query).await?;
    println!("Version: {}", response.version);
    println!("Total records: {}", response.total_records);
    if !response.is_consistent() {
        println!("warning: TotalRecords does not match the records returned");
    }
    for (code, description) in response.transmission_errors() {
        println!("Transmission {code}: {}", description.unwrap_or("unknown code"));
    }
    println!();

    for record in &response.records {
        println!("=== Record {} ===", record.record_id);
        for line in record.address_lines() {
            println!("  {line}");
        }
        if let Some(kind) = record.address_type_description() {
            println!("Address type: {kind}");
        }
        if let Some((lat, lon)) = record.coordinates() {
            println!("Coordinates: {lat}, {lon}");
        }
        for (code, description) in record.result_descriptions() {
            println!("  {code}: {}", description.unwrap_or("unknown code"));
        }
    }

    Ok(())
}
