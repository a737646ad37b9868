use simple_storage_backend::tests::contract_tests::{
    test_connection, test_list_accounts, test_missing_network_lookup, test_read_value,
    test_write_read_round_trip, test_write_value,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("SimpleStorage Backend Contract Test Runner");
    println!("==========================================\n");

    // Get command line arguments
    let args: Vec<String> = std::env::args().collect();
    let test_name = args.get(1).map(|s| s.as_str()).unwrap_or("all");

    match test_name {
        "connection" => {
            println!("Running connection test...");
            test_connection().await?;
        }
        "accounts" => {
            println!("Running list accounts test...");
            test_list_accounts().await?;
        }
        "read" => {
            println!("Running read value test...");
            test_read_value().await?;
        }
        "write" => {
            println!("Running write value test...");
            test_write_value().await?;
        }
        "round_trip" => {
            println!("Running write and read round trip test...");
            test_write_read_round_trip().await?;
        }
        "lookup" => {
            println!("Running missing network lookup test...");
            test_missing_network_lookup().await?;
        }
        "all" => {
            println!("Running all tests...\n");
            test_connection().await?;
            test_list_accounts().await?;
            test_read_value().await?;
            test_write_value().await?;
            test_write_read_round_trip().await?;
            test_missing_network_lookup().await?;
        }
        _ => {
            println!("Unknown test: {}", test_name);
            println!("Available tests: connection, accounts, read, write, round_trip, lookup, all");
        }
    }

    println!("\nTest run complete");
    Ok(())
}
