//! Command-line front end for the order ledger.
//!
//! Stands in for the web form: `list` prints the current order table,
//! `add` prices and records a new order.

use dotenvy::dotenv;
use ice_orders::config::{PriceTable, RemoteConfig};
use ice_orders::errors::{Error, Result};
use ice_orders::models::Order;
use ice_orders::remote::HttpBackend;
use ice_orders::store::OrderStore;
use std::sync::Arc;
use std::{env, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const PRICE_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // 3. Load the price table (built-in defaults if config.toml is absent)
    let prices = PriceTable::load_or_default(PRICE_CONFIG_PATH)
        .inspect_err(|e| error!("Failed to load price configuration: {}", e))?;

    // 4. Build the store over the hosted backend
    let remote = RemoteConfig::from_env();
    let store = OrderStore::new(Arc::new(HttpBackend::new(remote)));

    // 5. Dispatch the command
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("list") => {
            store.fetch_orders().await;
            print_orders(&store.orders().await);
            Ok(())
        }
        Some("add") => {
            let order = parse_add(&args[1..], &prices)?;
            let inserted = store.add_order_checked(order).await?;
            println!(
                "Recorded order #{} for {} ({} x {}, {} VND, {}).",
                inserted.id.unwrap_or_default(),
                inserted.customer_name,
                inserted.quantity,
                inserted.ice_type,
                inserted.price,
                inserted.debt_label(),
            );
            Ok(())
        }
        Some(other) => Err(Error::Config(format!(
            "Unknown command `{other}`. Usage: ice-orders [list | add <customer> <type> <quantity> [--debt]]"
        ))),
    }
}

fn parse_add(args: &[String], prices: &PriceTable) -> Result<Order> {
    let usage = "Usage: ice-orders add <customer> <type> <quantity> [--debt]";
    let [customer, ice_type, quantity, rest @ ..] = args else {
        return Err(Error::Config(usage.to_string()));
    };
    if customer.is_empty() {
        return Err(Error::Config("Customer name must not be empty".to_string()));
    }
    let quantity: u32 = quantity
        .parse()
        .map_err(|_| Error::Config(format!("Quantity must be a positive integer. {usage}")))?;
    if quantity == 0 {
        return Err(Error::Config(format!(
            "Quantity must be a positive integer. {usage}"
        )));
    }
    let is_debt = match rest {
        [] => false,
        [flag] if flag.as_str() == "--debt" => true,
        _ => return Err(Error::Config(usage.to_string())),
    };
    Ok(Order::new(
        customer.as_str(),
        ice_type.as_str(),
        quantity,
        is_debt,
        prices,
    ))
}

fn print_orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("No orders recorded.");
        return;
    }
    println!(
        "{:<4} {:<24} {:<10} {:>8} {:>12}  {}",
        "ID", "Khách hàng", "Loại đá", "SL", "Giá (VND)", "Thanh toán"
    );
    for order in orders {
        println!(
            "{:<4} {:<24} {:<10} {:>8} {:>12}  {}",
            order.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            order.customer_name,
            order.ice_type,
            order.quantity,
            order.price,
            order.debt_label(),
        );
    }
}
