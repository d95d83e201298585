//! Orderflow CLI - Command-line interface for the Orderflow daemon

use anyhow::{Context, Result};
use chrono::{Local, TimeZone};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9640";
const NOT_FOUND_CODE: i32 = 4001;

#[derive(Parser)]
#[command(name = "orderflow-cli")]
#[command(about = "Orderflow CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "ORDERFLOW_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an order (stored and queued)
    Create {
        /// Customer name
        #[arg(short, long)]
        customer: Option<String>,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,

        /// Order value, e.g. 12.50
        #[arg(short, long, allow_negative_numbers = true)]
        value: Decimal,
    },

    /// List all orders, newest first
    List,

    /// Show one order
    Get {
        /// Order ID
        id: i64,
    },

    /// Work with the order queue
    Queue {
        #[command(subcommand)]
        command: QueueCommands,
    },
}

#[derive(Subcommand)]
enum QueueCommands {
    /// Take the next order off the queue
    Next,
    /// Show the next order without removing it
    Peek,
    /// Queue size
    Status,
    /// Show every queued order, head first
    List,
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
    data: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct OrderSummary {
    id: i64,
    customer_name: Option<String>,
    description: Option<String>,
    value: Decimal,
    created_at: i64,
}

#[derive(Tabled)]
struct OrderRow {
    id: i64,
    customer: String,
    description: String,
    value: String,
    created: String,
}

impl From<OrderSummary> for OrderRow {
    fn from(order: OrderSummary) -> Self {
        Self {
            id: order.id,
            customer: order.customer_name.unwrap_or_else(|| "-".to_string()),
            description: order.description.unwrap_or_else(|| "-".to_string()),
            value: order.value.to_string(),
            created: format_millis(order.created_at),
        }
    }
}

fn format_millis(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => millis.to_string(),
    }
}

fn print_orders(orders: Vec<OrderSummary>) {
    let rows: Vec<OrderRow> = orders.into_iter().map(OrderRow::from).collect();
    println!("{}", Table::new(rows));
}

/// Print `{"order": ...}` results from queue.dequeue.v1 / queue.peek.v1
fn print_queue_item(result: serde_json::Value, heading: &str) -> Result<()> {
    let order: Option<OrderSummary> = serde_json::from_value(result["order"].clone())?;
    match order {
        Some(order) => {
            println!("{}", heading.cyan().bold());
            println!();
            print_orders(vec![order]);
        }
        None => println!("{}", "Queue is empty".yellow()),
    }
    Ok(())
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        if error.code == NOT_FOUND_CODE {
            if let Some(id) = error.data.as_ref().and_then(|d| d["id"].as_i64()) {
                anyhow::bail!("Order {} not found", id);
            }
        }
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Create {
            customer,
            description,
            value,
        } => {
            let params = json!({
                "customer_name": customer,
                "description": description,
                "value": value,
            });

            let result = call_rpc(&cli.rpc_url, "orders.create.v1", params).await?;
            let order: OrderSummary = serde_json::from_value(result)?;

            println!("{}", "✓ Order created and queued".green().bold());
            println!();
            print_orders(vec![order]);
        }

        Commands::List => {
            let result = call_rpc(&cli.rpc_url, "orders.list.v1", json!({})).await?;
            let orders: Vec<OrderSummary> = serde_json::from_value(result["orders"].clone())?;

            if orders.is_empty() {
                println!("{}", "No orders yet".yellow());
            } else {
                println!("{}", format!("{} order(s)", orders.len()).cyan().bold());
                println!();
                print_orders(orders);
            }
        }

        Commands::Get { id } => {
            let result = call_rpc(&cli.rpc_url, "orders.get.v1", json!({ "id": id })).await?;
            let order: OrderSummary = serde_json::from_value(result)?;
            print_orders(vec![order]);
        }

        Commands::Queue { command } => match command {
            QueueCommands::Next => {
                let result = call_rpc(&cli.rpc_url, "queue.dequeue.v1", json!({})).await?;
                print_queue_item(result, "Next order (removed from queue)")?;
            }

            QueueCommands::Peek => {
                let result = call_rpc(&cli.rpc_url, "queue.peek.v1", json!({})).await?;
                print_queue_item(result, "Next order")?;
            }

            QueueCommands::Status => {
                println!("{}", "Queue Status".cyan().bold());
                println!();

                match call_rpc(&cli.rpc_url, "queue.status.v1", json!({})).await {
                    Ok(status) => {
                        println!("  {} {}", "RPC URL:".bold(), cli.rpc_url);
                        println!("  {} {}", "Status:".bold(), "ONLINE".green());
                        println!("  {} {}", "Queued:".bold(), status["size"]);
                        if status["is_empty"].as_bool().unwrap_or(true) {
                            println!("  {}", "Queue is empty".yellow());
                        }
                    }
                    Err(e) => {
                        println!("  {} {}", "Status:".bold(), "ERROR".red());
                        println!("  {} {}", "Error:".bold(), e);
                    }
                }
            }

            QueueCommands::List => {
                let result = call_rpc(&cli.rpc_url, "queue.snapshot.v1", json!({})).await?;
                let orders: Vec<OrderSummary> =
                    serde_json::from_value(result["orders"].clone())?;

                if orders.is_empty() {
                    println!("{}", "Queue is empty".yellow());
                } else {
                    println!(
                        "{}",
                        format!("{} queued order(s), head first", orders.len())
                            .cyan()
                            .bold()
                    );
                    println!();
                    print_orders(orders);
                }
            }
        },
    }

    Ok(())
}
