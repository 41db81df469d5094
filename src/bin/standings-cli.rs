use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

#[derive(Parser)]
#[command(name = "standings-cli")]
#[command(about = "Command-line client for the driver standings API", long_about = None)]
struct Cli {
    /// Base URL of the API, including its base path.
    #[arg(short, long, default_value = "http://localhost:3000/api/v1")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all drivers in standings order
    List,
    /// Show the driver at a standings position
    Standings { position: String },
    /// Show a driver by id
    Get { id: String },
    /// Create a driver
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        time: String,
        #[arg(long)]
        points: Option<u32>,
    },
    /// Update some fields of a driver
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        points: Option<u32>,
    },
    /// Delete a driver
    Delete { id: String },
    /// List team standings
    Teams,
    /// Show the team at a standings position
    TeamStandings { position: String },
}

fn driver_body(name: Option<String>, time: Option<String>, points: Option<u32>) -> Value {
    let mut body = Map::new();
    if let Some(name) = name {
        body.insert("name".into(), Value::from(name));
    }
    if let Some(time) = time {
        body.insert("time".into(), Value::from(time));
    }
    if let Some(points) = points {
        body.insert("points".into(), Value::from(points));
    }
    Value::Object(body)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::List => client.get(format!("{}/drivers", base)),
        Commands::Standings { position } => {
            client.get(format!("{}/drivers/standings/{}", base, position))
        }
        Commands::Get { id } => client.get(format!("{}/drivers/{}", base, id)),
        Commands::Create { name, time, points } => client
            .post(format!("{}/drivers", base))
            .json(&driver_body(Some(name), Some(time), points)),
        Commands::Update { id, name, time, points } => client
            .put(format!("{}/drivers/{}", base, id))
            .json(&driver_body(name, time, points)),
        Commands::Delete { id } => client.delete(format!("{}/drivers/{}", base, id)),
        Commands::Teams => client.get(format!("{}/teams", base)),
        Commands::TeamStandings { position } => {
            client.get(format!("{}/teams/standings/{}", base, position))
        }
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
    }
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
