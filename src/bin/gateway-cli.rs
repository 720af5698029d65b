use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Query a running Pelabuhan gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000", env = "GATEWAY_URL")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check gateway health
    Health,
    /// Show the endpoint index
    Root,
    /// List countries
    Negaras,
    /// List ports of a country
    Pelabuhans {
        /// Country identifier
        id_negara: String,
    },
    /// List goods of a port
    Barangs {
        /// Port identifier
        id_pelabuhan: String,
    },
}

impl Commands {
    fn request(&self) -> (&'static str, Option<(&'static str, &str)>) {
        match self {
            Commands::Health => ("/health", None),
            Commands::Root => ("/", None),
            Commands::Negaras => ("/api/v1/negaras", None),
            Commands::Pelabuhans { id_negara } => {
                ("/api/v1/pelabuhans", Some(("id_negara", id_negara.as_str())))
            }
            Commands::Barangs { id_pelabuhan } => {
                ("/api/v1/barangs", Some(("id_pelabuhan", id_pelabuhan.as_str())))
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let (path, query) = cli.command.request();
    let mut request = client
        .get(format!("{}{}", cli.url.trim_end_matches('/'), path))
        .headers(headers);
    if let Some(pair) = query {
        request = request.query(&[pair]);
    }

    let res = request.send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
