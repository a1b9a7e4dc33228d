use anyhow::Result;
use bls_rs::{ApiResponse, Client, Payload, Settings, output};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bls",
    version,
    about = "Fetch & print BLS time-series data"
)]
struct Cli {
    /// Series IDs separated by comma or semicolon.
    #[arg(short, long, default_value = "SMU18000000000000001")]
    series: String,
    /// First year of the inclusive range.
    #[arg(long, default_value_t = 2023)]
    start_year: i32,
    /// Last year of the inclusive range.
    #[arg(long, default_value_t = 2025)]
    end_year: i32,
    /// Settings file containing the API_KEY entry.
    #[arg(long, default_value = "appsettings.json")]
    config: PathBuf,
    /// Override the API endpoint URL (used by tests).
    #[arg(long, hide = true)]
    endpoint: Option<String>,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    // Single reporting point; the run ends normally either way.
    if let Err(err) = run(cli) {
        println!("An error occurred:");
        println!("{:#}", err);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(&cli.config)?;
    let payload = Payload::new(
        settings.api_key,
        parse_list(&cli.series),
        cli.start_year,
        cli.end_year,
    );

    let mut client = Client::default();
    if let Some(endpoint) = cli.endpoint {
        client.endpoint = endpoint;
    }
    let reply = client.send(&payload)?;
    if !reply.status.is_success() {
        println!("Error: {}", reply.status.as_u16());
        return Ok(());
    }

    let response = ApiResponse::parse(&reply.body)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::write_report(&mut out, &response, &reply.body)?;
    out.flush()?;
    Ok(())
}
