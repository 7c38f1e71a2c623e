use std::net::{IpAddr, SocketAddr};
use std::process;
use std::sync::Arc;

use clap::Parser;

use analog_forecast::api;
use analog_forecast::config::Config;
use analog_forecast::state::AppState;

#[derive(Parser)]
#[command(name = "analog-forecast", about = "Analog forecast form service", version)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // No usable API base URL means no tool: refuse to start.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[AnalogForecast] {e}");
            process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(config));
    let addr = SocketAddr::new(args.host, args.port);

    if let Err(e) = api::serve(state, addr).await {
        eprintln!("[AnalogForecast] server error: {e}");
        process::exit(1);
    }
}
