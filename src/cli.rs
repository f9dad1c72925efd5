use crate::client::{self, GreetingClient, GreetingPage, ViewState, DEFAULT_BASE_URL};
use clap::{Args, Parser, Subcommand};
use rocket::figment::Figment;
use std::net::IpAddr;

#[derive(Parser)]
#[command(name = "greeting_api")]
#[command(about = "Greeting API server and terminal client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Start the API server")]
    Serve(ServeArgs),
    #[command(about = "Fetch the greeting once, rendering each page state")]
    Fetch {
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },
}

/// Overrides on top of Rocket's own configuration (`Rocket.toml`, `ROCKET_*`).
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[arg(long)]
    pub address: Option<IpAddr>,
    #[arg(long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    pub fn figment(&self) -> Figment {
        let mut figment = rocket::Config::figment();
        if let Some(address) = self.address {
            figment = figment.merge(("address", address));
        }
        if let Some(port) = self.port {
            figment = figment.merge(("port", port));
        }
        figment
    }
}

pub fn print_usage() {
    println!("Usage: greeting_api <command>");
    println!();
    println!("Commands:");
    println!("  serve    Start the API server");
    println!("  fetch    Fetch the greeting from a running server");
    println!();
    println!("Run 'greeting_api <command> --help' for more information on a command.");
}

pub async fn run_fetch(base_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = GreetingClient::new(base_url);
    let mut page = client::fetch_once(&client, print_page).await;

    let ViewState::Failed(message) = page.state() else {
        return Ok(());
    };
    let message = message.clone();

    // "Try Again" only resets the page; a new run is a new click.
    page.retry();
    print_page(&page);
    Err(format!("fetch failed: {message}").into())
}

fn print_page(page: &GreetingPage) {
    println!("{}", page.render());
    println!();
}
