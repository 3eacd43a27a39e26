// Module declarations
mod builder;
mod cli;
mod config;
mod content;
mod layout;
mod liquid;
mod server;
mod utils;

#[tokio::main]
async fn main() {
    let code = cli::run().await;
    std::process::exit(code);
}
