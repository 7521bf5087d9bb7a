mod api;
mod args;
mod authorizer;
mod config;
mod logger;
mod publisher;
mod server;
mod server_error;
mod stats;
#[cfg(test)]
mod test_utils;

use args::parse_args;
use config::BridgeConfig;
use logger::init_logger;
use server::Server;
use std::{
    error::Error,
    io::{stderr, Write},
    process::exit,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args();
    let mut config = match args.get_one::<String>("CONFIG_FILE") {
        Some(config_file) => match BridgeConfig::from_file(config_file) {
            Ok(c) => c,
            Err(err) => {
                writeln!(stderr(), "{:?}", err)?;
                exit(1);
            }
        },
        None => BridgeConfig::default(),
    };

    if let Some(arg_port_str) = args.get_one::<String>("HTTP_PORT") {
        match arg_port_str.parse::<u16>() {
            Ok(port) => config.http_addr.set_port(port),
            Err(_) => {
                writeln!(stderr(), "Unable to parse HTTP port provided as a first argument.")?;
                exit(1);
            }
        }
    }

    if let Err(err) = init_logger(&config) {
        writeln!(stderr(), "{}", err)?;
        exit(1);
    }

    Server::new(config)?.start().await?;

    Ok(())
}
