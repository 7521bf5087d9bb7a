use clap::{Arg, ArgMatches, Command};

pub fn parse_args() -> ArgMatches {
    Command::new("MQTT auth bridge - VerneMQ webhooks to things service")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("CONFIG_FILE")
                .short('c')
                .long("config")
                .help("Bridge configuration file")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("HTTP_PORT")
                .help("HTTP port the bridge will start listening on for broker hooks.")
                .index(1),
        )
        .get_matches()
}
