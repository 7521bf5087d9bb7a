use crate::config::{BridgeConfig, BridgeConfigSrc};
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target as ConsoleAppenderTarget},
        file::FileAppender,
        Append,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    init_config,
};

const LOG_PATTERN: &'static str = "{d(%Y-%m-%dT%H:%M:%S%.3f%z)} {l} {t} - {m}{n}";

pub fn init_logger(config: &BridgeConfig) -> Result<(), String> {
    let level_filter = level_filter(&config.log_level)?;

    let (name, appender): (&str, Box<dyn Append>) =
        if config.log_dest == BridgeConfigSrc::LOG_DEST_STDOUT {
            ("stdout", Box::new(console(ConsoleAppenderTarget::Stdout)))
        } else if config.log_dest == BridgeConfigSrc::LOG_DEST_STDERR {
            ("stderr", Box::new(console(ConsoleAppenderTarget::Stderr)))
        } else if let Some(path) = config
            .log_dest
            .strip_prefix(BridgeConfigSrc::LOG_DEST_FILE_PREFIX)
        {
            let file = FileAppender::builder()
                .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
                .build(path)
                .map_err(|err| format!("Unable to open log file {}: {:?}", path, err))?;
            ("file", Box::new(file))
        } else {
            return Err(format!("Unsupported log destination {}", config.log_dest));
        };

    let log_config = Config::builder()
        .appender(Appender::builder().build(name, appender))
        .build(Root::builder().appender(name).build(level_filter))
        .map_err(|err| format!("Unable to build a logger config: {:?}", err))?;

    init_config(log_config)
        .map(|_| ())
        .map_err(|err| format!("Unable to initialize a logger: {:?}", err))
}

fn console(target: ConsoleAppenderTarget) -> ConsoleAppender {
    ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .target(target)
        .build()
}

fn level_filter(level: &str) -> Result<LevelFilter, String> {
    match level {
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        level => Err(format!("Unsupported logging level {}", level)),
    }
}
