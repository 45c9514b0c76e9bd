//! log4rs setup for the RPC binary.
//!
//! Records go to stderr, since stdout carries the protocol, and optionally to
//! a size-rolled file under the data directory.

use std::path::Path;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;
use log4rs::Handle;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)}, {l}, {t}, {m}{n}";
const ROLL_SIZE: u64 = 1024 * 1024;
const ROLL_COUNT: u32 = 5;

/// Parses a level name such as `debug`; unknown names fall back to `info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Info)
}

/// Installs the global logger.
///
/// Stderr receives records at `level` and above; the file appender, when
/// `log_dir` is given, keeps everything down to debug.
pub fn setup_logger(level: LevelFilter, log_dir: Option<&Path>) -> Result<Handle, Box<dyn std::error::Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let mut builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root = Root::builder().appender("stderr");

    if let Some(dir) = log_dir {
        let file_path = dir.join("tabshelf.log");
        let pattern = dir.join("tabshelf.{}.log");
        let roller = FixedWindowRoller::builder()
            .build(&pattern.to_string_lossy(), ROLL_COUNT)?;
        let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(ROLL_SIZE)), Box::new(roller));
        let file = RollingFileAppender::builder()
            .append(true)
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(file_path, Box::new(policy))?;
        builder = builder.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file)),
        );
        root = root.appender("file");
    }

    let config = builder.build(root.build(LevelFilter::max()))?;
    let handle = log4rs::init_config(config)?;
    Ok(handle)
}
