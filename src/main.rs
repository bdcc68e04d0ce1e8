#[macro_use] extern crate clap;
extern crate env_logger;
#[macro_use] extern crate futures;
#[macro_use] extern crate log;
extern crate serde;
#[macro_use] extern crate serde_derive;
extern crate serde_yaml;
extern crate tokio_core;

mod config;
mod driver;
mod notify;
mod query;
mod status;
mod triggers;

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{AppSettings, Arg};
use futures::future::Executor;
use tokio_core::reactor::Core;

use config::Config;
use driver::drive;
use query::nmcli::NmcliQuery;
use status::classify;

const CONFIG_FILE_PARAM: &'static str = "CONFIG_FILE";
const ONCE_PARAM: &'static str = "ONCE";

fn main() {
    env_logger::init();

    let matches = app_from_crate!()
        .setting(AppSettings::DisableHelpSubcommand)
        .setting(AppSettings::GlobalVersion)
        .arg(
            Arg::with_name(CONFIG_FILE_PARAM)
                .help("The path to the configuration file. Can be either json or yaml.")
                .short("c")
                .long("config")
                .value_name("FILE")
                .default_value("~/.config/netnotify.yml")
                .takes_value(true)
                .global(true)
        )
        .arg(
            Arg::with_name(ONCE_PARAM)
                .help("Classify the current connectivity once, print it and exit.")
                .long("once")
                .global(true),
        )
        .get_matches();

    if matches.is_present(ONCE_PARAM) {
        let mut query = NmcliQuery::default();
        println!("{}", classify(&mut query));
        return;
    }

    let cfg = {
        let path = expand_home(matches.value_of(CONFIG_FILE_PARAM).unwrap());
        match fs::File::open(&path) {
            Ok(rdr) => {
                let cfg: Config = serde_yaml::from_reader(rdr)
                    .expect("Failed to parse config. Please ensure it is valid yaml or json and the structure is valid.");

                if let Err(err) = cfg.validate() {
                    panic!("Config is invalid, {}", err);
                }

                cfg
            },
            // Only fall back to the built-in defaults if the user did not
            // ask for a specific file.
            Err(err) => {
                if matches.occurrences_of(CONFIG_FILE_PARAM) > 0 {
                    panic!("Could not open config file '{}': {}. Does it exist?", path.display(), err);
                }

                info!("No config file at '{}', using defaults.", path.display());
                Config::default()
            },
        }
    };

    start(cfg);
}

/// Expand a leading `~` to the user's home directory.
///
/// Paths given on the command line are not shell-expanded, and the
/// default config path starts with `~`.
#[allow(deprecated)]
fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = env::home_dir() {
            return home;
        }
    }

    if path.starts_with("~/") {
        if let Some(home) = env::home_dir() {
            return home.join(&path[2..]);
        }
    }

    PathBuf::from(path)
}

fn start(config: Config) {
    let mut core = Core::new().unwrap();

    let handle = core.handle();
    let driver = drive(config, handle)
        .expect("Failed to set up the connectivity watcher.");

    core.execute(driver).unwrap();
    core.run(futures::empty::<(), ()>()).unwrap();
}
