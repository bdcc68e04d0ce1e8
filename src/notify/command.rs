use std::io;
use std::process::{Command, Stdio};

use futures::future;
use futures::prelude::*;
use serde_yaml::Value;

use super::Notifier;

pub const NOTIFIER_NAME: &'static str = "command";

/// A notifier that runs an arbitrary command with the status message
/// appended as the final argument.
///
/// Useful for piping status changes into loggers, status bars or
/// home-grown scripts, e.g. `command: logger -t netnotify`.
#[derive(Debug)]
pub struct CommandNotifier {
    args: Vec<String>,
    program: String,
}

impl CommandNotifier {
    pub fn new(line: &str) -> io::Result<Self> {
        let mut parts = line.trim()
            .split(' ')
            .filter(|part| part.len() > 0)
            .map(ToOwned::to_owned);
        let program = parts.next()
            .ok_or(io::Error::new(io::ErrorKind::InvalidData, "Missing command name."))?;

        Ok(CommandNotifier {
            args: parts.collect(),
            program,
        })
    }

    pub fn from_config(value: &Value) -> io::Result<Self> {
        match *value {
            Value::String(ref line) => Self::new(line.as_ref()),
            _ => Err(io::Error::new(io::ErrorKind::InvalidData, "Unknown configuration format")),
        }
    }

    fn notify_impl(&mut self, message: &str) -> io::Result<()> {
        Command::new(&self.program)
            .args(&self.args)
            .arg(message)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?
            .wait()?;

        Ok(())
    }
}

impl Notifier for CommandNotifier {
    fn notify(&mut self, message: &str) -> Box<Future<Item = (), Error = io::Error>> {
        Box::new(future::result(self.notify_impl(message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn smoke() {
        execute("true")
    }

    #[cfg(windows)]
    #[test]
    fn smoke() {
        execute("cmd /C exit 0")
    }

    #[should_panic]
    #[test]
    fn smoke_fail() {
        execute("this-is-a-nonexisting-process")
    }

    #[cfg(unix)]
    #[test]
    fn starting_space() {
        execute(" true");
    }

    fn execute(cmd: &str) {
        let mut notifier = CommandNotifier::new(cmd).unwrap();
        notifier.notify("Connected to WiFi").wait().unwrap();
    }

    #[test]
    fn splits_program_and_args() {
        let notifier = CommandNotifier::new("logger -t netnotify").unwrap();
        assert_eq!(notifier.program, "logger");
        assert_eq!(notifier.args, vec!["-t".to_owned(), "netnotify".to_owned()]);
    }

    #[test]
    fn load_cfg() {
        let cfg = Value::String("logger -t netnotify".to_owned());
        CommandNotifier::from_config(&cfg).unwrap();
    }

    #[test]
    #[should_panic]
    fn load_cfg_fail_empty() {
        let cfg = Value::String("".to_owned());
        CommandNotifier::from_config(&cfg).unwrap();
    }

    #[test]
    #[should_panic]
    fn load_cfg_fail_format() {
        CommandNotifier::from_config(&Value::Bool(true)).unwrap();
    }
}
