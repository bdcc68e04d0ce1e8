use std::io;
use std::process::{Command, Stdio};

use futures::future;
use futures::prelude::*;
use serde_yaml::Value;

use super::Notifier;

pub const NOTIFIER_NAME: &'static str = "desktop";

const DEFAULT_NOTIFY_SEND_PATH: &'static str = "notify-send";
const DEFAULT_SUMMARY: &'static str = "Network";
const DEFAULT_EXPIRE_MS: u64 = 4000;

/// A notifier that shows a transient desktop notification via `notify-send`.
///
/// The notification is non-blocking and auto-dismisses after the
/// configured expiry; dismissal itself is the notification daemon's
/// business, not ours.
#[derive(Debug)]
pub struct DesktopNotifier {
    expire_ms: u64,
    notify_send_path: String,
    summary: String,
}

impl DesktopNotifier {
    pub fn new<P: Into<String>, S: Into<String>>(notify_send_path: P, summary: S, expire_ms: u64) -> Self {
        DesktopNotifier {
            expire_ms,
            notify_send_path: notify_send_path.into(),
            summary: summary.into(),
        }
    }

    pub fn from_config(value: &Value) -> io::Result<Self> {
        match *value {
            Value::Null => Ok(Self::default()),
            Value::String(ref path) => {
                Ok(Self::new(path.as_str(), DEFAULT_SUMMARY, DEFAULT_EXPIRE_MS))
            },
            Value::Mapping(ref mapping) => {
                let path = mapping.get(&Value::String("path".to_owned()))
                    .and_then(|v| v.as_str())
                    .unwrap_or(DEFAULT_NOTIFY_SEND_PATH);
                let summary = mapping.get(&Value::String("summary".to_owned()))
                    .and_then(|v| v.as_str())
                    .unwrap_or(DEFAULT_SUMMARY);
                let expire_ms = mapping.get(&Value::String("expire_ms".to_owned()))
                    .and_then(|v| v.as_u64())
                    .unwrap_or(DEFAULT_EXPIRE_MS);

                Ok(Self::new(path, summary, expire_ms))
            },
            _ => Err(io::Error::new(io::ErrorKind::InvalidData, "Unknown configuration format")),
        }
    }

    fn notify_impl(&mut self, message: &str) -> io::Result<()> {
        Command::new(&self.notify_send_path)
            .arg("-t")
            .arg(self.expire_ms.to_string())
            .arg(&self.summary)
            .arg(message)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?
            .wait()?;

        Ok(())
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFY_SEND_PATH, DEFAULT_SUMMARY, DEFAULT_EXPIRE_MS)
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&mut self, message: &str) -> Box<Future<Item = (), Error = io::Error>> {
        Box::new(future::result(self.notify_impl(message)))
    }
}

#[cfg(test)]
mod tests {
    use serde_yaml;

    use super::*;

    #[test]
    fn load_cfg_null() {
        let notifier = DesktopNotifier::from_config(&Value::Null).unwrap();
        assert_eq!(notifier.notify_send_path, DEFAULT_NOTIFY_SEND_PATH);
        assert_eq!(notifier.summary, DEFAULT_SUMMARY);
        assert_eq!(notifier.expire_ms, DEFAULT_EXPIRE_MS);
    }

    #[test]
    fn load_cfg_path() {
        let cfg = Value::String("/usr/local/bin/notify-send".to_owned());
        let notifier = DesktopNotifier::from_config(&cfg).unwrap();
        assert_eq!(notifier.notify_send_path, "/usr/local/bin/notify-send");
    }

    #[test]
    fn load_cfg_map() {
        let cfg: Value = serde_yaml::from_str("summary: Connectivity\nexpire_ms: 1500").unwrap();

        let notifier = DesktopNotifier::from_config(&cfg).unwrap();
        assert_eq!(notifier.notify_send_path, DEFAULT_NOTIFY_SEND_PATH);
        assert_eq!(notifier.summary, "Connectivity");
        assert_eq!(notifier.expire_ms, 1500);
    }

    #[test]
    #[should_panic]
    fn load_cfg_fail() {
        DesktopNotifier::from_config(&Value::Bool(false)).unwrap();
    }
}
