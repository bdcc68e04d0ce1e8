use std::io;
use std::time::Duration;

use futures::future;
use futures::prelude::*;
use serde_yaml::Value;
use tokio_core::reactor::Handle;

use config::Config;
use notify::Notifier;
use notify::command::{NOTIFIER_NAME as COMMAND_NOTIFIER_NAME, CommandNotifier};
use notify::desktop::{NOTIFIER_NAME as DESKTOP_NOTIFIER_NAME, DesktopNotifier};
use query::NetworkQuery;
use query::nmcli::{QUERY_NAME as NMCLI_QUERY_NAME, NmcliQuery};
use triggers::Trigger;
use triggers::poll::PollTrigger;

/// Drives the daemon, listening for connectivity changes and dispatching
/// every new status to all configured notifiers.
pub fn drive(cfg: Config, handle: Handle) -> io::Result<Box<Future<Item = (), Error = ()>>> {
    let mut notifiers = cfg.notifiers.iter()
        .map(|(key, config)| get_notifier(key, config))
        .collect::<io::Result<Vec<Box<Notifier>>>>()?;

    let query = {
        let (name, config) = cfg.query.iter().nth(0)
            .ok_or(io::Error::new(io::ErrorKind::InvalidData, "Missing network query."))?;

        get_query(name, config)?
    };

    let mut trigger = PollTrigger::new(query, Duration::from_millis(cfg.interval_ms));

    let driver = trigger.listen(handle)
        .for_each(move |status| {
            info!("Connectivity changed: {}.", status);

            let message = status.to_string();
            let notify_all = notifiers.iter_mut()
                .map(|notifier| notifier.notify(&message))
                .collect::<Vec<_>>();

            // A broken sink must not take the watcher down with it.
            future::join_all(notify_all).then(|result| -> io::Result<()> {
                if let Err(err) = result {
                    error!("Failed to dispatch notification: {}.", err);
                }

                Ok(())
            })
        })
        .map_err(|err| error!("Experienced error while watching connectivity: {:?}.", err));

    Ok(Box::new(driver))
}

fn get_notifier(name: &str, config: &Value) -> io::Result<Box<Notifier>> {
    match name.trim() {
        COMMAND_NOTIFIER_NAME => Ok(Box::new(CommandNotifier::from_config(config)?)),
        DESKTOP_NOTIFIER_NAME => Ok(Box::new(DesktopNotifier::from_config(config)?)),

        _ => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Unknown notifier name '{}'.", name),
        ))
    }
}

fn get_query(name: &str, config: &Value) -> io::Result<Box<NetworkQuery>> {
    match name.trim() {
        NMCLI_QUERY_NAME => Ok(Box::new(NmcliQuery::from_config(config)?)),

        _ => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Unknown query name '{}'.", name),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names() {
        get_notifier("desktop", &Value::Null).unwrap();
        get_notifier("command", &Value::String("logger -t netnotify".to_owned())).unwrap();
        get_query("nmcli", &Value::Null).unwrap();
    }

    #[test]
    #[should_panic]
    fn unknown_notifier() {
        get_notifier("carrier-pigeon", &Value::Null).unwrap();
    }

    #[test]
    #[should_panic]
    fn unknown_query() {
        get_query("ifconfig", &Value::Null).unwrap();
    }
}
