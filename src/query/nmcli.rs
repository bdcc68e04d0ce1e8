use std::io;
use std::process::Command;
use std::str;

use serde_yaml::Value;

use query::{NetworkQuery, Transport};

pub const QUERY_NAME: &'static str = "nmcli";

const DEFAULT_NMCLI_PATH: &'static str = "nmcli";

/// A network query backed by NetworkManager's `nmcli` utility.
///
/// Invokes `nmcli -t -f DEVICE,TYPE,STATE device` and inspects the
/// connected devices. When several devices are connected at once, wifi
/// wins over mobile data, mobile data over everything else.
#[derive(Debug)]
pub struct NmcliQuery(String);

impl NmcliQuery {
    pub fn new<P: Into<String>>(nmcli_path: P) -> Self {
        NmcliQuery(nmcli_path.into())
    }

    pub fn from_config(cfg: &Value) -> io::Result<Self> {
        match *cfg {
            Value::Null => Ok(Self::new(DEFAULT_NMCLI_PATH)),
            Value::String(ref path) => Ok(Self::new(path.as_str())),
            _ => Err(io::Error::new(io::ErrorKind::InvalidData, "Unknown configuration format")),
        }
    }
}

impl Default for NmcliQuery {
    fn default() -> Self {
        Self::new(DEFAULT_NMCLI_PATH)
    }
}

impl NetworkQuery for NmcliQuery {
    fn active_transport(&mut self) -> io::Result<Option<Transport>> {
        let output = Command::new(&self.0)
            .args(&["-t", "-f", "DEVICE,TYPE,STATE", "device"])
            .output()?;

        let stdout = str::from_utf8(&output.stdout)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "Got non-UTF-8 output from nmcli"))?;

        Ok(parse_device_list(stdout))
    }
}

/// Parse the active transport out of `nmcli`'s terse device listing.
///
/// Each line has the form `DEVICE:TYPE:STATE`, e.g. `wlan0:wifi:connected`.
/// Only connected devices count; the loopback device is never a transport.
fn parse_device_list(output: &str) -> Option<Transport> {
    let mut best: Option<Transport> = None;

    for line in output.lines() {
        let mut fields = line.trim().splitn(3, ':');
        let _device = fields.next();
        let ty = match fields.next() {
            Some(ty) => ty,
            None => continue,
        };
        let connected = fields.next()
            .map(|state| state.starts_with("connected"))
            .unwrap_or(false);

        if !connected || ty == "loopback" {
            continue;
        }

        let transport = match ty {
            "wifi" => Transport::Wifi,
            "gsm" | "cdma" => Transport::Mobile,
            "ethernet" => Transport::Ethernet,
            "bt" | "bluetooth" => Transport::Bluetooth,
            _ => Transport::Other,
        };

        best = match (best, transport) {
            (Some(Transport::Wifi), _) | (_, Transport::Wifi) => Some(Transport::Wifi),
            (Some(Transport::Mobile), _) | (_, Transport::Mobile) => Some(Transport::Mobile),
            (Some(prev), _) => Some(prev),
            (None, t) => Some(t),
        };
    }

    best
}
