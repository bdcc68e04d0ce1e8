use std::fmt;

use query::{NetworkQuery, Transport};

/// The device's current connectivity, classified three ways.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    /// The active network is a wifi network.
    WifiConnected,

    /// The active network is a mobile data network.
    MobileDataConnected,

    /// There is no active network, or the active network uses a
    /// transport we do not treat as internet connectivity.
    Disconnected,
}

/// Classify the current connectivity state of the given query capability.
///
/// This is total: a query failure (missing utility, revoked permissions)
/// counts as `Disconnected` so that callers always end up with a
/// displayable state.
pub fn classify(query: &mut NetworkQuery) -> Status {
    match query.active_transport() {
        Ok(Some(Transport::Wifi)) => Status::WifiConnected,
        Ok(Some(Transport::Mobile)) => Status::MobileDataConnected,
        Ok(_) => Status::Disconnected,
        Err(err) => {
            warn!("Network query failed, treating as disconnected: {}.", err);
            Status::Disconnected
        },
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match *self {
            Status::WifiConnected => "Connected to WiFi",
            Status::MobileDataConnected => "Connected to Mobile Data",
            Status::Disconnected => "No Internet Connection",
        };

        write!(f, "{}", message)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    struct StubQuery(io::Result<Option<Transport>>);

    impl NetworkQuery for StubQuery {
        fn active_transport(&mut self) -> io::Result<Option<Transport>> {
            match self.0 {
                Ok(t) => Ok(t),
                Err(ref err) => Err(io::Error::new(err.kind(), "stub failure")),
            }
        }
    }

    #[test]
    fn no_active_network() {
        let mut query = StubQuery(Ok(None));
        assert_eq!(classify(&mut query), Status::Disconnected);
    }

    #[test]
    fn wifi() {
        let mut query = StubQuery(Ok(Some(Transport::Wifi)));
        assert_eq!(classify(&mut query), Status::WifiConnected);
    }

    #[test]
    fn mobile_data() {
        let mut query = StubQuery(Ok(Some(Transport::Mobile)));
        assert_eq!(classify(&mut query), Status::MobileDataConnected);
    }

    #[test]
    fn other_transports_are_disconnected() {
        for transport in &[Transport::Ethernet, Transport::Bluetooth, Transport::Other] {
            let mut query = StubQuery(Ok(Some(*transport)));
            assert_eq!(classify(&mut query), Status::Disconnected);
        }
    }

    #[test]
    fn query_failure_is_disconnected() {
        let mut query = StubQuery(Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));
        assert_eq!(classify(&mut query), Status::Disconnected);
    }

    #[test]
    fn idempotent() {
        let mut query = StubQuery(Ok(Some(Transport::Wifi)));
        assert_eq!(classify(&mut query), classify(&mut query));
    }

    #[test]
    fn display_strings() {
        assert_eq!(Status::WifiConnected.to_string(), "Connected to WiFi");
        assert_eq!(Status::MobileDataConnected.to_string(), "Connected to Mobile Data");
        assert_eq!(Status::Disconnected.to_string(), "No Internet Connection");
    }
}
