use std::io;

pub mod nmcli;

/// The transport type of an active network device.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Transport {
    Wifi,
    Mobile,
    Ethernet,
    Bluetooth,
    Other,
}

/// A capability for querying the transport of the currently active network.
///
/// This is the seam towards the platform's network stack. Implementations
/// answer a single question: is there an active network right now, and if
/// so, what transport does it use?
pub trait NetworkQuery {
    /// Query the transport of the active network.
    ///
    /// Returns `None` if no network is currently active.
    fn active_transport(&mut self) -> io::Result<Option<Transport>>;
}
