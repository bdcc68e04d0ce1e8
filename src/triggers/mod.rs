use std::io;

use futures::prelude::*;
use tokio_core::reactor::Handle;

use status::Status;

pub mod poll;

/// A source of connectivity change events.
pub trait Trigger {
    /// Start listening for connectivity changes and dispatch the new
    /// status whenever the classification flips.
    fn listen(&mut self, handle: Handle) -> Box<Stream<Item = Status, Error = io::Error>>;
}
