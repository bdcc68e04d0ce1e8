use std::io;

use futures::prelude::*;

pub mod command;
pub mod desktop;

/// A sink that surfaces a connectivity message to the user.
pub trait Notifier {
    /// Asynchronously display the given message.
    fn notify(&mut self, message: &str) -> Box<Future<Item = (), Error = io::Error>>;
}
