use std::io;
use std::time::{Duration, Instant};

use futures::prelude::*;
use tokio_core::reactor::{Handle, Timeout};

use query::NetworkQuery;
use status::{classify, Status};
use triggers::Trigger;

/// A trigger that detects connectivity changes by re-classifying the
/// network state at a fixed interval.
///
/// There is no portable desktop equivalent of an OS connectivity
/// broadcast, so changes are detected by polling. A status is only
/// dispatched when it differs from the previously dispatched one, plus
/// once at startup for the initial state.
pub struct PollTrigger {
    query: Option<Box<NetworkQuery>>,
    interval: Duration,
}

impl PollTrigger {
    pub fn new(query: Box<NetworkQuery>, interval: Duration) -> Self {
        PollTrigger {
            query: Some(query),
            interval,
        }
    }
}

impl Trigger for PollTrigger {
    fn listen(&mut self, handle: Handle) -> Box<Stream<Item = Status, Error = io::Error>> {
        let query = self.query.take()
            .expect("PollTrigger is already listening.");

        Box::new(PollStream::new(query, self.interval, handle))
    }
}

struct PollStream {
    interval: Duration,
    last: Option<Status>,
    query: Box<NetworkQuery>,
    timeout: Timeout,
}

impl PollStream {
    pub fn new(query: Box<NetworkQuery>, interval: Duration, handle: Handle) -> Self {
        PollStream {
            interval,
            last: None,
            query,
            timeout: Timeout::new(Duration::from_millis(0), &handle).unwrap(),
        }
    }
}

impl Stream for PollStream {
    type Item = Status;
    type Error = io::Error;

    fn poll(&mut self) -> Poll<Option<Self::Item>, Self::Error> {
        try_ready!(self.timeout.poll());
        self.timeout.reset(Instant::now() + self.interval);

        let status = classify(&mut *self.query);
        if self.last != Some(status) {
            self.last = Some(status);

            Ok(Async::Ready(Some(status)))
        } else {
            try_ready!(self.timeout.poll());

            Ok(Async::NotReady)
        }
    }
}
