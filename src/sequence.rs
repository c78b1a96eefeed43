//! Last-request-wins ordering for overlapping fetches.
//!
//! Each stream hands out increasing tokens; a response is applied only while
//! its token is still the newest one of its stream.

use std::fmt;

/// Independent request streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStream {
    /// Initial load and filter reloads; both redraw the map
    Map,
    /// Dataset fetch feeding the filter option lists
    Options,
    Search,
}

impl RequestStream {
    fn slot(self) -> usize {
        match self {
            RequestStream::Map => 0,
            RequestStream::Options => 1,
            RequestStream::Search => 2,
        }
    }
}

impl fmt::Display for RequestStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStream::Map => write!(f, "map"),
            RequestStream::Options => write!(f, "options"),
            RequestStream::Search => write!(f, "search"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    stream: RequestStream,
    sequence: u64,
}

impl RequestToken {
    pub fn stream(&self) -> RequestStream {
        self.stream
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.stream, self.sequence)
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: [u64; 3],
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request, superseding every earlier one on the same stream
    pub fn begin(&mut self, stream: RequestStream) -> RequestToken {
        let slot = &mut self.latest[stream.slot()];
        *slot += 1;
        RequestToken {
            stream,
            sequence: *slot,
        }
    }

    pub fn is_current(&self, token: &RequestToken) -> bool {
        self.latest[token.stream.slot()] == token.sequence
    }
}
