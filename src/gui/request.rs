// src/gui/request.rs
//
// Request sequencing for background fetches.
//
// Every fetch gets a ticket with a monotonic sequence number. Only the
// latest ticket per page is current; a completion carrying an older ticket
// is stale and gets dropped, so a slow first response can never overwrite
// a newer one. "Loading" is simply "some page has a current ticket out".

use std::collections::HashMap;

use crate::config::options::PageKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub kind: PageKind,
    pub seq: u64,
}

#[derive(Debug, Default)]
pub struct RequestSeq {
    last_seq: u64,
    in_flight: HashMap<PageKind, u64>,
}

impl RequestSeq {
    pub fn new() -> Self { Self::default() }

    /// Start a request for `kind`, superseding any earlier one.
    pub fn issue(&mut self, kind: PageKind) -> Ticket {
        self.last_seq += 1;
        self.in_flight.insert(kind, self.last_seq);
        Ticket { kind, seq: self.last_seq }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.in_flight.get(&ticket.kind) == Some(&ticket.seq)
    }

    /// Retire `ticket`. Returns false (and changes nothing) when it is stale.
    pub fn complete(&mut self, ticket: &Ticket) -> bool {
        if !self.is_current(ticket) { return false; }
        self.in_flight.remove(&ticket.kind);
        true
    }

    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn is_loading_page(&self, kind: PageKind) -> bool {
        self.in_flight.contains_key(&kind)
    }
}
