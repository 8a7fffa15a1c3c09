//! Month-keyed cache of blocked rules.
//!
//! Blocked rules are fetched asynchronously per (year, month) of one host. A
//! fetch is started with [`BlockedDatesCache::begin_request`] and its response
//! is only stored if no newer request for the same month was started meanwhile
//! and the cache was not switched to another host.

use std::collections::HashMap;

use crate::calendar::{BlockedRules, ReferenceMonth};

/// Handle for one in-flight blocked-dates fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    month: ReferenceMonth,
    id: u64,
}

impl RequestTicket {
    pub fn month(&self) -> ReferenceMonth {
        self.month
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Default)]
pub struct BlockedDatesCache {
    /// Username whose rules are held
    host: String,
    entries: HashMap<ReferenceMonth, BlockedRules>,
    latest: HashMap<ReferenceMonth, u64>,
    next_id: u64,
}

impl BlockedDatesCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Point the cache at `host`. Switching to another host drops every cached
    /// month and orphans the fetches in flight. Returns whether it switched.
    pub fn set_host(&mut self, host: &str) -> bool {
        if self.host == host {
            return false;
        }

        log::debug!("Blocked dates cache switched from '{}' to '{}'", self.host, host);
        self.host = host.to_string();
        self.entries.clear();
        self.latest.clear();
        true
    }

    pub fn get(&self, month: ReferenceMonth) -> Option<&BlockedRules> {
        self.entries.get(&month)
    }

    /// Whether a fetch for `month` is still awaiting its response
    pub fn is_pending(&self, month: ReferenceMonth) -> bool {
        self.latest.contains_key(&month)
    }

    /// Register a new fetch for `month`, superseding any earlier one.
    pub fn begin_request(&mut self, month: ReferenceMonth) -> RequestTicket {
        self.next_id += 1;
        self.latest.insert(month, self.next_id);

        log::debug!(
            "Requesting blocked dates for {}/{} (ticket {})",
            month.month(),
            month.year(),
            self.next_id
        );

        RequestTicket {
            month,
            id: self.next_id,
        }
    }

    /// Store the response of a fetch. Returns `false` and drops the rules if a
    /// newer request for the same month superseded `ticket`.
    pub fn complete(&mut self, ticket: RequestTicket, rules: BlockedRules) -> bool {
        if !self.is_current(ticket) {
            log::warn!(
                "Dropping stale blocked dates for {}/{} (ticket {})",
                ticket.month.month(),
                ticket.month.year(),
                ticket.id
            );
            return false;
        }

        self.latest.remove(&ticket.month);
        self.entries.insert(ticket.month, rules);
        true
    }

    /// Forget a failed fetch so the month can be requested again
    pub fn fail(&mut self, ticket: RequestTicket) {
        if self.is_current(ticket) {
            self.latest.remove(&ticket.month);
        }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get(&ticket.month) == Some(&ticket.id)
    }

    /// Drop the cached rules of a month so the next read refetches them
    pub fn invalidate(&mut self, month: ReferenceMonth) {
        self.entries.remove(&month);
    }
}
