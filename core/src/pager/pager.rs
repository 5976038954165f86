use tracing::{debug, info, warn};

use crate::errors::{GatewayError, PagerError};
use crate::filter::{validate, FilterState, DEFAULT_PER_PAGE};
use crate::gateway::SearchGateway;
use crate::search::{total_pages, InfluencerRecord, SearchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerStatus {
    Idle,
    Loading,
    Loaded,
}

/// A started request. Hand it back to [`Pager::complete`] with the outcome.
#[derive(Debug, Clone)]
pub struct PageTicket {
    seq: u64,
    filter: FilterState,
}

impl PageTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The exact filter to send, page included.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The page replaced the displayed records.
    Applied,
    /// The fetch failed; displayed records were kept.
    Failed { message: String },
    /// A newer request was issued meanwhile; the outcome was dropped.
    Stale,
}

#[derive(Debug)]
pub struct Pager {
    per_page: u32,
    filter: Option<FilterState>,
    records: Vec<InfluencerRecord>,
    current_page: u32,
    total_pages: u32,
    total_count: u64,
    status: PagerStatus,
    last_error: Option<String>,
    seq: u64,
    in_flight: Option<u64>,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl Pager {
    pub fn new(per_page: u32) -> Self {
        Self {
            per_page,
            filter: None,
            records: Vec::new(),
            current_page: 1,
            total_pages: 1,
            total_count: 0,
            status: PagerStatus::Idle,
            last_error: None,
            seq: 0,
            in_flight: None,
        }
    }

    pub fn records(&self) -> &[InfluencerRecord] {
        &self.records
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn status(&self) -> PagerStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Message of the last failed fetch, cleared by the next applied page.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Filter of the page currently displayed.
    pub fn filter(&self) -> Option<&FilterState> {
        self.filter.as_ref()
    }

    pub fn can_prev(&self) -> bool {
        !self.is_loading() && self.filter.is_some() && self.current_page > 1
    }

    pub fn can_next(&self) -> bool {
        !self.is_loading() && self.filter.is_some() && self.current_page < self.total_pages
    }

    /// New criteria always start over at page 1.
    pub fn begin_submit(&mut self, filter: FilterState) -> Result<PageTicket, PagerError> {
        self.ensure_idle()?;
        let filter = FilterState {
            page: 1,
            per_page: self.per_page,
            track_total: true,
            ..filter
        };
        validate(&filter)?;
        Ok(self.issue(filter))
    }

    /// Same criteria, another page. Out-of-range pages never reach the gateway.
    pub fn begin_page(&mut self, page: u32) -> Result<PageTicket, PagerError> {
        self.ensure_idle()?;
        let current = self.filter.as_ref().ok_or(PagerError::NoFilter)?;
        if page < 1 || page > self.total_pages {
            return Err(PagerError::OutOfRange {
                requested: page,
                total_pages: self.total_pages,
            });
        }
        let filter = current.at_page(page);
        Ok(self.issue(filter))
    }

    pub fn begin_next(&mut self) -> Result<PageTicket, PagerError> {
        self.begin_page(self.current_page.saturating_add(1))
    }

    pub fn begin_prev(&mut self) -> Result<PageTicket, PagerError> {
        self.begin_page(self.current_page.saturating_sub(1))
    }

    /// Drops the pending request; its completion will come back `Stale`.
    pub fn abandon(&mut self) {
        if let Some(seq) = self.in_flight.take() {
            debug!(seq, "abandoning in-flight request");
            self.seq += 1;
            self.status = self.settled_status();
        }
    }

    pub fn complete(
        &mut self,
        ticket: PageTicket,
        outcome: Result<SearchResult, GatewayError>,
    ) -> Completion {
        if ticket.seq != self.seq || self.in_flight != Some(ticket.seq) {
            debug!(seq = ticket.seq, latest = self.seq, "dropping stale response");
            return Completion::Stale;
        }
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                self.total_pages = result.total_pages(self.per_page);
                self.total_count = result.total_count;
                self.records = result.records;
                self.current_page = ticket.filter.page;
                self.filter = Some(ticket.filter);
                self.last_error = None;
                self.status = PagerStatus::Loaded;
                info!(
                    page = self.current_page,
                    total_pages = self.total_pages,
                    records = self.records.len(),
                    "page loaded"
                );
                Completion::Applied
            }
            Err(e) => {
                let message = e.to_string();
                warn!(stage = %e.stage(), error = %message, "error fetching influencers");
                self.last_error = Some(message.clone());
                self.status = self.settled_status();
                Completion::Failed { message }
            }
        }
    }

    pub async fn submit<G>(
        &mut self,
        gateway: &G,
        filter: FilterState,
    ) -> Result<Completion, PagerError>
    where
        G: SearchGateway + ?Sized,
    {
        let ticket = self.begin_submit(filter)?;
        Ok(self.fetch(gateway, ticket).await)
    }

    pub async fn go_to<G>(&mut self, gateway: &G, page: u32) -> Result<Completion, PagerError>
    where
        G: SearchGateway + ?Sized,
    {
        let ticket = self.begin_page(page)?;
        Ok(self.fetch(gateway, ticket).await)
    }

    pub async fn next<G>(&mut self, gateway: &G) -> Result<Completion, PagerError>
    where
        G: SearchGateway + ?Sized,
    {
        let ticket = self.begin_next()?;
        Ok(self.fetch(gateway, ticket).await)
    }

    pub async fn prev<G>(&mut self, gateway: &G) -> Result<Completion, PagerError>
    where
        G: SearchGateway + ?Sized,
    {
        let ticket = self.begin_prev()?;
        Ok(self.fetch(gateway, ticket).await)
    }

    async fn fetch<G>(&mut self, gateway: &G, ticket: PageTicket) -> Completion
    where
        G: SearchGateway + ?Sized,
    {
        let outcome = gateway.search(ticket.filter()).await;
        self.complete(ticket, outcome)
    }

    fn ensure_idle(&self) -> Result<(), PagerError> {
        if self.is_loading() {
            Err(PagerError::Busy)
        } else {
            Ok(())
        }
    }

    fn issue(&mut self, filter: FilterState) -> PageTicket {
        self.seq += 1;
        self.in_flight = Some(self.seq);
        self.status = PagerStatus::Loading;
        debug!(seq = self.seq, page = filter.page, "request issued");
        PageTicket {
            seq: self.seq,
            filter,
        }
    }

    fn settled_status(&self) -> PagerStatus {
        if self.filter.is_some() {
            PagerStatus::Loaded
        } else {
            PagerStatus::Idle
        }
    }
}
