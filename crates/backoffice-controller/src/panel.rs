//! Load state of one panel.

use backoffice_core::{AppError, AppResult};
use tracing::warn;

/// Sequence number of one fetch against a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Raw sequence number.
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Where a panel is in its load cycle.
#[derive(Debug, Clone)]
pub enum PanelState<T> {
    /// Nothing requested yet, or cleared.
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// The latest fetch succeeded.
    Loaded(T),
    /// The latest fetch failed.
    Failed(AppError),
}

/// A panel's value plus the sequence of the latest fetch issued for it.
///
/// Only the response carrying the latest ticket is applied. Older ones are
/// dropped whatever order they resolve in.
#[derive(Debug, Clone)]
pub struct Panel<T> {
    state: PanelState<T>,
    latest: u64,
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Panel<T> {
    /// An idle panel.
    pub fn new() -> Self {
        Self {
            state: PanelState::Idle,
            latest: 0,
        }
    }

    /// Start a fetch, superseding any outstanding one.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.state = PanelState::Loading;
        Ticket(self.latest)
    }

    /// Start a fetch unless one is already outstanding.
    pub fn try_begin(&mut self) -> Option<Ticket> {
        if self.is_loading() {
            return None;
        }
        Some(self.begin())
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when
    /// `ticket` is not the latest.
    pub fn resolve(&mut self, ticket: Ticket, result: AppResult<T>) -> bool {
        if ticket.0 != self.latest {
            warn!(
                ticket = ticket.0,
                latest = self.latest,
                "Discarding stale response"
            );
            return false;
        }
        self.state = match result {
            Ok(value) => PanelState::Loaded(value),
            Err(e) => PanelState::Failed(e),
        };
        true
    }

    /// Drop the value and invalidate outstanding tickets.
    pub fn clear(&mut self) {
        self.latest += 1;
        self.state = PanelState::Idle;
    }

    /// Current state.
    pub fn state(&self) -> &PanelState<T> {
        &self.state
    }

    /// The loaded value, if any.
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            PanelState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Mutable access to the loaded value.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            PanelState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure, if the latest fetch failed.
    pub fn failure(&self) -> Option<&AppError> {
        match &self.state {
            PanelState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Text to show for the failure, if the latest fetch failed.
    pub fn error(&self) -> Option<String> {
        self.failure().map(AppError::user_message)
    }

    /// Whether a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, PanelState::Loading)
    }
}
