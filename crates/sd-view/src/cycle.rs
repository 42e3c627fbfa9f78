//! Generation-tagged fetch cycles.
//!
//! Every parameter change starts a new cycle with [`ViewController::begin`],
//! which bumps the generation and resets the state to `Loading`. A result is
//! applied only if its [`Ticket`] carries the current generation; anything
//! older is dropped so a slow response can never overwrite a newer one.
//! A cycle settles once: `Ready`, `Error` and `Empty` are terminal until the
//! next `begin`.

use sd_api::ApiError;
use sd_core::entities::{Agency, Astronaut, Launch, Program};
use sd_core::enums::ResourceKind;

use crate::state::{ViewError, ViewMode, ViewState};

/// Payloads a view can hold. Only collections can be empty.
pub trait ViewPayload {
    fn is_empty_payload(&self) -> bool {
        false
    }
}

impl<T> ViewPayload for Vec<T> {
    fn is_empty_payload(&self) -> bool {
        self.is_empty()
    }
}

impl ViewPayload for Agency {}
impl ViewPayload for Astronaut {}
impl ViewPayload for Launch {}
impl ViewPayload for Program {}

/// Handle for one fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a cycle is only applied through its ticket"]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer cycle started before this one finished, or this cycle
    /// already settled.
    Discarded,
}

#[derive(Debug, Clone)]
pub struct ViewController<T> {
    resource: ResourceKind,
    mode: ViewMode,
    generation: u64,
    settled: bool,
    state: ViewState<T>,
}

impl<T: ViewPayload> ViewController<T> {
    #[must_use]
    pub const fn new(resource: ResourceKind, mode: ViewMode) -> Self {
        Self {
            resource,
            mode,
            generation: 0,
            settled: false,
            state: ViewState::Loading,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState<T> {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> ViewState<T> {
        self.state
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn resource(&self) -> ResourceKind {
        self.resource
    }

    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Start a cycle: previous payload is dropped, state is `Loading`.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.settled = false;
        self.state = ViewState::Loading;
        Ticket {
            generation: self.generation,
        }
    }

    /// Apply a fetch result if `ticket` belongs to the current, unsettled cycle.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> Resolution {
        if ticket.generation != self.generation {
            tracing::warn!(
                resource = %self.resource,
                stale = ticket.generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return Resolution::Discarded;
        }
        if self.settled {
            tracing::warn!(
                resource = %self.resource,
                generation = self.generation,
                phase = %self.state.phase(),
                "fetch cycle already settled"
            );
            return Resolution::Discarded;
        }

        self.settled = true;
        self.state = match (self.mode, result) {
            (ViewMode::List, Ok(data)) if data.is_empty_payload() => ViewState::Empty,
            (_, Ok(data)) => ViewState::Ready(data),
            (ViewMode::List, Err(ApiError::NoData)) => ViewState::Empty,
            (mode, Err(error)) => {
                tracing::debug!(resource = %self.resource, %error, "fetch failed");
                ViewState::Error(ViewError::from_api(&error, self.resource, mode))
            }
        };
        Resolution::Applied
    }

    /// Run one full cycle around `fetch`.
    pub async fn run<F, Fut>(&mut self, fetch: F) -> Resolution
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let ticket = self.begin();
        let result = fetch().await;
        self.resolve(ticket, result)
    }
}
