//! Layout/data fetch sequencer.
//!
//! One fetch cycle is: layout request, field map from the layout's first
//! child, data request. The data stage never starts before the layout stage
//! succeeded, and never with fields from another cycle's layout.
//!
//! Each cycle takes a token from a monotonically increasing counter. The
//! published [`ViewState`] remembers the token of the cycle that owns it;
//! a publish from any other token is dropped. Overlapping cycles are
//! therefore harmless: a late response from an older cycle cannot overwrite
//! what a newer cycle published.

use std::sync::atomic::{AtomicU64, Ordering};

use cerkas_model::{DataPayload, FetchState, Fetched, LayoutPayload, RouteIdentity};
use tokio::sync::watch;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::backend::ViewBackend;
use crate::config::ClientSettings;
use crate::error::ClientError;

pub type LayoutState = FetchState<Fetched<LayoutPayload>>;
pub type DataState = FetchState<Fetched<DataPayload>>;

/// Snapshot published to subscribers after every transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Token of the cycle that owns this state; `0` before the first cycle.
    pub cycle: u64,
    pub route: Option<RouteIdentity>,
    pub layout: LayoutState,
    pub data: DataState,
}

impl ViewState {
    fn started(cycle: u64, route: RouteIdentity) -> Self {
        let layout = if route.is_complete() {
            FetchState::Loading
        } else {
            FetchState::Idle
        };
        Self {
            cycle,
            route: Some(route),
            layout,
            data: FetchState::Idle,
        }
    }

    /// Both stages succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.layout.is_succeeded() && self.data.is_succeeded()
    }

    /// Either stage failed.
    #[must_use]
    pub fn has_failure(&self) -> bool {
        self.layout.error().is_some() || self.data.error().is_some()
    }
}

/// Result of [`Sequencer::run_cycle`].
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    pub token: u64,
    /// A newer cycle started before this one finished; `state` belongs to it.
    pub superseded: bool,
    /// Latest published state when the cycle returned.
    pub state: ViewState,
}

/// Runs fetch cycles against a [`ViewBackend`] and publishes their state.
pub struct Sequencer<B> {
    backend: B,
    settings: ClientSettings,
    next_token: AtomicU64,
    state: watch::Sender<ViewState>,
}

impl<B: ViewBackend> Sequencer<B> {
    pub fn new(backend: B, settings: ClientSettings) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            backend,
            settings,
            next_token: AtomicU64::new(0),
            state,
        }
    }

    /// Receiver that observes every published [`ViewState`].
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Run one fetch cycle for `route`.
    ///
    /// Starting a cycle invalidates every earlier one, even when `route` is
    /// incomplete. An incomplete route leaves both stages `Idle` and sends
    /// no request.
    pub async fn run_cycle(&self, route: RouteIdentity) -> CycleOutcome {
        let token = self.next_token.fetch_add(1, Ordering::AcqRel) + 1;
        let span = info_span!("cycle", token, route = %route);
        self.cycle(token, route).instrument(span).await
    }

    async fn cycle(&self, token: u64, route: RouteIdentity) -> CycleOutcome {
        self.begin(token, route.clone());

        if !route.is_complete() {
            let missing = route.missing_codes().join(", ");
            debug!(error = %ClientError::IncompleteRoute(missing), "staying idle");
            return self.outcome(token);
        }

        info!("fetching layout");
        let layout = match self.backend.fetch_layout(&route).await {
            Ok(layout) => layout,
            Err(err) => {
                warn!(error = %err, "layout request failed");
                self.publish(token, |state| state.layout = FetchState::Failed(err.to_string()));
                debug!(reason = %ClientError::SequenceSkipped, "data stage not attempted");
                return self.outcome(token);
            }
        };

        let fields = layout.payload.field_map();
        let query = self.settings.data_query(&route, fields);
        let published = self.publish(token, |state| {
            state.layout = FetchState::Succeeded(layout);
            state.data = FetchState::Loading;
        });
        if !published {
            return self.outcome(token);
        }

        info!(fields = query.fields.len(), "fetching data");
        let data = self.backend.fetch_data(&route, &query).await;
        match data {
            Ok(data) => {
                let rows = data.payload.items.len();
                if self.publish(token, |state| state.data = FetchState::Succeeded(data)) {
                    info!(rows, "cycle complete");
                }
            }
            Err(err) => {
                warn!(error = %err, "data request failed");
                self.publish(token, |state| state.data = FetchState::Failed(err.to_string()));
            }
        }
        self.outcome(token)
    }

    /// Reset the published state for a new cycle unless a newer one already owns it.
    fn begin(&self, token: u64, route: RouteIdentity) {
        self.state.send_if_modified(|state| {
            if state.cycle > token {
                return false;
            }
            *state = ViewState::started(token, route);
            true
        });
    }

    /// Apply `update` if `token` still owns the published state.
    fn publish(&self, token: u64, update: impl FnOnce(&mut ViewState)) -> bool {
        let published = self.state.send_if_modified(|state| {
            if state.cycle != token {
                return false;
            }
            update(state);
            true
        });
        if !published {
            debug!(token, "discarding result of superseded cycle");
        }
        published
    }

    fn outcome(&self, token: u64) -> CycleOutcome {
        let state = self.snapshot();
        CycleOutcome {
            token,
            superseded: state.cycle != token,
            state,
        }
    }
}
