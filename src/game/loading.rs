use crate::assets::{CharacterAsset, LoadStatus, LoadTicket};
use crate::errors::Result;

/// The two outstanding character loads.
///
/// Each slot empties the moment its ticket resolves, so a result is
/// delivered exactly once.
#[derive(Debug, Default)]
pub struct PendingLoads {
    idle: Option<LoadTicket<CharacterAsset>>,
    run: Option<LoadTicket<CharacterAsset>>,
}

impl PendingLoads {
    #[must_use]
    pub fn new(idle: LoadTicket<CharacterAsset>, run: LoadTicket<CharacterAsset>) -> Self {
        Self {
            idle: Some(idle),
            run: Some(run),
        }
    }

    #[must_use]
    pub fn idle_pending(&self) -> bool {
        self.idle.is_some()
    }

    #[must_use]
    pub fn run_pending(&self) -> bool {
        self.run.is_some()
    }

    /// `Some` once the idle load has finished, successfully or not.
    pub fn poll_idle(&mut self) -> Option<Result<CharacterAsset>> {
        Self::poll_slot(&mut self.idle)
    }

    /// `Some` once the run load has finished, successfully or not.
    pub fn poll_run(&mut self) -> Option<Result<CharacterAsset>> {
        Self::poll_slot(&mut self.run)
    }

    /// Stops waiting for the run asset.
    pub fn abandon_run(&mut self) {
        if let Some(ticket) = self.run.take() {
            log::debug!("no longer waiting for '{}'", ticket.label());
        }
    }

    fn poll_slot(slot: &mut Option<LoadTicket<CharacterAsset>>) -> Option<Result<CharacterAsset>> {
        match slot.as_ref()?.poll() {
            LoadStatus::Pending => None,
            LoadStatus::Ready(result) => {
                *slot = None;
                Some(result)
            }
        }
    }
}
