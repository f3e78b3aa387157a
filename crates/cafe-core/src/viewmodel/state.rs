//! Page load and form state machines

use crate::domain::EntityId;
use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// Proof that a load was started; only the newest ticket may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// `loading -> ready | error`, with `ready|error -> loading` on reload.
///
/// Completions carrying an outdated ticket are dropped, so a response that
/// resolves after the view reloaded or went away never lands in its state.
#[derive(Debug)]
pub struct PageLoader<T> {
    state: LoadState<T>,
    generation: u64,
}

impl<T> Default for PageLoader<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Loading,
            generation: 0,
        }
    }
}

impl<T> PageLoader<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        LoadTicket(self.generation)
    }

    /// Commit a finished load. Returns `false` when the ticket is stale.
    pub fn finish(&mut self, ticket: LoadTicket, result: Result<T, ClientError>, fallback: &str) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(ticket = ticket.0, current = self.generation, "Dropping stale load result");
            return false;
        }

        self.state = match result {
            Ok(data) => LoadState::Ready(data),
            Err(e) => {
                tracing::warn!("Page load failed: {}", e);
                LoadState::Failed(e.user_message(fallback))
            }
        };
        true
    }

    /// The view went away; any pending load is discarded on arrival.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }
}

/// Add/edit form cycle: `idle <-> editing <-> submitting`.
///
/// `target` is the id of the record being edited, `None` for a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Editing { target: Option<EntityId> },
    Submitting { target: Option<EntityId> },
}

impl FormState {
    pub fn open_new(&mut self) -> Result<(), ClientError> {
        self.open(None)
    }

    pub fn open_edit(&mut self, id: EntityId) -> Result<(), ClientError> {
        self.open(Some(id))
    }

    fn open(&mut self, target: Option<EntityId>) -> Result<(), ClientError> {
        match self {
            FormState::Submitting { .. } => Err(ClientError::Validation(
                "A submission is already in progress".into(),
            )),
            _ => {
                *self = FormState::Editing { target };
                Ok(())
            }
        }
    }

    /// Move to `submitting`, returning the edit target.
    pub fn submit(&mut self) -> Result<Option<EntityId>, ClientError> {
        match self {
            FormState::Editing { target } => {
                let target = target.take();
                *self = FormState::Submitting { target: target.clone() };
                Ok(target)
            }
            FormState::Idle => Err(ClientError::Validation("No form is open".into())),
            FormState::Submitting { .. } => Err(ClientError::Validation(
                "A submission is already in progress".into(),
            )),
        }
    }

    /// Back to editing with the form still open.
    pub fn submit_failed(&mut self) {
        if let FormState::Submitting { target } = self {
            let target = target.take();
            *self = FormState::Editing { target };
        }
    }

    pub fn submit_succeeded(&mut self) {
        if matches!(self, FormState::Submitting { .. }) {
            *self = FormState::Idle;
        }
    }

    pub fn cancel(&mut self) -> Result<(), ClientError> {
        match self {
            FormState::Submitting { .. } => Err(ClientError::Validation(
                "Cannot cancel while submitting".into(),
            )),
            _ => {
                *self = FormState::Idle;
                Ok(())
            }
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_ready() {
        let mut loader: PageLoader<u32> = PageLoader::new();
        let ticket = loader.begin();
        assert!(loader.is_loading());
        assert!(loader.finish(ticket, Ok(7), "fallback"));
        assert_eq!(loader.data(), Some(&7));
    }

    #[test]
    fn test_load_failure_keeps_message() {
        let mut loader: PageLoader<u32> = PageLoader::new();
        let ticket = loader.begin();
        loader.finish(ticket, Err(ClientError::api("Tenant not found", 400)), "fallback");
        assert_eq!(loader.error(), Some("Tenant not found"));

        let ticket = loader.begin();
        loader.finish(ticket, Err(ClientError::Network("refused".into())), "fallback");
        assert_eq!(loader.error(), Some("fallback"));
    }

    #[test]
    fn test_stale_result_dropped() {
        let mut loader: PageLoader<&str> = PageLoader::new();
        let first = loader.begin();
        let second = loader.begin();

        assert!(loader.finish(second, Ok("fresh"), "fallback"));
        assert!(!loader.finish(first, Ok("stale"), "fallback"));
        assert_eq!(loader.data(), Some(&"fresh"));
    }

    #[test]
    fn test_invalidate_drops_pending() {
        let mut loader: PageLoader<u32> = PageLoader::new();
        let ticket = loader.begin();
        loader.invalidate();
        assert!(!loader.finish(ticket, Ok(1), "fallback"));
        assert!(loader.is_loading());
    }

    #[test]
    fn test_form_cycle() {
        let mut form = FormState::default();
        assert!(form.submit().is_err());

        form.open_edit(EntityId::from(3)).unwrap();
        assert_eq!(form.submit().unwrap(), Some(EntityId::from(3)));
        assert!(form.open_new().is_err());
        assert!(form.cancel().is_err());

        form.submit_failed();
        assert_eq!(form, FormState::Editing { target: Some(EntityId::from(3)) });

        form.submit().unwrap();
        form.submit_succeeded();
        assert_eq!(form, FormState::Idle);
        assert!(!form.is_open());
    }
}
