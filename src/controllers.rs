//! Shared handle for driving a [`Session`] from outside the UI.
//!
//! The controller owns the session behind a single mutex, so every scoring pass
//! runs under the same lock as the edit that triggered it and never interleaves
//! with another mutation. Clones share the same session. Subscribers receive a
//! [`SessionEvent`] after each change whose kinds intersect their filter.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::data::export::SessionSnapshot;
use crate::data::paths::PathId;
use crate::data::scoring::ScoringParams;
use crate::data::session::{Session, Target};
use crate::events::{EventKind, SessionEvent};

/// Clonable single-writer handle over a session.
#[derive(Clone, Default)]
pub struct SessionController {
    pub(crate) inner: Arc<Mutex<SessionCtrlInner>>,
}

#[derive(Default)]
pub(crate) struct SessionCtrlInner {
    pub(crate) session: Session,
    pub(crate) listeners: Vec<(EventKind, Sender<SessionEvent>)>,
}

impl SessionCtrlInner {
    /// Emit for an edit that went through; edits re-score while a run is active.
    fn emit_edit(&mut self, kinds: EventKind, target: Option<Target>) {
        let mut kinds = kinds;
        if self.session.has_run() {
            kinds |= EventKind::SCORED;
        }
        self.emit(kinds, target);
    }

    fn emit(&mut self, kinds: EventKind, target: Option<Target>) {
        let mut evt = SessionEvent::new(kinds);
        evt.target = target;
        evt.scatter_count = self.session.scatter_points().len();
        self.listeners
            .retain(|(filter, tx)| !evt.matches(*filter) || tx.send(evt.clone()).is_ok());
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController").finish_non_exhaustive()
    }
}

impl SessionController {
    /// Create a controller over an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionCtrlInner> {
        // A panic while holding the lock leaves the session itself consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with read access to the session.
    pub fn with_session<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.lock().session)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().session.snapshot()
    }

    /// Subscribe to events matching `filter`.
    pub fn subscribe(&self, filter: EventKind) -> Receiver<SessionEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.lock().listeners.push((filter, tx));
        rx
    }

    pub fn set_target(&self, target: Target) {
        let mut inner = self.lock();
        if inner.session.target() != target {
            inner.session.set_target(target);
            inner.emit(EventKind::TARGET_CHANGED, Some(target));
        }
    }

    /// Add a point at the session's active target.
    pub fn add_point(&self, x: f64, y: f64) {
        let mut inner = self.lock();
        let target = inner.session.target();
        if inner.session.add_point(x, y) {
            inner.emit_edit(EventKind::POINT_ADDED, Some(target));
        }
    }

    pub fn add_scatter_point(&self, x: f64, y: f64) {
        let mut inner = self.lock();
        if inner.session.add_scatter_point(x, y) {
            inner.emit_edit(EventKind::POINT_ADDED, Some(Target::SCATTER));
        }
    }

    pub fn add_path_vertex(&self, path_id: u32, x: f64, y: f64) {
        let mut inner = self.lock();
        if inner.session.add_path_vertex(path_id, x, y) {
            let target = PathId::new(path_id).map(Target::Path);
            inner.emit_edit(EventKind::POINT_ADDED, target);
        }
    }

    pub fn undo_last(&self, target: Target) {
        let mut inner = self.lock();
        if inner.session.undo_last(target) {
            inner.emit_edit(EventKind::UNDO, Some(target));
        }
    }

    pub fn reset_target(&self, target: Target) {
        let mut inner = self.lock();
        if inner.session.reset_target(target) {
            inner.emit_edit(EventKind::RESET, Some(target));
        }
    }

    pub fn run_scoring(&self, params: ScoringParams) {
        let mut inner = self.lock();
        inner.session.run_scoring(params);
        inner.emit(EventKind::SCORED, None);
    }

    pub fn reset_colors(&self) {
        let mut inner = self.lock();
        inner.session.reset_colors();
        inner.emit(EventKind::COLORS_RESET, None);
    }
}
