//! Navigation state management

use crate::collection::{CmsView, EntityCollection};
use crate::error::NavigationError;
use crate::navigation::TopNavigationResult;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Resolution phase of the navigation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing resolved yet
    #[default]
    Uninitialised,
    /// A resolution for the current inputs is pending
    Loading,
    /// The latest resolution succeeded
    Ready,
    /// The latest resolution failed
    Error,
}

/// Generation counter used to discard stale resolutions.
///
/// Every resolution takes a ticket with [`start`](Self::start) and every
/// input change calls [`bump`](Self::bump). A resolution commits only if its
/// ticket is still [`current`](Self::is_current) once it finishes.
#[derive(Debug, Clone, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    /// Create a counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    /// Start a new resolution and return its ticket
    ///
    /// This increments the counter, so every resolution still in flight
    /// detects it has been superseded.
    pub fn start(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Invalidate every ticket handed out so far
    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    /// Check if a ticket is still current (not superseded)
    pub fn is_current(&self, ticket: u64) -> bool {
        self.current() == ticket
    }
}

/// Which parts of the state a commit actually replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitOutcome {
    /// The collections snapshot was replaced
    pub collections: bool,
    /// The views snapshot was replaced
    pub views: bool,
    /// The top-level navigation snapshot was replaced
    pub top_level_navigation: bool,
}

impl CommitOutcome {
    /// Whether anything changed.
    pub fn changed(&self) -> bool {
        self.collections || self.views || self.top_level_navigation
    }
}

/// Navigation state
///
/// Snapshots are immutable `Arc`s: readers clone the `Arc` and keep a
/// consistent view while later resolutions swap in new ones.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    collections: Option<Arc<Vec<EntityCollection>>>,
    views: Option<Arc<Vec<CmsView>>>,
    top_level_navigation: Option<Arc<TopNavigationResult>>,
    phase: LoadPhase,
    error: Option<NavigationError>,
    initialised: bool,
}

/// Replace `slot` only when `next` differs structurally from what it holds.
fn swap_if_changed<T: PartialEq>(slot: &mut Option<Arc<T>>, next: T) -> bool {
    match slot {
        Some(current) if **current == next => false,
        _ => {
            *slot = Some(Arc::new(next));
            true
        }
    }
}

impl NavigationState {
    /// Create an uninitialised state
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved collections, `None` before the first successful resolution
    pub fn collections(&self) -> Option<Arc<Vec<EntityCollection>>> {
        self.collections.clone()
    }

    /// Resolved views
    pub fn views(&self) -> Option<Arc<Vec<CmsView>>> {
        self.views.clone()
    }

    /// Top-level navigation computed from the resolved tree
    pub fn top_level_navigation(&self) -> Option<Arc<TopNavigationResult>> {
        self.top_level_navigation.clone()
    }

    /// Current phase
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Error of the latest failed resolution
    pub fn error(&self) -> Option<&NavigationError> {
        self.error.as_ref()
    }

    /// Whether at least one resolution has finished, successfully or not
    pub fn initialised(&self) -> bool {
        self.initialised
    }

    /// Whether the state is waiting on a resolution
    pub fn loading(&self) -> bool {
        !self.initialised || self.phase == LoadPhase::Loading
    }

    /// Move back to loading after an input change
    pub fn mark_loading(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Commit a successful resolution.
    ///
    /// Each snapshot is replaced only if the new value is structurally
    /// different, so holders of the previous `Arc` keep pointer equality
    /// when nothing changed.
    pub fn commit(
        &mut self,
        collections: Vec<EntityCollection>,
        views: Vec<CmsView>,
        top_level_navigation: TopNavigationResult,
    ) -> CommitOutcome {
        let outcome = CommitOutcome {
            collections: swap_if_changed(&mut self.collections, collections),
            views: swap_if_changed(&mut self.views, views),
            top_level_navigation: swap_if_changed(
                &mut self.top_level_navigation,
                top_level_navigation,
            ),
        };
        self.phase = LoadPhase::Ready;
        self.error = None;
        self.initialised = true;
        outcome
    }

    /// Record a failed resolution, keeping the previous snapshots
    pub fn fail(&mut self, error: NavigationError) {
        self.phase = LoadPhase::Error;
        self.error = Some(error);
        self.initialised = true;
    }
}
