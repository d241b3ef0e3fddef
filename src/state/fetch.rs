//! Fetch Lifecycle State
//!
//! Every resource page owns one `ResourceState`: the item list, a loading
//! flag, and an optional error message. The state starts loading, the fetch
//! fires exactly once on mount, and the result replaces the item list
//! wholesale. There is no refresh, no retry, and no cancellation; a response
//! arriving after the page is torn down writes into disposed signals and is
//! dropped by the reactive runtime.

use std::future::Future;

use leptos::*;

use crate::api::FetchError;

/// Which of the four mutually exclusive view blocks to render.
///
/// Priority: loading beats error beats empty beats data, so exactly one block
/// is shown at every instant.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewMode {
    Loading,
    Error(String),
    Empty,
    Ready,
}

impl ViewMode {
    pub fn classify(loading: bool, error: Option<String>, count: usize) -> Self {
        if loading {
            ViewMode::Loading
        } else if let Some(message) = error {
            ViewMode::Error(message)
        } else if count == 0 {
            ViewMode::Empty
        } else {
            ViewMode::Ready
        }
    }
}

/// State triple owned by a single resource page
pub struct ResourceState<T: 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

// Signals are ids into the reactive runtime, so the state is Copy even when
// the record type is not.
impl<T: 'static> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ResourceState<T> {}

impl<T: Clone + 'static> ResourceState<T> {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            error: create_rw_signal(None),
        }
    }

    /// Commit a fetch result. Success replaces the item list and clears any
    /// error; failure clears the items so stale data is never shown next to
    /// an error banner.
    pub fn apply(&self, result: Result<Vec<T>, FetchError>) {
        match result {
            Ok(items) => {
                self.items.set(items);
                self.error.set(None);
            }
            Err(err) => {
                self.items.set(Vec::new());
                self.error.set(Some(err.to_string()));
            }
        }
        self.loading.set(false);
    }

    pub fn mode(&self) -> ViewMode {
        ViewMode::classify(
            self.loading.get(),
            self.error.get(),
            self.items.with(Vec::len),
        )
    }
}

/// Create a resource state and fire its fetch once on mount
pub fn use_resource<T, F, Fut>(fetch: F) -> ResourceState<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, FetchError>> + 'static,
{
    let state = ResourceState::new();

    // The effect tracks no signals, so it runs exactly once per mount
    create_effect(move |_| {
        let request = fetch();
        spawn_local(async move {
            state.apply(request.await);
        });
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_priority() {
        // Loading wins even over a lingering error
        assert_eq!(
            ViewMode::classify(true, Some("boom".into()), 5),
            ViewMode::Loading
        );
        // Error wins over items
        assert_eq!(
            ViewMode::classify(false, Some("boom".into()), 5),
            ViewMode::Error("boom".into())
        );
        assert_eq!(ViewMode::classify(false, None, 0), ViewMode::Empty);
        assert_eq!(ViewMode::classify(false, None, 3), ViewMode::Ready);
    }

    #[test]
    fn test_initial_state_is_loading() {
        let runtime = create_runtime();
        let state: ResourceState<i32> = ResourceState::new();
        assert_eq!(state.mode(), ViewMode::Loading);
        assert!(state.items.get_untracked().is_empty());
        runtime.dispose();
    }

    #[test]
    fn test_apply_success() {
        let runtime = create_runtime();
        let state: ResourceState<i32> = ResourceState::new();
        state.apply(Ok(vec![1, 2, 3]));
        assert_eq!(state.items.get_untracked(), vec![1, 2, 3]);
        assert_eq!(state.error.get_untracked(), None);
        assert_eq!(state.mode(), ViewMode::Ready);
        runtime.dispose();
    }

    #[test]
    fn test_apply_empty_success_is_empty_not_error() {
        let runtime = create_runtime();
        let state: ResourceState<i32> = ResourceState::new();
        state.apply(Ok(Vec::new()));
        assert_eq!(state.mode(), ViewMode::Empty);
        runtime.dispose();
    }

    #[test]
    fn test_apply_failure_clears_items() {
        let runtime = create_runtime();
        let state: ResourceState<i32> = ResourceState::new();
        state.apply(Ok(vec![1, 2, 3]));
        state.apply(Err(FetchError::HttpStatus(500)));
        assert!(state.items.get_untracked().is_empty());
        assert_eq!(
            state.mode(),
            ViewMode::Error("HTTP error! status: 500".into())
        );
        runtime.dispose();
    }

    #[test]
    fn test_success_clears_previous_error() {
        let runtime = create_runtime();
        let state: ResourceState<i32> = ResourceState::new();
        state.apply(Err(FetchError::Network("connection refused".into())));
        state.apply(Ok(vec![7]));
        assert_eq!(state.error.get_untracked(), None);
        assert_eq!(state.mode(), ViewMode::Ready);
        runtime.dispose();
    }
}
