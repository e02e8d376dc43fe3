use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::error::AppError;

/// Loading/error/success lifecycle of one asynchronous data source.
///
/// `data` survives later fetches: it is only replaced by the next successful
/// response and is kept when a fetch fails.
#[derive(Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<Rc<T>>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl<T> FetchState<T> {
    /// Fresh state: nothing loaded yet, first request about to go out
    pub fn new() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
            generation: 0,
        }
    }

    pub fn data(&self) -> Option<&Rc<T>> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generation of the request this state is waiting on or last settled by
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: self.loading,
            error: self.error.clone(),
            generation: self.generation,
        }
    }
}

/// Transitions of [`FetchState`], each tagged with the request generation
#[derive(Debug)]
pub enum FetchAction<T> {
    Started { generation: u64 },
    Succeeded { generation: u64, data: Rc<T> },
    Failed { generation: u64, message: String },
}

impl<T> FetchAction<T> {
    pub fn generation(&self) -> u64 {
        match self {
            Self::Started { generation }
            | Self::Succeeded { generation, .. }
            | Self::Failed { generation, .. } => *generation,
        }
    }
}

impl<T> Reducible for FetchState<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FetchAction::Started { generation } => Rc::new(Self {
                data: self.data.clone(),
                loading: true,
                error: None,
                generation,
            }),
            FetchAction::Succeeded { generation, data } if generation == self.generation => {
                Rc::new(Self {
                    data: Some(data),
                    loading: false,
                    error: None,
                    generation,
                })
            }
            FetchAction::Failed {
                generation,
                message,
            } if generation == self.generation => Rc::new(Self {
                data: self.data.clone(),
                loading: false,
                error: Some(message),
                generation,
            }),
            stale => {
                log::debug!(
                    "Discarding stale response (generation {}, current {})",
                    stale.generation(),
                    self.generation
                );
                self
            }
        }
    }
}

/// Hands out request generations and remembers whether the owner unmounted.
#[derive(Debug, Default, Clone)]
pub struct RequestTracker {
    latest: Rc<Cell<u64>>,
    unmounted: Rc<Cell<bool>>,
}

impl RequestTracker {
    /// Starts a new request and returns its generation
    pub fn issue(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.get() == generation
    }

    pub fn is_mounted(&self) -> bool {
        !self.unmounted.get()
    }

    pub fn unmount(&self) {
        self.unmounted.set(true);
    }
}

/// State plus an imperative re-fetch trigger
pub struct FetchHandle<T> {
    pub state: UseReducerHandle<FetchState<T>>,
    pub refetch: Callback<()>,
}

impl<T> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            refetch: self.refetch.clone(),
        }
    }
}

/// Fetches with `fetch(deps)` on mount and whenever `deps` changes.
///
/// `refetch` always issues a new request. Responses are applied only if they
/// belong to the most recent request and the component is still mounted.
/// `fetch` is captured on first render; everything it needs must come
/// through `deps`.
#[hook]
pub fn use_fetch<T, D, F, Fut>(kind: &'static str, deps: D, fetch: F) -> FetchHandle<T>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let state = use_reducer(FetchState::<T>::new);
    let tracker = use_memo((), |_| RequestTracker::default());
    let fetch = use_memo((), move |_| fetch);

    let refetch = {
        let dispatcher = state.dispatcher();
        let tracker = tracker.clone();

        use_callback(deps.clone(), move |(), deps: &D| {
            let generation = tracker.issue();
            dispatcher.dispatch(FetchAction::Started { generation });

            let request = (*fetch)(deps.clone());
            let dispatcher = dispatcher.clone();
            let tracker = tracker.clone();

            spawn_local(async move {
                let action = match request.await {
                    Ok(data) => FetchAction::Succeeded {
                        generation,
                        data: Rc::new(data),
                    },
                    Err(e) => {
                        log::error!("Failed to fetch {kind}: {e}");
                        FetchAction::Failed {
                            generation,
                            message: e.to_string(),
                        }
                    }
                };

                if !tracker.is_mounted() {
                    log::debug!("Dropping {kind} response after unmount");
                    return;
                }
                if !tracker.is_current(generation) {
                    log::debug!("{kind} response superseded by a newer request");
                }
                dispatcher.dispatch(action);
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
            || ()
        });
    }

    {
        let tracker = tracker.clone();
        use_effect_with((), move |_| move || tracker.unmount());
    }

    FetchHandle { state, refetch }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_generations() {
        let tracker = RequestTracker::default();
        let first = tracker.issue();
        let second = tracker.issue();

        assert_eq!((first, second), (1, 2));
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_tracker_unmount_is_shared_between_clones() {
        let tracker = RequestTracker::default();
        let clone = tracker.clone();
        assert!(clone.is_mounted());

        tracker.unmount();
        assert!(!clone.is_mounted());
    }
}
