// ============================================================================
// USE_FETCH - generic async-state container
// ============================================================================
// Tracks {data, loading, error} for a zero-argument async producer and
// exposes a manual refetch that may carry a one-shot replacement producer.
// Responses are fenced with a request generation: only the reply matching
// the latest generation commits, so a slow stale response can never
// overwrite a newer one. Unmount poisons the generation, abandoning any
// in-flight write.
// ============================================================================

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use yew::prelude::*;

use crate::services::ApiError;

/// A zero-argument asynchronous producer.
pub type Producer<T> = Rc<dyn Fn() -> Pin<Box<dyn Future<Output = Result<T, ApiError>>>>>;

/// Boxes an async fn/closure into a [`Producer`].
pub fn producer<T, F, Fut>(f: F) -> Producer<T>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    Rc::new(move || Box::pin(f()))
}

/// Observable state of one logical data need.
#[derive(Clone, PartialEq, Debug)]
pub struct FetchState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: T::default(),
            loading: true,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// A fetch is being issued.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// The most recent fetch resolved. Success replaces the data and clears
    /// any earlier error; failure records the error and leaves the previous
    /// data untouched. Resolved state therefore holds data xor error.
    pub fn finish(&mut self, result: Result<T, ApiError>) {
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
        self.loading = false;
    }
}

pub struct UseFetchHandle<T> {
    pub state: UseStateHandle<FetchState<T>>,
    /// Re-invokes the producer; `Some` runs a one-shot replacement instead
    /// of the producer supplied on mount.
    pub refetch: Callback<Option<Producer<T>>>,
}

impl<T> Clone for UseFetchHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            refetch: self.refetch.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for UseFetchHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.refetch == other.refetch
    }
}

#[hook]
pub fn use_fetch<T>(initial: Option<Producer<T>>) -> UseFetchHandle<T>
where
    T: Default + Clone + PartialEq + 'static,
{
    let state = use_state(FetchState::<T>::default);
    let generation = use_mut_ref(|| 0u64);
    let has_initial = initial.is_some();
    // The producer supplied on the first render stays the default one.
    let initial_producer = use_mut_ref(move || initial);

    let refetch = {
        let state = state.clone();
        let generation = generation.clone();
        let initial_producer = initial_producer.clone();

        Callback::from(move |replacement: Option<Producer<T>>| {
            let f = match replacement.or_else(|| initial_producer.borrow().clone()) {
                Some(f) => f,
                None => return,
            };

            let gen = {
                let mut current = generation.borrow_mut();
                *current = current.wrapping_add(1);
                *current
            };

            let mut next = (*state).clone();
            next.begin();
            state.set(next);

            let state = state.clone();
            let generation = generation.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = f().await;
                // A newer request (or unmount) supersedes this one.
                if *generation.borrow() != gen {
                    return;
                }
                let mut next = (*state).clone();
                next.finish(result);
                state.set(next);
            });
        })
    };

    // Fetch on mount, exactly once; teardown invalidates in-flight replies.
    {
        let refetch = refetch.clone();
        let generation = generation.clone();
        use_effect_with((), move |_| {
            if has_initial {
                refetch.emit(None);
            }
            move || {
                *generation.borrow_mut() = u64::MAX;
            }
        });
    }

    UseFetchHandle { state, refetch }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let mut state = FetchState::<Vec<u32>> {
            data: vec![1],
            loading: false,
            error: Some(ApiError::fallback()),
        };
        state.begin();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.data, vec![1]);
    }

    #[test]
    fn success_replaces_data_and_never_keeps_an_error() {
        let mut state = FetchState::<Vec<u32>>::default();
        state.begin();
        state.finish(Ok(vec![1, 2, 3]));
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.data, vec![1, 2, 3]);
    }

    #[test]
    fn failure_records_the_error_and_keeps_prior_data() {
        let mut state = FetchState::<Vec<u32>>::default();
        state.begin();
        state.finish(Ok(vec![7]));

        state.begin();
        state.finish(Err(ApiError {
            status: 400,
            message: "In use".into(),
        }));

        assert!(!state.loading);
        assert_eq!(state.data, vec![7]);
        assert_eq!(state.error.as_ref().unwrap().message, "In use");
    }

    #[test]
    fn successful_refetch_clears_a_prior_error() {
        let mut state = FetchState::<Vec<u32>>::default();
        state.begin();
        state.finish(Err(ApiError {
            status: 400,
            message: "boom".into(),
        }));
        assert!(state.error.is_some());

        // The resolution may be applied to a snapshot predating begin(), so
        // finish(Ok) must clear the error on its own.
        state.finish(Ok(vec![1]));
        assert!(!state.loading);
        assert_eq!(state.data, vec![1]);
        assert!(state.error.is_none());
    }

    #[test]
    fn resolution_yields_data_xor_error() {
        let mut ok = FetchState::<Vec<u32>>::default();
        ok.begin();
        ok.finish(Ok(vec![1]));
        assert!(ok.error.is_none() && !ok.data.is_empty());

        let mut failed = FetchState::<Vec<u32>>::default();
        failed.begin();
        failed.finish(Err(ApiError::fallback()));
        assert!(failed.error.is_some() && failed.data.is_empty());
    }
}
