use std::future::Future;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::content::error::FetchError;

/// Where a page's data is at. Pages pick a loading indicator, an error panel
/// or the composed view from this.
#[derive(Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> From<Result<T, FetchError>> for LoadState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => {
                if e.is_not_found() {
                    log::info!("Requested content does not exist: {}", e);
                } else {
                    log::warn!("Page data failed to load: {}", e);
                }
                LoadState::Error(e.to_string())
            }
        }
    }
}

/// Monotonic counter tagging every load. Only the result carrying the current
/// number may reach the screen.
#[derive(Debug, Default)]
pub struct Generation(u64);

impl Generation {
    /// Starts a new load and invalidates every earlier ticket.
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }

    /// The state to show for a finished load, or `None` if a newer load (or
    /// an unmount) has happened since `ticket` was handed out.
    pub fn settle<T>(&self, ticket: u64, result: Result<T, FetchError>) -> Option<LoadState<T>> {
        if self.is_current(ticket) {
            Some(result.into())
        } else {
            log::debug!("Dropping stale page data (ticket {}, now {})", ticket, self.0);
            None
        }
    }
}


/// The last settled load together with the key it was made for.
#[derive(Debug)]
pub struct Slot<K, T> {
    key: Option<K>,
    state: LoadState<T>,
}

impl<K: PartialEq, T> Slot<K, T> {
    fn empty() -> Self {
        Self { key: None, state: LoadState::Loading }
    }

    /// `fallback` unless this slot was filled for `key`.
    fn view<'a>(&'a self, key: &K, fallback: &'a LoadState<T>) -> &'a LoadState<T> {
        if self.key.as_ref() == Some(key) {
            &self.state
        } else {
            fallback
        }
    }
}

pub struct Aggregate<K: 'static, T: 'static> {
    slot: UseStateHandle<Slot<K, T>>,
    key: K,
    loading: LoadState<T>,
    pub retry: Callback<()>,
}

impl<K: PartialEq, T> Aggregate<K, T> {
    /// State for the key of the current render. Data loaded for an earlier
    /// key reads as `Loading` until the new load settles.
    pub fn state(&self) -> &LoadState<T> {
        self.slot.view(&self.key, &self.loading)
    }
}

/// Loads a page's view model whenever `key` changes (or `retry` is emitted).
///
/// `load` is expected to join its fetches concurrently with `futures::try_join!`
/// or `try_join_all`. Results from superseded keys and from unmounted
/// components are discarded.
#[hook]
pub fn use_aggregate<K, T, F, Fut>(key: K, load: F) -> Aggregate<K, T>
where
    K: Clone + PartialEq + 'static,
    T: 'static,
    F: FnOnce(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let slot = use_state(Slot::empty);
    let generation = use_mut_ref(Generation::default);
    let attempt = use_state(|| 0u32);

    {
        let slot = slot.clone();
        use_effect_with_deps(
            move |(key, _attempt): &(K, u32)| {
                let ticket = generation.borrow_mut().advance();
                slot.set(Slot { key: Some(key.clone()), state: LoadState::Loading });

                let key = key.clone();
                let pending = load(key.clone());
                let guard = generation.clone();
                spawn_local(async move {
                    let result = pending.await;
                    let next = guard.borrow().settle(ticket, result);
                    if let Some(state) = next {
                        slot.set(Slot { key: Some(key), state });
                    }
                });

                move || {
                    generation.borrow_mut().advance();
                }
            },
            (key.clone(), *attempt),
        );
    }

    let retry = {
        let attempt = attempt.clone();
        Callback::from(move |_| attempt.set(*attempt + 1))
    };

    Aggregate {
        slot,
        key,
        loading: LoadState::Loading,
        retry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::{ready, try_join_all, BoxFuture, FutureExt};

    fn ok(n: u32) -> BoxFuture<'static, Result<u32, FetchError>> {
        ready(Ok(n)).boxed()
    }

    fn fail(msg: &str) -> BoxFuture<'static, Result<u32, FetchError>> {
        ready(Err(FetchError::Network(msg.to_string()))).boxed()
    }

    #[test]
    fn all_successes_are_combined_in_order() {
        let result = block_on(try_join_all(vec![ok(1), ok(2), ok(3)]));
        assert_eq!(result, Ok(vec![1, 2, 3]));
    }

    #[test]
    fn no_fetches_is_an_empty_success() {
        let result = block_on(try_join_all(Vec::<BoxFuture<'static, Result<u32, FetchError>>>::new()));
        assert_eq!(result, Ok(vec![]));
    }

    #[test]
    fn one_failure_fails_the_whole_aggregation() {
        for k in 0..4 {
            let fetches = (0..4).map(|i| if i == k { fail("offline") } else { ok(i) });
            let state: LoadState<Vec<u32>> = block_on(try_join_all(fetches)).into();
            assert_eq!(
                state,
                LoadState::Error("Could not reach the content service: offline".to_string())
            );
        }
    }

    #[test]
    fn mixed_types_join_through_try_join() {
        let config = async { Ok::<_, FetchError>("config") };
        let posts = async {
            Err::<Vec<u32>, _>(FetchError::Status { status: 500, path: "/api/blog-posts".into() })
        };
        let state: LoadState<(&str, Vec<u32>)> =
            block_on(async { futures::try_join!(config, posts) }).into();
        assert!(matches!(state, LoadState::Error(msg) if msg.contains("500")));
    }

    #[test]
    fn fetches_run_concurrently() {
        // The first fetch can only finish once the second one has run, so a
        // sequential join would never complete.
        let (tx, rx) = oneshot::channel::<u32>();
        let waiting = async move { rx.await.map_err(|e| FetchError::Network(e.to_string())) }.boxed();
        let sending = async move {
            match tx.send(5) {
                Ok(()) => Ok(6),
                Err(_) => Err(FetchError::Network("receiver gone".into())),
            }
        }
        .boxed();
        assert_eq!(block_on(try_join_all(vec![waiting, sending])), Ok(vec![5, 6]));
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut generation = Generation::default();
        let first = generation.advance();
        let second = generation.advance();

        assert!(generation.settle(first, Ok(1)).is_none());
        assert_eq!(generation.settle(second, Ok(2)), Some(LoadState::Ready(2)));
    }

    #[test]
    fn data_for_an_old_key_reads_as_loading() {
        let loading = LoadState::Loading;
        let slot = Slot { key: Some("first-post"), state: LoadState::Ready(1) };

        assert_eq!(slot.view(&"first-post", &loading), &LoadState::Ready(1));
        assert_eq!(slot.view(&"second-post", &loading), &LoadState::Loading);
        assert_eq!(Slot::<&str, u32>::empty().view(&"first-post", &loading), &LoadState::Loading);
    }

    #[test]
    fn unmount_invalidates_the_running_load() {
        let mut generation = Generation::default();
        let ticket = generation.advance();
        generation.advance(); // effect cleanup
        assert!(!generation.is_current(ticket));
        assert!(generation.settle(ticket, Ok::<_, FetchError>(())).is_none());
    }
}
