use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::timer::TimedState;

/// Keeps a [`TimedState`] in component state and owns its single timer.
///
/// The timer lives in the effect's teardown: any change of value, and
/// unmounting, drops the `Timeout`, which clears it in the browser. A
/// callback can therefore never write into a disposed component.
#[hook]
pub fn use_timed_state<T, F>(init: F) -> UseStateHandle<T>
where
    T: TimedState + 'static,
    F: FnOnce() -> T,
{
    let state = use_state(init);
    {
        let handle = state.clone();
        use_effect_with_deps(
            move |current: &T| {
                let timer = current.pending().map(|deferred| {
                    let current = current.clone();
                    Timeout::new(deferred.delay_ms, move || handle.set(current.elapsed()))
                });
                move || drop(timer)
            },
            (*state).clone(),
        );
    }
    state
}
