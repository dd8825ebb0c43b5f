use shared::RequestEpoch;
use yew::prelude::*;

/// A `RequestEpoch` that lives as long as the component and is invalidated
/// when it unmounts, so late responses are dropped instead of applied.
#[hook]
pub fn use_request_epoch() -> RequestEpoch {
    let epoch = (*use_memo((), |_| RequestEpoch::new())).clone();

    use_effect_with((), {
        let epoch = epoch.clone();
        move |_| move || epoch.invalidate()
    });

    epoch
}
