//! Input debouncing: at most one downstream update per idle gap.

use dioxus::prelude::*;

/// Mirror `source` into the returned signal once it has been quiet for
/// `delay_ms`. Rapid changes reset the timer, so only the settled value
/// propagates. The dashboard search box uses this to avoid filtering on
/// every keystroke.
pub fn use_debounced(source: ReadOnlySignal<String>, delay_ms: u64) -> ReadOnlySignal<String> {
    let mut debounced = use_signal(move || source.peek().clone());
    let mut generation = use_signal(|| 0u64);

    use_effect(move || {
        let value = source();
        let current = *generation.peek() + 1;
        generation.set(current);
        spawn(async move {
            crate::platform::sleep_ms(delay_ms).await;
            // A newer keystroke superseded this timer.
            if *generation.peek() == current {
                debounced.set(value);
            }
        });
    });

    debounced.into()
}
