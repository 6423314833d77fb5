use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::core::countdown::{countdown, CountdownSnapshot, LaunchTarget};
use crate::core::{format, timing};

/// Live countdown for `target`, re-sampled every second while the calling
/// component is mounted.
///
/// The ticker task is re-armed whenever `target` changes and cancelled on
/// unmount. Returns `None` when no target is configured.
pub fn use_countdown(target: Option<LaunchTarget>) -> Option<CountdownSnapshot> {
    let mut now = use_signal(timing::now_utc);
    let ticker: Rc<RefCell<Option<Task>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let slot = ticker.clone();
    use_effect(use_reactive((&target,), move |(target,)| {
        disarm(&slot);
        let Some(target) = target else {
            return;
        };

        now.set(timing::now_utc());
        debug!(launch = %target, "countdown ticker armed");
        let task = spawn(async move {
            let mut clock = now;
            loop {
                timing::sleep_ms(timing::TICK_MS).await;
                clock.set(timing::now_utc());
            }
        });
        slot.borrow_mut().replace(task);
    }));

    let slot = ticker.clone();
    use_drop(move || disarm(&slot));

    countdown(target, now())
}

fn disarm(slot: &Rc<RefCell<Option<Task>>>) {
    if let Some(task) = slot.borrow_mut().take() {
        task.cancel();
        debug!("countdown ticker cancelled");
    }
}

/// Four cards (days/hours/minutes/seconds). Renders nothing without a snapshot.
#[component]
pub fn CountdownTimer(#[props(!optional)] snapshot: Option<CountdownSnapshot>) -> Element {
    let Some(snapshot) = snapshot else {
        return rsx! {};
    };

    let class = if snapshot.reached {
        "countdown countdown--reached"
    } else {
        "countdown"
    };

    rsx! {
        div {
            class: "{class}",
            aria_live: "polite",
            h3 { class: "countdown__title", "We're launching in:" }
            div { class: "countdown__units",
                for (label, value) in snapshot.units() {
                    div { key: "{label}", class: "countdown__unit",
                        div { class: "countdown__value", {format::pad2(value)} }
                        div { class: "countdown__label", "{label}" }
                    }
                }
            }
        }
    }
}
