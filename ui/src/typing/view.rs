use gloo_timers::callback::Timeout;
use leptos::logging::error;
use leptos::prelude::*;

use super::cycler::{Result, TypingConfig, TypingCycler};

type PendingSlot<T> = StoredValue<Option<T>, LocalStorage>;
type CyclerSlot = StoredValue<Option<TypingCycler>>;

/// Types each phrase out, holds it, erases it, then moves to the next one,
/// forever. The cursor glyph is rendered after the text.
#[component]
pub fn Typewriter(
    #[prop(into)] phrases: Signal<Vec<String>>,
    #[prop(optional)] typing_speed: Option<u32>,
    #[prop(optional)] deleting_speed: Option<u32>,
    #[prop(optional)] pause_time: Option<u32>,
    #[prop(into, optional)] class: String,
    #[prop(into, default = "animate-pulse".into())] cursor_class: String,
    #[prop(into, default = "✏️".into())] cursor: String,
) -> impl IntoView {
    let defaults = TypingConfig::default();
    let config = TypingConfig {
        typing_speed: typing_speed.unwrap_or(defaults.typing_speed),
        deleting_speed: deleting_speed.unwrap_or(defaults.deleting_speed),
        pause_time: pause_time.unwrap_or(defaults.pause_time),
    };

    let displayed = RwSignal::new(String::new());
    let cycler: CyclerSlot = StoredValue::new(None);
    let pending: PendingSlot<Timeout> = StoredValue::new_local(None);

    // rebuilt from scratch whenever the phrase list changes
    Effect::new(move |_| {
        let list = phrases.get();
        cancel(pending);

        match restart(list, config, cycler, displayed) {
            Ok(()) => schedule(cycler, pending, displayed),
            Err(e) => error!("typewriter disabled: {e}"),
        }
    });

    on_cleanup(move || cancel(pending));

    view! {
        <span class=class>
            {move || displayed.get()}
            <span class=cursor_class>{cursor}</span>
        </span>
    }
}

/// Puts a fresh cycler for `phrases` in the slot and resets the visible
/// text. On error the slot is emptied so nothing keeps ticking.
fn restart(
    phrases: Vec<String>,
    config: TypingConfig,
    cycler: CyclerSlot,
    displayed: RwSignal<String>,
) -> Result<()> {
    let fresh = TypingCycler::new(phrases, config);
    let text = fresh
        .as_ref()
        .map(|c| c.displayed().to_owned())
        .unwrap_or_default();

    cycler.try_update_value(|slot| *slot = fresh.as_ref().ok().cloned());
    displayed.try_set(text);
    fresh.map(|_| ())
}

/// One timer firing. Returns whether the cycler is still alive and wants
/// another tick; `false` once the owner is gone or no cycler is set.
fn advance(cycler: CyclerSlot, displayed: RwSignal<String>) -> bool {
    let step = cycler
        .try_update_value(|c| {
            c.as_mut()
                .map(|c| c.tick().then(|| c.displayed().to_owned()))
        })
        .flatten();

    match step {
        Some(changed) => {
            if let Some(text) = changed {
                displayed.try_set(text);
            }
            true
        }
        None => false,
    }
}

/// Stores `next` as the only pending timer and hands back the one it
/// replaces. If the slot is already disposed, `next` is dropped.
fn replace_pending<T: 'static>(slot: PendingSlot<T>, next: T) -> Option<T> {
    slot.try_update_value(|s| s.replace(next)).flatten()
}

fn take_pending<T: 'static>(slot: PendingSlot<T>) -> Option<T> {
    slot.try_update_value(Option::take).flatten()
}

fn cancel(pending: PendingSlot<Timeout>) {
    if let Some(timeout) = take_pending(pending) {
        timeout.cancel();
    }
}

// Arms the single timer for the cycler's next tick, replacing whatever was
// pending. The callback re-arms itself, so there is never more than one.
fn schedule(cycler: CyclerSlot, pending: PendingSlot<Timeout>, displayed: RwSignal<String>) {
    let Some(delay) = cycler
        .try_with_value(|c| c.as_ref().map(TypingCycler::next_delay))
        .flatten()
    else {
        return;
    };

    let timeout = Timeout::new(delay, move || {
        if advance(cycler, displayed) {
            schedule(cycler, pending, displayed);
        }
    });

    if let Some(previous) = replace_pending(pending, timeout) {
        previous.cancel();
    }
}
