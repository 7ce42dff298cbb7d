//! Transient flash banner for operation outcomes.

use std::time::Duration;

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    pub level: FlashLevel,
    pub text: String,
}

/// Get the shared flash slot.
pub fn use_flash() -> Signal<Option<Flash>> {
    use_context::<Signal<Option<Flash>>>()
}

/// Provider component for the flash slot.
#[component]
pub fn FlashProvider(children: Element) -> Element {
    let flash = use_signal(|| Option::<Flash>::None);
    use_context_provider(|| flash);

    rsx! {
        {children}
    }
}

/// Show a banner; it dismisses itself after a few seconds.
pub fn show_flash(mut flash: Signal<Option<Flash>>, level: FlashLevel, text: impl Into<String>) {
    flash.set(Some(Flash {
        level,
        text: text.into(),
    }));
    spawn(async move {
        crate::sleep(Duration::from_secs(4)).await;
        flash.set(None);
    });
}

/// Fixed-position banner rendering the current flash, if any.
#[component]
pub fn FlashBanner() -> Element {
    let flash = use_flash();

    match flash() {
        Some(f) => {
            let class = match f.level {
                FlashLevel::Success => "flash-banner flash-banner--success",
                FlashLevel::Error => "flash-banner flash-banner--error",
            };
            rsx! {
                div { class: "{class}", "{f.text}" }
            }
        }
        None => rsx! {},
    }
}
