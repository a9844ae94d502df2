// src/components/modals/unlock_intent_signal_modal.rs
use dioxus::prelude::*;
use crate::components::common::{InfoIcon, ZapIcon};
use crate::config::format_credits;
use crate::unlock::{
    cancel_unlock, confirm_unlock, dismiss_unlock, unlock_options, UnlockOptionId, UnlockSelection,
};

#[component]
pub fn UnlockIntentSignalModal(
    open: bool,
    onopenchange: EventHandler<bool>,
    onunlock: EventHandler<Vec<UnlockOptionId>>,
    currently_clicked_badge_id: Option<String>,
    credits_per_unlock: u64,
    credit_balance: u64,
) -> Element {
    // Lives as long as the component is mounted, not just while open
    let selection = use_signal(UnlockSelection::new);

    if !open {
        return rsx! {};
    }

    rsx! {
        UnlockDialog {
            selection,
            onopenchange,
            onunlock,
            currently_clicked_badge_id,
            credits_per_unlock,
            credit_balance,
        }
    }
}

/// Dialog body, driven by a selection owned by the modal
#[component]
fn UnlockDialog(
    selection: Signal<UnlockSelection>,
    onopenchange: EventHandler<bool>,
    onunlock: EventHandler<Vec<UnlockOptionId>>,
    currently_clicked_badge_id: Option<String>,
    credits_per_unlock: u64,
    credit_balance: u64,
) -> Element {
    let mut selection = selection;

    let handle_unlock = move |_| {
        let mut current = selection();
        let badge = currently_clicked_badge_id.clone();
        let fired = confirm_unlock(
            &mut current,
            |ids| {
                log::info!("Unlocking {} option(s) from badge {:?}", ids.len(), badge);
                onunlock.call(ids);
            },
            |open| onopenchange.call(open),
        );
        if fired {
            selection.set(current);
        }
    };

    let handle_cancel = move |_| {
        let mut current = selection();
        cancel_unlock(&mut current, |open| onopenchange.call(open));
        selection.set(current);
    };

    let can_unlock = selection.read().can_unlock();
    let cost = format_credits(credits_per_unlock);
    let balance = format_credits(credit_balance);

    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "0",
            onmounted: move |e| async move {
                if let Err(err) = e.set_focus(true).await {
                    log::debug!("Unlock dialog couldn't take focus, Escape won't dismiss: {:?}", err);
                }
            },
            onclick: move |_| dismiss_unlock(&selection.read(), |open| onopenchange.call(open)),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    dismiss_unlock(&selection.read(), |open| onopenchange.call(open));
                }
            },

            div {
                class: "modal-content unlock-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "unlock-hero",
                    div { class: "unlock-hero-glow top" }
                    div { class: "unlock-hero-glow bottom" }

                    button {
                        class: "modal-close",
                        onclick: move |_| dismiss_unlock(&selection.read(), |open| onopenchange.call(open)),
                        "×"
                    }

                    div { class: "unlock-hero-body",
                        div { class: "unlock-hero-text",
                            div { class: "premium-badge",
                                ZapIcon { class: "icon-xs" }
                                span { "Premium Feature" }
                            }
                            h2 { class: "unlock-title",
                                "Unlock Intent"
                                br {}
                                "Signals"
                            }
                            p { class: "unlock-subtitle",
                                "Access real-time buying intent data powered by Bombora and uncover deeper insights into company behaviors"
                            }
                        }
                        div { class: "unlock-hero-icon",
                            ZapIcon { class: "icon-xl" }
                        }
                    }
                }

                div { class: "modal-body",
                    h3 { class: "unlock-section-title", "Choose what to unlock" }

                    div { class: "unlock-option-list",
                        for option in unlock_options().iter() {
                            label {
                                key: "{option.id}",
                                class: if selection.read().contains(option.id) { "unlock-option selected" } else { "unlock-option" },
                                input {
                                    r#type: "checkbox",
                                    checked: selection.read().contains(option.id),
                                    onchange: {
                                        let id = option.id;
                                        move |_| {
                                            selection.write().toggle(id);
                                        }
                                    },
                                }
                                div { class: "unlock-option-text",
                                    p { class: "unlock-option-label", "{option.label}" }
                                    p { class: "unlock-option-description", "{option.description}" }
                                }
                            }
                        }
                    }

                    div { class: "info-message credit-notice",
                        InfoIcon { class: "icon-sm" }
                        p {
                            span { class: "strong", "Each unlock deducts {cost} credits" }
                            br {}
                            "You have "
                            span { class: "strong", "{balance} credits" }
                            " remaining"
                        }
                    }
                }

                div { class: "modal-buttons",
                    button {
                        class: "modal-button cancel",
                        onclick: handle_cancel,
                        "Cancel"
                    }
                    button {
                        class: "modal-button primary",
                        disabled: !can_unlock,
                        onclick: handle_unlock,
                        ZapIcon { class: "icon-sm" }
                        "Unlock Now"
                    }
                }
            }
        }
    }
}
