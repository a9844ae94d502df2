use dioxus::prelude::*;
use crate::components::common::ZapIcon;
use crate::components::modals::UnlockIntentSignalModal;
use crate::config::{format_credits, CreditConfig};
use crate::unlock::{resolve_unlock_scope, IntentSignal, SignalStrength, UnlockOptionId};
use std::collections::BTreeSet;

fn sample_signals() -> Vec<IntentSignal> {
    let rows = [
        ("sig-001", "Northwind Traders", "Cloud Security", SignalStrength::SuperStrong),
        ("sig-002", "Contoso Ltd", "Data Warehousing", SignalStrength::VeryStrong),
        ("sig-003", "Fabrikam", "Endpoint Management", SignalStrength::Strong),
        ("sig-004", "Tailspin Toys", "Marketing Automation", SignalStrength::SuperStrong),
        ("sig-005", "Wide World Importers", "Supply Chain Analytics", SignalStrength::VeryStrong),
        ("sig-006", "Adventure Works", "CRM Software", SignalStrength::Strong),
    ];

    rows.into_iter()
        .map(|(badge_id, company, topic, strength)| IntentSignal {
            badge_id: badge_id.to_string(),
            company: company.to_string(),
            topic: topic.to_string(),
            strength,
        })
        .collect()
}

#[component]
pub fn DashboardView() -> Element {
    let config = use_hook(CreditConfig::from_env);
    let signals = use_hook(sample_signals);

    let mut show_unlock_modal = use_signal(|| false);
    let mut clicked_badge = use_signal(|| None as Option<String>);
    let mut unlocked = use_signal(BTreeSet::<String>::new);
    let mut last_unlock = use_signal(|| None as Option<Vec<UnlockOptionId>>);
    let balance = format_credits(config.credit_balance);

    let handle_unlock = {
        let signals = signals.clone();
        move |ids: Vec<UnlockOptionId>| {
            match serde_json::to_string(&ids) {
                Ok(json) => log::info!("Unlock requested for {}", json),
                Err(e) => log::warn!("Failed to serialize unlock selection: {}", e),
            }

            let badge = clicked_badge();
            let covered = resolve_unlock_scope(&ids, badge.as_deref(), &signals);
            log::info!("Unlock covers {} signal(s)", covered.len());

            unlocked.write().extend(covered);
            last_unlock.set(Some(ids));
        }
    };

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard-header",
                h1 { "Intent Signals" }
                div { class: "credit-balance",
                    "{balance} credits"
                }
            }

            if !config.is_affordable() {
                div { class: "warning-message",
                    "Your balance doesn't cover a single unlock."
                }
            }

            if let Some(ids) = last_unlock() {
                div { class: "success-message",
                    "Unlock requested: "
                    {ids.iter().map(|id| id.as_str()).collect::<Vec<_>>().join(", ")}
                }
            }

            div { class: "signal-list",
                for signal in signals.iter() {
                    {
                        let is_unlocked = unlocked.read().contains(&signal.badge_id);
                        let badge_id = signal.badge_id.clone();
                        let strength_label = signal.strength.label();
                        let strength_class = signal.strength.css_class();

                        rsx! {
                            div {
                                key: "{signal.badge_id}",
                                class: "signal-row",
                                div { class: "signal-company",
                                    div { class: "company-name", "{signal.company}" }
                                    div { class: "company-topic", "{signal.topic}" }
                                }
                                if is_unlocked {
                                    span {
                                        class: "intent-badge unlocked {strength_class}",
                                        "{strength_label}"
                                    }
                                } else {
                                    button {
                                        class: "intent-badge locked",
                                        onclick: move |_| {
                                            clicked_badge.set(Some(badge_id.clone()));
                                            show_unlock_modal.set(true);
                                        },
                                        ZapIcon { class: "icon-xs" }
                                        "Unlock"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            UnlockIntentSignalModal {
                open: show_unlock_modal(),
                onopenchange: move |open| show_unlock_modal.set(open),
                onunlock: handle_unlock,
                currently_clicked_badge_id: clicked_badge(),
                credits_per_unlock: config.credits_per_unlock,
                credit_balance: config.credit_balance,
            }
        }
    }
}
