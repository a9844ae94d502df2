// src/unlock/scope.rs
use super::options::UnlockOptionId;
use std::collections::BTreeSet;

/// Intent strength tier reported by the intent-data provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalStrength {
    SuperStrong,
    VeryStrong,
    Strong,
}

impl SignalStrength {
    pub fn label(&self) -> &'static str {
        match self {
            SignalStrength::SuperStrong => "Super Strong",
            SignalStrength::VeryStrong => "Very Strong",
            SignalStrength::Strong => "Strong",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SignalStrength::SuperStrong => "super-strong",
            SignalStrength::VeryStrong => "very-strong",
            SignalStrength::Strong => "strong",
        }
    }

    fn tier_option(&self) -> UnlockOptionId {
        match self {
            SignalStrength::SuperStrong => UnlockOptionId::SuperStrong,
            SignalStrength::VeryStrong => UnlockOptionId::VeryStrong,
            SignalStrength::Strong => UnlockOptionId::Strong,
        }
    }
}

/// A company's intent signal as shown by a badge in the list
#[derive(Debug, Clone, PartialEq)]
pub struct IntentSignal {
    pub badge_id: String,
    pub company: String,
    pub topic: String,
    pub strength: SignalStrength,
}

/// Badge ids covered by the union of `selected` options.
///
/// `current` only covers the clicked badge, and only if it is in `signals`.
pub fn resolve_unlock_scope(
    selected: &[UnlockOptionId],
    clicked_badge_id: Option<&str>,
    signals: &[IntentSignal],
) -> BTreeSet<String> {
    let mut covered = BTreeSet::new();

    for signal in signals {
        let hit = selected.iter().any(|option| match option {
            UnlockOptionId::Current => clicked_badge_id == Some(signal.badge_id.as_str()),
            UnlockOptionId::All => true,
            tier => *tier == signal.strength.tier_option(),
        });
        if hit {
            covered.insert(signal.badge_id.clone());
        }
    }

    covered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(badge_id: &str, strength: SignalStrength) -> IntentSignal {
        IntentSignal {
            badge_id: badge_id.to_string(),
            company: format!("{} Inc", badge_id),
            topic: "Cloud Security".to_string(),
            strength,
        }
    }

    fn sample() -> Vec<IntentSignal> {
        vec![
            signal("a", SignalStrength::SuperStrong),
            signal("b", SignalStrength::VeryStrong),
            signal("c", SignalStrength::Strong),
            signal("d", SignalStrength::SuperStrong),
        ]
    }

    fn ids(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_current_covers_clicked_badge() {
        let covered = resolve_unlock_scope(&[UnlockOptionId::Current], Some("c"), &sample());
        assert_eq!(covered, ids(&["c"]));
    }

    #[test]
    fn test_current_without_clicked_badge_covers_nothing() {
        assert!(resolve_unlock_scope(&[UnlockOptionId::Current], None, &sample()).is_empty());
        assert!(resolve_unlock_scope(&[UnlockOptionId::Current], Some("zzz"), &sample()).is_empty());
    }

    #[test]
    fn test_tier_covers_exact_strength() {
        let covered = resolve_unlock_scope(&[UnlockOptionId::SuperStrong], None, &sample());
        assert_eq!(covered, ids(&["a", "d"]));

        let covered = resolve_unlock_scope(&[UnlockOptionId::Strong], None, &sample());
        assert_eq!(covered, ids(&["c"]));
    }

    #[test]
    fn test_union_of_options() {
        let covered = resolve_unlock_scope(
            &[UnlockOptionId::Current, UnlockOptionId::VeryStrong],
            Some("c"),
            &sample(),
        );
        assert_eq!(covered, ids(&["b", "c"]));
    }

    #[test]
    fn test_all_covers_everything() {
        let covered = resolve_unlock_scope(&[UnlockOptionId::All], None, &sample());
        assert_eq!(covered, ids(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(SignalStrength::VeryStrong.label(), "Very Strong");
        assert_eq!(SignalStrength::SuperStrong.css_class(), "super-strong");
    }
}
