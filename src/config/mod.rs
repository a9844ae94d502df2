pub const DEFAULT_CREDITS_PER_UNLOCK: u64 = 5;
pub const DEFAULT_CREDIT_BALANCE: u64 = 48_256;

/// Credit figures shown in the unlock dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditConfig {
    /// Credits deducted for each unlock
    pub credits_per_unlock: u64,
    /// Credits remaining on the account
    pub credit_balance: u64,
}

impl Default for CreditConfig {
    fn default() -> Self {
        Self {
            credits_per_unlock: DEFAULT_CREDITS_PER_UNLOCK,
            credit_balance: DEFAULT_CREDIT_BALANCE,
        }
    }
}

impl CreditConfig {
    /// Load credit figures from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            credits_per_unlock: parse_var(&lookup, "INTENT_UNLOCK_COST", defaults.credits_per_unlock),
            credit_balance: parse_var(&lookup, "INTENT_CREDIT_BALANCE", defaults.credit_balance),
        }
    }

    /// Check if the balance covers a single unlock
    pub fn is_affordable(&self) -> bool {
        self.credit_balance >= self.credits_per_unlock
    }
}

fn parse_var<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().replace(',', "").parse() {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring {}={:?}: {}, using {}", key, raw, e, default);
                default
            }
        },
        None => default,
    }
}

/// Format a credit amount with thousands separators
pub fn format_credits(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CreditConfig::from_vars(lookup(&[]));
        assert_eq!(config, CreditConfig::default());
        assert_eq!(config.credits_per_unlock, 5);
        assert_eq!(config.credit_balance, 48_256);
    }

    #[test]
    fn test_reads_vars() {
        let config = CreditConfig::from_vars(lookup(&[
            ("INTENT_UNLOCK_COST", "10"),
            ("INTENT_CREDIT_BALANCE", "1,200"),
        ]));
        assert_eq!(config.credits_per_unlock, 10);
        assert_eq!(config.credit_balance, 1200);
    }

    #[test]
    fn test_invalid_value_falls_back() {
        let config = CreditConfig::from_vars(lookup(&[("INTENT_UNLOCK_COST", "lots")]));
        assert_eq!(config.credits_per_unlock, DEFAULT_CREDITS_PER_UNLOCK);
    }

    #[test]
    fn test_is_affordable() {
        assert!(CreditConfig::default().is_affordable());
        let broke = CreditConfig { credits_per_unlock: 5, credit_balance: 4 };
        assert!(!broke.is_affordable());
    }

    #[test]
    fn test_format_credits() {
        assert_eq!(format_credits(0), "0");
        assert_eq!(format_credits(5), "5");
        assert_eq!(format_credits(999), "999");
        assert_eq!(format_credits(1000), "1,000");
        assert_eq!(format_credits(48_256), "48,256");
        assert_eq!(format_credits(1_234_567), "1,234,567");
    }
}
