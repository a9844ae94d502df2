pub mod options;
pub mod scope;
pub mod selection;

pub use options::{unlock_options, UnlockOptionId};
pub use scope::{resolve_unlock_scope, IntentSignal, SignalStrength};
pub use selection::{cancel_unlock, confirm_unlock, dismiss_unlock, UnlockSelection};
