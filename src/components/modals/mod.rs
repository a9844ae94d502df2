pub mod unlock_intent_signal_modal;

pub use unlock_intent_signal_modal::UnlockIntentSignalModal;
