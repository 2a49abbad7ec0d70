use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum MasonryError {
    #[error("Failed to schedule timer: {0}")]
    TimerScheduling(String),
    #[error("Failed to register scroll listener: {0}")]
    ListenerRegistration(String),
    #[error("Failed to remove scroll listener: {0}")]
    ListenerRemoval(String),
}

#[cfg(feature = "browser")]
mod browser {
    use leptos::wasm_bindgen::JsValue;

    use crate::errors::MasonryError;

    /// Formats a javascript exception so it can be carried inside a [`MasonryError`].
    pub fn js_error_message(error: &JsValue) -> String {
        error.as_string().unwrap_or_else(|| format!("{error:?}"))
    }

    impl MasonryError {
        pub fn timer_scheduling(error: JsValue) -> Self {
            MasonryError::TimerScheduling(js_error_message(&error))
        }

        pub fn listener_registration(error: JsValue) -> Self {
            MasonryError::ListenerRegistration(js_error_message(&error))
        }

        pub fn listener_removal(error: JsValue) -> Self {
            MasonryError::ListenerRemoval(js_error_message(&error))
        }
    }
}
