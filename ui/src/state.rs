use yewdux::prelude::*;

use crate::config;
use crate::i18n::Lang;

#[derive(Clone, PartialEq, Store)]
pub struct State {
    /// Display language; also sent to the backend with every list call.
    pub lang: Lang,
    /// Global error banner.
    pub error_message: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            lang: config::initial_lang(),
            error_message: None,
        }
    }
}

impl State {
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
