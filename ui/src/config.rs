//! Build-time settings and the credentials read at start-up.

use payloads::RequestContext;
use web_sys::window;

use crate::i18n::{self, Lang};

const AUTH_TOKEN_KEY: &str = "auth_token";

/// `BACKEND_URL` set at build time, otherwise the page's own origin.
pub fn backend_url() -> String {
    option_env!("BACKEND_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .or_else(|| window()?.location().origin().ok())
        .unwrap_or_default()
}

/// The stored preference, then `DEFAULT_LANG`, then English.
pub fn initial_lang() -> Lang {
    i18n::get_stored_lang()
        .or_else(|| option_env!("DEFAULT_LANG").and_then(Lang::from_code))
        .unwrap_or_default()
}

/// Token left in local storage by the login screen, if any.
pub fn stored_auth_token() -> Option<String> {
    let storage = window()?.local_storage().ok()??;
    storage
        .get_item(AUTH_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn request_context(lang: Lang) -> RequestContext {
    let context = RequestContext::default().with_lang(lang.code());
    match stored_auth_token() {
        Some(token) => context.with_token(token),
        None => context,
    }
}
