//! Session-token persistence. The backend also sets the token as a cookie;
//! this copy is what the HTTP client attaches as a bearer header.

use crate::local::LocalStore;
use crate::local_store;

const TOKEN_KEY: &str = "token";

pub fn save_token(token: &str) {
    local_store().set(TOKEN_KEY, token);
}

pub fn load_token() -> Option<String> {
    local_store().get(TOKEN_KEY)
}

pub fn clear_token() {
    local_store().remove(TOKEN_KEY);
}
