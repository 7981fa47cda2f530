//! Access token persistence. Login itself lives on other pages; the gateway
//! only needs to read the token to attach the `Authorization` header.

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

/// Clear the stored token; called when the backend answers 401
pub fn clear_access_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
