//! REST API helpers for account endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` with displayable messages so a failed
//! request degrades into the modal's error region instead of panicking.

#![allow(clippy::unused_async)]

/// Change the signed-in user's password via `POST /api/account/password`.
///
/// The endpoint itself belongs to the account backend; this helper only
/// shapes the request and maps failures to a message the modal can display.
///
/// # Errors
///
/// Returns a human-readable message when the request cannot be sent or the
/// server rejects the change.
pub async fn change_password(current: &str, new: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct ChangePasswordRequest<'a> {
            current_password: &'a str,
            new_password: &'a str,
        }

        let resp = gloo_net::http::Request::post("/api/account/password")
            .json(&ChangePasswordRequest { current_password: current, new_password: new })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if resp.ok() {
            return Ok(());
        }
        match resp.status() {
            401 | 403 => Err("Current password is incorrect.".to_owned()),
            s => Err(format!("Password change failed: {s}")),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (current, new);
        Err("not available on server".to_owned())
    }
}
