//! Session commands: login, logout, status, password rotation.

use tracing::info;

use super::{CliError, open_auth};

/// Log in and write a 24-hour session to the session jar.
pub fn login(username: &str, password: &str) -> Result<(), CliError> {
    let mut auth = open_auth()?;
    auth.login(username, password)?;
    info!("Logged in as {username}");
    Ok(())
}

/// Clear the session jar. A no-op when not logged in.
pub fn logout() -> Result<(), CliError> {
    let mut auth = open_auth()?;
    auth.logout();
    info!("Logged out");
    Ok(())
}

/// Report whether a session is active and for whom.
pub fn status() -> Result<(), CliError> {
    let auth = open_auth()?;
    match auth.current_user() {
        Some(user) => info!(
            "Logged in as {} (role: {}, since {})",
            user.username, user.role, user.login_time
        ),
        None => info!("Not logged in"),
    }
    Ok(())
}

/// Rotate the operator password. Requires an active session.
pub fn change_password(current: &str, new: &str) -> Result<(), CliError> {
    let mut auth = open_auth()?;
    if !auth.is_authenticated() {
        return Err(CliError::NotAuthenticated);
    }
    auth.change_password(current, new)?;
    info!("Password changed");
    Ok(())
}
