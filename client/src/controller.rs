use crate::api::{ApiError, SessionApi};
use crate::lifecycle::{SessionLifecycle, EXPIRED_NOTICE};
use crate::view::{Action, BusyGuard, NoticeKind, SessionView};
use std::sync::Arc;
use tracing::{debug, warn};

//--------------------------------------------------------------------------------------------------
// Binds the session calls to the view and the local countdown
//--------------------------------------------------------------------------------------------------

pub struct SessionController<V: SessionView> {
    api: SessionApi,
    view: Arc<V>,
    lifecycle: SessionLifecycle<V>,
}

impl<V: SessionView> SessionController<V> {
    pub fn new(api: SessionApi, view: Arc<V>) -> Self {
        let lifecycle = SessionLifecycle::new(view.clone());
        Self::with_lifecycle(api, view, lifecycle)
    }

    pub fn with_lifecycle(api: SessionApi, view: Arc<V>, lifecycle: SessionLifecycle<V>) -> Self {
        SessionController {
            api,
            view,
            lifecycle,
        }
    }

    pub fn lifecycle(&self) -> &SessionLifecycle<V> {
        &self.lifecycle
    }

    fn connection_error(&self, err: &ApiError, text: &str) {
        warn!("Request to {} failed: {}", self.api.base_url(), err);
        self.view.notice(NoticeKind::Error, text);
    }

    pub async fn login(&self, username: &str, password: &str) {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            self.view.notice(NoticeKind::Error, "Please fill in all fields");
            return;
        }

        let _busy = BusyGuard::new(self.view.as_ref(), Action::Login);

        match self.api.login(username, password).await {
            Ok(reply) => {
                self.view.notice(NoticeKind::Success, "Login successful!");
                self.lifecycle.start(&reply.user.username);
            }
            Err(ApiError::Rejected { message, .. }) => {
                let text = message.as_deref().unwrap_or("Login failed");
                self.view.notice(NoticeKind::Error, text);
            }
            Err(err) => self.connection_error(
                &err,
                &format!(
                    "Connection error. Please check if server is running at {}.",
                    self.api.base_url()
                ),
            ),
        }
    }

    pub async fn refresh(&self) {
        let _busy = BusyGuard::new(self.view.as_ref(), Action::Refresh);

        match self.api.dashboard().await {
            Ok(_) => self
                .view
                .notice(NoticeKind::Success, "Dashboard data refreshed!"),
            // The server is authoritative, end the session whatever the countdown says
            Err(err) if err.is_auth_failure() => {
                debug!("Refresh rejected by server: {}", err);
                self.view.notice(NoticeKind::Error, EXPIRED_NOTICE);
                self.lifecycle.end();
            }
            Err(ApiError::Rejected { message, .. }) => {
                let text = message.as_deref().unwrap_or("Failed to refresh");
                self.view.notice(NoticeKind::Error, text);
            }
            Err(err) => {
                self.connection_error(&err, "Connection error. Please check if server is running.")
            }
        }
    }

    // The login view is shown even when the server cannot be reached
    pub async fn logout(&self) {
        let _busy = BusyGuard::new(self.view.as_ref(), Action::Logout);

        match self.api.logout().await {
            Ok(reply) => self.view.notice(NoticeKind::Success, &reply.message),
            Err(ApiError::Rejected { message, .. }) => {
                let text = message.as_deref().unwrap_or("Logged out successfully");
                self.view.notice(NoticeKind::Success, text);
            }
            Err(err) => self.connection_error(&err, "Connection error during logout."),
        }

        self.lifecycle.end();
    }

    // Probes with whatever cookie is already held, silent when there is no session
    pub async fn restore(&self) -> bool {
        match self.api.dashboard().await {
            Ok(reply) => {
                self.lifecycle.start(&reply.user.username);
                self.view.notice(NoticeKind::Info, "Session restored!");
                true
            }
            Err(err) => {
                debug!("No active session found: {}", err);
                false
            }
        }
    }
}

//--------------------------------------------------------------------------------------------------
