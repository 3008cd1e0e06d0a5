use std::time::Duration;
use time::macros::format_description;
use time::OffsetDateTime;

//--------------------------------------------------------------------------------------------------
// Rendering seam between the session logic and whatever draws it
//--------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Login,
    Refresh,
    Logout,
}

pub trait SessionView: Send + Sync + 'static {
    fn show_dashboard(&self, username: &str, login_time: OffsetDateTime);

    fn show_login(&self);

    fn show_remaining(&self, remaining: Duration);

    fn notice(&self, kind: NoticeKind, text: &str);

    // Busy buttons are disabled until the action finishes, one way or another
    fn set_busy(&self, action: Action, busy: bool);
}

//--------------------------------------------------------------------------------------------------
// Formatting
//--------------------------------------------------------------------------------------------------

pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.as_secs();
    format!("{}m {}s", total / 60, total % 60)
}

pub fn format_login_time(login_time: OffsetDateTime) -> String {
    login_time
        .format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_default()
}

//--------------------------------------------------------------------------------------------------
// Guard that re-enables a button on every exit path, including cancellation
//--------------------------------------------------------------------------------------------------

pub struct BusyGuard<'a, V: SessionView + ?Sized> {
    view: &'a V,
    action: Action,
}

impl<'a, V: SessionView + ?Sized> BusyGuard<'a, V> {
    pub fn new(view: &'a V, action: Action) -> Self {
        view.set_busy(action, true);
        BusyGuard { view, action }
    }
}

impl<V: SessionView + ?Sized> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(self.action, false);
    }
}

//--------------------------------------------------------------------------------------------------
