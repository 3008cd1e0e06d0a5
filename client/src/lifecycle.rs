use crate::view::{NoticeKind, SessionView};
use parking_lot::Mutex;
use sessionauth::internal::unixtime::SESSION_DURATION;
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{debug, info};

//--------------------------------------------------------------------------------------------------
// Local mirror of the server-side expiry - advisory, the server always wins
//--------------------------------------------------------------------------------------------------

pub const EXPIRED_NOTICE: &str = "Session expired. Please login again.";

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct ActiveSession {
    pub username: String,
    pub established_at: Instant,
    pub login_time: OffsetDateTime,
}

#[derive(Default)]
struct Inner {
    active: Option<ActiveSession>,
    ticker: Option<JoinHandle<()>>,
    // Bumped on every start and end so a tick from an old session can never act
    generation: u64,
}

pub struct SessionLifecycle<V: SessionView> {
    view: Arc<V>,
    ttl: Duration,
    inner: Arc<Mutex<Inner>>,
}

enum Tick {
    Remaining(Duration),
    Expired,
    Stale,
}

impl<V: SessionView> SessionLifecycle<V> {
    pub fn new(view: Arc<V>) -> Self {
        Self::with_ttl(view, SESSION_DURATION.as_std())
    }

    pub fn with_ttl(view: Arc<V>, ttl: Duration) -> Self {
        SessionLifecycle {
            view,
            ttl,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    pub fn is_active(&self) -> bool {
        self.inner.lock().active.is_some()
    }

    pub fn session(&self) -> Option<ActiveSession> {
        self.inner.lock().active.clone()
    }

    pub fn remaining(&self) -> Option<Duration> {
        let inner = self.inner.lock();
        inner
            .active
            .as_ref()
            .map(|session| self.ttl.saturating_sub(session.established_at.elapsed()))
    }

    // Must be called from within a tokio runtime
    pub fn start(&self, username: &str) {
        let established_at = Instant::now();
        let login_time = OffsetDateTime::now_utc();

        let generation = {
            let mut inner = self.inner.lock();
            if let Some(ticker) = inner.ticker.take() {
                ticker.abort();
            }
            inner.generation += 1;
            inner.active = Some(ActiveSession {
                username: username.to_string(),
                established_at,
                login_time,
            });
            inner.generation
        };

        info!("Session started for {}", username);

        self.view.show_dashboard(username, login_time);
        self.view.show_remaining(self.ttl);

        let ticker = tokio::spawn(run_ticker(
            self.view.clone(),
            self.inner.clone(),
            self.ttl,
            established_at,
            generation,
        ));

        let mut inner = self.inner.lock();
        if inner.generation == generation {
            inner.ticker = Some(ticker);
        } else {
            ticker.abort();
        }
    }

    // Stops the countdown outright and shows the logged out view
    pub fn end(&self) {
        let ended = {
            let mut inner = self.inner.lock();
            if let Some(ticker) = inner.ticker.take() {
                ticker.abort();
            }
            inner.generation += 1;
            inner.active.take()
        };

        if let Some(session) = ended {
            info!("Session ended for {}", session.username);
        }

        self.view.show_login();
    }
}

impl<V: SessionView> Drop for SessionLifecycle<V> {
    fn drop(&mut self) {
        if let Some(ticker) = self.inner.lock().ticker.take() {
            ticker.abort();
        }
    }
}

async fn run_ticker<V: SessionView>(
    view: Arc<V>,
    inner: Arc<Mutex<Inner>>,
    ttl: Duration,
    established_at: Instant,
    generation: u64,
) {
    let mut interval = interval_at(established_at + TICK, TICK);

    loop {
        interval.tick().await;

        // Decide under the lock, draw after releasing it
        let tick = {
            let mut inner = inner.lock();
            if inner.generation != generation {
                Tick::Stale
            } else {
                let remaining = ttl.saturating_sub(established_at.elapsed());
                if remaining.is_zero() {
                    inner.active = None;
                    inner.ticker = None;
                    inner.generation += 1;
                    Tick::Expired
                } else {
                    Tick::Remaining(remaining)
                }
            }
        };

        match tick {
            Tick::Remaining(remaining) => view.show_remaining(remaining),
            Tick::Expired => {
                info!("Local session timer expired");
                view.notice(NoticeKind::Error, EXPIRED_NOTICE);
                view.show_login();
                return;
            }
            Tick::Stale => {
                debug!("Stale session ticker stopping");
                return;
            }
        }
    }
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Event, RecordingView};
    use tokio::time::sleep;

    fn lifecycle() -> (Arc<RecordingView>, SessionLifecycle<RecordingView>) {
        let view = Arc::new(RecordingView::default());
        (view.clone(), SessionLifecycle::new(view))
    }

    fn expiry_notices(view: &RecordingView) -> usize {
        view.notices()
            .iter()
            .filter(|(_, text)| text == EXPIRED_NOTICE)
            .count()
    }

    #[tokio::test(start_paused = true)]
    async fn counts_down_every_second() {
        let (view, lifecycle) = lifecycle();
        lifecycle.start("admin");

        assert!(lifecycle.is_active());
        assert_eq!(
            view.events(),
            vec![
                Event::Dashboard("admin".to_string()),
                Event::Remaining("60m 0s".to_string())
            ]
        );

        sleep(Duration::from_millis(1500)).await;
        assert_eq!(view.last_remaining().as_deref(), Some("59m 59s"));

        sleep(Duration::from_secs(60)).await;
        assert_eq!(view.last_remaining().as_deref(), Some("58m 59s"));
        assert_eq!(lifecycle.remaining(), Some(Duration::from_millis(3_538_500)));
    }

    #[tokio::test(start_paused = true)]
    async fn expires_after_one_hour() {
        let (view, lifecycle) = lifecycle();
        lifecycle.start("admin");

        sleep(Duration::from_millis(3_599_500)).await;
        assert!(lifecycle.is_active());
        assert_eq!(expiry_notices(&view), 0);

        sleep(Duration::from_secs(1)).await;
        assert!(!lifecycle.is_active());
        assert_eq!(lifecycle.remaining(), None);
        assert_eq!(
            view.transitions(),
            vec![
                Event::Dashboard("admin".to_string()),
                Event::Notice(NoticeKind::Error, EXPIRED_NOTICE.to_string()),
                Event::Login
            ]
        );

        // Nothing ticks once expired
        let count = view.events().len();
        sleep(Duration::from_secs(10)).await;
        assert_eq!(view.events().len(), count);
    }

    #[tokio::test(start_paused = true)]
    async fn end_stops_the_countdown() {
        let (view, lifecycle) = lifecycle();
        lifecycle.start("admin");
        sleep(Duration::from_secs(5)).await;

        lifecycle.end();
        assert!(!lifecycle.is_active());
        let count = view.events().len();

        sleep(Duration::from_secs(7200)).await;
        assert_eq!(view.events().len(), count);
        assert_eq!(expiry_notices(&view), 0);
        assert_eq!(view.events().last(), Some(&Event::Login));
    }

    #[tokio::test(start_paused = true)]
    async fn fresh_start_is_not_expired_by_a_stale_timer() {
        let (view, lifecycle) = lifecycle();
        lifecycle.start("admin");
        sleep(Duration::from_secs(1800)).await;

        lifecycle.end();
        lifecycle.start("user");

        // The first session would have expired here
        sleep(Duration::from_secs(1900)).await;
        assert!(lifecycle.is_active());
        assert_eq!(expiry_notices(&view), 0);
        assert_eq!(lifecycle.session().unwrap().username, "user");

        sleep(Duration::from_secs(1800)).await;
        assert!(!lifecycle.is_active());
        assert_eq!(expiry_notices(&view), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_without_end_replaces_the_timer() {
        let (view, lifecycle) = lifecycle();
        lifecycle.start("admin");
        sleep(Duration::from_secs(3000)).await;

        lifecycle.start("admin");
        sleep(Duration::from_secs(1000)).await;

        assert!(lifecycle.is_active());
        assert_eq!(expiry_notices(&view), 0);
    }
}
