//! Daily reminder scheduling.
//!
//! One notification per day at a fixed local time (06:00 by default),
//! implemented as chained one-shot timers rather than a fixed-period
//! repeating timer: each fire recomputes the delay to the next occurrence
//! from the clock, so clock and timezone shifts self-correct instead of
//! drifting.
//!
//! The scheduler owns at most one armed timer. Re-scheduling replaces the
//! previous timer (never duplicates it), cancelling is idempotent, and
//! re-arming for the next day happens only after the current fire's delivery
//! attempt completes.

pub mod clock;

pub use clock::{Clock, SystemClock};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use tokio::task::JoinHandle;

use crate::error::{NotifyError, ReminderError};
use crate::llm::MessageGenerator;
use crate::notify::{NotificationSink, Permission};
use crate::profile::UserProfile;

/// Title used for every daily-mission notification.
pub const NOTIFICATION_TITLE: &str = "Alianza: Love Mission";

/// Default timeout for the content-generation call; on expiry the fallback
/// message is delivered instead.
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Deterministic notification body used when content generation fails.
pub fn fallback_message(partner_name: &str) -> String {
    format!("Today is a great day to love {partner_name}!")
}

/// A validated target time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderTime {
    hour: u32,
    minute: u32,
}

impl ReminderTime {
    /// The reference default: 06:00.
    pub const DEFAULT: ReminderTime = ReminderTime { hour: 6, minute: 0 };

    pub fn new(hour: u32, minute: u32) -> Result<Self, ReminderError> {
        if hour > 23 || minute > 59 {
            return Err(ReminderError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    fn as_time(self) -> NaiveTime {
        // Bounds checked in new().
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl Default for ReminderTime {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The next occurrence of `target` strictly after `now`.
///
/// If today's occurrence is still ahead it is used; otherwise (including when
/// `now` is exactly the target) the occurrence is tomorrow. The resulting
/// delay is therefore always in `(0, 24h]`.
pub fn next_occurrence(now: NaiveDateTime, target: ReminderTime) -> NaiveDateTime {
    let today = now.date().and_time(target.as_time());
    if today > now {
        today
    } else {
        today + TimeDelta::days(1)
    }
}

/// Scheduler state: the collaborators, the target time, and the single armed
/// timer handle. Owned by the hosting application; dropping it cancels any
/// pending reminder.
pub struct ReminderScheduler {
    clock: Arc<dyn Clock>,
    sink: Arc<dyn NotificationSink>,
    generator: Arc<dyn MessageGenerator>,
    target: ReminderTime,
    generation_timeout: Duration,
    armed: Mutex<Option<JoinHandle<()>>>,
}

impl ReminderScheduler {
    pub fn new(
        clock: Arc<dyn Clock>,
        sink: Arc<dyn NotificationSink>,
        generator: Arc<dyn MessageGenerator>,
        target: ReminderTime,
    ) -> Self {
        Self {
            clock,
            sink,
            generator,
            target,
            generation_timeout: DEFAULT_GENERATION_TIMEOUT,
            armed: Mutex::new(None),
        }
    }

    /// Override the content-generation timeout.
    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }

    /// Arm the daily reminder for `profile`.
    ///
    /// Fails fast with [`NotifyError::CapabilityUnavailable`] (wrapped in
    /// [`ReminderError::Notify`]) when no notification backend exists. When a
    /// backend exists but permission is not granted this is a silent no-op:
    /// nothing is armed and no error is returned. Calling it again replaces
    /// the previously armed timer, so at most one fire is ever pending.
    pub fn schedule(&self, profile: &UserProfile) -> Result<(), ReminderError> {
        let permission = self.sink.current_permission()?;
        if permission != Permission::Granted {
            tracing::debug!(
                ?permission,
                "reminder not scheduled: notification permission not granted"
            );
            return Ok(());
        }

        let task = run_loop(
            Arc::clone(&self.clock),
            Arc::clone(&self.sink),
            Arc::clone(&self.generator),
            self.target,
            self.generation_timeout,
            profile.clone(),
        );

        let mut armed = lock_armed(&self.armed);
        if let Some(previous) = armed.take() {
            previous.abort();
            tracing::debug!("replacing previously armed reminder timer");
        }
        *armed = Some(tokio::spawn(task));
        Ok(())
    }

    /// Cancel the armed reminder, if any. Idempotent.
    pub fn cancel(&self) {
        if let Some(handle) = lock_armed(&self.armed).take() {
            handle.abort();
            tracing::debug!("reminder cancelled");
        }
    }

    /// Whether a reminder timer is currently armed.
    pub fn is_armed(&self) -> bool {
        lock_armed(&self.armed).is_some()
    }

    /// Run the fire logic once, immediately, without touching the armed
    /// timer. Returns the delivery outcome so callers can report it.
    pub async fn test_now(&self, profile: &UserProfile) -> Result<(), NotifyError> {
        fire(
            self.sink.as_ref(),
            self.generator.as_ref(),
            self.generation_timeout,
            profile,
        )
        .await
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        if let Some(handle) = lock_armed(&self.armed).take() {
            handle.abort();
        }
    }
}

fn lock_armed(armed: &Mutex<Option<JoinHandle<()>>>) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
    armed.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// The armed timer: sleep until the next occurrence, fire, and re-arm.
///
/// Re-arming happens only after the fire's delivery attempt completes, and
/// the delay is recomputed from the clock each cycle.
async fn run_loop(
    clock: Arc<dyn Clock>,
    sink: Arc<dyn NotificationSink>,
    generator: Arc<dyn MessageGenerator>,
    target: ReminderTime,
    generation_timeout: Duration,
    profile: UserProfile,
) {
    loop {
        let now = clock.now();
        let at = next_occurrence(now, target);
        let delay = (at - now).to_std().unwrap_or(Duration::ZERO);
        tracing::info!(
            at = %at,
            minutes = delay.as_secs() / 60,
            "daily reminder armed"
        );
        tokio::time::sleep(delay).await;

        if let Err(err) = fire(sink.as_ref(), generator.as_ref(), generation_timeout, &profile).await
        {
            tracing::error!(error = %err, "reminder delivery failed");
        }
    }
}

/// One fire: generate the mission text (falling back deterministically on
/// any generator failure or timeout) and deliver it.
async fn fire(
    sink: &dyn NotificationSink,
    generator: &dyn MessageGenerator,
    generation_timeout: Duration,
    profile: &UserProfile,
) -> Result<(), NotifyError> {
    let Some(summary) = profile.summary() else {
        tracing::debug!("skipping reminder: partner love language not set");
        return Ok(());
    };

    let body = match tokio::time::timeout(
        generation_timeout,
        generator.generate_short_message(&summary),
    )
    .await
    {
        Ok(Ok(text)) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(Ok(_)) => {
            tracing::warn!("generator returned empty mission text, using fallback");
            fallback_message(&profile.partner_name)
        }
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "mission generation failed, using fallback");
            fallback_message(&profile.partner_name)
        }
        Err(_) => {
            tracing::warn!(timeout = ?generation_timeout, "mission generation timed out, using fallback");
            fallback_message(&profile.partner_name)
        }
    };

    sink.deliver(NOTIFICATION_TITLE, &body).await
}
