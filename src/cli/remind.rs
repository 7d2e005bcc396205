//! `alianza remind` subcommands.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::config::Config;
use crate::error::NotifyError;
use crate::llm::{GeminiGenerator, MessageGenerator};
use crate::notify::{GotifySink, NotificationSink, Permission, TerminalSink};
use crate::profile::UserProfile;
use crate::reminder::{ReminderScheduler, ReminderTime, SystemClock};

/// Arm the daily reminder and keep the process alive until Ctrl-C.
pub async fn start(profile_path: &Path) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let profile = UserProfile::load_from(profile_path).context("loading profile")?;
    if profile.partner_love_language.is_none() {
        println!(
            "Note: {}'s love language is unknown; reminders will be skipped until \
             you set --partner-love-language on the profile.",
            profile.partner_name
        );
    }

    config.llm.require_api_key()?;
    let generator: Arc<dyn MessageGenerator> = Arc::new(GeminiGenerator::new(config.llm.clone())?);
    let sink: Arc<dyn NotificationSink> = Arc::new(
        GotifySink::from_config(&config.notify)
            .context("the daily reminder needs a push backend; set GOTIFY_URL and GOTIFY_TOKEN")?,
    );
    let target = ReminderTime::new(config.reminder.hour, config.reminder.minute)?;

    if sink.current_permission()? != Permission::Granted && !sink.request_permission().await? {
        println!("Notification permission not granted (set GOTIFY_TOKEN); nothing scheduled.");
        return Ok(());
    }

    let scheduler = ReminderScheduler::new(Arc::new(SystemClock), sink, generator, target)
        .with_generation_timeout(config.reminder.generation_timeout);
    scheduler.schedule(&profile)?;

    println!(
        "Daily reminder armed for {:02}:{:02}. Press Ctrl-C to stop.",
        config.reminder.hour, config.reminder.minute
    );
    tokio::signal::ctrl_c().await?;
    scheduler.cancel();
    println!("\nReminder cancelled.");
    Ok(())
}

/// Fire the reminder logic once, right now.
pub async fn test(profile_path: &Path) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let profile = UserProfile::load_from(profile_path).context("loading profile")?;
    if profile.partner_love_language.is_none() {
        println!(
            "Note: {}'s love language is unknown; nothing will be delivered until \
             you set --partner-love-language on the profile.",
            profile.partner_name
        );
        return Ok(());
    }
    config.llm.require_api_key()?;

    let generator: Arc<dyn MessageGenerator> = Arc::new(GeminiGenerator::new(config.llm.clone())?);
    let sink: Arc<dyn NotificationSink> = match GotifySink::from_config(&config.notify) {
        Ok(sink) => Arc::new(sink),
        Err(NotifyError::CapabilityUnavailable) => {
            tracing::info!("no push backend configured, delivering to the terminal");
            Arc::new(TerminalSink)
        }
        Err(e) => return Err(e.into()),
    };

    let scheduler = ReminderScheduler::new(
        Arc::new(SystemClock),
        sink,
        generator,
        ReminderTime::DEFAULT,
    )
    .with_generation_timeout(config.reminder.generation_timeout);

    scheduler.test_now(&profile).await?;
    Ok(())
}
