//! Simulated collaborators and the clock-based theme schedule.
//!
//! None of these reach the network. They give the assistant endpoints a
//! stable shape until real providers are wired in.

use async_trait::async_trait;
use chrono::{NaiveTime, Timelike};

use super::{BrainstormAssistant, CalendarSync, CalendarSyncReport, Idea, IntegrationError, Theme, ThemeScheduler};
use crate::config::ThemeConfig;

const IDEA_TEMPLATES: &[(&str, &str)] = &[
    ("Start small", "What is the smallest step toward {} you could take today?"),
    ("Flip it", "What would make {} fail, and how could you do the opposite?"),
    ("Borrow", "Who already does something like {} well, and what can you copy?"),
    ("Remove limits", "How would you approach {} with unlimited time and money?"),
    ("Cut in half", "What would {} look like with half the effort?"),
    ("Ask why", "Why does {} matter to you, five times over?"),
];

/// Canned prompts in place of a language-model backend
pub struct StubBrainstormAssistant;

#[async_trait]
impl BrainstormAssistant for StubBrainstormAssistant {
    fn name(&self) -> &str {
        "stub"
    }

    async fn brainstorm(&self, topic: &str, count: usize) -> Result<Vec<Idea>, IntegrationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(IntegrationError::InvalidRequest("topic cannot be empty".to_string()));
        }

        Ok(IDEA_TEMPLATES
            .iter()
            .take(count)
            .map(|(title, template)| Idea {
                title: title.to_string(),
                prompt: template.replace("{}", topic),
            })
            .collect())
    }
}

/// Calendar sync with no provider connected
pub struct StubCalendarSync;

#[async_trait]
impl CalendarSync for StubCalendarSync {
    fn name(&self) -> &str {
        "none"
    }

    async fn sync(&self) -> Result<CalendarSyncReport, IntegrationError> {
        Ok(CalendarSyncReport {
            provider: self.name().to_string(),
            connected: false,
            imported_events: 0,
            synced_at: None,
            message: "No calendar provider connected".to_string(),
        })
    }
}

/// Light theme between two configured hours, dark otherwise
pub struct ClockThemeScheduler {
    light_start_hour: u32,
    dark_start_hour: u32,
}

impl ClockThemeScheduler {
    /// Schedule taken from the `[integrations.theme]` config section
    pub fn new(config: &ThemeConfig) -> Self {
        Self {
            light_start_hour: config.light_start_hour,
            dark_start_hour: config.dark_start_hour,
        }
    }
}

impl ThemeScheduler for ClockThemeScheduler {
    fn theme_at(&self, time: NaiveTime) -> Theme {
        let hour = time.hour();
        let light = if self.light_start_hour < self.dark_start_hour {
            hour >= self.light_start_hour && hour < self.dark_start_hour
        } else {
            // light period wraps past midnight
            hour >= self.light_start_hour || hour < self.dark_start_hour
        };

        if light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn default_schedule() {
        let scheduler = ClockThemeScheduler::new(&ThemeConfig::default());
        assert_eq!(scheduler.theme_at(at(6)), Theme::Dark);
        assert_eq!(scheduler.theme_at(at(7)), Theme::Light);
        assert_eq!(scheduler.theme_at(at(18)), Theme::Light);
        assert_eq!(scheduler.theme_at(at(19)), Theme::Dark);
    }

    #[test]
    fn wrapping_schedule() {
        let scheduler = ClockThemeScheduler::new(&ThemeConfig {
            light_start_hour: 20,
            dark_start_hour: 4,
        });
        assert_eq!(scheduler.theme_at(at(23)), Theme::Light);
        assert_eq!(scheduler.theme_at(at(2)), Theme::Light);
        assert_eq!(scheduler.theme_at(at(12)), Theme::Dark);
    }

    #[tokio::test]
    async fn brainstorm_fills_in_topic() {
        let ideas = StubBrainstormAssistant.brainstorm(" a garden ", 3).await.unwrap();
        assert_eq!(ideas.len(), 3);
        assert!(ideas[0].prompt.contains("a garden"));
    }

    #[tokio::test]
    async fn brainstorm_rejects_blank_topic() {
        assert!(StubBrainstormAssistant.brainstorm("   ", 3).await.is_err());
    }
}
