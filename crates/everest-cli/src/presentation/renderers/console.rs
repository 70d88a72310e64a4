use std::fmt::Write as _;
use std::io::{self, Write};

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewMode};

pub struct ConsoleRenderer {
    json_mode: bool,
    mode: ViewMode,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, mode: ViewMode) -> Self {
        Self {
            json_mode,
            mode,
            color: io::stdout().is_terminal(),
        }
    }

    /// Text output as it would be printed, without touching stdout.
    pub fn render_to_string<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }

        let mut out = String::new();
        let decorated = self.mode != ViewMode::Minimal;

        if decorated && let Some(badge) = &result.badge {
            if self.color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.mode))?;

        if decorated && !result.suggestions.is_empty() {
            if self.color {
                writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\nTips:")?;
            }
            for tip in &result.suggestions {
                if self.color {
                    writeln!(out, "  • {}: {}", tip.description, tip.command.cyan())?;
                } else {
                    writeln!(out, "  • {}: {}", tip.description, tip.command)?;
                }
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        let text = self.render_to_string(&result)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{StatusBadge, ThemeViewModel, Tip};

    fn plain(mode: ViewMode) -> ConsoleRenderer {
        ConsoleRenderer {
            json_mode: false,
            mode,
            color: false,
        }
    }

    fn theme_result() -> CommandResultViewModel<ThemeViewModel> {
        CommandResultViewModel::new(ThemeViewModel {
            theme: "dark".to_string(),
            is_dark: true,
            changed: true,
            preferences_path: "/tmp/everest/preferences.toml".to_string(),
        })
        .with_badge(StatusBadge::success("Theme switched to dark"))
        .with_suggestion(Tip::new("Switch back", "everest theme toggle"))
    }

    #[test]
    fn test_standard_output_has_badge_and_tips() -> Result<()> {
        let text = plain(ViewMode::Standard).render_to_string(&theme_result())?;
        assert!(text.starts_with("✅ Theme switched to dark\n"));
        assert!(text.contains("Tips:"));
        assert!(text.contains("  • Switch back: everest theme toggle"));
        Ok(())
    }

    #[test]
    fn test_minimal_output_is_content_only() -> Result<()> {
        let text = plain(ViewMode::Minimal).render_to_string(&theme_result())?;
        assert!(!text.contains("Tips:"));
        assert!(!text.contains("✅"));
        assert_eq!(text.trim(), "dark");
        Ok(())
    }

    #[test]
    fn test_json_ignores_view_mode() -> Result<()> {
        let renderer = ConsoleRenderer {
            json_mode: true,
            mode: ViewMode::Minimal,
            color: false,
        };
        let text = renderer.render_to_string(&theme_result())?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        assert_eq!(value["content"]["theme"], "dark");
        assert_eq!(value["badge"]["level"], "success");
        assert_eq!(value["suggestions"][0]["command"], "everest theme toggle");
        Ok(())
    }
}
