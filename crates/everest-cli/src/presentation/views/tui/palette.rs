use everest_core::Theme;
use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(74, 144, 226);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub heading: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub warning: Color,
}

impl Palette {
    pub const fn light() -> Self {
        Self {
            background: Color::Rgb(240, 244, 248),
            surface: Color::Rgb(255, 255, 255),
            heading: Color::Rgb(26, 35, 50),
            text: Color::Rgb(44, 62, 80),
            muted: Color::Rgb(84, 110, 122),
            accent: ACCENT,
            accent_soft: Color::Rgb(92, 164, 216),
            warning: Color::Rgb(192, 108, 0),
        }
    }

    pub const fn dark() -> Self {
        Self {
            background: Color::Rgb(15, 20, 25),
            surface: Color::Rgb(26, 35, 50),
            heading: Color::Rgb(255, 255, 255),
            text: Color::Rgb(197, 211, 226),
            muted: Color::Rgb(158, 179, 200),
            accent: ACCENT,
            accent_soft: Color::Rgb(123, 179, 224),
            warning: Color::Rgb(240, 180, 60),
        }
    }

    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.heading).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
