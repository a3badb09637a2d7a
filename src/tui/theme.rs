use ratatui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn load(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(30, 30, 30),
            foreground: Color::Rgb(220, 220, 220),
            accent: Color::Rgb(100, 149, 237),
            success: Color::Rgb(95, 135, 95),
            warning: Color::Rgb(218, 165, 32),
            error: Color::Rgb(205, 92, 92),
            muted: Color::Rgb(128, 128, 128),
            selection_bg: Color::Rgb(70, 70, 70),
            selection_fg: Color::Rgb(255, 255, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(50, 50, 50),
            accent: Color::Rgb(65, 105, 225),
            success: Color::Rgb(34, 139, 34),
            warning: Color::Rgb(218, 165, 32),
            error: Color::Rgb(220, 20, 60),
            muted: Color::Rgb(128, 128, 128),
            selection_bg: Color::Rgb(200, 220, 255),
            selection_fg: Color::Rgb(50, 50, 50),
        }
    }

    pub fn style_default(&self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }

    pub fn style_selected(&self) -> Style {
        Style::default().bg(self.selection_bg).fg(self.selection_fg)
    }

    pub fn style_accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn style_success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn style_warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn style_error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn style_muted(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
