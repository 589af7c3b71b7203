//! Icon sets for Nerd Fonts, Unicode, and ASCII fallback.
//!
//! ASCII mode is also selected automatically when `NO_COLOR` is set.

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font icons (default, richest experience).
    #[default]
    Nerd,
    /// Standard Unicode symbols (wide compatibility).
    Unicode,
    /// ASCII-only fallback (maximum compatibility, also used with `NO_COLOR`).
    Ascii,
}

impl IconMode {
    /// Pick a mode from the environment, respecting `NO_COLOR`.
    pub fn detect() -> Self {
        if std::env::var("NO_COLOR").is_ok() {
            Self::Ascii
        } else {
            Self::Nerd
        }
    }
}

/// Icon set based on configured mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    // === Selection and track markers ===

    pub fn selected(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0142}", // 󰅂
            IconMode::Unicode => "\u{25b8}", // ▸
            IconMode::Ascii => ">",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "\u{25b4}", // ▴
            IconMode::Ascii => "^",
        }
    }

    pub fn more_left(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "\u{25c2}", // ◂
            IconMode::Ascii => "<",
        }
    }

    pub fn more_right(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "\u{25b8}", // ▸
            IconMode::Ascii => ">",
        }
    }

    // === Notification icons ===

    pub fn info(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f02fc}", // 󰋼
            IconMode::Unicode => "\u{2139}", // ℹ
            IconMode::Ascii => "[i]",
        }
    }

    pub fn warning(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0026}", // 󰀦
            IconMode::Unicode => "\u{26a0}", // ⚠
            IconMode::Ascii => "[!]",
        }
    }
}
