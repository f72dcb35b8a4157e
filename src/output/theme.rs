//! Color themes for the HTML report.

use clap::ValueEnum;
use std::fmt;

/// Named report theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    #[default]
    Minimal,
    Modern,
    Classic,
}

/// CSS custom property values for a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
    pub neutral: &'static str,
    pub gradient_primary: &'static str,
    pub gradient_secondary: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Minimal, Theme::Modern, Theme::Classic];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Minimal => "minimal",
            Theme::Modern => "modern",
            Theme::Classic => "classic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Theme::Minimal => "Minimal - Clean, professional design with subtle gradients",
            Theme::Modern => "Modern - Contemporary design with green accents",
            Theme::Classic => "Classic - Traditional monochrome design with subtle purple accents",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Minimal => Palette {
                primary: "#2563eb",
                secondary: "#64748b",
                accent: "#3b82f6",
                success: "#10b981",
                warning: "#f59e0b",
                danger: "#ef4444",
                dark: "#1e293b",
                light: "#f8fafc",
                neutral: "#64748b",
                gradient_primary: "linear-gradient(135deg, #2563eb, #3b82f6)",
                gradient_secondary: "linear-gradient(135deg, #64748b, #94a3b8)",
            },
            Theme::Modern => Palette {
                primary: "#059669",
                secondary: "#374151",
                accent: "#10b981",
                success: "#059669",
                warning: "#d97706",
                danger: "#dc2626",
                dark: "#111827",
                light: "#f9fafb",
                neutral: "#6b7280",
                gradient_primary: "linear-gradient(135deg, #059669, #10b981)",
                gradient_secondary: "linear-gradient(135deg, #374151, #4b5563)",
            },
            Theme::Classic => Palette {
                primary: "#1f2937",
                secondary: "#4b5563",
                accent: "#6366f1",
                success: "#10b981",
                warning: "#f59e0b",
                danger: "#ef4444",
                dark: "#111827",
                light: "#ffffff",
                neutral: "#6b7280",
                gradient_primary: "linear-gradient(135deg, #1f2937, #374151)",
                gradient_secondary: "linear-gradient(135deg, #6366f1, #8b5cf6)",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
