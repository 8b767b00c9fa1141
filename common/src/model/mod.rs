//! Records exchanged with the REST backend, plus the small presentation
//! vocabulary (badge categories) shared by every view.

pub mod reservation;
pub mod user;

/// Visual category of a badge. Views map each category to a fixed set of
/// stylesheet classes; the mapping from domain values to categories lives
/// next to the domain types so it stays total and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayCategory {
    Warning,
    Info,
    Success,
    Danger,
    Accent,
    Neutral,
}

impl DisplayCategory {
    pub fn css_class(self) -> &'static str {
        match self {
            DisplayCategory::Warning => "bg-yellow-100 text-yellow-800",
            DisplayCategory::Info => "bg-blue-100 text-blue-800",
            DisplayCategory::Success => "bg-green-100 text-green-800",
            DisplayCategory::Danger => "bg-red-100 text-red-800",
            DisplayCategory::Accent => "bg-purple-100 text-purple-800",
            DisplayCategory::Neutral => "bg-gray-100 text-gray-800",
        }
    }
}
