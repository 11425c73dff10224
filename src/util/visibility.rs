//! Shown/hidden state shared by banners and gallery items.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Whether an element is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn from_shown(shown: bool) -> Self {
        if shown { Self::Shown } else { Self::Hidden }
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }

    /// CSS `display` value for this state.
    #[must_use]
    pub fn display(self) -> &'static str {
        match self {
            Self::Shown => "block",
            Self::Hidden => "none",
        }
    }
}
