//! Home-page list selection.
//!
//! The index page accepts optional `letter`, `category` and `streak`
//! selectors. At most one drives the listing: category beats streak, streak
//! beats letter, and with nothing supplied the catalogue opens on `a`.

/// Letter shown when no selector is supplied.
pub const DEFAULT_LETTER: &str = "a";

/// Raw selectors as supplied by the caller. Blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSelection {
    letter: Option<String>,
    category: Option<String>,
    streak: Option<String>,
}

impl ListSelection {
    /// Capture selectors, discarding blank ones.
    pub fn new(letter: Option<String>, category: Option<String>, streak: Option<String>) -> Self {
        Self {
            letter: non_blank(letter),
            category: non_blank(category),
            streak: non_blank(streak),
        }
    }

    /// Select by first letter only.
    pub fn letter(letter: impl Into<String>) -> Self {
        Self::new(Some(letter.into()), None, None)
    }

    /// Select by category slug only.
    pub fn category(slug: impl Into<String>) -> Self {
        Self::new(None, Some(slug.into()), None)
    }

    /// Select by streak slug only.
    pub fn streak(slug: impl Into<String>) -> Self {
        Self::new(None, None, Some(slug.into()))
    }

    /// Pick the single active filter.
    ///
    /// # Examples
    /// ```
    /// use mineral_catalog::domain::{ListFilter, ListSelection};
    ///
    /// let selection = ListSelection::new(Some("b".into()), Some("oxide".into()), None);
    /// assert_eq!(selection.resolve(), ListFilter::Category("oxide".into()));
    /// assert_eq!(ListSelection::default().resolve(), ListFilter::Letter("a".into()));
    /// ```
    #[must_use]
    pub fn resolve(&self) -> ListFilter {
        if let Some(category) = &self.category {
            return ListFilter::Category(category.clone());
        }
        if let Some(streak) = &self.streak {
            return ListFilter::Streak(streak.clone());
        }
        let letter = self.letter.as_deref().unwrap_or(DEFAULT_LETTER);
        ListFilter::Letter(letter.to_lowercase())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

/// The filter that produces a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    /// Names starting with this letter, ignoring case.
    Letter(String),
    /// Category slug.
    Category(String),
    /// Streak slug.
    Streak(String),
}

impl ListFilter {
    /// Selected letter, when this filter is a letter filter.
    #[must_use]
    pub fn selected_letter(&self) -> Option<&str> {
        match self {
            Self::Letter(letter) => Some(letter),
            _ => None,
        }
    }

    /// Selected category, when this filter is a category filter.
    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        match self {
            Self::Category(slug) => Some(slug),
            _ => None,
        }
    }

    /// Selected streak, when this filter is a streak filter.
    #[must_use]
    pub fn selected_streak(&self) -> Option<&str> {
        match self {
            Self::Streak(slug) => Some(slug),
            _ => None,
        }
    }
}
