//! Owner-scoped list queries: search filtering, ordering, and the sort
//! toggles offered by the list view.

use super::{TodoItem, UserId};
use std::cmp::Ordering;

/// Ordering applied to a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Title ascending. Also the fallback for absent or unknown keys.
    #[default]
    TitleAsc,
    /// Title descending.
    TitleDesc,
    /// Due date ascending.
    DueDateAsc,
    /// Due date descending.
    DueDateDesc,
    /// Incomplete items first.
    StatusAsc,
    /// Complete items first.
    StatusDesc,
}

impl SortOrder {
    /// Resolves a sort key from the query string.
    ///
    /// Unrecognized keys fall back to [`SortOrder::TitleAsc`].
    #[must_use]
    pub fn from_key(key: Option<&str>) -> Self {
        match key.unwrap_or_default() {
            "title_desc" => Self::TitleDesc,
            "date" => Self::DueDateAsc,
            "date_desc" => Self::DueDateDesc,
            "status" => Self::StatusAsc,
            "status_desc" => Self::StatusDesc,
            _ => Self::TitleAsc,
        }
    }

    /// Returns the canonical query-string key.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::TitleAsc => "title",
            Self::TitleDesc => "title_desc",
            Self::DueDateAsc => "date",
            Self::DueDateDesc => "date_desc",
            Self::StatusAsc => "status",
            Self::StatusDesc => "status_desc",
        }
    }

    /// Compares two items under this order, breaking ties by identifier.
    #[must_use]
    pub fn compare(self, left: &TodoItem, right: &TodoItem) -> Ordering {
        let primary = match self {
            Self::TitleAsc => left.title().as_str().cmp(right.title().as_str()),
            Self::TitleDesc => right.title().as_str().cmp(left.title().as_str()),
            Self::DueDateAsc => left.due_date().cmp(&right.due_date()),
            Self::DueDateDesc => right.due_date().cmp(&left.due_date()),
            Self::StatusAsc => left.is_done().cmp(&right.is_done()),
            Self::StatusDesc => right.is_done().cmp(&left.is_done()),
        };
        primary.then_with(|| left.id().cmp(&right.id()))
    }
}

/// Next-state sort keys for each sortable column of the list view.
///
/// Derived only from the current key; clicking a column flips its
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortToggles {
    /// Key linked from the title column header.
    pub title: &'static str,
    /// Key linked from the due date column header.
    pub date: &'static str,
    /// Key linked from the status column header.
    pub status: &'static str,
}

impl SortToggles {
    /// Computes the toggles for the current sort key.
    #[must_use]
    pub fn for_key(current: Option<&str>) -> Self {
        let key = current.unwrap_or_default();
        Self {
            title: if SortOrder::from_key(current) == SortOrder::TitleAsc {
                "title_desc"
            } else {
                ""
            },
            date: if key == "date" { "date_desc" } else { "date" },
            status: if key == "status" {
                "status_desc"
            } else {
                "status"
            },
        }
    }
}

/// Non-empty substring matched against titles and descriptions.
///
/// Matching is case-sensitive and literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Builds a search term from the query string; empty input means no
    /// filtering.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.filter(|value| !value.is_empty())
            .map(|value| Self(value.to_owned()))
    }

    /// Returns the term as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the item's title or description contains the term.
    #[must_use]
    pub fn matches(&self, item: &TodoItem) -> bool {
        item.title().as_str().contains(self.as_str())
            || item
                .description()
                .is_some_and(|description| description.as_str().contains(self.as_str()))
    }

    /// Returns a `LIKE` pattern matching the term literally anywhere in a
    /// value, escaping wildcards with backslashes.
    #[must_use]
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for ch in self.0.chars() {
            if matches!(ch, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}

/// List query restricted to one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    owner_id: UserId,
    search: Option<SearchTerm>,
    sort: SortOrder,
}

impl ItemQuery {
    /// Creates an unfiltered, title-ordered query for `owner_id`.
    #[must_use]
    pub fn for_owner(owner_id: UserId) -> Self {
        Self {
            owner_id,
            search: None,
            sort: SortOrder::default(),
        }
    }

    /// Restricts results to items matching `search`.
    #[must_use]
    pub fn with_search(mut self, search: Option<SearchTerm>) -> Self {
        self.search = search;
        self
    }

    /// Sets the result ordering.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Returns the owner the query is scoped to.
    #[must_use]
    pub const fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the search term, if any.
    #[must_use]
    pub const fn search(&self) -> Option<&SearchTerm> {
        self.search.as_ref()
    }

    /// Returns the ordering.
    #[must_use]
    pub const fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Returns whether `item` belongs in this query's results.
    #[must_use]
    pub fn admits(&self, item: &TodoItem) -> bool {
        item.owner_id() == &self.owner_id
            && self.search.as_ref().is_none_or(|term| term.matches(item))
    }

    /// Filters and orders `items` in memory.
    #[must_use]
    pub fn apply<'a>(&self, items: impl IntoIterator<Item = &'a TodoItem>) -> Vec<TodoItem> {
        let mut selected: Vec<TodoItem> = items
            .into_iter()
            .filter(|item| self.admits(item))
            .cloned()
            .collect();
        selected.sort_by(|left, right| self.sort.compare(left, right));
        selected
    }
}
