//! Column Pagination
//!
//! Pure helpers deriving what one column renders from the filtered task list.

use std::ops::Range;

use crate::models::{Column, Task};

/// Filtered tasks in `column`, keeping list order
pub fn column_tasks(filtered: &[Task], column: Column) -> Vec<Task> {
    filtered.iter().filter(|task| task.column == column).cloned().collect()
}

/// ceil(count / page_size), never below one page
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Index range of 1-based `page`; empty when the page lies past the end
pub fn page_bounds(count: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = (page.max(1) - 1).saturating_mul(page_size).min(count);
    let end = start.saturating_add(page_size).min(count);
    start..end
}

/// Why a column body has nothing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// No filtered task sits in this column at all
    NoTasks,
    /// The column has tasks, just none on the current page
    NoResultsOnPage,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoTasks => "No tasks in this column",
            EmptyState::NoResultsOnPage => "No tasks found on this page",
        }
    }
}

/// What one column renders for its current page
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnPage {
    pub tasks: Vec<Task>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl ColumnPage {
    pub fn empty_state(&self) -> Option<EmptyState> {
        match (self.tasks.is_empty(), self.total_count) {
            (false, _) => None,
            (true, 0) => Some(EmptyState::NoTasks),
            (true, _) => Some(EmptyState::NoResultsOnPage),
        }
    }

    pub fn has_pager(&self) -> bool {
        self.total_pages > 1
    }

    pub fn caption(&self) -> String {
        format!(
            "Page {} of {} ({} total tasks)",
            self.page, self.total_pages, self.total_count
        )
    }
}

/// Slice one page out of a column's tasks
pub fn paginate(column_tasks: &[Task], page: usize, page_size: usize) -> ColumnPage {
    let count = column_tasks.len();
    ColumnPage {
        tasks: column_tasks[page_bounds(count, page, page_size)].to_vec(),
        page,
        total_pages: total_pages(count, page_size),
        total_count: count,
    }
}

/// Current page of one column.
///
/// The page drops back to 1 whenever the search term or the column's task
/// count differs from what was last observed, so a shrinking result set never
/// strands the column on an out-of-range page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
    seen: Option<(String, usize)>,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { page: 1, seen: None }
    }
}

impl PageCursor {
    pub fn page(&self) -> usize {
        self.page
    }

    /// Record the current (search term, column count); resets on change
    pub fn observe(&mut self, term: &str, count: usize) {
        let changed = match &self.seen {
            Some((seen_term, seen_count)) => seen_term != term || *seen_count != count,
            None => false,
        };
        if changed {
            self.page = 1;
        }
        self.seen = Some((term.to_string(), count));
    }

    /// Jump to `page`, clamped to 1..=total_pages
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }
}
