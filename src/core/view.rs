// SentryView - core/view.rs
//
// The log table controller: owns the loaded collection, the active
// search term, and the current page, and derives the filtered and
// paginated view on each state change.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::LogEntry;
use crate::util::constants::PAGE_SIZE;

/// Filter entries by a case-insensitive substring search across every
/// field's string value, returning indices of matching entries.
///
/// A term that is empty after trimming matches everything. Returning
/// indices into the original slice avoids copying entries and keeps the
/// collection's source order in the view.
pub fn filter_entries(entries: &[LogEntry], term: &str) -> Vec<usize> {
    if term.trim().is_empty() {
        return (0..entries.len()).collect();
    }

    let term_lower = term.to_lowercase();

    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            entry
                .field_values()
                .iter()
                .any(|value| value.to_lowercase().contains(&term_lower))
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Owned view state for the detailed logs table.
///
/// The collection is only ever replaced wholesale; entries are never
/// mutated or removed individually. The current page is 1-based and is
/// reset to 1 whenever the collection or the search term changes, and
/// clamped into `[1, page_count()]` otherwise.
#[derive(Debug)]
pub struct LogTable {
    entries: Vec<LogEntry>,
    search_term: String,
    current_page: usize,
    filtered: Vec<usize>,
}

impl LogTable {
    /// Create an empty table (no entries, no search, page 1).
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            filtered: Vec::new(),
        }
    }

    /// Create a table populated from a starting collection.
    pub fn with_entries(entries: Vec<LogEntry>) -> Self {
        let mut table = Self::new();
        table.replace(entries);
        table
    }

    /// Replace the whole collection with a newly ingested one.
    ///
    /// The search term is kept and the filtered view is recomputed from
    /// the new collection; the page resets to 1.
    pub fn replace(&mut self, entries: Vec<LogEntry>) {
        self.entries = entries;
        self.filtered = filter_entries(&self.entries, &self.search_term);
        self.current_page = 1;
    }

    /// Store `term` verbatim, recompute the filtered view, reset to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.filtered = filter_entries(&self.entries, &self.search_term);
        self.current_page = 1;
    }

    /// Move to `page`, clamped into `[1, page_count()]`.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.page_count());
    }

    /// Number of pages in the filtered view. Never 0: an empty view still
    /// has one (empty) page so the display shows a "no logs" state rather
    /// than a zero-page state.
    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// The entries of the current page, in source order. Length is at
    /// most `PAGE_SIZE`; an empty result is valid, not an error.
    pub fn current_page_entries(&self) -> Vec<&LogEntry> {
        let start = (self.current_page - 1) * PAGE_SIZE;
        self.filtered
            .iter()
            .skip(start)
            .take(PAGE_SIZE)
            .filter_map(|&idx| self.entries.get(idx))
            .collect()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Number of entries matching the current search.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Number of entries in the whole collection.
    pub fn total_len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for LogTable {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Label;

    fn make_entry(process: &str, label: Label) -> LogEntry {
        LogEntry {
            timestamp: "2023-07-12 14:30:45".to_string(),
            action: "File created".to_string(),
            file_extension: ".exe".to_string(),
            process: process.to_string(),
            parent_process: "System".to_string(),
            label,
        }
    }

    fn numbered_entries(n: usize) -> Vec<LogEntry> {
        (0..n)
            .map(|i| make_entry(&format!("proc{i:03}.exe"), Label::Benign))
            .collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let entries = vec![
            make_entry("explorer.exe", Label::Alert),
            make_entry("chrome.exe", Label::Benign),
        ];

        let mut table = LogTable::with_entries(entries);
        table.set_search_term("explorer");
        assert_eq!(table.filtered_len(), 1);
        assert_eq!(table.current_page_entries()[0].process, "explorer.exe");

        let lower = table.current_page_entries()[0].clone();
        table.set_search_term("EXPLORER");
        assert_eq!(table.filtered_len(), 1);
        assert_eq!(*table.current_page_entries()[0], lower);
    }

    #[test]
    fn test_filter_matches_any_field_including_label() {
        let mut alert = make_entry("explorer.exe", Label::Alert);
        let mut benign = make_entry("chrome.exe", Label::Benign);
        // Keep the digit "1" out of every other field so a "1" search can
        // only hit the label's canonical string value.
        alert.timestamp = "2023-07-22 23:30:45".to_string();
        benign.timestamp = "2023-07-22 23:35:22".to_string();
        let entries = vec![alert, benign];

        assert_eq!(filter_entries(&entries, "1"), vec![0]);
        assert_eq!(filter_entries(&entries, "0"), vec![0, 1]);

        // Parent process participates too.
        assert_eq!(filter_entries(&entries, "system"), vec![0, 1]);
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let entries = numbered_entries(3);
        assert_eq!(filter_entries(&entries, ""), vec![0, 1, 2]);
        assert_eq!(filter_entries(&entries, "   "), vec![0, 1, 2]);
    }

    #[test]
    fn test_search_term_stored_verbatim() {
        let mut table = LogTable::with_entries(numbered_entries(2));
        table.set_search_term("  proc0  ");
        assert_eq!(table.search_term(), "  proc0  ");
    }

    #[test]
    fn test_refilter_is_idempotent() {
        let mut table = LogTable::with_entries(numbered_entries(25));
        table.set_search_term("proc01");
        let first: Vec<String> = table
            .current_page_entries()
            .iter()
            .map(|e| e.process.clone())
            .collect();
        let count = table.filtered_len();

        table.set_search_term("proc01");
        let second: Vec<String> = table
            .current_page_entries()
            .iter()
            .map(|e| e.process.clone())
            .collect();
        assert_eq!(first, second);
        assert_eq!(count, table.filtered_len());
    }

    #[test]
    fn test_page_resets_on_search_and_replace() {
        let mut table = LogTable::with_entries(numbered_entries(45));
        table.set_page(4);
        assert_eq!(table.current_page(), 4);

        table.set_search_term("proc");
        assert_eq!(table.current_page(), 1);

        table.set_page(3);
        table.replace(numbered_entries(12));
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn test_replace_refilters_against_new_collection() {
        let mut table = LogTable::with_entries(vec![
            make_entry("explorer.exe", Label::Alert),
            make_entry("chrome.exe", Label::Benign),
        ]);
        table.set_search_term("chrome");
        assert_eq!(table.filtered_len(), 1);

        // The new collection has two chrome entries; the kept term must
        // apply to it, not to the old collection.
        table.replace(vec![
            make_entry("chrome.exe", Label::Benign),
            make_entry("chrome_helper.exe", Label::Benign),
            make_entry("svchost.exe", Label::Benign),
        ]);
        assert_eq!(table.search_term(), "chrome");
        assert_eq!(table.filtered_len(), 2);
    }

    #[test]
    fn test_pagination_covers_filtered_view_exactly() {
        let entries = numbered_entries(25);
        let expected: Vec<String> = entries.iter().map(|e| e.process.clone()).collect();

        let mut table = LogTable::with_entries(entries);
        assert_eq!(table.page_count(), 3);

        let mut collected = Vec::new();
        for page in 1..=table.page_count() {
            table.set_page(page);
            let entries = table.current_page_entries();
            if page < table.page_count() {
                assert_eq!(entries.len(), PAGE_SIZE, "non-final page must be full");
            }
            collected.extend(entries.iter().map(|e| e.process.clone()));
        }

        assert_eq!(collected, expected, "no duplicates, omissions, or reordering");
    }

    #[test]
    fn test_exact_multiple_of_page_size_has_no_empty_tail_page() {
        let table = LogTable::with_entries(numbered_entries(20));
        assert_eq!(table.page_count(), 2);
    }

    #[test]
    fn test_set_page_clamps_to_valid_range() {
        let mut table = LogTable::with_entries(numbered_entries(25));
        table.set_page(0);
        assert_eq!(table.current_page(), 1);
        table.set_page(99);
        assert_eq!(table.current_page(), 3);
    }

    #[test]
    fn test_empty_view_has_one_empty_page() {
        let mut table = LogTable::new();
        assert_eq!(table.page_count(), 1);
        assert!(table.current_page_entries().is_empty());

        // A search matching nothing behaves the same way.
        table.replace(numbered_entries(5));
        table.set_search_term("no such process");
        assert_eq!(table.filtered_len(), 0);
        assert_eq!(table.page_count(), 1);
        assert!(table.current_page_entries().is_empty());
    }
}
