//! Page arithmetic over a catalog result.

use crate::{catalog_record::CatalogResult, search_request::SearchOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_size: u64,
    /// Zero based.
    pub current_page: u64,
    pub page_count: u64,
    pub records_matched: u64,
}

impl Pagination {
    pub fn from_result(result: &CatalogResult, options: &SearchOptions) -> Self {
        let page_size = options.max_records();
        let records_matched = result.number_of_records_matched;
        Self {
            page_size,
            current_page: (options.start_position() - 1) / page_size,
            page_count: records_matched.div_ceil(page_size),
            records_matched,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.page_count
    }

    /// Options selecting `page`, keeping the text and page size of `options`.
    pub fn options_for_page(&self, options: &SearchOptions, page: u64) -> SearchOptions {
        SearchOptions {
            text: options.text.clone(),
            start_position: Some(page * self.page_size + 1),
            max_records: Some(self.page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(matched: u64) -> CatalogResult {
        CatalogResult { number_of_records_matched: matched, ..Default::default() }
    }

    #[test]
    fn first_page_of_many() {
        let pagination = Pagination::from_result(&result(10), &SearchOptions::default());
        assert_eq!(pagination.page_size, 4);
        assert_eq!(pagination.current_page, 0);
        assert_eq!(pagination.page_count, 3);
        assert!(!pagination.has_previous());
        assert!(pagination.has_next());
    }

    #[test]
    fn last_page() {
        let options = SearchOptions::default().with_start_position(9);
        let pagination = Pagination::from_result(&result(10), &options);
        assert_eq!(pagination.current_page, 2);
        assert!(pagination.has_previous());
        assert!(!pagination.has_next());
    }

    #[test]
    fn empty_result_has_no_pages() {
        let pagination = Pagination::from_result(&result(0), &SearchOptions::default());
        assert_eq!(pagination.page_count, 0);
        assert!(!pagination.has_next());
    }

    #[test]
    fn page_options_keep_text() {
        let options = SearchOptions::default().with_text("lakes");
        let pagination = Pagination::from_result(&result(10), &options);
        let next = pagination.options_for_page(&options, 1);
        assert_eq!(next.text.as_deref(), Some("lakes"));
        assert_eq!(next.start_position, Some(5));
        assert_eq!(next.max_records, Some(4));
    }
}
