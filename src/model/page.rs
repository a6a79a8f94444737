//! Paged-list envelope returned by every list endpoint

use serde::{Deserialize, Serialize};

/// One page of a server-side list. The client holds only the current page
/// in memory; `current_page` and `total_pages` come from the response and
/// are never computed locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total_elements: Option<u64>,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether a "next page" control should be enabled. False on the last
    /// page (`current_page >= total_pages - 1`) and for empty result sets.
    pub fn has_next(&self) -> bool {
        self.total_pages > 0 && self.current_page + 1 < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 0
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            current_page: 0,
            total_pages: 0,
            page_size: None,
            total_elements: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(current: u32, total: u32) -> Page<u32> {
        Page {
            content: vec![1],
            current_page: current,
            total_pages: total,
            ..Page::default()
        }
    }

    #[test]
    fn next_is_disabled_on_last_page() {
        assert!(page(0, 2).has_next());
        assert!(!page(1, 2).has_next());
        // one past the end must not underflow or enable the control
        assert!(!page(2, 2).has_next());
        assert!(!page(0, 0).has_next());
    }

    #[test]
    fn prev_is_disabled_on_first_page() {
        assert!(!page(0, 3).has_prev());
        assert!(page(1, 3).has_prev());
    }

    #[test]
    fn deserializes_server_envelope() {
        let json = r#"{"content":[1,2,3],"currentPage":1,"totalPages":4}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 4);
    }
}
