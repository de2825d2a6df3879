/// Paginated response wrapper
#[derive(Debug)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = ((total as f64) / (limit as f64)).ceil() as u32;
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Map items into another type, keeping the page metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

/// Parse a raw `page` query value. Non-numeric or zero values fall back
/// to page 1 instead of erroring, matching the listing endpoints'
/// lenient pagination contract.
pub fn page_or_first(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}

/// Parse a raw page-size override, clamped to `1..=max`.
/// Absent or unparseable values fall back to `default`.
pub fn page_size_or(raw: Option<&str>, default: u32, max: u32) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .map(|n| n.clamp(1, max))
        .unwrap_or(default)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_total_pages() {
        let r = PaginatedResult::new(vec![1, 2, 3], 7, 1, 3);
        assert_eq!(r.total_pages, 3);
        assert!(r.has_next());
    }

    #[test]
    fn last_page_has_no_next() {
        let r = PaginatedResult::<i32>::new(vec![], 7, 3, 3);
        assert!(!r.has_next());
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let r = PaginatedResult::<i32>::new(vec![], 0, 1, 10);
        assert_eq!(r.total_pages, 0);
        assert!(!r.has_next());
    }

    #[test]
    fn page_or_first_accepts_valid_numbers() {
        assert_eq!(page_or_first(Some("2")), 2);
        assert_eq!(page_or_first(Some(" 10 ")), 10);
    }

    #[test]
    fn page_or_first_falls_back_on_garbage() {
        assert_eq!(page_or_first(None), 1);
        assert_eq!(page_or_first(Some("abc")), 1);
        assert_eq!(page_or_first(Some("0")), 1);
        assert_eq!(page_or_first(Some("-3")), 1);
    }

    #[test]
    fn page_size_clamps_to_max() {
        assert_eq!(page_size_or(Some("500"), 10, 100), 100);
        assert_eq!(page_size_or(Some("25"), 10, 100), 25);
        assert_eq!(page_size_or(Some("0"), 10, 100), 1);
        assert_eq!(page_size_or(None, 10, 100), 10);
        assert_eq!(page_size_or(Some("nope"), 10, 100), 10);
    }
}
