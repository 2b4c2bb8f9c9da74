//! Page arithmetic for the post list.

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 50;

/// A clamped page request derived from raw query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Build a request from the raw `page` and `pageSize` query values.
    ///
    /// Only the leading integer of each value is considered. A missing,
    /// unparsable or zero value falls back to the default before clamping,
    /// so `pageSize=0` yields the default size rather than one.
    pub fn from_query(page: Option<&str>, page_size: Option<&str>) -> Self {
        let page = leading_int(page).unwrap_or(DEFAULT_PAGE as i64).max(1) as u64;
        let page_size = leading_int(page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE as i64)
            .clamp(1, MAX_PAGE_SIZE as i64) as u64;

        Self { page, page_size }
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// Parse an optional sign followed by digits, ignoring anything after them.
/// Zero is treated as absent.
fn leading_int(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    // Overlong inputs saturate rather than fail.
    let magnitude = rest[..digits_end].parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };

    (value != 0).then_some(value)
}

/// One page of results together with the navigation state around it.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            page_size: request.page_size,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_mul(self.page_size) < self.total
    }

    pub fn prev_page(&self) -> u64 {
        self.page.saturating_sub(1)
    }

    pub fn next_page(&self) -> u64 {
        self.page + 1
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.page_size.max(1))
    }
}
