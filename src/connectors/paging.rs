use serde::Serialize;

/// Largest page a vendor is asked for in one call
pub const MAX_PAGE_SIZE: u32 = 1000;

/// How a vendor expects the requested page on the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStyle {
    /// `offset` and `limit`, limit capped at [`MAX_PAGE_SIZE`]
    OffsetLimit,
    /// 1-based `page` and `per_page` (GitHub); `per_page` capped at `max_per_page`
    PageNumber { max_per_page: u32 },
}

impl PageStyle {
    pub fn params(self, page_number: Option<u32>, page_size: Option<u32>) -> Vec<(String, String)> {
        match self {
            PageStyle::OffsetLimit => PageQuery::from_page(page_number, page_size).to_params(),
            PageStyle::PageNumber { max_per_page } => {
                let page = match (page_number, page_size) {
                    (Some(number), Some(_)) => number.max(1),
                    _ => 1,
                };
                let mut params = vec![("page".to_string(), page.to_string())];
                if let Some(size) = page_size {
                    params.push((
                        "per_page".to_string(),
                        size.clamp(1, max_per_page).to_string(),
                    ));
                }
                params
            }
        }
    }
}

/// Caller-supplied container for a single list call.
///
/// `page_number` (1-based) and `page_size` are read on the way in; `items`,
/// `count` and `page_token` are overwritten on success. A failed call leaves
/// the container untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResults<T> {
    pub items: Vec<T>,
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl<T> Default for PagedResults<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            page_number: None,
            page_size: None,
            page_token: None,
        }
    }
}

impl<T> PagedResults<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number: Some(page_number),
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    /// Query parameters selecting the requested page in the vendor's style
    pub fn query(&self, style: PageStyle) -> Vec<(String, String)> {
        style.params(self.page_number, self.page_size)
    }

    /// Replace the output fields in one step
    pub fn fill(&mut self, items: Vec<T>, count: u64, page_token: Option<String>) {
        self.items = items;
        self.count = count;
        self.page_token = page_token;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub offset: u64,
    /// `None` leaves the vendor's default page size in effect
    pub limit: Option<u32>,
}

impl PageQuery {
    pub fn from_page(page_number: Option<u32>, page_size: Option<u32>) -> Self {
        let offset = match (page_number, page_size) {
            (Some(number), Some(size)) => u64::from(number.saturating_sub(1)) * u64::from(size),
            _ => 0,
        };
        Self {
            offset,
            limit: page_size.map(|size| size.clamp(1, MAX_PAGE_SIZE)),
        }
    }

    pub fn to_params(self) -> Vec<(String, String)> {
        let mut params = vec![("offset".to_string(), self.offset.to_string())];
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}
