// crates/shared-kernel/src/infrastructure/pagination.rs

use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Pagination 1-based (page 1 = première page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub const DEFAULT_SIZE: u32 = 20;

    pub fn try_new(page: Option<u32>, size: Option<u32>, max_size: u32) -> Result<Self> {
        let page = page.unwrap_or(1);
        let size = size.unwrap_or(Self::DEFAULT_SIZE.min(max_size));

        if page == 0 {
            return Err(DomainError::validation("page", "Page numbers start at 1"));
        }
        if size == 0 || size > max_size {
            return Err(DomainError::validation(
                "size",
                format!("Page size must be between 1 and {}", max_size),
            ));
        }
        Ok(Self { page, size })
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: Self::DEFAULT_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_pages: u64,
    /// Nombre de résultats annoncé par la source (peut dépasser les éléments réellement hydratés)
    pub total_hits: u64,
    pub number_of_elements: usize,
}

impl<T> PageResponse<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_hits: u64) -> Self {
        let size = u64::from(request.size.max(1));
        Self {
            number_of_elements: items.len(),
            items,
            page: request.page,
            size: request.size,
            total_pages: total_hits.div_ceil(size),
            total_hits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_defaults_and_offset() {
        let req = PageRequest::try_new(None, None, 100).unwrap();
        assert_eq!(req, PageRequest { page: 1, size: 20 });
        assert_eq!(req.offset(), 0);

        let third = PageRequest::try_new(Some(3), Some(10), 100).unwrap();
        assert_eq!(third.offset(), 20);
    }

    #[test]
    fn test_page_request_rejects_zero_and_oversized() {
        assert!(PageRequest::try_new(Some(0), None, 100).is_err());
        assert!(PageRequest::try_new(None, Some(0), 100).is_err());
        assert!(PageRequest::try_new(None, Some(101), 100).is_err());
    }

    #[test]
    fn test_page_response_total_pages_rounds_up() {
        let req = PageRequest { page: 2, size: 10 };
        let page = PageResponse::new(vec![1, 2, 3], req, 21);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_hits, 21);
        assert_eq!(page.number_of_elements, 3);

        let empty: PageResponse<u8> = PageResponse::new(vec![], req, 0);
        assert_eq!(empty.total_pages, 0);
    }
}
