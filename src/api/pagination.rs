//! Page-number to record-offset conversion for the shipment list.
//!
//! Callers count pages from 1. The TMS wants a 1-based record offset, so
//! page `n` begins at record `(n - 1) * page_size + 1`.

use serde::Serialize;

/// Records per page requested from the TMS
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Convert a 1-based page number to a 1-based record offset.
///
/// Returns `None` for page 0, which means "let the TMS pick its default
/// window" and sends no pagination parameters at all.
pub fn to_offset(page: u32, page_size: u32) -> Option<u32> {
    if page == 0 {
        return None;
    }
    Some((page - 1).saturating_mul(page_size).saturating_add(1))
}

/// Query parameters for the shipment list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub start: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl PageQuery {
    /// Query for a page number with the default page size
    pub fn for_page(page: u32) -> Option<Self> {
        Self::with_size(page, DEFAULT_PAGE_SIZE)
    }

    pub fn with_size(page: u32, page_size: u32) -> Option<Self> {
        to_offset(page, page_size).map(|start| Self { start, page_size })
    }
}
