//! Pagination: the list-response envelope schema and the page cursor.

use serde::{Deserialize, Serialize};

use crate::schema::SchemaNode;
use crate::transform::convert_schema;
use crate::types::Direction;

/// Build the paginated envelope schema around an entity schema.
///
/// The envelope has exactly the fields `count`, `next`, `previous` and
/// `results`, with the entity schema converted to wire naming before it is
/// embedded in `results`. The envelope object stays open, so extra fields a
/// server adds to the wrapper pass validation untouched.
pub fn paginated_schema(entity: &SchemaNode) -> SchemaNode {
    SchemaNode::object([
        ("count", SchemaNode::number()),
        ("next", SchemaNode::nullable(SchemaNode::string())),
        ("previous", SchemaNode::nullable(SchemaNode::string())),
        (
            "results",
            SchemaNode::array(convert_schema(entity, Direction::ToWire)),
        ),
    ])
}

/// Position within a paginated collection.
///
/// Cursors are immutable by convention: advancing returns a new cursor and
/// leaves the receiver untouched, so concurrent holders of a prior cursor
/// are unaffected by one caller's page change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    /// Current page, 1-based.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Total item count reported by the collection.
    pub total_count: u64,
    /// Server-provided link to the next page, when any.
    pub next: Option<String>,
    /// Server-provided link to the previous page, when any.
    pub previous: Option<String>,
}

impl PageCursor {
    /// Create a cursor at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `page` is 0 or `page_size` is 0; both are 1-based by
    /// contract.
    pub fn new(page: u32, page_size: u32, total_count: u64) -> Self {
        assert!(page >= 1, "page is 1-based, got 0");
        assert!(page_size >= 1, "page_size must be positive, got 0");
        Self {
            page,
            page_size,
            total_count,
            next: None,
            previous: None,
        }
    }

    /// Number of pages in the collection; 0 when it is empty.
    pub fn total_pages(&self) -> u64 {
        if self.total_count == 0 {
            0
        } else {
            self.total_count.div_ceil(u64::from(self.page_size))
        }
    }

    /// True iff a later page exists.
    pub fn has_next_page(&self) -> bool {
        let total = self.total_pages();
        total != 0 && u64::from(self.page) != total
    }

    /// True iff an earlier page exists.
    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }

    /// A copy advanced to the next page; unchanged copy at the last page.
    pub fn with_next_page(&self) -> Self {
        let mut advanced = self.clone();
        if self.has_next_page() {
            advanced.page += 1;
        }
        advanced
    }

    /// A copy moved back one page; unchanged copy at the first page.
    pub fn with_prev_page(&self) -> Self {
        let mut moved = self.clone();
        if self.has_prev_page() {
            moved.page -= 1;
        }
        moved
    }
}
