//! Relay cursor connections over an in-memory list
//!
//! Implements the array-connection algorithm from the relay cursor
//! connections convention: every item sits at a stable ordinal offset, cursors
//! are opaque encodings of that offset, and `after`/`before` bound the window
//! before `first`/`last` truncate it.
//!
//! Callers must hand in items in a deterministic order; the offsets are only
//! meaningful if the same store state always produces the same sequence.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use crate::error::{Result, WebcigError};

const CURSOR_PREFIX: &str = "arrayconnection:";

/// Pagination arguments accepted by a connection field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionArgs {
    /// Take at most this many items from the front of the window
    pub first: Option<i32>,

    /// Only items strictly after this cursor
    pub after: Option<String>,

    /// Take at most this many items from the back of the window
    pub last: Option<i32>,

    /// Only items strictly before this cursor
    pub before: Option<String>,
}

impl ConnectionArgs {
    /// Forward pagination
    pub fn forward(first: i32, after: Option<String>) -> Self {
        Self {
            first: Some(first),
            after,
            ..Self::default()
        }
    }

    /// Backward pagination
    pub fn backward(last: i32, before: Option<String>) -> Self {
        Self {
            last: Some(last),
            before,
            ..Self::default()
        }
    }
}

/// One item of a connection with its cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<T> {
    /// The item
    pub node: T,

    /// Opaque position of the item
    pub cursor: String,
}

/// Paging metadata for a connection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// More items exist past the window; only computed for `first`
    pub has_next_page: bool,

    /// More items exist before the window; only computed for `last`
    pub has_previous_page: bool,

    /// Cursor of the first edge
    pub start_cursor: Option<String>,

    /// Cursor of the last edge
    pub end_cursor: Option<String>,
}

/// A window of items plus paging metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection<T> {
    /// Edges in list order
    pub edges: Vec<Edge<T>>,

    /// Paging metadata
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    /// Convert every node, keeping cursors and page info.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Connection<U> {
        Connection {
            edges: self
                .edges
                .into_iter()
                .map(|edge| Edge {
                    node: f(edge.node),
                    cursor: edge.cursor,
                })
                .collect(),
            page_info: self.page_info,
        }
    }
}

/// Cursor for the item at `offset`
pub fn cursor_for_offset(offset: usize) -> String {
    STANDARD.encode(format!("{CURSOR_PREFIX}{offset}"))
}

/// Recover the offset encoded in a cursor
pub fn offset_from_cursor(cursor: &str) -> Result<usize> {
    let invalid = || WebcigError::invalid_connection_args(format!("malformed cursor {cursor:?}"));

    let bytes = STANDARD.decode(cursor).map_err(|_| invalid())?;
    let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
    raw.strip_prefix(CURSOR_PREFIX)
        .and_then(|offset| offset.parse::<usize>().ok())
        .ok_or_else(invalid)
}

fn non_negative(name: &str, value: Option<i32>) -> Result<Option<usize>> {
    value
        .map(|n| {
            usize::try_from(n).map_err(|_| {
                WebcigError::invalid_connection_args(format!(
                    "`{name}` must be non-negative, got {n}"
                ))
            })
        })
        .transpose()
}

/// Slice `items` according to `args`.
///
/// `items` must already be in the order the connection exposes. Cursors
/// pointing past the end of the list are clamped to its length.
pub fn connection_from_slice<T>(items: Vec<T>, args: &ConnectionArgs) -> Result<Connection<T>> {
    let first = non_negative("first", args.first)?;
    let last = non_negative("last", args.last)?;

    let len = items.len();
    let after_offset = args.after.as_deref().map(offset_from_cursor).transpose()?;
    let before_offset = args.before.as_deref().map(offset_from_cursor).transpose()?;

    let lower_bound = after_offset.map_or(0, |after| after.saturating_add(1));
    let upper_bound = before_offset.unwrap_or(len);

    let mut start = lower_bound;
    let mut end = upper_bound.min(len);

    if let Some(first) = first {
        end = end.min(start.saturating_add(first));
    }
    if let Some(last) = last {
        start = start.max(end.saturating_sub(last));
    }

    let start_idx = start.min(len);
    let end_idx = end.max(start_idx).min(len);

    let edges: Vec<Edge<T>> = items
        .into_iter()
        .enumerate()
        .skip(start_idx)
        .take(end_idx - start_idx)
        .map(|(offset, node)| Edge {
            node,
            cursor: cursor_for_offset(offset),
        })
        .collect();

    let page_info = PageInfo {
        has_next_page: first.is_some() && end < upper_bound,
        has_previous_page: last.is_some() && start > lower_bound,
        start_cursor: edges.first().map(|edge| edge.cursor.clone()),
        end_cursor: edges.last().map(|edge| edge.cursor.clone()),
    };

    Ok(Connection { edges, page_info })
}
