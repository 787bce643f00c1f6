use serde::{Deserialize, Serialize};

use crate::primitives::edge::EdgeId;

/// A maximal contiguous run of trace points resolved to one edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSegment {
    pub edge: EdgeId,
    /// Index of the first match result this segment covers, when any does.
    pub first_match_idx: Option<usize>,
    /// Index of the last match result this segment covers, when any does.
    pub last_match_idx: Option<usize>,
    /// No connected path exists between this segment and the next.
    pub discontinuity: bool,
}

impl EdgeSegment {
    pub fn new(edge: EdgeId, first_match_idx: Option<usize>, last_match_idx: Option<usize>) -> Self {
        EdgeSegment {
            edge,
            first_match_idx,
            last_match_idx,
            discontinuity: false,
        }
    }

    pub fn disconnected(mut self) -> Self {
        self.discontinuity = true;
        self
    }
}
