use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one request issued through a [`RequestSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Latest-request-wins guard.
///
/// Every request takes a new id from [`RequestSequence::begin`]. When its result arrives,
/// [`RequestSequence::finish`] hands it back only if no newer request has begun since;
/// superseded results are dropped, the requests themselves are never aborted.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestId {
        RequestId(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_latest(&self, id: RequestId) -> bool {
        self.latest.load(Ordering::Acquire) == id.0
    }

    pub fn finish<T>(&self, id: RequestId, value: T) -> Option<T> {
        self.is_latest(id).then_some(value)
    }
}
