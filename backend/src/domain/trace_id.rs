//! Per-request correlation id shared by logs, error bodies and the
//! `trace-id` response header.
//!
//! The id sits in Tokio task-local storage for the lifetime of one request.
//! Work moved onto another task does not inherit it; wrap that work in
//! [`TraceId::scope`].

use std::fmt;
use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// Random identifier assigned to each request by the trace middleware.
///
/// # Examples
/// ```
/// use mineral_catalog::TraceId;
///
/// assert!(TraceId::current().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The id of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current id.
    pub async fn scope<Fut: Future>(trace_id: Self, fut: Fut) -> Fut::Output {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scope_sets_and_clears_the_current_id() {
        let id = TraceId::generate();
        let inside = TraceId::scope(id, async { TraceId::current() }).await;
        assert_eq!(inside, Some(id));
        assert!(TraceId::current().is_none());
    }

    #[test]
    fn ids_render_as_hyphenated_uuids() {
        let rendered = TraceId::generate().to_string();
        assert_eq!(rendered.len(), 36);
        assert!(Uuid::parse_str(&rendered).is_ok());
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(TraceId::generate(), TraceId::generate());
    }
}
