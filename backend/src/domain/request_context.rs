//! Explicit per-request context handed from adapters to domain services.

use super::TraceId;

/// Correlation data for one quote request.
///
/// # Examples
/// ```
/// use shipping_calculator::TraceId;
/// use shipping_calculator::domain::RequestContext;
///
/// let ctx = RequestContext::new(TraceId::generate());
/// let _entered = ctx.span().entered();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    trace_id: TraceId,
}

impl RequestContext {
    /// Wrap a trace identifier.
    #[must_use]
    pub const fn new(trace_id: TraceId) -> Self {
        Self { trace_id }
    }

    /// Build a context from the trace identifier in scope, generating a fresh
    /// one when the caller runs outside the trace middleware.
    #[must_use]
    pub fn from_current() -> Self {
        Self::new(TraceId::current().unwrap_or_else(TraceId::generate))
    }

    /// Trace identifier for this request.
    #[must_use]
    pub const fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    /// Tracing span carrying the trace identifier.
    #[must_use]
    pub fn span(&self) -> tracing::Span {
        tracing::info_span!("shipping_quote", trace_id = %self.trace_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn from_current_reuses_scoped_trace_id() {
        let expected = TraceId::generate();
        let ctx = TraceId::scope(expected, async { RequestContext::from_current() }).await;
        assert_eq!(ctx.trace_id(), expected);
    }

    #[test]
    fn from_current_generates_outside_scope() {
        let first = RequestContext::from_current();
        let second = RequestContext::from_current();
        assert_ne!(first.trace_id(), second.trace_id());
    }
}
