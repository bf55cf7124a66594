//! Last successfully parsed group.

/// Group of the most recent successful parse.
///
/// Starts empty. Owned by a [`SampleParser`](crate::SampleParser) rather
/// than shared process-wide, so independent parsers never observe each
/// other's groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupState {
    last: String,
}

impl GroupState {
    /// The recorded group, or `""` when nothing was parsed yet.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.last
    }

    pub(crate) fn record(&mut self, group: &str) {
        group.clone_into(&mut self.last);
    }
}
