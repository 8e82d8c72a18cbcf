/// State of one cached read, as seen by a view.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryStatus<T> {
    /// The read cannot run yet (no backend attached, or a prerequisite is missing).
    Disabled,
    /// The read can run but has no current result.
    Pending,
    Ready(T),
    /// Every attempt failed; holds the last error message.
    Failed(String),
}

impl<T> QueryStatus<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryStatus::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            QueryStatus::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryStatus<U> {
        match self {
            QueryStatus::Disabled => QueryStatus::Disabled,
            QueryStatus::Pending => QueryStatus::Pending,
            QueryStatus::Ready(value) => QueryStatus::Ready(f(value)),
            QueryStatus::Failed(message) => QueryStatus::Failed(message),
        }
    }

    pub fn as_ref(&self) -> QueryStatus<&T> {
        match self {
            QueryStatus::Disabled => QueryStatus::Disabled,
            QueryStatus::Pending => QueryStatus::Pending,
            QueryStatus::Ready(value) => QueryStatus::Ready(value),
            QueryStatus::Failed(message) => QueryStatus::Failed(message.clone()),
        }
    }
}

impl<T> From<Result<T, String>> for QueryStatus<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => QueryStatus::Ready(value),
            Err(message) => QueryStatus::Failed(message),
        }
    }
}
