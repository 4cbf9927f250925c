//! Client-side request state.

/// Lifecycle of an async operation as observed by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// No request issued yet.
    Idle,
    /// Request dispatched, response not yet observed.
    Loading,
    /// Last request succeeded.
    Succeeded(T),
    /// Last request failed; holds the extracted error message. The
    /// state persists until the next user-triggered action.
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Payload of a succeeded state, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Succeeded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let state: FetchState<Vec<u32>> = FetchState::default();
        assert_eq!(state, FetchState::Idle);
        assert!(!state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn accessors_match_variants() {
        let ok: FetchState<u32> = FetchState::Succeeded(7);
        assert_eq!(ok.data(), Some(&7));

        let failed: FetchState<u32> = FetchState::Failed("Duplicate category name".into());
        assert_eq!(failed.error(), Some("Duplicate category name"));
        assert!(failed.data().is_none());
    }
}
