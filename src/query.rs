/// Tri-state result of a contract read, so the view can tell "still
/// loading" apart from "errored".
#[derive(Clone, Debug, PartialEq)]
pub enum Query<T> {
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> Query<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Query::Pending)
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Query::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_are_distinguishable() {
        let pending = Query::<u64>::Pending;
        let ready = Query::Ready(7u64);
        let failed = Query::<u64>::Failed("node error".to_string());

        assert!(pending.is_pending());
        assert!(!ready.is_pending());
        assert_eq!(ready.as_ready(), Some(&7));
        assert_eq!(failed.as_ready(), None);
    }
}
