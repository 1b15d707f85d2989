use thiserror::Error;

/// Anything that can go wrong between asking the CMS for content and having
/// a typed value in hand. Pages only ever show the `Display` text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Could not reach the content service: {0}")]
    Network(String),
    #[error("The content service answered {status} for {path}")]
    Status { status: u16, path: String },
    #[error("The content service sent something we could not read: {0}")]
    Decode(String),
    #[error("Could not prepare the request: {0}")]
    Request(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        let err = FetchError::Status {
            status: 404,
            path: "/api/blog-posts/missing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The content service answered 404 for /api/blog-posts/missing"
        );
        assert!(err.is_not_found());
        assert!(!FetchError::Network("offline".into()).is_not_found());
    }
}
