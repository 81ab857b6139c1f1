use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenDayError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A failed store call. `context` is the only part shown to callers.
    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: eyre::Report,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl OpenDayError {
    /// Returns a mapper that wraps a store error with a caller-facing message.
    ///
    /// ```
    /// use openday_core::errors::OpenDayError;
    ///
    /// let result: Result<(), eyre::Report> = Err(eyre::eyre!("connection refused"));
    /// let err = result.map_err(OpenDayError::store("Failed to fetch availability")).unwrap_err();
    /// assert_eq!(err.to_string(), "Failed to fetch availability");
    /// ```
    pub fn store(context: &'static str) -> impl FnOnce(eyre::Report) -> Self {
        move |source| Self::Store { context, source }
    }
}

pub type OpenDayResult<T> = Result<T, OpenDayError>;
