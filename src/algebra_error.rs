use thiserror::Error;

/// Errors produced while sampling curves and building rectangles.
///
/// Context layers can be stacked on top of any error with
/// [`AlgebraError::with_context`] or the [`WithContext`] trait; use
/// [`AlgebraError::root`] to look through them.
#[derive(Debug, Error)]
pub enum AlgebraError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Vertical probe at x = {x} does not intersect the curve")]
    NoIntersection { x: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{context}\n{source}")]
    Context {
        context: String,
        source: Box<AlgebraError>,
    },
}

pub type AlgebraResult<T> = Result<T, AlgebraError>;

impl AlgebraError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AlgebraError::InvalidArgument(message.into())
    }

    pub fn no_intersection(x: f64) -> Self {
        AlgebraError::NoIntersection { x }
    }

    pub fn with_context(self, context: impl Into<String>) -> Self {
        AlgebraError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with all context layers removed.
    pub fn root(&self) -> &AlgebraError {
        let mut err = self;
        while let AlgebraError::Context { source, .. } = err {
            err = source;
        }
        err
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.root(), AlgebraError::InvalidArgument(_))
    }

    /// The x-coordinate of the failing probe, if this is a missed intersection.
    pub fn no_intersection_x(&self) -> Option<f64> {
        match self.root() {
            AlgebraError::NoIntersection { x } => Some(*x),
            _ => None,
        }
    }
}

pub trait WithContext<T> {
    fn with_context<F>(self, context: &F) -> AlgebraResult<T>
    where
        F: Fn(AlgebraError) -> AlgebraError;
}

impl<T> WithContext<T> for AlgebraResult<T> {
    fn with_context<F>(self, context: &F) -> AlgebraResult<T>
    where
        F: Fn(AlgebraError) -> AlgebraError,
    {
        self.map_err(context)
    }
}
