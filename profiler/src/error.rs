use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire profiler.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// The profiler's error type.
///
/// Cost models surface these when an invocation does not carry what their
/// formula needs; the registry converts them into warnings and a zero count
/// rather than aborting the traversal.
#[derive(Debug)]
pub enum ProfileError {
    /// A cost model was applied to a layer of another kind.
    ConfigMismatch { model: &'static str },

    /// The traversal captured fewer input tensors than the model reads.
    MissingInput {
        model: &'static str,
        expected: usize,
        got: usize,
    },

    /// The traversal captured no output tensor.
    MissingOutput { model: &'static str },

    /// The layer carries no parameter tensor where the formula needs one.
    MissingParams { model: &'static str },

    /// The configured softmax axis does not exist on the input tensor.
    AxisOutOfBounds { axis: isize, ndim: usize },
}

impl Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::ConfigMismatch { model } => {
                write!(f, "the {model} cost model does not match the layer's configuration")
            }
            ProfileError::MissingInput { model, expected, got } => {
                write!(f, "the {model} cost model reads {expected} input tensors, got {got}")
            }
            ProfileError::MissingOutput { model } => {
                write!(f, "the {model} cost model reads an output tensor, got none")
            }
            ProfileError::MissingParams { model } => {
                write!(f, "the {model} cost model reads a parameter tensor the layer does not carry")
            }
            ProfileError::AxisOutOfBounds { axis, ndim } => {
                write!(f, "softmax axis {axis} is out of bounds for a rank-{ndim} input")
            }
        }
    }
}

impl Error for ProfileError {}
