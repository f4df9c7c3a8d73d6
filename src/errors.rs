use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GeometryError {
    #[error("Invalid dimension {dimension} with {measures} measures: spatial dimension must be at least 2")]
    InvalidDimension { dimension: usize, measures: usize },

    #[error("Ordinate {ordinate} is not supported by coordinate variant {variant}")]
    UnsupportedOrdinate {
        ordinate: usize,
        variant: &'static str,
    },

    #[error("Ordinate index {index} is out of range (maximum {max})")]
    IndexOutOfRange { index: usize, max: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}
