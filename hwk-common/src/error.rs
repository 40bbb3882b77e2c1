use thiserror::Error;

#[derive(Error, Debug, PartialOrd, PartialEq)]
pub enum CommonError {
    #[error("unsupported_wire_type")]
    UnsupportedWireType,
    #[error("zero_field_tag")]
    ZeroFieldTag,
    #[error("duplicate_field_tag")]
    DuplicateFieldTag,
}
