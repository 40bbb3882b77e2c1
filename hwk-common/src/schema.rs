use crate::error::CommonError;
use crate::Result;

/// Wire categories the device codec emits. The protocol never uses the
/// fixed-width categories, so they are rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Varint,
    LengthDelimited,
}

impl WireType {
    /// The three low bits of a field key.
    pub fn id(self) -> u32 {
        match self {
            WireType::Varint => 0,
            WireType::LengthDelimited => 2,
        }
    }

    pub fn from_id(id: u32) -> Result<WireType> {
        match id {
            0 => Ok(WireType::Varint),
            2 => Ok(WireType::LengthDelimited),
            _ => Err(CommonError::UnsupportedWireType.into()),
        }
    }
}

/// One row of a message's wire table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub tag: u32,
    pub name: &'static str,
    pub wire_type: WireType,
    pub repeated: bool,
}

impl FieldDescriptor {
    /// Key value preceding every occurrence of the field on the wire.
    pub fn key(&self) -> u32 {
        self.tag << 3 | self.wire_type.id()
    }
}

/// Wire table attached to a protocol message. The table is a compile-time
/// constant, identical for every instance of the type, and must match
/// what the encoder emits byte for byte.
pub trait MessageSchema: prost::Message {
    const FIELDS: &'static [FieldDescriptor];

    fn field(tag: u32) -> Option<&'static FieldDescriptor> {
        Self::FIELDS.iter().find(|field| field.tag == tag)
    }
}

/// Rejects tables carrying a zero or duplicate tag.
pub fn check_field_table(fields: &[FieldDescriptor]) -> Result<()> {
    for (index, field) in fields.iter().enumerate() {
        if field.tag == 0 {
            return Err(CommonError::ZeroFieldTag.into());
        }
        if fields[..index].iter().any(|prior| prior.tag == field.tag) {
            return Err(CommonError::DuplicateFieldTag.into());
        }
    }
    Ok(())
}
