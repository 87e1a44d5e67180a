//! Decode Target Shapes
//!
//! The decoder is receiver driven: the caller states what it expects and the decoder
//! checks the wire against it. A [`Shape`] is that statement.
//!
//! Records are described by an explicit, ordered list of [`FieldDescriptor`]s. Tuple
//! elements bind to fields by position, so the descriptor order is the wire order.

/// Declared width of an integer target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    /// Whether a signed value fits in this width.
    pub fn fits(self, value: i64) -> bool {
        match self {
            IntWidth::W8 => i8::try_from(value).is_ok(),
            IntWidth::W16 => i16::try_from(value).is_ok(),
            IntWidth::W32 => i32::try_from(value).is_ok(),
            IntWidth::W64 => true,
        }
    }
}

impl std::fmt::Display for IntWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// What the caller expects to find on the wire
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Signed integer of the given width.
    ///
    /// 8-bit targets are always rejected: a `SMALL_INTEGER_EXT` alone already
    /// spans 0..=255.
    Integer(IntWidth),
    /// Unsigned integer of the given width. Not a supported target.
    Unsigned(IntWidth),
    /// Arbitrary precision integer
    BigInteger,
    /// Text, from any text-carrying tag
    Text,
    /// Text plus the family (atom or string) of the tag it came from
    TaggedText,
    /// Tuple whose arity equals the number of declared fields
    Record(RecordShape),
    /// Proper list whose elements all have the inner shape
    List(Box<Shape>),
    /// Any term, decoded into the generic value model
    Any,
}

impl Shape {
    /// Shorthand for a list of elements of `inner` shape
    pub fn list_of(inner: Shape) -> Self {
        Shape::List(Box::new(inner))
    }

    /// Short name of the shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Integer(_) => "integer",
            Shape::Unsigned(_) => "unsigned integer",
            Shape::BigInteger => "big integer",
            Shape::Text => "text",
            Shape::TaggedText => "tagged text",
            Shape::Record(_) => "record",
            Shape::List(_) => "list",
            Shape::Any => "any",
        }
    }
}

/// One declared record field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Field name. Optional; binding is positional.
    pub name: Option<String>,
    pub shape: Shape,
}

impl FieldDescriptor {
    pub fn named(name: impl Into<String>, shape: Shape) -> Self {
        FieldDescriptor {
            name: Some(name.into()),
            shape,
        }
    }

    pub fn positional(shape: Shape) -> Self {
        FieldDescriptor { name: None, shape }
    }
}

/// Ordered field list of a record target
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RecordShape {
    fields: Vec<FieldDescriptor>,
}

impl RecordShape {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        RecordShape { fields }
    }

    /// Number of declared fields, which must equal the wire tuple arity.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

impl FromIterator<FieldDescriptor> for RecordShape {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        RecordShape::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_width_fits() {
        assert!(!IntWidth::W8.fits(255));
        assert!(IntWidth::W16.fits(-32768));
        assert!(!IntWidth::W16.fits(32768));
        assert!(IntWidth::W32.fits(i64::from(i32::MAX)));
        assert!(!IntWidth::W32.fits(i64::from(i32::MAX) + 1));
        assert!(IntWidth::W64.fits(i64::MIN));
    }

    #[test]
    fn test_record_shape_arity() {
        let shape: RecordShape = vec![
            FieldDescriptor::named("result", Shape::Text),
            FieldDescriptor::positional(Shape::Integer(IntWidth::W64)),
        ]
        .into_iter()
        .collect();
        assert_eq!(shape.arity(), 2);
        assert_eq!(shape.fields()[0].name.as_deref(), Some("result"));
        assert_eq!(shape.fields()[1].name, None);
    }

    #[test]
    fn test_kind() {
        assert_eq!(Shape::list_of(Shape::Text).kind(), "list");
        assert_eq!(Shape::TaggedText.kind(), "tagged text");
        assert_eq!(IntWidth::W16.to_string(), "16-bit");
    }
}
