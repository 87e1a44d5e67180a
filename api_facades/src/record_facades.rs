//! Record declarations
//!
//! [`bert_record!`](crate::bert_record) declares a struct that encodes as a tuple of
//! its fields and decodes from a tuple of the same arity. Fields bind in declaration
//! order; each field's type supplies its own shape, so records nest.

/// Declare a record type bound positionally to a BERT tuple
///
/// ```
/// use bert_api_facades::{bert_record, FromBert, Shape};
///
/// bert_record! {
///     pub struct Point {
///         pub x: i32,
///         pub y: i32,
///     }
/// }
///
/// match Point::shape() {
///     Shape::Record(record) => assert_eq!(record.arity(), 2),
///     other => panic!("unexpected shape {:?}", other),
/// }
/// ```
#[macro_export]
macro_rules! bert_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::FromBert for $name {
            fn shape() -> $crate::Shape {
                $crate::Shape::Record($crate::RecordShape::new(vec![
                    $(
                        $crate::FieldDescriptor::named(
                            stringify!($field),
                            <$ty as $crate::FromBert>::shape(),
                        ),
                    )*
                ]))
            }

            fn from_decoded(
                value: $crate::Decoded,
            ) -> ::std::result::Result<Self, $crate::DecodeError> {
                let arity = <[&str]>::len(&[$(stringify!($field)),*]);
                #[allow(unused_mut, unused_variables)]
                let mut fields = $crate::record_fields(value, arity)?;
                ::std::result::Result::Ok(Self {
                    $($field: $crate::next_field::<$ty>(&mut fields)?,)*
                })
            }
        }

        impl $crate::ToTerm for $name {
            fn to_term(&self) -> ::std::result::Result<$crate::Term, $crate::EncodeError> {
                ::std::result::Result::Ok($crate::Term::Tuple(vec![
                    $($crate::ToTerm::to_term(&self.$field)?,)*
                ]))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{from_slice, to_vec, Decoded, FromBert, Shape};

    bert_record! {
        #[derive(Debug, Clone, PartialEq)]
        struct Inner {
            label: String,
            weight: i64,
        }
    }

    bert_record! {
        #[derive(Debug, Clone, PartialEq)]
        struct Outer {
            id: i32,
            inner: Inner,
            tags: Vec<String>,
        }
    }

    bert_record! {
        #[derive(Debug, PartialEq)]
        struct Empty {}
    }

    #[test]
    fn test_shape_names_fields_in_order() {
        let Shape::Record(record) = Inner::shape() else {
            panic!("record shape expected");
        };
        let names: Vec<_> = record
            .fields()
            .iter()
            .map(|f| f.name.as_deref())
            .collect();
        assert_eq!(names, vec![Some("label"), Some("weight")]);
    }

    #[test]
    fn test_nested_record_round_trip() {
        let value = Outer {
            id: 3,
            inner: Inner {
                label: "disk".to_string(),
                weight: -40_000,
            },
            tags: vec!["a".to_string(), "b".to_string()],
        };
        let bytes = to_vec(&value).unwrap();
        assert_eq!(from_slice::<Outer>(&bytes).unwrap(), value);
    }

    #[test]
    fn test_empty_record_is_empty_tuple() {
        let bytes = to_vec(&Empty {}).unwrap();
        assert_eq!(bytes, vec![131, 104, 0]);
        assert_eq!(from_slice::<Empty>(&bytes).unwrap(), Empty {});
    }

    #[test]
    fn test_from_decoded_wrong_kind() {
        assert!(Inner::from_decoded(Decoded::Integer(1)).is_err());
    }
}
