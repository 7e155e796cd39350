//! Property extraction: flatten a struct shape into an ordered property list.

use crate::document::Property;
use crate::error::DocError;
use crate::shape::TypeShape;

/// Flatten a struct shape into one [`Property`] per declared field, in
/// declaration order.
///
/// Extraction is deliberately flat: a field whose type is itself a struct
/// becomes a single property labeled with that struct's name, never an
/// expanded nested schema. `required` is `false` unless the field carries an
/// explicit override.
///
/// Fails with [`DocError::UnsupportedShape`] if the input is not a struct
/// with named fields (a scalar, list, optional, or map).
pub fn extract(shape: &TypeShape) -> Result<Vec<Property>, DocError> {
    let TypeShape::Struct { fields, .. } = shape else {
        return Err(DocError::UnsupportedShape {
            label: shape.label(),
        });
    };

    Ok(fields
        .iter()
        .map(|field| Property {
            name: field.name.to_string(),
            type_label: field.shape.label(),
            required: field.required,
            reference: None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::shape::{Field, Shape};

    fn user_shape() -> TypeShape {
        TypeShape::Struct {
            name: "User",
            fields: vec![
                Field::new("name", String::shape()),
                Field::new("age", i64::shape()),
                Field::new("tags", Vec::<String>::shape()),
            ],
        }
    }

    #[test]
    fn test_extract_flattens_fields_in_declaration_order() {
        let props = extract(&user_shape()).unwrap();

        assert_eq!(props.len(), 3);
        assert_eq!(props[0], Property::new("name", "string"));
        assert_eq!(props[1], Property::new("age", "int"));
        assert_eq!(props[2], Property::new("tags", "array<string>"));
        assert!(props.iter().all(|p| !p.name.is_empty()));
    }

    #[test]
    fn test_extract_empty_struct() {
        let shape = TypeShape::Struct {
            name: "Empty",
            fields: vec![],
        };
        assert_eq!(extract(&shape).unwrap(), vec![]);
    }

    #[test]
    fn test_extract_does_not_recurse_into_nested_struct() {
        let shape = TypeShape::Struct {
            name: "Order",
            fields: vec![Field::new("customer", user_shape())],
        };

        let props = extract(&shape).unwrap();
        assert_eq!(props, vec![Property::new("customer", "User")]);
    }

    #[test]
    fn test_extract_honors_required_override() {
        let shape = TypeShape::Struct {
            name: "Login",
            fields: vec![
                Field::new("user", String::shape()).required(),
                Field::new("otp", Option::<String>::shape()),
            ],
        };

        let props = extract(&shape).unwrap();
        assert!(props[0].required);
        assert!(!props[1].required);
    }

    #[rstest]
    #[case::scalar(String::shape(), "string")]
    #[case::int(i32::shape(), "int")]
    #[case::list(Vec::<i64>::shape(), "array<int>")]
    #[case::optional(Option::<bool>::shape(), "optional<bool>")]
    #[case::map(std::collections::HashMap::<String, String>::shape(), "map<string>")]
    fn test_extract_rejects_non_structs(#[case] shape: TypeShape, #[case] label: &str) {
        let err = extract(&shape).unwrap_err();
        assert_eq!(
            err,
            DocError::UnsupportedShape {
                label: label.to_string()
            }
        );
    }
}
