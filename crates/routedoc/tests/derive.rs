//! End-to-end tests for `#[derive(Shape)]` through the public API.

use routedoc::{
    ApiDoc, DocError, EndpointConfig, Field, HttpMethod, Property, Shape, TypeShape, extract,
};

#[derive(Shape)]
struct Address {
    street: String,
    city: String,
}

#[derive(Shape)]
struct Customer {
    #[shape(required)]
    id: u64,
    #[shape(rename = "fullName")]
    full_name: String,
    age: Option<u32>,
    tags: Vec<String>,
    address: Address,
}

#[test]
fn derived_shape_reports_fields_in_declaration_order() {
    let TypeShape::Struct { name, fields } = Customer::shape() else {
        panic!("expected a struct shape");
    };

    assert_eq!(name, "Customer");
    let names: Vec<_> = fields.iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["id", "fullName", "age", "tags", "address"]);
}

#[test]
fn derived_shape_extracts_expected_properties() {
    let props = extract(&Customer::shape()).unwrap();

    let expected_id = Property {
        required: true,
        ..Property::new("id", "int")
    };
    assert_eq!(props[0], expected_id);
    assert_eq!(props[1], Property::new("fullName", "string"));
    assert_eq!(props[2], Property::new("age", "optional<int>"));
    assert_eq!(props[3], Property::new("tags", "array<string>"));
    // nested struct stays flat, labeled with its own name
    assert_eq!(props[4], Property::new("address", "Address"));
}

#[test]
fn derived_shape_field_constructor_matches_manual() {
    let TypeShape::Struct { fields, .. } = Address::shape() else {
        panic!("expected a struct shape");
    };
    assert_eq!(fields[0], Field::new("street", String::shape()));
}

#[test]
fn derived_shapes_flow_through_accumulate_and_render() {
    let mut doc = ApiDoc::new();
    doc.accumulate([
        EndpointConfig::new::<Customer>("/customers", vec![HttpMethod::Post])
            .response::<Customer>(201),
    ])
    .unwrap();

    let html = doc.render_snapshot().unwrap();
    assert!(html.contains("POST /customers"));
    assert!(html.contains("fullName"));
    assert!(html.contains("Response 201: Customer"));
}

#[test]
fn non_struct_shapes_are_rejected_at_extraction() {
    let err = extract(&Vec::<Customer>::shape()).unwrap_err();
    assert_eq!(
        err,
        DocError::UnsupportedShape {
            label: "array<Customer>".to_string()
        }
    );
}
