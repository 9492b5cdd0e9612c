use serde_json::Value;

use crate::enumset::EnumSet;

/// Reference to a lazily-defined shape.
///
/// Shapes reference each other (nested objects, array elements) and live
/// in `Lazy` statics, so references are function pointers rather than
/// direct `&'static Shape` borrows.
pub type ShapeRef = fn() -> &'static Shape;

/// The kind of a declared field.
///
/// These are the only kinds the engine supports: flat scalars, closed
/// enums, a single nested shape, a homogeneous array of one shape, and
/// constant-valued discriminators.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Any JSON string.
    String,
    /// Any JSON number.
    Number,
    /// Exact member of a closed enumeration.
    Enum(&'static EnumSet),
    /// Nested record validated by its own shape.
    Object(ShapeRef),
    /// Array whose every element is validated by the element shape.
    Array(ShapeRef),
    /// Discriminator pinned to a string constant. Always required.
    Literal(&'static str),
}

impl FieldKind {
    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Enum(set) => set.contains(value),
            FieldKind::Object(shape) => shape().validate(value),
            FieldKind::Array(element) => match value.as_array() {
                Some(items) => items.iter().all(|item| element().validate(item)),
                None => false,
            },
            FieldKind::Literal(expected) => value.as_str() == Some(expected),
        }
    }

    /// Human-readable kind label for diagnostics and catalog listings.
    pub fn describe(&self) -> String {
        match self {
            FieldKind::String => "string".to_string(),
            FieldKind::Number => "number".to_string(),
            FieldKind::Enum(set) => format!("enum {}", set.name()),
            FieldKind::Object(shape) => format!("object {}", shape().name()),
            FieldKind::Array(element) => format!("array of {}", element().name()),
            FieldKind::Literal(expected) => format!("= {expected:?}"),
        }
    }
}

/// A single field descriptor: name, kind, and optionality.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    name: &'static str,
    kind: FieldKind,
    required: bool,
}

impl Field {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn required(&self) -> bool {
        self.required
    }
}

/// A named, immutable record shape: the field table a payload must
/// conform to.
///
/// Validation is open: fields not declared here are never inspected and
/// never cause rejection. Declared once, a shape is never mutated.
#[derive(Debug, Clone)]
pub struct Shape {
    name: &'static str,
    fields: Vec<Field>,
}

impl Shape {
    pub fn builder(name: &'static str) -> ShapeBuilder {
        ShapeBuilder {
            name,
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Judge whether `value` conforms to this shape.
    ///
    /// The input must be a JSON object; each declared field is then
    /// checked independently. Absent optional fields are skipped, absent
    /// required fields fail, and present fields must match their kind
    /// (with delegation to the nested shape or enum where declared).
    /// Field checks carry no ordering dependency.
    pub fn validate(&self, value: &Value) -> bool {
        let Some(map) = value.as_object() else {
            return false;
        };

        self.fields.iter().all(|field| match map.get(field.name) {
            None => !field.required,
            Some(present) => field.kind.matches(present),
        })
    }
}

/// Assembles a shape's field table at definition time.
///
/// Composition with a base envelope is a set-union of field tables
/// (`extend`), not runtime delegation: the built shape carries every
/// inherited descriptor explicitly.
pub struct ShapeBuilder {
    name: &'static str,
    fields: Vec<Field>,
}

impl ShapeBuilder {
    /// Add an optional field of the given kind.
    pub fn field(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(Field {
            name,
            kind,
            required: false,
        });
        self
    }

    /// Add a required field of the given kind.
    pub fn required(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(Field {
            name,
            kind,
            required: true,
        });
        self
    }

    /// Optional string field.
    pub fn string(self, name: &'static str) -> Self {
        self.field(name, FieldKind::String)
    }

    /// Optional number field.
    pub fn number(self, name: &'static str) -> Self {
        self.field(name, FieldKind::Number)
    }

    /// Optional closed-enum field.
    pub fn enumeration(self, name: &'static str, set: &'static EnumSet) -> Self {
        self.field(name, FieldKind::Enum(set))
    }

    /// Optional nested-object field.
    pub fn object(self, name: &'static str, shape: ShapeRef) -> Self {
        self.field(name, FieldKind::Object(shape))
    }

    /// Optional array-of-objects field.
    pub fn array(self, name: &'static str, element: ShapeRef) -> Self {
        self.field(name, FieldKind::Array(element))
    }

    /// Discriminator field pinned to a constant. Required by definition:
    /// a payload missing the discriminator is not this variant.
    pub fn literal(self, name: &'static str, expected: &'static str) -> Self {
        self.required(name, FieldKind::Literal(expected))
    }

    /// Union this shape's field table with a base shape's.
    pub fn extend(mut self, base: &Shape) -> Self {
        self.fields.extend_from_slice(base.fields());
        self
    }

    pub fn build(self) -> Shape {
        Shape {
            name: self.name,
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use once_cell::sync::Lazy;
    use serde_json::json;

    use super::*;

    static COLOR: EnumSet = EnumSet::strings("color", &["RED", "GREEN"]);

    fn item_shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("Item")
                .string("sku")
                .number("price")
                .enumeration("color", &COLOR)
                .build()
        });
        &SHAPE
    }

    fn order_shape() -> &'static Shape {
        static SHAPE: Lazy<Shape> = Lazy::new(|| {
            Shape::builder("Order")
                .literal("operation", "CREATE_ORDER")
                .required("id", FieldKind::String)
                .object("item", item_shape)
                .array("items", item_shape)
                .build()
        });
        &SHAPE
    }

    #[test]
    fn optional_fields_may_be_absent() {
        assert!(item_shape().validate(&json!({})));
        assert!(item_shape().validate(&json!({ "sku": "a" })));
        assert!(item_shape().validate(&json!({ "sku": "a", "price": 1000 })));
    }

    #[test]
    fn present_fields_must_match_kind() {
        assert!(!item_shape().validate(&json!({ "sku": 5 })));
        assert!(!item_shape().validate(&json!({ "price": "1000" })));
        assert!(!item_shape().validate(&json!({ "sku": null })));
    }

    #[test]
    fn non_object_input_rejected() {
        assert!(!item_shape().validate(&Value::Null));
        assert!(!item_shape().validate(&json!("{}")));
        assert!(!item_shape().validate(&json!([])));
        assert!(!item_shape().validate(&json!(42)));
    }

    #[test]
    fn extra_fields_never_inspected() {
        assert!(item_shape().validate(&json!({ "sku": "a", "unknownField": { "x": [1] } })));
    }

    #[test]
    fn required_field_enforced() {
        assert!(!order_shape().validate(&json!({ "operation": "CREATE_ORDER" })));
        assert!(order_shape().validate(&json!({ "operation": "CREATE_ORDER", "id": "o-1" })));
    }

    #[test]
    fn literal_must_match_exactly() {
        let base = json!({ "id": "o-1" });
        let mut wrong = base.clone();
        wrong["operation"] = json!("CREATE_ORDERS");
        assert!(!order_shape().validate(&wrong));

        // Absent discriminator is not this variant either.
        assert!(!order_shape().validate(&base));

        let mut non_string = base;
        non_string["operation"] = json!(1);
        assert!(!order_shape().validate(&non_string));
    }

    #[test]
    fn nested_object_delegates() {
        let valid = json!({ "operation": "CREATE_ORDER", "id": "o-1", "item": { "sku": "a" } });
        assert!(order_shape().validate(&valid));

        let invalid = json!({ "operation": "CREATE_ORDER", "id": "o-1", "item": { "sku": 9 } });
        assert!(!order_shape().validate(&invalid));
    }

    #[test]
    fn enum_field_delegates() {
        assert!(item_shape().validate(&json!({ "color": "RED" })));
        assert!(!item_shape().validate(&json!({ "color": "BLUE" })));
    }

    #[test]
    fn array_validates_every_element() {
        let ok = json!({
            "operation": "CREATE_ORDER",
            "id": "o-1",
            "items": [{ "sku": "a" }, { "sku": "b", "price": 5 }]
        });
        assert!(order_shape().validate(&ok));

        let empty = json!({ "operation": "CREATE_ORDER", "id": "o-1", "items": [] });
        assert!(order_shape().validate(&empty));

        let bad_element = json!({
            "operation": "CREATE_ORDER",
            "id": "o-1",
            "items": [{ "sku": "a" }, { "sku": 2 }]
        });
        assert!(!order_shape().validate(&bad_element));

        let not_an_array = json!({ "operation": "CREATE_ORDER", "id": "o-1", "items": { "sku": "a" } });
        assert!(!order_shape().validate(&not_an_array));
    }

    #[test]
    fn extend_unions_field_tables() {
        static BASE: Lazy<Shape> = Lazy::new(|| Shape::builder("Base").string("token").build());
        let derived = Shape::builder("Derived")
            .string("own")
            .extend(&BASE)
            .build();

        assert_eq!(derived.fields().len(), 2);
        assert!(derived.validate(&json!({ "own": "a", "token": "b" })));
        assert!(!derived.validate(&json!({ "token": 7 })));
    }

    #[test]
    fn kind_labels_for_listings() {
        let fields = order_shape().fields();
        assert_eq!(fields[0].kind().describe(), "= \"CREATE_ORDER\"");
        assert_eq!(fields[2].kind().describe(), "object Item");
        assert_eq!(fields[3].kind().describe(), "array of Item");
    }
}
