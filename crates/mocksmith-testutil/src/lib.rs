use mocksmith_core::interface::{Field, InterfaceDecl};

/// A small ecommerce batch: users, orders and line items that reference
/// each other, plus one property typed with a non-local interface.
pub fn ecommerce_interfaces() -> Vec<InterfaceDecl> {
    vec![
        InterfaceDecl::new(
            "User",
            vec![
                Field::new("id", "string"),
                Field::new("email", "string"),
                Field::new("fullName", "string"),
                Field::new("age", "number"),
                Field::new("isActive", "boolean"),
                Field::new("createdAt", "Date"),
                Field::new("orders", "Order[]").optional(),
                Field::new("settings", "Settings").optional(),
            ],
        ),
        InterfaceDecl::new(
            "Order",
            vec![
                Field::new("id", "string"),
                Field::new("buyer", "User"),
                Field::new("items", "Array<LineItem>"),
                Field::new("totalAmount", "number"),
                Field::new("notes", "string[]").optional(),
            ],
        ),
        InterfaceDecl::new(
            "LineItem",
            vec![
                Field::new("sku", "string"),
                Field::new("quantity", "number"),
                Field::new("unitPrice", "number"),
            ],
        ),
    ]
}

/// The same batch as JSON, in the shape `interface::parse_interfaces` reads.
pub fn ecommerce_interfaces_json() -> String {
    serde_json::to_string_pretty(&ecommerce_interfaces())
        .expect("fixture interfaces serialize")
}

/// Schema exercising every shape the walker understands.
pub fn profile_schema_json() -> String {
    serde_json::json!({
        "id": "string",
        "email": "string",
        "age": "number",
        "verified": "boolean",
        "joined": "Date",
        "tags": "string[]",
        "scores": "Array<number>",
        "mixed": ["string", "number", "boolean"],
        "meta": {
            "createdBy": "string",
            "timestamps": { "createdAt": "string", "updatedAt": "string" }
        },
        "entries": [{ "key": "string", "count": "number" }],
        "legacy": null,
        "kind": "Widget"
    })
    .to_string()
}
