pub mod fixtures;

use reshape::{RecordSchema, Schema, Transform};
use serde_json::{Value, json};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Routes `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Joins the `firstName` and `lastName` of the enclosing record.
pub fn full_name() -> Transform {
    Transform::named("fullName", |_, parent, _, _| {
        let parent = parent?;
        Some(json!(format!(
            "{} {}",
            parent.get("firstName")?.as_str()?,
            parent.get("lastName")?.as_str()?
        )))
    })
}

/// The user schema built with the typed API.
pub fn user_schema() -> RecordSchema {
    RecordSchema::new()
        .field("id", Schema::PassThrough)
        .field("name", full_name())
        .field("companyName", "company.name")
        .field(
            "contacts",
            RecordSchema::new()
                .field("email", "$.email")
                .field(
                    "facebook",
                    Schema::transform(|_, _, root, _| {
                        root.pointer("/socialNetworks/facebook").cloned()
                    }),
                )
                .field("twitter", "$.socialNetworks.twitter"),
        )
        .field(
            "friends",
            Schema::each(
                RecordSchema::new()
                    .field("id", Schema::PassThrough)
                    .field("firstName", full_name()),
            ),
        )
}

/// Unwraps a record value for key-level assertions.
pub fn as_record(value: &Value) -> &serde_json::Map<String, Value> {
    value.as_object().expect("expected a record")
}
