use serde_json::{Value, json};

/// A user record with nested company, social links and friends.
pub fn user() -> Value {
    json!({
        "id": 1,
        "firstName": "Jack",
        "lastName": "Johnson",
        "company": {
            "name": "Moka",
            "cargo": "DevOps Eng."
        },
        "email": "jack@moka.com",
        "socialNetworks": {
            "twitter": "https://twitter.com/jack.johnson",
            "facebook": "https://www.facebook.com/jack.johnson"
        },
        "friends": [
            { "id": 2, "firstName": "Anne", "lastName": "Marie" },
            { "id": 3, "firstName": "Franz", "lastName": "Post" }
        ]
    })
}

/// The user schema as a JSON document, using only built-in transforms.
pub fn user_schema_document() -> Value {
    json!({
        "id": true,
        "companyName": "company.name",
        "contacts": {
            "email": "$.email",
            "twitter": "$.socialNetworks.twitter"
        },
        "friends": [{
            "id": true,
            "firstName": { "$transform": "upper" }
        }]
    })
}
