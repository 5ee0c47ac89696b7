//! Record builders for seeding the backend.

use cairn_domain::resources::{
    ApiKey, Content, ContentType, DataType, Dictionary, FieldType, Language, Role, Sender,
    SenderProvider, Template,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

/// Midnight UTC on the given day of January 2024.
pub fn jan(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
}

pub fn role(name: &str, day: u32) -> Role {
    Role {
        id: Uuid::new_v4(),
        name: name.to_string(),
        permissions: vec![],
        created: jan(day),
    }
}

pub fn language(code: &str, name: &str, day: u32) -> Language {
    Language {
        id: Uuid::new_v4(),
        code: code.to_string(),
        name: name.to_string(),
        created: jan(day),
    }
}

pub fn dictionary(name: &str, language_id: Uuid) -> Dictionary {
    Dictionary {
        id: Uuid::new_v4(),
        name: name.to_string(),
        language_id,
        created: jan(1),
    }
}

pub fn content_type(name: &str, invariant: bool) -> ContentType {
    ContentType {
        id: Uuid::new_v4(),
        name: name.to_string(),
        invariant,
        created: jan(1),
    }
}

pub fn content(name: &str, type_id: Uuid, day: u32) -> Content {
    Content {
        id: Uuid::new_v4(),
        name: name.to_string(),
        type_id,
        language_id: None,
        created: jan(day),
        updated: None,
    }
}

pub fn field_type(name: &str, data_type: DataType) -> FieldType {
    FieldType {
        id: Uuid::new_v4(),
        name: name.to_string(),
        data_type,
        created: jan(1),
    }
}

pub fn sender(name: &str, provider: SenderProvider) -> Sender {
    Sender {
        id: Uuid::new_v4(),
        name: name.to_string(),
        provider,
        address: format!("{}@example.com", name),
        created: jan(1),
    }
}

pub fn template(name: &str, template_type: &str) -> Template {
    Template {
        id: Uuid::new_v4(),
        name: name.to_string(),
        template_type: template_type.to_string(),
        created: jan(1),
    }
}

/// An API key for `role_id` expiring `days` after 2024-01-01, or never.
pub fn api_key(name: &str, role_id: Uuid, days: Option<i64>) -> ApiKey {
    ApiKey {
        id: Uuid::new_v4(),
        name: name.to_string(),
        role_id,
        expiration: days.map(|days| jan(1) + Duration::days(days)),
        created: jan(1),
    }
}
