//! Searchable resource types.
//!
//! Each module defines the record model, its sortable-field enumeration and
//! its filters:
//!
//! | Module | Filters | Sortable fields |
//! |--------|---------|-----------------|
//! | [`realm`] | none | Name, Created |
//! | [`language`] | none | Code, Name, Created |
//! | [`dictionary`] | `language` | Name, Created |
//! | [`content_type`] | `invariant` | Name, Invariant, Created |
//! | [`content`] | `type`, `language` | Name, Created, Updated |
//! | [`field_type`] | `type` | Name, Type, Created |
//! | [`sender`] | `provider` | Name, Provider, Created |
//! | [`template`] | `type` | Name, Type, Created |
//! | [`role`] | none | Name, Created |
//! | [`api_key`] | `role`, `expired`, `moment` | Name, Expiration, Created |

use serde::{Deserialize, Serialize};

pub mod api_key;
pub mod content;
pub mod content_type;
pub mod dictionary;
pub mod field_type;
pub mod language;
pub mod realm;
pub mod role;
pub mod sender;
pub mod template;

pub use api_key::{ApiKey, ApiKeyFilter, ApiKeyQuery, ApiKeySortField, ApiKeyStatus};
pub use content::{Content, ContentQuery, ContentSortField};
pub use content_type::{ContentType, ContentTypeQuery, ContentTypeSortField};
pub use dictionary::{Dictionary, DictionaryQuery, DictionarySortField};
pub use field_type::{DataType, FieldType, FieldTypeQuery, FieldTypeSortField};
pub use language::{Language, LanguageSortField};
pub use realm::{Realm, RealmSortField};
pub use role::{Role, RoleSortField};
pub use sender::{Sender, SenderProvider, SenderQuery, SenderSortField};
pub use template::{Template, TemplateQuery, TemplateSortField};

/// Filter type for resources that only support the common parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoFilter;
