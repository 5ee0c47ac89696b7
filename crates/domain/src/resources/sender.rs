//! Senders: configured delivery channels for outgoing messages.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resource::Resource;
use crate::search::SortField;

/// The delivery provider behind a sender.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum SenderProvider {
    Smtp,
    SendGrid,
    Mailgun,
    Twilio,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
    pub id: Uuid,
    pub name: String,
    pub provider: SenderProvider,
    /// Address or phone number messages are sent from.
    pub address: String,
    pub created: DateTime<Utc>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
pub enum SenderSortField {
    Name,
    Provider,
    Created,
}

impl SortField for SenderSortField {}

/// Sender filters, bound from `provider`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SenderQuery {
    pub provider: Option<SenderProvider>,
}

impl Resource for Sender {
    const NAME: &'static str = "sender";

    type Query = SenderQuery;
    type Filter = SenderQuery;
    type SortField = SenderSortField;

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.address]
    }

    fn matches(&self, filter: &SenderQuery, _now: DateTime<Utc>) -> bool {
        filter
            .provider
            .is_none_or(|provider| provider == self.provider)
    }

    fn compare(&self, other: &Self, field: SenderSortField) -> Ordering {
        match field {
            SenderSortField::Name => self.name.cmp(&other.name),
            SenderSortField::Provider => self.provider.cmp(&other.provider),
            SenderSortField::Created => self.created.cmp(&other.created),
        }
    }
}
