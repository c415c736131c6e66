// Item record entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::start_of_day_utc;
use crate::value_objects::{InvalidRecordId, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRecord {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub item_name: String,
    pub quantity: i64,
    pub expiry_date: DateTime<Utc>,
    pub insert_date: DateTime<Utc>,
}

/// Wire body for item create and update. Unknown keys such as `insert_date` are dropped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub email: String,
    pub item_name: String,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
}

/// The caller-controlled part of an item, with the expiry already at midnight UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub email: String,
    pub item_name: String,
    pub quantity: i64,
    pub expiry_date: DateTime<Utc>,
}

impl From<ItemPayload> for ItemFields {
    fn from(payload: ItemPayload) -> Self {
        Self {
            name: payload.name,
            email: payload.email,
            item_name: payload.item_name,
            quantity: payload.quantity,
            expiry_date: start_of_day_utc(payload.expiry_date),
        }
    }
}

impl ItemFields {
    /// Overwrites every caller field of `record`, keeping `id` and `insert_date`.
    /// Returns whether anything changed.
    pub fn replace_into(&self, record: &mut ItemRecord) -> bool {
        let changed = record.name != self.name
            || record.email != self.email
            || record.item_name != self.item_name
            || record.quantity != self.quantity
            || record.expiry_date != self.expiry_date;
        record.name = self.name.clone();
        record.email = self.email.clone();
        record.item_name = self.item_name.clone();
        record.quantity = self.quantity;
        record.expiry_date = self.expiry_date;
        changed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub fields: ItemFields,
    pub insert_date: DateTime<Utc>,
}

impl NewItem {
    pub fn into_record(self, id: RecordId) -> ItemRecord {
        ItemRecord {
            id,
            name: self.fields.name,
            email: self.fields.email,
            item_name: self.fields.item_name,
            quantity: self.fields.quantity,
            expiry_date: self.fields.expiry_date,
            insert_date: self.insert_date,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemFilterQuery {
    pub id: Option<String>,
    pub email: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub insert_date: Option<NaiveDate>,
    pub quantity: Option<i64>,
}

/// AND-combined item criteria. `None` fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub id: Option<RecordId>,
    pub email: Option<String>,
    pub expiry_after: Option<DateTime<Utc>>,
    pub inserted_after: Option<DateTime<Utc>>,
    pub min_quantity: Option<i64>,
}

impl TryFrom<ItemFilterQuery> for ItemFilter {
    type Error = InvalidRecordId;

    fn try_from(query: ItemFilterQuery) -> Result<Self, Self::Error> {
        let id = match query.id.as_deref().filter(|raw| !raw.is_empty()) {
            Some(raw) => Some(RecordId::parse(raw)?),
            None => None,
        };
        Ok(Self {
            id,
            email: query.email.filter(|email| !email.is_empty()),
            expiry_after: query.expiry_date.map(start_of_day_utc),
            inserted_after: query.insert_date.map(start_of_day_utc),
            min_quantity: query.quantity,
        })
    }
}

impl ItemFilter {
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, record: &ItemRecord) -> bool {
        self.id.map_or(true, |id| record.id == id)
            && self
                .email
                .as_ref()
                .map_or(true, |email| &record.email == email)
            && self
                .expiry_after
                .map_or(true, |after| record.expiry_date > after)
            && self
                .inserted_after
                .map_or(true, |after| record.insert_date > after)
            && self
                .min_quantity
                .map_or(true, |min| record.quantity >= min)
    }
}
