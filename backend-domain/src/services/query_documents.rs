use bson::{doc, Bson, Document};

use crate::entities::{ClockInPatch, ItemFields, ItemFilter};
use crate::value_objects::RecordId;

pub fn id_selector(id: &RecordId) -> Document {
    doc! { "_id": id.object_id() }
}

/// Mongo query equivalent of [`ItemFilter::matches`].
pub fn item_filter_document(filter: &ItemFilter) -> Document {
    let mut criteria = Document::new();
    if let Some(id) = filter.id {
        criteria.insert("_id", id.object_id());
    }
    if let Some(email) = &filter.email {
        criteria.insert("email", email.as_str());
    }
    if let Some(after) = filter.expiry_after {
        criteria.insert("expiry_date", doc! { "$gt": bson::DateTime::from_chrono(after) });
    }
    if let Some(after) = filter.inserted_after {
        criteria.insert("insert_date", doc! { "$gt": bson::DateTime::from_chrono(after) });
    }
    if let Some(min) = filter.min_quantity {
        criteria.insert("quantity", doc! { "$gte": min });
    }
    criteria
}

/// `$set` body for a full item replace. `insert_date` is never part of it.
pub fn item_update_document(fields: &ItemFields) -> Document {
    doc! {
        "$set": {
            "name": fields.name.as_str(),
            "email": fields.email.as_str(),
            "item_name": fields.item_name.as_str(),
            "quantity": fields.quantity,
            "expiry_date": bson::DateTime::from_chrono(fields.expiry_date),
        }
    }
}

/// `$set` body holding only the supplied clock-in fields.
pub fn clock_in_update_document(patch: &ClockInPatch) -> Document {
    let mut set = Document::new();
    if let Some(email) = &patch.email {
        set.insert("email", Bson::String(email.clone()));
    }
    if let Some(location) = &patch.location {
        set.insert("location", Bson::String(location.clone()));
    }
    doc! { "$set": set }
}
