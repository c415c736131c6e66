// Record <-> BSON document codecs for the two collections

use anyhow::{anyhow, Context, Result};
use bson::{doc, Bson, Document};

use backend_domain::{ClockInRecord, ItemRecord, NewClockIn, NewItem, RecordId};

pub fn new_item_document(item: &NewItem) -> Document {
    doc! {
        "name": item.fields.name.as_str(),
        "email": item.fields.email.as_str(),
        "item_name": item.fields.item_name.as_str(),
        "quantity": item.fields.quantity,
        "expiry_date": bson::DateTime::from_chrono(item.fields.expiry_date),
        "insert_date": bson::DateTime::from_chrono(item.insert_date),
    }
}

pub fn item_from_document(document: &Document) -> Result<ItemRecord> {
    Ok(ItemRecord {
        id: read_id(document)?,
        name: read_str(document, "name")?,
        email: read_str(document, "email")?,
        item_name: read_str(document, "item_name")?,
        quantity: read_integer(document, "quantity")?,
        expiry_date: document
            .get_datetime("expiry_date")
            .context("item field 'expiry_date'")?
            .to_chrono(),
        insert_date: document
            .get_datetime("insert_date")
            .context("item field 'insert_date'")?
            .to_chrono(),
    })
}

pub fn new_clock_in_document(clock_in: &NewClockIn) -> Document {
    doc! {
        "email": clock_in.email.as_str(),
        "location": clock_in.location.as_str(),
        "insert_date_time": bson::DateTime::from_chrono(clock_in.insert_date_time),
    }
}

pub fn clock_in_from_document(document: &Document) -> Result<ClockInRecord> {
    Ok(ClockInRecord {
        id: read_id(document)?,
        email: read_str(document, "email")?,
        location: read_str(document, "location")?,
        insert_date_time: document
            .get_datetime("insert_date_time")
            .context("clock-in field 'insert_date_time'")?
            .to_chrono(),
    })
}

pub fn inserted_record_id(inserted_id: &Bson) -> Result<RecordId> {
    inserted_id
        .as_object_id()
        .map(RecordId::from)
        .ok_or_else(|| anyhow!("store assigned a non-ObjectId id: {}", inserted_id))
}

fn read_id(document: &Document) -> Result<RecordId> {
    let oid = document.get_object_id("_id").context("document field '_id'")?;
    Ok(RecordId::from(oid))
}

fn read_str(document: &Document, key: &str) -> Result<String> {
    document
        .get_str(key)
        .map(ToString::to_string)
        .with_context(|| format!("document field '{}'", key))
}

// Documents written by other clients may carry 32-bit or whole-double numbers.
fn read_integer(document: &Document, key: &str) -> Result<i64> {
    match document.get(key) {
        Some(Bson::Int64(value)) => Ok(*value),
        Some(Bson::Int32(value)) => Ok(i64::from(*value)),
        Some(Bson::Double(value)) if value.fract() == 0.0 => Ok(*value as i64),
        other => Err(anyhow!("document field '{}' is not an integer: {:?}", key, other)),
    }
}
