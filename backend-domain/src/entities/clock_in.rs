// Clock-in record entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockInRecord {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub email: String,
    pub location: String,
    pub insert_date_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClockInPayload {
    pub email: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewClockIn {
    pub email: String,
    pub location: String,
    pub insert_date_time: DateTime<Utc>,
}

impl NewClockIn {
    pub fn into_record(self, id: RecordId) -> ClockInRecord {
        ClockInRecord {
            id,
            email: self.email,
            location: self.location,
            insert_date_time: self.insert_date_time,
        }
    }
}

/// Partial update: only the fields present in the request are written.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClockInPatch {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl ClockInPatch {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.location.is_none()
    }

    /// Merges the supplied fields into `record`; returns whether anything changed.
    pub fn merge_into(&self, record: &mut ClockInRecord) -> bool {
        let mut changed = false;
        if let Some(email) = &self.email {
            changed |= record.email != *email;
            record.email = email.clone();
        }
        if let Some(location) = &self.location {
            changed |= record.location != *location;
            record.location = location.clone();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> ClockInRecord {
        ClockInRecord {
            id: RecordId::generate(),
            email: "a@x.com".to_string(),
            location: "Dock 4".to_string(),
            insert_date_time: Utc::now(),
        }
    }

    #[test]
    fn patch_keeps_fields_that_were_not_sent() {
        let patch: ClockInPatch = serde_json::from_str(r#"{"location":"Gate 2"}"#).expect("patch");
        let mut record = stored();
        let before = record.clone();
        assert!(patch.merge_into(&mut record));
        assert_eq!(record.email, before.email);
        assert_eq!(record.location, "Gate 2");
        assert_eq!(record.insert_date_time, before.insert_date_time);
    }

    #[test]
    fn identical_patch_is_a_no_op() {
        let mut record = stored();
        let patch = ClockInPatch {
            email: Some(record.email.clone()),
            location: None,
        };
        assert!(!patch.merge_into(&mut record));
        assert!(ClockInPatch::default().is_empty());
    }
}
