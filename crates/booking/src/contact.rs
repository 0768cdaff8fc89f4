//! Contact step: who is booking and why.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::validation::{FieldValue, Schema, SchemaField, is_valid_email, required};

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const VISIT_REASON_REQUIRED: &str = "Visit reason is required";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub visit_reason: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum ContactField {
    FullName,
    Email,
    Phone,
    VisitReason,
}

impl SchemaField for ContactField {
    fn label(&self) -> &'static str {
        match self {
            ContactField::FullName => "Full Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::VisitReason => "Visit reason",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            ContactField::FullName => "Enter your full name",
            ContactField::Email => "Enter your email",
            ContactField::Phone => "Enter your phone number",
            ContactField::VisitReason => "Describe the reason for your visit",
        }
    }
}

pub struct ContactSchema;

impl Schema for ContactSchema {
    type Data = ContactData;
    type Field = ContactField;

    fn value(data: &ContactData, field: ContactField) -> FieldValue {
        let value = match field {
            ContactField::FullName => &data.full_name,
            ContactField::Email => &data.email,
            ContactField::Phone => &data.phone,
            ContactField::VisitReason => &data.visit_reason,
        };
        FieldValue::Text(value.clone())
    }

    fn check(data: &ContactData, field: ContactField) -> Option<&'static str> {
        match field {
            ContactField::FullName => required(&data.full_name, FULL_NAME_REQUIRED),
            // "required" wins over "invalid"; never both
            ContactField::Email => required(&data.email, EMAIL_REQUIRED)
                .or_else(|| (!is_valid_email(&data.email)).then_some(EMAIL_INVALID)),
            ContactField::Phone => required(&data.phone, PHONE_REQUIRED),
            ContactField::VisitReason => required(&data.visit_reason, VISIT_REASON_REQUIRED),
        }
    }

    fn apply(data: &mut ContactData, field: ContactField, value: FieldValue) -> bool {
        let FieldValue::Text(value) = value else {
            return false;
        };
        let slot = match field {
            ContactField::FullName => &mut data.full_name,
            ContactField::Email => &mut data.email,
            ContactField::Phone => &mut data.phone,
            ContactField::VisitReason => &mut data.visit_reason,
        };
        *slot = value;
        true
    }
}
