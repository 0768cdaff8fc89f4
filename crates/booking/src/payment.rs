//! Payment step: card details held against late cancellation.
//!
//! Only presence is checked. No Luhn, expiry or CVV format rules: the card
//! is never charged by this system.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::validation::{FieldKind, FieldValue, Schema, SchemaField, required};

pub const CARD_NUMBER_REQUIRED: &str = "Card number is required";
pub const EXPIRY_DATE_REQUIRED: &str = "Expiry date is required";
pub const CVV_REQUIRED: &str = "CVV is required";
pub const BILLING_ZIP_REQUIRED: &str = "Billing zip is required";
pub const POLICY_NOT_ACCEPTED: &str = "You must agree to the cancellation policy";

pub const CANCELLATION_POLICY: &str = "We ask that you please reschedule or cancel at least 24 hours \
before the beginning of your appointment or you may be charged a cancellation fee of $50. In the \
event of emergency, contact us directly. Your card will held in case of late cancellation and for \
future purchases. It will not be charged now.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub billing_zip: String,
    pub agree_to_cancellation_policy: bool,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum PaymentField {
    CardNumber,
    ExpiryDate,
    Cvv,
    BillingZip,
    AgreeToCancellationPolicy,
}

impl SchemaField for PaymentField {
    fn label(&self) -> &'static str {
        match self {
            PaymentField::CardNumber => "Card information",
            PaymentField::ExpiryDate => "Expiry date",
            PaymentField::Cvv => "CVV",
            PaymentField::BillingZip => "Billing zip",
            PaymentField::AgreeToCancellationPolicy => CANCELLATION_POLICY,
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            PaymentField::CardNumber => "1234 1234 1234 1234",
            PaymentField::ExpiryDate => "MM / YY",
            PaymentField::Cvv => "CVV",
            PaymentField::BillingZip => "Billing zip code",
            PaymentField::AgreeToCancellationPolicy => "",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            PaymentField::AgreeToCancellationPolicy => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }
}

pub struct PaymentSchema;

impl Schema for PaymentSchema {
    type Data = PaymentData;
    type Field = PaymentField;

    fn value(data: &PaymentData, field: PaymentField) -> FieldValue {
        let value = match field {
            PaymentField::CardNumber => &data.card_number,
            PaymentField::ExpiryDate => &data.expiry_date,
            PaymentField::Cvv => &data.cvv,
            PaymentField::BillingZip => &data.billing_zip,
            PaymentField::AgreeToCancellationPolicy => {
                return FieldValue::Flag(data.agree_to_cancellation_policy);
            }
        };
        FieldValue::Text(value.clone())
    }

    fn check(data: &PaymentData, field: PaymentField) -> Option<&'static str> {
        match field {
            PaymentField::CardNumber => required(&data.card_number, CARD_NUMBER_REQUIRED),
            PaymentField::ExpiryDate => required(&data.expiry_date, EXPIRY_DATE_REQUIRED),
            PaymentField::Cvv => required(&data.cvv, CVV_REQUIRED),
            PaymentField::BillingZip => required(&data.billing_zip, BILLING_ZIP_REQUIRED),
            PaymentField::AgreeToCancellationPolicy => {
                (!data.agree_to_cancellation_policy).then_some(POLICY_NOT_ACCEPTED)
            }
        }
    }

    fn apply(data: &mut PaymentData, field: PaymentField, value: FieldValue) -> bool {
        match value {
            FieldValue::Flag(v) if field == PaymentField::AgreeToCancellationPolicy => {
                data.agree_to_cancellation_policy = v;
                true
            }
            FieldValue::Flag(_) => false,
            FieldValue::Text(v) => {
                let slot = match field {
                    PaymentField::CardNumber => &mut data.card_number,
                    PaymentField::ExpiryDate => &mut data.expiry_date,
                    PaymentField::Cvv => &mut data.cvv,
                    PaymentField::BillingZip => &mut data.billing_zip,
                    PaymentField::AgreeToCancellationPolicy => return false,
                };
                *slot = v;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> PaymentData {
        PaymentData {
            card_number: "1234 5678 9012 3456".into(),
            expiry_date: "12/25".into(),
            cvv: "123".into(),
            billing_zip: "12345".into(),
            agree_to_cancellation_policy: true,
        }
    }

    #[test]
    fn valid_record_has_no_errors() {
        assert!(PaymentSchema::validate(&filled()).is_empty());
    }

    #[test]
    fn empty_record_reports_all_five_fields() {
        let errors = PaymentSchema::validate(&PaymentData::default());
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![
                (PaymentField::CardNumber, CARD_NUMBER_REQUIRED),
                (PaymentField::ExpiryDate, EXPIRY_DATE_REQUIRED),
                (PaymentField::Cvv, CVV_REQUIRED),
                (PaymentField::BillingZip, BILLING_ZIP_REQUIRED),
                (PaymentField::AgreeToCancellationPolicy, POLICY_NOT_ACCEPTED),
            ]
        );
    }

    #[test]
    fn unchecked_policy_is_the_only_error() {
        let data = PaymentData {
            agree_to_cancellation_policy: false,
            ..filled()
        };
        let errors = PaymentSchema::validate(&data);
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![(PaymentField::AgreeToCancellationPolicy, POLICY_NOT_ACCEPTED)]
        );
    }

    #[test]
    fn card_details_are_not_format_checked() {
        let data = PaymentData {
            card_number: "not a card".into(),
            expiry_date: "whenever".into(),
            cvv: "abcd".into(),
            billing_zip: "?".into(),
            ..filled()
        };
        assert!(PaymentSchema::validate(&data).is_empty());
    }

    #[test]
    fn whitespace_only_values_are_empty() {
        let data = PaymentData {
            card_number: "  ".into(),
            cvv: "\t".into(),
            ..filled()
        };
        let errors = PaymentSchema::validate(&data);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(PaymentField::CardNumber), Some(CARD_NUMBER_REQUIRED));
        assert_eq!(errors.get(PaymentField::Cvv), Some(CVV_REQUIRED));
    }

    #[test]
    fn checkbox_only_accepts_flags() {
        let mut data = PaymentData::default();
        assert!(!PaymentSchema::apply(
            &mut data,
            PaymentField::AgreeToCancellationPolicy,
            "true".into()
        ));
        assert!(!PaymentSchema::apply(&mut data, PaymentField::Cvv, true.into()));
        assert!(PaymentSchema::apply(
            &mut data,
            PaymentField::AgreeToCancellationPolicy,
            true.into()
        ));
        assert!(data.agree_to_cancellation_policy);
        assert_eq!(
            PaymentSchema::value(&data, PaymentField::AgreeToCancellationPolicy),
            FieldValue::Flag(true)
        );
        assert_eq!(PaymentField::AgreeToCancellationPolicy.kind(), FieldKind::Checkbox);
        assert_eq!(PaymentField::Cvv.kind(), FieldKind::Text);
    }
}
