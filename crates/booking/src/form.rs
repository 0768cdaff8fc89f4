//! Generic step form controller.
//!
//! One `StepForm` per booking step, parameterized by its `Schema`. It owns
//! the in-progress draft and the currently visible errors. Validation
//! outcomes are ordinary return values: a rejected submit just leaves the
//! error set in place for the renderer to show next to each field.

use tracing::{debug, warn};

use crate::validation::{FieldValue, Schema, SchemaField, ValidationErrors};

/// Result of `StepForm::submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T> {
    /// Draft passed every rule; carries a copy of the validated record.
    Completed(T),
    /// At least one rule failed; the form's error set now lists every violation.
    Rejected,
}

impl<T> Submission<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Submission::Completed(_))
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Submission::Completed(data) => Some(data),
            Submission::Rejected => None,
        }
    }
}

pub struct StepForm<S: Schema> {
    draft: S::Data,
    errors: ValidationErrors<S::Field>,
}

impl<S: Schema> StepForm<S> {
    /// Start from previously entered data for this step (or an empty record).
    pub fn new(initial: S::Data) -> Self {
        Self {
            draft: initial,
            errors: ValidationErrors::default(),
        }
    }

    pub fn draft(&self) -> &S::Data {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors<S::Field> {
        &self.errors
    }

    pub fn error(&self, field: S::Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Write one field into the draft.
    ///
    /// A field that is currently in error is re-checked on its own, so its
    /// message clears (or changes) as the user types. Fields without an error
    /// are never validated here.
    pub fn update_field(&mut self, field: S::Field, value: impl Into<FieldValue>) {
        let value = value.into();
        let kind = value.kind();
        if !S::apply(&mut self.draft, field, value) {
            warn!(
                field = field.as_ref(),
                expected = ?field.kind(),
                got = ?kind,
                "ignoring value of the wrong kind"
            );
            return;
        }

        if self.errors.contains(field) {
            match S::check(&self.draft, field) {
                Some(message) => self.errors.insert(field, message),
                None => {
                    self.errors.remove(field);
                }
            }
        }
    }

    /// Validate the whole draft.
    ///
    /// On failure the error set is replaced in full (not merged) and nothing
    /// leaves the form. On success the validated draft is returned for the
    /// caller to hand upward.
    pub fn submit(&mut self) -> Submission<S::Data> {
        let errors = S::validate(&self.draft);
        if errors.is_empty() {
            return Submission::Completed(self.draft.clone());
        }

        debug!(?errors, "step form rejected");
        self.errors = errors;
        Submission::Rejected
    }
}

impl<S: Schema> Default for StepForm<S>
where
    S::Data: Default,
{
    fn default() -> Self {
        Self::new(S::Data::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{
        ContactData, ContactField, ContactSchema, EMAIL_INVALID, EMAIL_REQUIRED,
        FULL_NAME_REQUIRED, PHONE_REQUIRED,
    };
    use crate::payment::{POLICY_NOT_ACCEPTED, PaymentField, PaymentSchema};
    use pretty_assertions::assert_eq;

    fn jane() -> ContactData {
        ContactData {
            full_name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            phone: "555-123-4567".into(),
            visit_reason: "Consultation".into(),
        }
    }

    #[test]
    fn starts_from_initial_data_without_errors() {
        let form = StepForm::<ContactSchema>::new(jane());
        assert_eq!(form.draft(), &jane());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn rejected_submit_shows_every_violation() {
        let mut form = StepForm::<ContactSchema>::default();
        assert_eq!(form.submit(), Submission::Rejected);
        assert_eq!(form.errors().len(), 4);
        assert_eq!(form.error(ContactField::FullName), Some(FULL_NAME_REQUIRED));
    }

    #[test]
    fn completed_submit_returns_the_draft() {
        let mut form = StepForm::<ContactSchema>::default();
        form.update_field(ContactField::FullName, "Jane Smith");
        form.update_field(ContactField::Email, "jane@example.com");
        form.update_field(ContactField::Phone, "555-123-4567");
        form.update_field(ContactField::VisitReason, "Consultation");
        assert_eq!(form.submit(), Submission::Completed(jane()));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn editing_a_clean_field_never_validates() {
        let mut form = StepForm::<ContactSchema>::default();
        form.update_field(ContactField::Email, "not-an-email");
        form.update_field(ContactField::Phone, "");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn editing_an_errored_field_rechecks_only_that_field() {
        let mut form = StepForm::<ContactSchema>::default();
        form.submit();

        form.update_field(ContactField::FullName, "Valid Name");
        assert_eq!(form.error(ContactField::FullName), None);
        assert_eq!(form.error(ContactField::Phone), Some(PHONE_REQUIRED));
        assert_eq!(form.errors().len(), 3);

        form.update_field(ContactField::Email, "jane@");
        assert_eq!(form.error(ContactField::Email), Some(EMAIL_INVALID));
        form.update_field(ContactField::Email, " ");
        assert_eq!(form.error(ContactField::Email), Some(EMAIL_REQUIRED));
        form.update_field(ContactField::Email, "jane@example.com");
        assert_eq!(form.error(ContactField::Email), None);
    }

    #[test]
    fn cleared_field_stays_clean_until_next_submit() {
        let mut form = StepForm::<ContactSchema>::default();
        form.submit();
        form.update_field(ContactField::FullName, "Jane");
        form.update_field(ContactField::FullName, "");
        assert_eq!(form.error(ContactField::FullName), None);

        form.submit();
        assert_eq!(form.error(ContactField::FullName), Some(FULL_NAME_REQUIRED));
    }

    #[test]
    fn update_field_is_idempotent() {
        let mut once = StepForm::<ContactSchema>::default();
        let mut twice = StepForm::<ContactSchema>::default();
        once.submit();
        twice.submit();

        once.update_field(ContactField::Phone, "555");
        twice.update_field(ContactField::Phone, "555");
        twice.update_field(ContactField::Phone, "555");

        assert_eq!(once.draft(), twice.draft());
        assert_eq!(once.errors(), twice.errors());
    }

    #[test]
    fn resubmit_replaces_errors_instead_of_merging() {
        let mut form = StepForm::<ContactSchema>::default();
        form.submit();
        assert_eq!(form.errors().len(), 4);

        form.update_field(ContactField::FullName, "Jane Smith");
        form.update_field(ContactField::Phone, "555-123-4567");
        form.update_field(ContactField::VisitReason, "Consultation");
        form.update_field(ContactField::Email, "jane");
        form.submit();
        assert_eq!(
            form.errors().iter().collect::<Vec<_>>(),
            vec![(ContactField::Email, EMAIL_INVALID)]
        );
    }

    #[test]
    fn toggling_the_policy_clears_its_error() {
        let mut form = StepForm::<PaymentSchema>::default();
        form.submit();
        assert_eq!(
            form.error(PaymentField::AgreeToCancellationPolicy),
            Some(POLICY_NOT_ACCEPTED)
        );
        form.update_field(PaymentField::AgreeToCancellationPolicy, true);
        assert_eq!(form.error(PaymentField::AgreeToCancellationPolicy), None);
        form.update_field(PaymentField::AgreeToCancellationPolicy, false);
        assert_eq!(
            form.error(PaymentField::AgreeToCancellationPolicy),
            None,
            "unchecking a clean field does not re-validate it"
        );
    }

    #[test]
    fn wrong_kind_leaves_draft_untouched() {
        let mut form = StepForm::<PaymentSchema>::default();
        form.update_field(PaymentField::CardNumber, true);
        assert_eq!(form.draft().card_number, "");
    }
}
