// SPDX-License-Identifier: MPL-2.0
//! Form state with submit-time validation gating.
//!
//! Submission is gated on required fields: an invalid submit is suppressed
//! and flips the form into the `was_validated` state, after which every
//! field reports its validity for live styling on each edit. This mirrors
//! the classic server-rendered pattern where validation styling only
//! appears after the first failed submit.

/// Waste category options for the submit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Paper,
    Plastic,
    Metal,
    Organic,
    Glass,
    Mixed,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Paper,
        Category::Plastic,
        Category::Metal,
        Category::Organic,
        Category::Glass,
        Category::Mixed,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Paper => "Paper",
            Category::Plastic => "Plastic",
            Category::Metal => "Metal",
            Category::Organic => "Organic",
            Category::Glass => "Glass",
            Category::Mixed => "Mixed",
        };
        write!(f, "{name}")
    }
}

/// Validity of a single field, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Validation styling not armed yet (before the first submit attempt).
    Neutral,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub site: String,
    pub email: String,
    pub quantity: String,
    pub notes: String,
    pub category: Option<Category>,
    was_validated: bool,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn site_valid(&self) -> bool {
        !self.site.trim().is_empty()
    }

    fn email_valid(&self) -> bool {
        let email = self.email.trim();
        // Light syntactic check; real validation belongs to the back office.
        email.contains('@') && email.len() >= 3
    }

    fn quantity_valid(&self) -> bool {
        let quantity = self.quantity.trim();
        quantity.is_empty() || quantity.parse::<f64>().map_or(false, |q| q >= 0.0)
    }

    fn category_valid(&self) -> bool {
        self.category.is_some()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.site_valid() && self.email_valid() && self.quantity_valid() && self.category_valid()
    }

    /// Attempts a submit. An invalid form arms validation styling and
    /// reports failure; the caller is expected to suppress the submission
    /// and surface an error toast.
    pub fn try_submit(&mut self) -> bool {
        self.was_validated = true;
        self.is_valid()
    }

    #[must_use]
    pub fn was_validated(&self) -> bool {
        self.was_validated
    }

    #[must_use]
    pub fn site_status(&self) -> FieldStatus {
        self.status_of(self.site_valid())
    }

    #[must_use]
    pub fn email_status(&self) -> FieldStatus {
        self.status_of(self.email_valid())
    }

    #[must_use]
    pub fn quantity_status(&self) -> FieldStatus {
        self.status_of(self.quantity_valid())
    }

    #[must_use]
    pub fn category_status(&self) -> FieldStatus {
        self.status_of(self.category_valid())
    }

    fn status_of(&self, valid: bool) -> FieldStatus {
        if !self.was_validated {
            FieldStatus::Neutral
        } else if valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }

    /// Clears every field and disarms validation styling.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormState {
        FormState {
            site: "Riverside depot".into(),
            email: "crew@example.org".into(),
            quantity: "120".into(),
            notes: String::new(),
            category: Some(Category::Paper),
            was_validated: false,
        }
    }

    #[test]
    fn empty_form_fails_submit_and_arms_styling() {
        let mut form = FormState::new();
        assert!(!form.try_submit());
        assert!(form.was_validated());
        assert_eq!(form.site_status(), FieldStatus::Invalid);
        assert_eq!(form.email_status(), FieldStatus::Invalid);
        assert_eq!(form.category_status(), FieldStatus::Invalid);
    }

    #[test]
    fn styling_is_neutral_before_first_submit() {
        let form = FormState::new();
        assert_eq!(form.site_status(), FieldStatus::Neutral);
        assert_eq!(form.email_status(), FieldStatus::Neutral);
    }

    #[test]
    fn valid_form_submits() {
        let mut form = valid_form();
        assert!(form.try_submit());
    }

    #[test]
    fn styling_stays_live_after_failed_submit() {
        let mut form = FormState::new();
        let _ = form.try_submit();

        form.site = "Depot".into();
        assert_eq!(form.site_status(), FieldStatus::Valid);
        assert_eq!(form.email_status(), FieldStatus::Invalid);
    }

    #[test]
    fn quantity_is_optional_but_must_be_numeric() {
        let mut form = valid_form();
        form.quantity = String::new();
        assert!(form.is_valid());

        form.quantity = "abc".into();
        assert!(!form.is_valid());

        form.quantity = "-5".into();
        assert!(!form.is_valid());
    }

    #[test]
    fn email_requires_an_at_sign() {
        let mut form = valid_form();
        form.email = "not-an-email".into();
        assert!(!form.is_valid());
    }

    #[test]
    fn reset_clears_fields_and_disarms_styling() {
        let mut form = FormState::new();
        let _ = form.try_submit();
        form.site = "Depot".into();

        form.reset();
        assert!(form.site.is_empty());
        assert!(!form.was_validated());
        assert_eq!(form.site_status(), FieldStatus::Neutral);
    }
}
