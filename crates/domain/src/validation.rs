//! Local form validation
//!
//! Everything here is checked before the collaborator is called. A failed
//! check is surfaced as a transient user-facing notice and never leaves the
//! submission handler.

use crate::model::{DonationDraft, Registration};
use thiserror::Error;

/// Maximum accepted avatar payload: 5 MiB, checked before upload.
pub const MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A user-input precondition failed. The message is user-facing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your {0}")]
    MissingField(&'static str),
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please enter the organization name")]
    MissingOrganization,
    #[error("File size should be less than 5MB")]
    AvatarTooLarge,
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Validate a registration form.
pub fn validate_registration(form: &Registration) -> Result<(), ValidationError> {
    require(&form.full_name, "full name")?;
    require(&form.email, "email address")?;
    if form.password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    require(&form.location, "location")?;
    if form.kind.requires_organization()
        && form
            .organization
            .as_deref()
            .is_none_or(|org| org.trim().is_empty())
    {
        return Err(ValidationError::MissingOrganization);
    }
    Ok(())
}

/// Validate login credentials for presence only; the collaborator decides
/// whether they are correct.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    require(email, "email address")?;
    require(password, "password")
}

/// Validate a donation draft's required fields.
pub fn validate_donation(draft: &DonationDraft) -> Result<(), ValidationError> {
    require(&draft.title, "food title")?;
    require(&draft.quantity, "quantity")?;
    require(&draft.location, "pickup location")?;
    require(&draft.contact_info, "contact information")
}

/// Guard an avatar payload against the upload size cap.
pub fn validate_avatar_size(bytes: &[u8]) -> Result<(), ValidationError> {
    if bytes.len() > MAX_AVATAR_BYTES {
        Err(ValidationError::AvatarTooLarge)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccountKind, FoodType};

    fn registration(kind: AccountKind) -> Registration {
        Registration {
            full_name: "Amina Otieno".to_string(),
            email: "amina@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            kind,
            organization: None,
            location: "Nairobi".to_string(),
            phone: None,
        }
    }

    fn draft() -> DonationDraft {
        DonationDraft {
            title: "Fresh vegetables".to_string(),
            description: String::new(),
            food_type: FoodType::FreshProduce,
            quantity: "20 servings".to_string(),
            expiry_date: None,
            location: "Downtown".to_string(),
            contact_info: "555-0100".to_string(),
            dietary_tags: vec![],
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(validate_registration(&registration(AccountKind::Individual)).is_ok());
    }

    #[test]
    fn short_password_is_rejected() {
        let mut form = registration(AccountKind::Individual);
        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let mut form = registration(AccountKind::Individual);
        form.confirm_password = "different".to_string();
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut form = registration(AccountKind::Individual);
        form.full_name = "   ".to_string();
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::MissingField("full name"))
        );
    }

    #[test]
    fn business_accounts_need_an_organization() {
        let mut form = registration(AccountKind::Restaurant);
        assert_eq!(
            validate_registration(&form),
            Err(ValidationError::MissingOrganization)
        );

        form.organization = Some("Spice Corner Cafe".to_string());
        assert!(validate_registration(&form).is_ok());
    }

    #[test]
    fn individuals_do_not_need_an_organization() {
        assert!(validate_registration(&registration(AccountKind::Individual)).is_ok());
    }

    #[test]
    fn donation_requires_contact_info() {
        let mut d = draft();
        d.contact_info = String::new();
        assert_eq!(
            validate_donation(&d),
            Err(ValidationError::MissingField("contact information"))
        );
    }

    #[test]
    fn donation_with_required_fields_passes() {
        assert!(validate_donation(&draft()).is_ok());
    }

    #[test]
    fn avatar_size_cap_is_five_mib() {
        assert!(validate_avatar_size(&vec![0u8; MAX_AVATAR_BYTES]).is_ok());
        assert_eq!(
            validate_avatar_size(&vec![0u8; MAX_AVATAR_BYTES + 1]),
            Err(ValidationError::AvatarTooLarge)
        );
    }

    #[test]
    fn credentials_presence_check() {
        assert!(validate_credentials("a@b.c", "secret").is_ok());
        assert_eq!(
            validate_credentials("", "secret"),
            Err(ValidationError::MissingField("email address"))
        );
        assert_eq!(
            validate_credentials("a@b.c", ""),
            Err(ValidationError::MissingField("password"))
        );
    }
}
