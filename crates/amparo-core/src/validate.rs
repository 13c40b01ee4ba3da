//! Form-level validation checks.
//!
//! These run before any network call; the containers short-circuit a failed
//! check into their error slot. Messages are returned as plain strings and
//! surfaced to the user unchanged.

/// Minimum password length accepted by the login form.
pub const LOGIN_PASSWORD_MIN: usize = 4;

/// Minimum password length required for a new staff record.
pub const STAFF_PASSWORD_MIN: usize = 6;

/// Validate the login form fields.
///
/// # Errors
///
/// Returns the first failed check's message.
pub fn login_form(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("email is required".into());
    }
    if password.is_empty() {
        return Err("password is required".into());
    }
    if password.chars().count() < LOGIN_PASSWORD_MIN {
        return Err(format!(
            "password must be at least {LOGIN_PASSWORD_MIN} characters"
        ));
    }
    Ok(())
}

/// Validate a new staff password together with its confirmation field.
///
/// # Errors
///
/// Returns the first failed check's message.
pub fn staff_password(password: &str, confirmation: &str) -> Result<(), String> {
    if password.chars().count() < STAFF_PASSWORD_MIN {
        return Err(format!(
            "password must be at least {STAFF_PASSWORD_MIN} characters"
        ));
    }
    if password != confirmation {
        return Err("password confirmation does not match".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "right-pw", "email is required")]
    #[case("   ", "right-pw", "email is required")]
    #[case("sandra@x.com", "", "password is required")]
    #[case("sandra@x.com", "abc", "password must be at least 4 characters")]
    fn login_form_rejections(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(login_form(email, password).unwrap_err(), expected);
    }

    #[test]
    fn login_form_accepts_minimal() {
        assert!(login_form("sandra@x.com", "1234").is_ok());
    }

    #[test]
    fn staff_password_checks() {
        assert!(staff_password("segredo", "segredo").is_ok());
        assert_eq!(
            staff_password("abc", "abc").unwrap_err(),
            "password must be at least 6 characters"
        );
        assert_eq!(
            staff_password("segredo", "segredos").unwrap_err(),
            "password confirmation does not match"
        );
    }
}
