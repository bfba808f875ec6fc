use crate::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field.to_string()));
    }
    Ok(())
}

pub fn password(value: &str) -> Result<(), ValidationError> {
    required("Password", value)?;
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    required("Email", value)?;
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') =>
        {
            Ok(())
        }
        _ => Err(ValidationError::InvalidEmail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_missing() {
        assert_eq!(
            required("Title", "  "),
            Err(ValidationError::Required("Title".into()))
        );
    }

    #[test]
    fn password_length_counts_chars() {
        assert!(password("ääääää").is_ok());
        assert_eq!(
            password("abcde"),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
    }

    #[test]
    fn email_shapes() {
        assert!(email("anna@example.com").is_ok());
        assert_eq!(email("anna"), Err(ValidationError::InvalidEmail));
        assert_eq!(email("@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(email("anna@.com"), Err(ValidationError::InvalidEmail));
    }
}
