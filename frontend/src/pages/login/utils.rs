pub const PASSWORD_MIN_CHARS: usize = 8;
pub const PASSWORD_MAX_CHARS: usize = 16;

pub const LOGIN_SUCCESS: &str = "Logged in successfully!";
pub const LOGIN_FAILURE: &str = "Login failed. Please check your credentials.";
pub const REDIRECT_DELAY_MS: u32 = 1000;

/// `local@domain.tld`, where the tld is at least two letters.
pub fn validate_email(raw: &str) -> Result<(), String> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Email is required!".into());
    }
    let invalid = || -> Result<(), String> { Err("Invalid email address!".into()) };
    let Some((local, domain)) = email.split_once('@') else {
        return invalid();
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return invalid();
    };
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    if local_ok && host_ok && tld_ok {
        Ok(())
    } else {
        invalid()
    }
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("You must specify a password!".into());
    }
    let length = password.chars().count();
    if length < PASSWORD_MIN_CHARS {
        return Err("Password must be more than 8 characters!".into());
    }
    if length > PASSWORD_MAX_CHARS + 1 {
        return Err("Password must be less than 17 characters!".into());
    }
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_symbol = password
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && c != '_' && !c.is_whitespace());
    let has_space = password.chars().any(char::is_whitespace);
    if length > PASSWORD_MAX_CHARS || !(has_digit && has_lower && has_upper && has_symbol) || has_space {
        return Err(
            "Password must contain at least one number, one special character and one uppercase character!"
                .into(),
        );
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn check(email: &str, password: &str) -> Self {
        Self {
            email: validate_email(email).err(),
            password: validate_password(password).err(),
        }
    }

    pub fn is_clear(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}
