//! Constants shared by the validation rules and the terminal front end

/// File the terminal front end logs into
pub const LOG_FILE: &str = "./signup.log";

/// Minimum number of characters of a password
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A password must contain at least one of these characters
pub const SPECIAL_CHARACTERS: &str = " `!@#$%^&*()_+-=[]{};':\"\\|,.<>/?~";

/// `local-part@domain.tld`, word characters with optional `.`/`-` separators
/// and a 2 to 3 characters top-level label
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$";

/// Literal an email address must contain on top of the pattern
pub const EMAIL_REQUIRED_SUFFIX: &str = ".com";
