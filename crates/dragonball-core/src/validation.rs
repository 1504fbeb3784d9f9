//! Local credential checks.
//!
//! Pure functions, no I/O. Front ends use them to decide whether a login
//! attempt is worth sending.

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 4;

/// True iff `user` contains both `@` and `.`.
pub fn is_user_valid(user: &str) -> bool {
    user.contains('@') && user.contains('.')
}

/// True iff `pass` is at least [`MIN_PASSWORD_LEN`] characters long.
pub fn is_pass_valid(pass: &str) -> bool {
    pass.chars().count() >= MIN_PASSWORD_LEN
}
