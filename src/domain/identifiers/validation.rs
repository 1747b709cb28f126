/// Validates a resource name as typed on the command line.
///
/// Checks:
/// - Non-empty
/// - Starts with an ASCII letter
/// - Remaining characters are ASCII alphanumeric, '-', or '_'
pub fn validate_resource_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Validates an action identifier.
///
/// Actions become method names, file names, and route symbols, so only
/// `[a-z][a-z0-9_]*` is accepted.
pub fn validate_action_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Validates an UPPER_SNAKE_CASE constant name (`[A-Z][A-Z0-9_]*`).
pub fn validate_constant_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[macro_export]
macro_rules! impl_validated_id {
    ($name:ident, $validator:path, $err_variant:path) => {
        impl $name {
            /// Validate and create a new instance.
            pub fn new(id: &str) -> Result<Self, $crate::domain::AppError> {
                if $validator(id) { Ok(Self(id.to_string())) } else { Err($err_variant(id.to_string())) }
            }

            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}
