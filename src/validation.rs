//! Registration input validation
//!
//! Shared validators for values that flow through module registration and
//! the shell's account forms: module names, contact fields, and locale
//! direction.

use regex::Regex;

/// Languages written right-to-left (primary subtags)
const RTL_LANGUAGES: &[&str] = &["ar", "dv", "fa", "ha", "he", "ks", "ku", "ps", "ur", "yi"];

/// Validator for registration form fields
pub struct InputValidator {
    /// Email: non-empty local part and domain with at least one dot
    email_re: Regex,
    /// Phone: optional leading +, digits with common separators
    phone_re: Regex,
    /// Scoped module name: @scope/name with lowercase URL-safe segments
    module_name_re: Regex,
}

impl InputValidator {
    pub fn new() -> Self {
        Self {
            // Match: local@domain.tld, no whitespace or extra @
            email_re: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap(),
            // Match: +14155550101, 0151 2345678, (415) 555-0101
            phone_re: Regex::new(r"^\+?[0-9][0-9 ().-]{5,18}[0-9]$").unwrap(),
            // Match: @scope/name
            module_name_re: Regex::new(r"^@[a-z0-9][a-z0-9._-]*/[a-z0-9][a-z0-9._-]*$").unwrap(),
        }
    }

    pub fn is_valid_email(&self, value: &str) -> bool {
        self.email_re.is_match(value)
    }

    pub fn is_valid_phone(&self, value: &str) -> bool {
        self.phone_re.is_match(value)
    }

    /// Check a module name against the scoped `@scope/name` convention
    pub fn is_valid_module_name(&self, value: &str) -> bool {
        self.module_name_re.is_match(value)
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a locale renders right-to-left
///
/// Matches on the primary language subtag, so "ar", "ar-EG" and "fa_IR"
/// are all detected.
pub fn is_rtl_locale(locale: &str) -> bool {
    let primary = locale.split(['-', '_']).next().unwrap_or("");
    RTL_LANGUAGES.iter().any(|l| primary.eq_ignore_ascii_case(l))
}
