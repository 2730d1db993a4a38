use std::sync::LazyLock;

use regex::Regex;

/// Longest address accepted, per RFC 5321.
pub const MAX_EMAIL_LEN: usize = 254;

// Local part: alphanumeric runs joined by single `.`, `_`, `+` or `-`.
// Domain: alphanumeric labels joined by single `.` or `-`, ending in a 2+ letter TLD.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+(?:[._+-][A-Za-z0-9]+)*@[A-Za-z0-9]+(?:[.-][A-Za-z0-9]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Returns true when `email` is present, at most [`MAX_EMAIL_LEN`] bytes long
/// and shaped like `local@domain.tld`.
pub fn is_valid_email(email: Option<&str>) -> bool {
    let Some(email) = email else {
        return false;
    };
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }
    EMAIL_PATTERN.is_match(email)
}

/// Whether an activity with `current` participants can take one more.
pub fn has_capacity(current: usize, max: usize) -> bool {
    current < max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for email in [
            "alex@mergington.edu",
            "user+tag@domain.com",
            "first.last@school.org",
            "first_last-2@sub.domain.co",
            "a@b.io",
            "x@my-school.edu",
        ] {
            assert!(is_valid_email(Some(email)), "{email} should be accepted");
        }
    }

    #[test]
    fn rejects_bad_separators_in_local_part() {
        for email in [
            "user..name@domain.com",
            ".user@domain.com",
            "user.@domain.com",
            "+user@domain.com",
            "user+-tag@domain.com",
        ] {
            assert!(!is_valid_email(Some(email)), "{email} should be rejected");
        }
    }

    #[test]
    fn rejects_malformed_domains() {
        for email in [
            "user@domain",
            "user@domain.c",
            "user@.domain.com",
            "user@domain..com",
            "user@domain.com.",
            "user@-domain.com",
            "user@domain.c0m",
            "userdomain.com",
            "user@@domain.com",
            "us er@domain.com",
            "<script>@x.com",
        ] {
            assert!(!is_valid_email(Some(email)), "{email} should be rejected");
        }
    }

    #[test]
    fn rejects_missing_and_empty() {
        assert!(!is_valid_email(None));
        assert!(!is_valid_email(Some("")));
    }

    #[test]
    fn enforces_length_bound() {
        let domain = "@example.com";
        let at_limit = format!("{}{}", "a".repeat(MAX_EMAIL_LEN - domain.len()), domain);
        assert_eq!(at_limit.len(), MAX_EMAIL_LEN);
        assert!(is_valid_email(Some(&at_limit)));

        let over = format!("a{at_limit}");
        assert!(!is_valid_email(Some(&over)));
    }

    #[test]
    fn capacity_threshold() {
        assert!(has_capacity(0, 1));
        assert!(has_capacity(11, 12));
        assert!(!has_capacity(12, 12));
        assert!(!has_capacity(13, 12));
        assert!(!has_capacity(0, 0));
    }
}
