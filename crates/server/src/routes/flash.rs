//! Flash messages carried across redirects as query-string codes.
//!
//! Handlers redirect with `?notice=<code>` or `?error=<code>`; the next
//! page resolves the code to display copy before rendering. Unknown
//! codes resolve to `None` and render nothing, so a tampered query
//! string cannot put arbitrary text on a page.

use serde::Deserialize;

/// Query parameters for notice/error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub notice: Option<String>,
    pub error: Option<String>,
}

impl MessageQuery {
    /// Resolve both codes to their display copy.
    #[must_use]
    pub fn resolve(&self) -> (Option<&'static str>, Option<&'static str>) {
        (
            self.notice.as_deref().and_then(notice_message),
            self.error.as_deref().and_then(error_message),
        )
    }
}

/// Resolve a notice code to its display copy.
#[must_use]
pub fn notice_message(code: &str) -> Option<&'static str> {
    match code {
        "logged_in" => Some("Logged in."),
        "logged_in_admin" => Some("Logged in as admin."),
        "logged_out" => Some("Logged out."),
        "order_placed" => Some("Order placed."),
        "colleague_added" => Some("Colleague added."),
        "sandwich_added" => Some("Sandwich added."),
        "cart_cleared" => Some("All orders cleared."),
        _ => None,
    }
}

/// Resolve an error code to its display copy.
#[must_use]
pub fn error_message(code: &str) -> Option<&'static str> {
    match code {
        "invalid_credentials" => Some("Invalid name or password."),
        "unknown_selection" => Some("Invalid colleague or sandwich selection."),
        "missing_fields" => Some("Please fill in all required fields."),
        "invalid_name" => Some("Colleague name must be 1-64 characters."),
        "invalid_price" => Some("Price must be a non-negative number."),
        "duplicate_name" => Some("That name is already taken."),
        "unknown_action" => Some("Unknown admin action."),
        "session" => Some("Session error. Please try again."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_notice_codes_resolve() {
        assert_eq!(notice_message("order_placed"), Some("Order placed."));
        assert_eq!(notice_message("cart_cleared"), Some("All orders cleared."));
    }

    #[test]
    fn test_known_error_codes_resolve() {
        assert_eq!(
            error_message("invalid_credentials"),
            Some("Invalid name or password.")
        );
        assert_eq!(
            error_message("duplicate_name"),
            Some("That name is already taken.")
        );
    }

    #[test]
    fn test_unknown_codes_resolve_to_none() {
        assert_eq!(notice_message("<script>"), None);
        assert_eq!(error_message("not_a_code"), None);
        assert_eq!(notice_message(""), None);
    }

    #[test]
    fn test_notice_and_error_namespaces_are_separate() {
        assert_eq!(notice_message("invalid_credentials"), None);
        assert_eq!(error_message("order_placed"), None);
    }

    #[test]
    fn test_query_resolve_pairs_both_codes() {
        let query = MessageQuery {
            notice: Some("logged_in".to_string()),
            error: Some("bogus".to_string()),
        };
        assert_eq!(query.resolve(), (Some("Logged in."), None));

        let empty = MessageQuery {
            notice: None,
            error: None,
        };
        assert_eq!(empty.resolve(), (None, None));
    }
}
