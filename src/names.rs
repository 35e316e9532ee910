pub const LOGIN_URL: &str = "/login";
pub const LOGOUT_URL: &str = "/logout";
pub const GENERATE_URL: &str = "/generate";

pub const ADMIN_URL: &str = "/admin";
pub const ADMIN_USERS_URL: &str = "/admin/users";
pub const ADMIN_REPORTS_URL: &str = "/admin/reports";
pub const ADMIN_ISSUES_URL: &str = "/admin/issues";

pub const SESSION_COOKIE_NAME: &str = "session";

pub fn download_url(filename: &str) -> String {
    format!("/download/{filename}")
}

pub fn delete_user_url(username: &str) -> String {
    format!("/admin/users/{username}/delete")
}

// Builder form bounds
pub const MIN_QUESTION_COUNT: usize = 1;
pub const MAX_QUESTION_COUNT: usize = 50;
pub const DEFAULT_QUESTION_COUNT: usize = 5;
pub const MAX_OPTION_COUNT: usize = 8;

/// Destination filename for a persisted bank, keyed by what was requested.
/// Catalog keys may contain spaces; the filename slugs them away.
pub fn bank_filename(topic: &str, difficulty: &str) -> String {
    let slug = |s: &str| s.to_lowercase().replace(' ', "-");
    format!("question_bank_{}_{}.json", slug(topic), slug(difficulty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_filename_slugs_spaces() {
        assert_eq!(
            bank_filename("Data Science", "medium"),
            "question_bank_data-science_medium.json"
        );
    }
}
