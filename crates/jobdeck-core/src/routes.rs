use std::fmt::{Display, Formatter};

/// Endpoint paths consumed by the stores.
///
/// The whole server contract surface lives here; stores never format paths
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Jobs,
    Job(u64),
    Cvs,
    Bookmarks,
    BookmarksFor(u64),
    Bookmark(u64),
    JobAnalytics,
    DashboardSummary,
    Register,
    Login,
    Profile,
}

impl Route {
    pub fn path(self) -> String {
        match self {
            Self::Jobs => String::from("/jobs"),
            Self::Job(id) => format!("/jobs/{id}"),
            Self::Cvs => String::from("/cvs"),
            Self::Bookmarks => String::from("/bookmarks"),
            Self::BookmarksFor(user_id) => format!("/bookmarks/{user_id}"),
            Self::Bookmark(id) => format!("/bookmarks/{id}"),
            Self::JobAnalytics => String::from("/job-analytics"),
            Self::DashboardSummary => String::from("/dashboard/summary"),
            Self::Register => String::from("/register"),
            Self::Login => String::from("/login"),
            Self::Profile => String::from("/profile"),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_paths_render_verbatim() {
        assert_eq!(Route::Jobs.path(), "/jobs");
        assert_eq!(Route::Cvs.path(), "/cvs");
        assert_eq!(Route::Bookmarks.path(), "/bookmarks");
        assert_eq!(Route::JobAnalytics.path(), "/job-analytics");
        assert_eq!(Route::DashboardSummary.path(), "/dashboard/summary");
        assert_eq!(Route::Register.path(), "/register");
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Profile.path(), "/profile");
    }

    #[test]
    fn parameterized_paths_interpolate_ids() {
        assert_eq!(Route::Job(7).path(), "/jobs/7");
        assert_eq!(Route::BookmarksFor(42).path(), "/bookmarks/42");
        assert_eq!(Route::Bookmark(9).path(), "/bookmarks/9");
    }
}
