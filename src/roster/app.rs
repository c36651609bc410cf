//! The page controller: a single reducer over the whole UI state.
//!
//! All mutations flow through [`App::apply`]. Views never touch the record
//! collection directly—they dispatch an [`Action`] and consume the returned
//! [`Notice`] queue (the explicit replacement for an ambient toast channel).
//! Everything here is synchronous and single-threaded; there is no terminal
//! state, the controller lives for the process lifetime.

use crate::model::{next_user_id, User, UserDraft};
use crate::search::filter_users;
use crate::settings::{SettingKey, Settings};

/// Top-level section of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Users,
    Settings,
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Page::Dashboard => f.write_str("Dashboard"),
            Page::Users => f.write_str("Users"),
            Page::Settings => f.write_str("Settings"),
        }
    }
}

/// What the users page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Form,
    Detail,
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One entry of the output queue returned by [`App::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub content: String,
}

impl Notice {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            content: content.into(),
        }
    }
}

/// Every mutation the UI can request, as an explicit command object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Page),
    AddUser,
    EditUser(String),
    ViewUser(String),
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
    SaveUser(UserDraft),
    Back,
    SearchChange(String),
    ToggleSetting(SettingKey),
    SaveSettings,
}

pub struct App {
    users: Vec<User>,
    page: Page,
    view: View,
    selected: Option<String>,
    search: String,
    pending_delete: Option<String>,
    settings: Settings,
    activity: Vec<Notice>,
}

impl App {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            page: Page::Dashboard,
            view: View::List,
            selected: None,
            search: String::new(),
            pending_delete: None,
            settings: Settings::default(),
            activity: Vec::new(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The collection as the list view sees it: filtered by the current
    /// search text, original order preserved.
    pub fn visible_users(&self) -> Vec<&User> {
        filter_users(&self.users, &self.search)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected_user(&self) -> Option<&User> {
        let id = self.selected.as_deref()?;
        self.users.iter().find(|u| u.id == id)
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn pending_delete_user(&self) -> Option<&User> {
        let id = self.pending_delete.as_deref()?;
        self.users.iter().find(|u| u.id == id)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Create/update/delete notices, oldest first, for the dashboard feed.
    pub fn activity(&self) -> &[Notice] {
        &self.activity
    }

    /// Applies one action and returns the notices it produced.
    pub fn apply(&mut self, action: Action) -> Vec<Notice> {
        match action {
            Action::Navigate(page) => {
                self.page = page;
                self.view = View::List;
                self.selected = None;
                Vec::new()
            }
            Action::AddUser => {
                self.page = Page::Users;
                self.selected = None;
                self.view = View::Form;
                Vec::new()
            }
            Action::EditUser(id) => self.select(id, View::Form),
            Action::ViewUser(id) => self.select(id, View::Detail),
            Action::RequestDelete(id) => {
                self.pending_delete = Some(id);
                Vec::new()
            }
            Action::ConfirmDelete => self.confirm_delete(),
            Action::CancelDelete => {
                self.pending_delete = None;
                Vec::new()
            }
            Action::SaveUser(draft) => self.save_user(draft),
            Action::Back => {
                self.view = View::List;
                self.selected = None;
                Vec::new()
            }
            Action::SearchChange(text) => {
                self.search = text;
                Vec::new()
            }
            Action::ToggleSetting(key) => {
                let on = self.settings.toggle(key);
                let state = if on { "enabled" } else { "disabled" };
                vec![Notice::info(format!("{} {}", key.key(), state))]
            }
            Action::SaveSettings => vec![Notice::success(
                "Settings saved: your preferences have been updated.",
            )],
        }
    }

    fn select(&mut self, id: String, view: View) -> Vec<Notice> {
        if !self.users.iter().any(|u| u.id == id) {
            return vec![Notice::warning(format!("User not found: {}", id))];
        }
        self.selected = Some(id);
        self.view = view;
        Vec::new()
    }

    fn confirm_delete(&mut self) -> Vec<Notice> {
        // Confirming with nothing pending is a caller bug, not a user error.
        debug_assert!(
            self.pending_delete.is_some(),
            "ConfirmDelete without a pending delete"
        );
        let Some(id) = self.pending_delete.take() else {
            return Vec::new();
        };

        let Some(pos) = self.users.iter().position(|u| u.id == id) else {
            return Vec::new();
        };
        let removed = self.users.remove(pos);

        if self.selected.as_deref() == Some(id.as_str()) {
            self.view = View::List;
            self.selected = None;
        }

        let notice = Notice::success(format!(
            "User deleted: {} has been successfully deleted.",
            removed.name
        ));
        self.activity.push(notice.clone());
        vec![notice]
    }

    fn save_user(&mut self, draft: UserDraft) -> Vec<Notice> {
        // The form controller rejects invalid drafts before dispatching, so
        // reaching this outside the form view is a caller bug.
        debug_assert!(self.view == View::Form, "SaveUser outside the form view");
        if self.view != View::Form {
            return Vec::new();
        }

        let notice = match self.selected.take() {
            Some(id) => match self.users.iter_mut().find(|u| u.id == id) {
                Some(user) => {
                    user.apply_draft(draft);
                    Notice::success(format!(
                        "User updated: {} has been successfully updated.",
                        user.name
                    ))
                }
                None => Notice::warning(format!("User not found: {}", id)),
            },
            None => {
                let id = next_user_id(&self.users);
                let user = User::from_draft(id, draft);
                let name = user.name.clone();
                self.users.insert(0, user);
                Notice::success(format!("User created: {} has been successfully added.", name))
            }
        };

        self.view = View::List;
        self.selected = None;

        if notice.level == NoticeLevel::Success {
            self.activity.push(notice.clone());
        }
        vec![notice]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;

    fn app_with_ids(ids: &[&str]) -> App {
        let users = ids
            .iter()
            .map(|id| fixtures::user(id, &format!("User {}", id), "u@example.com"))
            .collect();
        App::new(users)
    }

    #[test]
    fn initial_state() {
        let app = app_with_ids(&["1", "2"]);
        assert_eq!(app.page(), Page::Dashboard);
        assert_eq!(app.view(), View::List);
        assert!(app.selected_user().is_none());
        assert!(app.pending_delete().is_none());
        assert_eq!(app.users().len(), 2);
        assert_eq!(app.search(), "");
    }

    #[test]
    fn navigate_resets_view_and_selection() {
        let mut app = app_with_ids(&["1"]);
        app.apply(Action::ViewUser("1".into()));
        assert_eq!(app.view(), View::Detail);

        app.apply(Action::Navigate(Page::Settings));
        assert_eq!(app.page(), Page::Settings);
        assert_eq!(app.view(), View::List);
        assert!(app.selected_user().is_none());
    }

    #[test]
    fn add_user_jumps_to_users_form_from_anywhere() {
        let mut app = app_with_ids(&["1"]);
        assert_eq!(app.page(), Page::Dashboard);

        app.apply(Action::AddUser);
        assert_eq!(app.page(), Page::Users);
        assert_eq!(app.view(), View::Form);
        assert!(app.selected_user().is_none());
    }

    #[test]
    fn edit_and_view_select_the_record() {
        let mut app = app_with_ids(&["1", "2"]);

        app.apply(Action::EditUser("2".into()));
        assert_eq!(app.view(), View::Form);
        assert_eq!(app.selected_user().unwrap().id, "2");

        app.apply(Action::ViewUser("1".into()));
        assert_eq!(app.view(), View::Detail);
        assert_eq!(app.selected_user().unwrap().id, "1");
    }

    #[test]
    fn selecting_a_missing_id_warns_and_keeps_state() {
        let mut app = app_with_ids(&["1"]);
        let notices = app.apply(Action::EditUser("42".into()));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Warning);
        assert_eq!(app.view(), View::List);
        assert!(app.selected_user().is_none());
    }

    #[test]
    fn request_then_confirm_delete_removes_exactly_one() {
        let mut app = app_with_ids(&["1", "2", "3"]);

        app.apply(Action::RequestDelete("2".into()));
        assert_eq!(app.pending_delete(), Some("2"));

        let notices = app.apply(Action::ConfirmDelete);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert!(app.pending_delete().is_none());

        let ids: Vec<&str> = app.users().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn cancel_delete_clears_pending_and_keeps_record() {
        let mut app = app_with_ids(&["1"]);
        app.apply(Action::RequestDelete("1".into()));
        app.apply(Action::CancelDelete);
        assert!(app.pending_delete().is_none());
        assert_eq!(app.users().len(), 1);
    }

    #[test]
    fn deleting_the_record_open_in_detail_returns_to_list() {
        let mut app = app_with_ids(&["1", "2"]);
        app.apply(Action::Navigate(Page::Users));
        app.apply(Action::ViewUser("2".into()));
        app.apply(Action::RequestDelete("2".into()));
        app.apply(Action::ConfirmDelete);

        assert_eq!(app.view(), View::List);
        assert!(app.selected_user().is_none());
    }

    #[test]
    fn deleting_another_record_keeps_the_detail_view() {
        let mut app = app_with_ids(&["1", "2"]);
        app.apply(Action::Navigate(Page::Users));
        app.apply(Action::ViewUser("1".into()));
        app.apply(Action::RequestDelete("2".into()));
        app.apply(Action::ConfirmDelete);

        assert_eq!(app.view(), View::Detail);
        assert_eq!(app.selected_user().unwrap().id, "1");
    }

    #[test]
    fn save_creates_with_next_numeric_id_and_prepends() {
        let mut app = app_with_ids(&["1", "2", "5"]);
        app.apply(Action::AddUser);

        let notices = app.apply(Action::SaveUser(fixtures::draft("New", "new@example.com")));
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(app.view(), View::List);

        let first = &app.users()[0];
        assert_eq!(first.id, "6");
        assert_eq!(first.name, "New");
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(app.users().len(), 4);
    }

    #[test]
    fn save_on_empty_collection_assigns_id_one() {
        let mut app = App::new(Vec::new());
        app.apply(Action::AddUser);
        app.apply(Action::SaveUser(fixtures::draft("First", "f@example.com")));
        assert_eq!(app.users()[0].id, "1");
    }

    #[test]
    fn save_updates_in_place_preserving_id_and_created_at() {
        let mut app = app_with_ids(&["1", "2"]);
        let created = app.users()[1].created_at;
        let previous_updated = app.users()[1].updated_at;

        app.apply(Action::EditUser("2".into()));
        app.apply(Action::SaveUser(fixtures::draft(
            "Renamed",
            "renamed@example.com",
        )));

        assert_eq!(app.view(), View::List);
        assert!(app.selected_user().is_none());
        assert_eq!(app.users().len(), 2);

        let user = app.users().iter().find(|u| u.id == "2").unwrap();
        assert_eq!(user.name, "Renamed");
        assert_eq!(user.created_at, created);
        assert!(user.updated_at >= previous_updated);
        // Order unchanged on update: "1" still first.
        assert_eq!(app.users()[0].id, "1");
    }

    #[test]
    fn back_returns_to_list() {
        let mut app = app_with_ids(&["1"]);
        app.apply(Action::ViewUser("1".into()));
        app.apply(Action::Back);
        assert_eq!(app.view(), View::List);
        assert!(app.selected_user().is_none());
    }

    #[test]
    fn search_change_keeps_page_and_view() {
        let mut app = app_with_ids(&["1"]);
        app.apply(Action::Navigate(Page::Users));
        app.apply(Action::ViewUser("1".into()));
        app.apply(Action::SearchChange("user".into()));

        assert_eq!(app.page(), Page::Users);
        assert_eq!(app.view(), View::Detail);
        assert_eq!(app.search(), "user");
    }

    #[test]
    fn visible_users_follow_the_search_text() {
        let mut app = App::new(vec![
            fixtures::user("1", "Jane Smith", "jane@example.com"),
            fixtures::user("2", "John Doe", "john@example.com"),
        ]);
        app.apply(Action::SearchChange("jane".into()));
        let visible = app.visible_users();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn mutations_feed_the_activity_log() {
        let mut app = app_with_ids(&["1"]);
        app.apply(Action::AddUser);
        app.apply(Action::SaveUser(fixtures::draft("New", "new@example.com")));
        app.apply(Action::RequestDelete("1".into()));
        app.apply(Action::ConfirmDelete);

        let activity = app.activity();
        assert_eq!(activity.len(), 2);
        assert!(activity[0].content.contains("User created"));
        assert!(activity[1].content.contains("User deleted"));
    }

    #[test]
    fn toggle_setting_reports_the_new_state() {
        let mut app = app_with_ids(&[]);
        let notices = app.apply(Action::ToggleSetting(SettingKey::PushNotifications));
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert!(notices[0].content.contains("enabled"));
        assert!(app.settings().push_notifications);
    }
}
