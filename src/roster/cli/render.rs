//! Screen renderers.
//!
//! Every function here is a pure `&state -> String` map; printing and input
//! belong to `commands`. Layout math is done on display width so wide glyphs
//! in names or companies do not break the columns.

use chrono::Utc;
use roster::app::{App, Page, View};
use roster::config::RosterConfig;
use roster::form::UserForm;
use roster::model::{User, UserDraft};
use roster::settings::{SettingKey, Settings};
use roster::validate::Field;
use unicode_width::UnicodeWidthStr;

use super::styles::THEME;

const TIME_WIDTH: usize = 14;
const LABEL_WIDTH: usize = 10;

/// The whole screen for the current controller state: navigation line, page
/// body, and the confirmation banner while a delete is pending.
pub fn render_screen(app: &App, form: Option<&UserForm>, config: &RosterConfig) -> String {
    let mut out = String::new();
    out.push_str(&render_nav(app.page()));
    out.push('\n');

    let body = match app.page() {
        Page::Dashboard => render_dashboard(app, config),
        Page::Settings => render_settings(app.settings()),
        Page::Users => match (app.view(), form) {
            (View::Form, Some(form)) => render_form(form),
            (View::Detail, _) => match app.selected_user() {
                Some(user) => render_user_detail(user),
                None => render_user_list(app, config),
            },
            _ => render_user_list(app, config),
        },
    };
    out.push_str(&body);

    if let Some(user) = app.pending_delete_user() {
        out.push('\n');
        out.push_str(&format!(
            "{}\n",
            THEME.error.apply_to(format!(
                "Delete {}? This action cannot be undone. (yes/no)",
                user.name
            ))
        ));
    }

    out
}

fn render_nav(active: Page) -> String {
    let entries = [Page::Dashboard, Page::Users, Page::Settings];
    let rendered: Vec<String> = entries
        .iter()
        .map(|page| {
            if *page == active {
                format!("[{}]", THEME.nav_active.apply_to(page))
            } else {
                format!(" {} ", THEME.nav.apply_to(page))
            }
        })
        .collect();
    format!("{}\n", rendered.join(" "))
}

pub fn render_dashboard(app: &App, config: &RosterConfig) -> String {
    let total = app.users().len();
    let active_today = total * 7 / 10;

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", THEME.header.apply_to("Dashboard")));
    out.push_str(&format!(
        "  {:<14} {:<6} {}\n",
        "Total Users",
        total,
        THEME.muted.apply_to("+12% from last month")
    ));
    out.push_str(&format!(
        "  {:<14} {:<6} {}\n",
        "Active Today",
        active_today,
        THEME.muted.apply_to("+5% from yesterday")
    ));

    out.push_str(&format!("\n{}\n", THEME.header.apply_to("Recent Activity")));
    let activity = app.activity();
    if activity.is_empty() {
        out.push_str(&format!("  {}\n", THEME.muted.apply_to("No recent activity.")));
    } else {
        let start = activity.len().saturating_sub(config.activity_limit);
        for notice in &activity[start..] {
            out.push_str(&format!("  - {}\n", notice.content));
        }
    }

    out.push_str(&format!(
        "\n{}\n",
        THEME.muted.apply_to("Commands: users, add, settings, help")
    ));
    out
}

pub fn render_user_list(app: &App, config: &RosterConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", THEME.header.apply_to("Users")));

    let search = app.search();
    if !search.is_empty() {
        out.push_str(&format!(
            "{}\n",
            THEME
                .muted
                .apply_to(format!("Filter: \"{}\" (search to clear)", search))
        ));
    }
    out.push('\n');

    let users = app.visible_users();
    if users.is_empty() {
        if search.is_empty() {
            out.push_str("No users yet. Type add to create one.\n");
        } else {
            out.push_str(&format!("No users match \"{}\".\n", search));
        }
        return out;
    }

    for (i, user) in users.iter().enumerate() {
        out.push_str(&render_user_row(i + 1, user, config.line_width));
    }
    out
}

fn render_user_row(position: usize, user: &User, line_width: usize) -> String {
    let idx_str = format!("{}. ", position);
    let left_prefix = "  ";

    let summary = format!("{}  {}  {}", user.name, user.email, user.company);

    let fixed_width = left_prefix.width() + idx_str.width() + TIME_WIDTH;
    let available = line_width.saturating_sub(fixed_width);

    let summary_display = truncate_to_width(&summary, available);
    let padding = available.saturating_sub(summary_display.width());

    let time_ago = format_time_ago(user.created_at);

    format!(
        "{}{}{}{}{}\n",
        left_prefix,
        THEME.index.apply_to(idx_str),
        summary_display,
        " ".repeat(padding),
        THEME.muted.apply_to(time_ago)
    )
}

pub fn render_user_detail(user: &User) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", THEME.header.apply_to(&user.name)));
    out.push_str("--------------------------------\n");

    let geo = format!("{}, {}", user.address.geo.lat, user.address.geo.lng);
    let rows = [
        ("Email", user.email.as_str()),
        ("Phone", user.phone.as_str()),
        ("Company", user.company.as_str()),
        ("Street", user.address.street.as_str()),
        ("City", user.address.city.as_str()),
        ("Zipcode", user.address.zipcode.as_str()),
        ("Geo", geo.as_str()),
    ];
    for (label, value) in rows {
        out.push_str(&detail_row(label, value));
    }
    out.push_str(&detail_row("Created", &format_time_ago(user.created_at)));
    out.push_str(&detail_row("Updated", &format_time_ago(user.updated_at)));
    out.push_str(&format!(
        "\n{}\n",
        THEME.muted.apply_to("Commands: back, delete <n>, edit <n>")
    ));
    out
}

fn detail_row(label: &str, value: &str) -> String {
    format!(
        "  {:<width$} {}\n",
        THEME.label.apply_to(label),
        value.trim(),
        width = LABEL_WIDTH
    )
}

pub fn render_form(form: &UserForm) -> String {
    let mut out = String::new();
    let header = match form.editing() {
        Some(id) => format!("Edit User {}", id),
        None => "New User".to_string(),
    };
    out.push_str(&format!("{}\n", THEME.header.apply_to(header)));
    out.push_str("--------------------------------\n");

    for field in Field::ALL {
        let value = draft_value(form.draft(), field);
        out.push_str(&format!(
            "  {:<width$} {}\n",
            THEME.label.apply_to(field.key()),
            value,
            width = LABEL_WIDTH
        ));
        if let Some(error) = form.errors().get(&field) {
            out.push_str(&format!(
                "  {:<width$} {}\n",
                "",
                THEME.error.apply_to(format!("! {}", error)),
                width = LABEL_WIDTH
            ));
        }
    }

    out.push_str(&format!(
        "\n{}\n",
        THEME.muted.apply_to("Commands: set <field> <value>, save, back")
    ));
    out
}

fn draft_value(draft: &UserDraft, field: Field) -> &str {
    match field {
        Field::Name => &draft.name,
        Field::Email => &draft.email,
        Field::Phone => &draft.phone,
        Field::Company => &draft.company,
        Field::Street => &draft.address.street,
        Field::City => &draft.address.city,
        Field::Zipcode => &draft.address.zipcode,
        Field::Lat => &draft.address.geo.lat,
        Field::Lng => &draft.address.geo.lng,
    }
}

pub fn render_settings(settings: &Settings) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", THEME.header.apply_to("Settings")));

    out.push_str(&format!("{}\n", THEME.label.apply_to("Notifications")));
    out.push_str(&switch_row(settings, SettingKey::EmailNotifications));
    out.push_str(&switch_row(settings, SettingKey::PushNotifications));
    out.push_str(&switch_row(settings, SettingKey::WeeklyReports));

    out.push_str(&format!("{}\n", THEME.label.apply_to("Appearance")));
    out.push_str(&switch_row(settings, SettingKey::CompactMode));

    out.push_str(&format!("{}\n", THEME.label.apply_to("Security")));
    out.push_str(&switch_row(settings, SettingKey::TwoFactorAuth));
    out.push_str(&format!(
        "  {:<22} {} minutes\n",
        "session timeout", settings.session_timeout_minutes
    ));

    out.push_str(&format!("{}\n", THEME.label.apply_to("System")));
    out.push_str(&switch_row(settings, SettingKey::AutoBackup));
    out.push_str(&format!(
        "  {:<22} {} days\n",
        "data retention", settings.data_retention_days
    ));

    out.push_str(&format!(
        "\n{}\n",
        THEME.muted.apply_to("Commands: toggle <key>, save")
    ));
    out
}

fn switch_row(settings: &Settings, key: SettingKey) -> String {
    let state = if settings.get(key) { "on" } else { "off" };
    format!("  {:<22} {}\n", key.key(), state)
}

pub fn render_help() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", THEME.header.apply_to("Commands")));
    for (usage, desc) in [
        ("dashboard | users | settings", "switch pages"),
        ("add", "open a blank user form"),
        ("view <n> | edit <n> | delete <n>", "act on a list position"),
        ("yes | no", "answer a pending delete"),
        ("search [text]", "filter the list (bare search clears)"),
        ("set <field> <value>", "edit a form field"),
        ("save", "submit the form, or save settings"),
        ("back", "return to the list"),
        ("toggle <key>", "flip a settings switch"),
        ("quit", "exit"),
    ] {
        out.push_str(&format!("  {:<34} {}\n", usage, THEME.muted.apply_to(desc)));
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
