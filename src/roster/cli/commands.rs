//! The interactive shell: one command per stdin line, full screen redraw
//! after every state change.
//!
//! The shell owns two things the controller deliberately does not: the open
//! form buffer, and the mapping from 1-based list positions to record ids.
//! Everything else is dispatch an `Action`, redraw, print the notices.

use clap::Parser;
use colored::*;
use roster::app::{Action, App, Notice, NoticeLevel, Page, View};
use roster::config::{resolve_config_dir, RosterConfig};
use roster::error::Result;
use roster::form::UserForm;
use roster::seed::seed_users;
use roster::settings::SettingKey;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use super::args::Cli;
use super::input::{parse_input, Input};
use super::render;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }

    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    let config = RosterConfig::load(&config_dir)?;

    let users = if cli.empty { Vec::new() } else { seed_users()? };
    let mut app = App::new(users);
    let mut form: Option<UserForm> = None;

    print!("{}", render::render_screen(&app, form.as_ref(), &config));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_input(line) {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => print!("{}", render::render_help()),
            Ok(input) => handle(&mut app, &mut form, input, &config),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn handle(app: &mut App, form: &mut Option<UserForm>, input: Input, config: &RosterConfig) {
    let notices = match input {
        Input::Go(page) => {
            *form = None;
            // Leaving the page abandons an unanswered confirmation.
            if app.pending_delete().is_some() {
                app.apply(Action::CancelDelete);
            }
            app.apply(Action::Navigate(page))
        }
        Input::Add => {
            let notices = app.apply(Action::AddUser);
            *form = Some(UserForm::create());
            notices
        }
        Input::Edit(position) => match visible_id(app, position) {
            Some(id) => {
                let notices = app.apply(Action::EditUser(id));
                *form = app.selected_user().map(UserForm::edit);
                notices
            }
            None => no_user_at(position),
        },
        Input::View(position) => match visible_id(app, position) {
            Some(id) => {
                // Switching to the detail view discards any open form.
                *form = None;
                app.apply(Action::ViewUser(id))
            }
            None => no_user_at(position),
        },
        Input::Delete(position) => match visible_id(app, position) {
            Some(id) => app.apply(Action::RequestDelete(id)),
            None => no_user_at(position),
        },
        Input::Yes => {
            if app.pending_delete().is_some() {
                let notices = app.apply(Action::ConfirmDelete);
                // Deleting the record being edited closes its form too.
                if app.view() != View::Form {
                    *form = None;
                }
                notices
            } else {
                vec![Notice::warning("No delete pending")]
            }
        }
        Input::No => {
            if app.pending_delete().is_some() {
                app.apply(Action::CancelDelete)
            } else {
                vec![Notice::warning("No delete pending")]
            }
        }
        Input::Search(text) => app.apply(Action::SearchChange(text)),
        Input::Set(field, value) => match form.as_mut() {
            Some(form) => match form.set_field(&field, &value) {
                Ok(()) => Vec::new(),
                Err(e) => vec![Notice::error(e.to_string())],
            },
            None => vec![Notice::warning("No form open")],
        },
        Input::Save => save(app, form),
        Input::Back => {
            *form = None;
            app.apply(Action::Back)
        }
        Input::Toggle(key) => match SettingKey::from_str(&key) {
            Ok(key) => app.apply(Action::ToggleSetting(key)),
            Err(e) => vec![Notice::error(e.to_string())],
        },
        // Handled by the loop before dispatch.
        Input::Help | Input::Quit => Vec::new(),
    };

    print!("{}", render::render_screen(app, form.as_ref(), config));
    print_notices(&notices);
}

fn save(app: &mut App, form: &mut Option<UserForm>) -> Vec<Notice> {
    if let Some(open) = form.as_mut() {
        match open.submit() {
            Some(draft) => {
                *form = None;
                app.apply(Action::SaveUser(draft))
            }
            // Errors render inline with the form on the next redraw.
            None => vec![Notice::error("Please fix the highlighted fields")],
        }
    } else if app.page() == Page::Settings {
        app.apply(Action::SaveSettings)
    } else {
        vec![Notice::warning("Nothing to save")]
    }
}

fn visible_id(app: &App, position: usize) -> Option<String> {
    app.visible_users().get(position - 1).map(|u| u.id.clone())
}

fn no_user_at(position: usize) -> Vec<Notice> {
    vec![Notice::warning(format!("No user at position {}", position))]
}

fn print_notices(notices: &[Notice]) {
    for notice in notices {
        match notice.level {
            NoticeLevel::Info => println!("{}", notice.content.dimmed()),
            NoticeLevel::Success => println!("{}", notice.content.green()),
            NoticeLevel::Warning => println!("{}", notice.content.yellow()),
            NoticeLevel::Error => println!("{}", notice.content.red()),
        }
    }
}
