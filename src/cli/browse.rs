//! Interactive phone list.
//!
//! Type to filter, arrows to move, tab to toggle selection, enter to open
//! a contact, ctrl-n to add one, esc to quit.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::cli::add::prompt_new_contact;
use crate::cli::list::{print_contact_row, print_table_header};
use crate::cli::show::print_contact;
use crate::cli::ui::{clear_screen, visible_lines, wait_for_key, RawModeGuard, StatusBar};
use crate::screen::{PhoneScreen, ScreenAction, SCREEN_TITLE};
use crate::store::{ContactStore, MemoryStore};

/// What a key press asks the browse loop to do
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    Redraw,
    Action(ScreenAction),
}

fn lock(screen: &Mutex<PhoneScreen>) -> MutexGuard<'_, PhoneScreen> {
    screen.lock().unwrap_or_else(|e| e.into_inner())
}

/// Apply a key to the screen state
fn handle_key(screen: &mut PhoneScreen, key: KeyEvent) -> Command {
    // AltGr arrives as CONTROL | ALT on Windows and produces text.
    let is_control = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);
    if is_control {
        return match key.code {
            KeyCode::Char('n') => Command::Action(screen.create_new()),
            KeyCode::Char('c') => Command::Quit,
            KeyCode::Char('u') => {
                screen.clear_query();
                Command::Redraw
            }
            _ => Command::Redraw,
        };
    }

    match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Up => {
            screen.move_up();
            Command::Redraw
        }
        KeyCode::Down => {
            screen.move_down();
            Command::Redraw
        }
        KeyCode::Backspace => {
            screen.pop_char();
            Command::Redraw
        }
        KeyCode::Tab => screen
            .toggle_current()
            .map(Command::Action)
            .unwrap_or(Command::Redraw),
        KeyCode::Enter => screen
            .activate_current()
            .map(Command::Action)
            .unwrap_or(Command::Redraw),
        KeyCode::Char(c) => {
            screen.push_char(c);
            Command::Redraw
        }
        _ => Command::Redraw,
    }
}

fn render(screen: &PhoneScreen) -> Result<()> {
    clear_screen()?;
    println!("{}\n", SCREEN_TITLE);

    if !screen.has_phones() {
        println!("No contacts. [ctrl-n] to add one, [esc] to quit.");
        return Ok(());
    }

    println!("search: {}\n", screen.query());

    let visible = screen.visible();
    let rows = visible_lines();
    let cursor = screen.cursor();
    let scroll = (cursor + 1).saturating_sub(rows);

    print_table_header();
    for (i, record) in visible.iter().enumerate().skip(scroll).take(rows) {
        print_contact_row(record, i == cursor);
    }

    let position = if visible.is_empty() { 0 } else { cursor + 1 };
    let bar = StatusBar::new()
        .counter(position, visible.len())
        .action("tab", "select")
        .action("enter", "open")
        .action("ctrl-n", "new")
        .action("esc", "quit");
    println!("\n{}", bar.render());
    Ok(())
}

/// Run the interactive screen against a store. Changes stay in memory.
pub fn run_browse(store: &mut MemoryStore) -> Result<()> {
    let screen = Arc::new(Mutex::new(PhoneScreen::new()));
    let sink = Arc::clone(&screen);
    let subscription = store.subscribe(move |records| lock(&sink).set_phones(records.to_vec()));

    loop {
        render(&lock(&screen))?;

        let key = {
            let _guard = RawModeGuard::new()?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => key,
                _ => continue,
            }
        };

        let command = handle_key(&mut lock(&screen), key);
        match command {
            Command::Quit => break,
            Command::Redraw => {}
            Command::Action(ScreenAction::ToggleSelected(id)) => store.toggle_selected(id)?,
            Command::Action(ScreenAction::Activate(id)) => {
                if let Some(record) = store.get(id) {
                    clear_screen()?;
                    print_contact(record);
                    println!("\n[enter] back");
                    wait_for_key()?;
                }
            }
            Command::Action(ScreenAction::CreateNew) => {
                clear_screen()?;
                println!("New contact\n");
                if let Some(record) = prompt_new_contact()? {
                    store.insert(record);
                    println!("Created.");
                }
            }
        }
    }

    store.unsubscribe(subscription);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactRecord;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn setup_screen() -> PhoneScreen {
        let mut screen = PhoneScreen::new();
        screen.set_phones(vec![
            ContactRecord::new(1, "A", "", "Ant", "0000000000", "Mobile"),
            ContactRecord::new(2, "B", "", "Bird", "1111111111", "Home"),
        ]);
        screen
    }

    #[test]
    fn test_typing_updates_query() {
        let mut screen = setup_screen();
        assert_eq!(handle_key(&mut screen, key(KeyCode::Char('b'))), Command::Redraw);
        assert_eq!(screen.query(), "b");
        handle_key(&mut screen, key(KeyCode::Backspace));
        assert_eq!(screen.query(), "");
    }

    #[test]
    fn test_q_is_typed_not_quit() {
        let mut screen = setup_screen();
        assert_eq!(handle_key(&mut screen, key(KeyCode::Char('q'))), Command::Redraw);
        assert_eq!(screen.query(), "q");
        assert_eq!(handle_key(&mut screen, key(KeyCode::Esc)), Command::Quit);
    }

    #[test]
    fn test_actions() {
        let mut screen = setup_screen();
        handle_key(&mut screen, key(KeyCode::Down));
        assert_eq!(
            handle_key(&mut screen, key(KeyCode::Enter)),
            Command::Action(ScreenAction::Activate(2))
        );
        assert_eq!(
            handle_key(&mut screen, key(KeyCode::Tab)),
            Command::Action(ScreenAction::ToggleSelected(2))
        );
        assert_eq!(
            handle_key(
                &mut screen,
                KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)
            ),
            Command::Action(ScreenAction::CreateNew)
        );
    }

    #[test]
    fn test_altgr_character_is_typed() {
        let mut screen = setup_screen();
        let altgr = KeyEvent::new(
            KeyCode::Char('@'),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        );
        assert_eq!(handle_key(&mut screen, altgr), Command::Redraw);
        assert_eq!(screen.query(), "@");
    }

    #[test]
    fn test_enter_with_no_results() {
        let mut screen = setup_screen();
        for c in "zzz".chars() {
            handle_key(&mut screen, key(KeyCode::Char(c)));
        }
        assert_eq!(handle_key(&mut screen, key(KeyCode::Enter)), Command::Redraw);
    }
}
