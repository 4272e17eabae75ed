use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, BufRead, Write};

use fincalc_core::Quantity;

use super::prompt::read_line;

/// How the main menu takes its selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStyle {
    /// Typed option number, one line at a time. Works on any input stream.
    Numbered,
    /// Raw-mode terminal with a movable `->` marker.
    ArrowKeys,
}

/// A selection from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate(Quantity),
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Calculate(Quantity::FutureValue),
        MenuChoice::Calculate(Quantity::PresentValue),
        MenuChoice::Calculate(Quantity::InterestRate),
        MenuChoice::Calculate(Quantity::NumberOfPeriods),
        MenuChoice::Exit,
    ];

    pub fn title(self) -> String {
        match self {
            MenuChoice::Calculate(q) => format!("Calculate {}", q.label()),
            MenuChoice::Exit => "Exit".to_string(),
        }
    }
}

pub fn display<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n===== FinCalc-CLI =====")?;
    writeln!(out, "Select an option by entering the corresponding number:\n")?;
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, choice.title())?;
    }
    writeln!(out)
}

/// Show the menu until a valid option number is entered.
pub fn select<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<MenuChoice> {
    let count = MenuChoice::ALL.len();
    loop {
        display(out)?;
        let line = read_line(input, out, &format!("Enter your choice (1-{count}): "))?;
        match line.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(MenuChoice::ALL[n - 1]),
            Ok(_) => writeln!(
                out,
                "Invalid choice. Please enter a number between 1 and {count}."
            )?,
            Err(_) => writeln!(out, "Invalid input. Please enter a number.")?,
        }
    }
}

/// Highlighted row of the arrow-key menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuCursor {
    selected: usize,
}

impl MenuCursor {
    pub fn selected(self) -> usize {
        self.selected
    }

    /// Apply one key press. Returns the confirmed choice, if any.
    ///
    /// Up/Down move the marker with wrap-around, Enter confirms it, a digit
    /// selects that option directly, Esc or Ctrl-C exits.
    pub fn handle(&mut self, key: KeyEvent) -> Option<MenuChoice> {
        let count = MenuChoice::ALL.len();
        match key.code {
            KeyCode::Up => {
                self.selected = (self.selected + count - 1) % count;
                None
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1) % count;
                None
            }
            KeyCode::Enter => Some(MenuChoice::ALL[self.selected]),
            KeyCode::Esc => Some(MenuChoice::Exit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(MenuChoice::Exit)
            }
            KeyCode::Char(c) => match c.to_digit(10).map(|d| d as usize) {
                Some(n) if (1..=count).contains(&n) => {
                    self.selected = n - 1;
                    Some(MenuChoice::ALL[self.selected])
                }
                _ => None,
            },
            _ => None,
        }
    }
}

/// Clear the screen and draw the menu with the marker on the selected row.
/// Lines end in `\r\n` because the terminal is in raw mode.
pub fn render_cursor<W: Write>(out: &mut W, cursor: MenuCursor) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(
        out,
        "Use the arrow keys or number keys to select an option, then press ENTER to confirm.\r\n\r\n"
    )?;
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        if i == cursor.selected {
            write!(out, "-> ({}) - {}\r\n", i + 1, choice.title())?;
        } else {
            write!(out, "   {}\r\n", choice.title())?;
        }
    }
    out.flush()
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Arrow-key menu on the controlling terminal. Raw mode is restored before
/// returning, including on error.
pub fn select_with_keys<W: Write>(out: &mut W) -> io::Result<MenuChoice> {
    let mut cursor = MenuCursor::default();
    let choice = {
        let _raw = RawModeGuard::enable()?;
        loop {
            render_cursor(out, cursor)?;
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(choice) = cursor.handle(key) {
                    break choice;
                }
            }
        }
    };
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()?;
    Ok(choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    const MENU: &str = "\n===== FinCalc-CLI =====\n\
        Select an option by entering the corresponding number:\n\n\
        1. Calculate Future Value\n\
        2. Calculate Present Value\n\
        3. Calculate Interest Rate\n\
        4. Calculate Number of Periods\n\
        5. Exit\n\n\
        Enter your choice (1-5): ";

    #[test]
    fn test_select_returns_choice() {
        let mut input = Cursor::new(b"3\n".to_vec());
        let mut out = Vec::new();
        let choice = select(&mut input, &mut out).unwrap();
        assert_eq!(choice, MenuChoice::Calculate(Quantity::InterestRate));
        assert_eq!(String::from_utf8(out).unwrap(), MENU);
    }

    #[test]
    fn test_select_redisplays_after_bad_input() {
        let mut input = Cursor::new(b"seven\n9\n5\n".to_vec());
        let mut out = Vec::new();
        let choice = select(&mut input, &mut out).unwrap();
        assert_eq!(choice, MenuChoice::Exit);

        let expected = format!(
            "{MENU}Invalid input. Please enter a number.\n\
             {MENU}Invalid choice. Please enter a number between 1 and 5.\n\
             {MENU}"
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    fn press(cursor: &mut MenuCursor, code: KeyCode) -> Option<MenuChoice> {
        cursor.handle(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut cursor = MenuCursor::default();
        assert_eq!(press(&mut cursor, KeyCode::Up), None);
        assert_eq!(cursor.selected(), 4);
        assert_eq!(press(&mut cursor, KeyCode::Down), None);
        assert_eq!(cursor.selected(), 0);
        press(&mut cursor, KeyCode::Down);
        press(&mut cursor, KeyCode::Down);
        assert_eq!(
            press(&mut cursor, KeyCode::Enter),
            Some(MenuChoice::Calculate(Quantity::InterestRate))
        );
    }

    #[test]
    fn test_cursor_digit_selects_immediately() {
        let mut cursor = MenuCursor::default();
        assert_eq!(
            press(&mut cursor, KeyCode::Char('4')),
            Some(MenuChoice::Calculate(Quantity::NumberOfPeriods))
        );
        assert_eq!(cursor.selected(), 3);
        assert_eq!(press(&mut cursor, KeyCode::Char('9')), None);
        assert_eq!(press(&mut cursor, KeyCode::Char('0')), None);
        assert_eq!(press(&mut cursor, KeyCode::Char('x')), None);
    }

    #[test]
    fn test_cursor_escape_and_ctrl_c_exit() {
        let mut cursor = MenuCursor::default();
        assert_eq!(press(&mut cursor, KeyCode::Esc), Some(MenuChoice::Exit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(cursor.handle(ctrl_c), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_render_marks_selected_row() {
        let mut cursor = MenuCursor::default();
        press(&mut cursor, KeyCode::Down);
        let mut out = Vec::new();
        render_cursor(&mut out, cursor).unwrap();
        let text = String::from_utf8(out).unwrap();

        let body = text
            .split_once("Use the arrow keys")
            .map(|(_, rest)| rest)
            .unwrap();
        assert_eq!(
            body,
            " or number keys to select an option, then press ENTER to confirm.\r\n\r\n\
             \x20  Calculate Future Value\r\n\
             -> (2) - Calculate Present Value\r\n\
             \x20  Calculate Interest Rate\r\n\
             \x20  Calculate Number of Periods\r\n\
             \x20  Exit\r\n"
        );
    }
}
