//! Keyboard input
//!
//! Reads stdin line by line on a dedicated thread and forwards each mapped
//! key to the frame loop. Terminals are line-buffered, so keys take effect
//! on Enter; several keys on one line run in order.

use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};

use cadence_core::Event;

use crate::channels::{COMMANDS, DISPOSE};

/// Key bindings, shown at startup
pub const HELP: &str = "keys: s start, x stop, p play, z pause, n next, b back, q quit (then Enter)";

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Command(Event),
    Quit,
}

/// Map a key to its action (case-insensitive)
pub fn parse_key(key: char) -> Option<Key> {
    let action = match key.to_ascii_lowercase() {
        's' => Key::Command(Event::Start),
        'x' => Key::Command(Event::Stop),
        'p' => Key::Command(Event::Play),
        'z' => Key::Command(Event::Pause),
        'n' => Key::Command(Event::NextStep),
        'b' => Key::Command(Event::PreviousStep),
        'q' => Key::Quit,
        _ => return None,
    };
    Some(action)
}

/// Start the reader thread
pub fn spawn_reader() -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin".into())
        .spawn(read_loop)
}

fn read_loop() {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("stdin read failed: {}", err);
                return;
            }
        };

        for key in line.chars() {
            match parse_key(key) {
                Some(Key::Command(event)) => {
                    if COMMANDS.try_send(event).is_err() {
                        warn!("command queue full, dropping {:?}", event);
                    }
                }
                Some(Key::Quit) => {
                    info!("quit requested");
                    DISPOSE.signal(());
                    return;
                }
                None if key.is_whitespace() => {}
                None => debug!("unmapped key {:?}", key),
            }
        }
    }

    // Keep running without input; the workout can still finish on its own
    debug!("stdin closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_keys() {
        assert_eq!(parse_key('s'), Some(Key::Command(Event::Start)));
        assert_eq!(parse_key('x'), Some(Key::Command(Event::Stop)));
        assert_eq!(parse_key('p'), Some(Key::Command(Event::Play)));
        assert_eq!(parse_key('z'), Some(Key::Command(Event::Pause)));
        assert_eq!(parse_key('n'), Some(Key::Command(Event::NextStep)));
        assert_eq!(parse_key('b'), Some(Key::Command(Event::PreviousStep)));
    }

    #[test]
    fn test_quit_and_case() {
        assert_eq!(parse_key('q'), Some(Key::Quit));
        assert_eq!(parse_key('N'), Some(Key::Command(Event::NextStep)));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(parse_key(' '), None);
        assert_eq!(parse_key('?'), None);
        assert_eq!(parse_key('é'), None);
    }

    #[test]
    fn test_every_bound_key_is_a_user_event() {
        for key in "sxpznb".chars() {
            match parse_key(key) {
                Some(Key::Command(event)) => assert!(event.is_user_event()),
                other => panic!("{:?} mapped to {:?}", key, other),
            }
        }
    }
}
