use crate::navigation::Swipe;

/// One line of user input, already classified.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Swipe(Swipe),
    /// Raw touch coordinates; turned into a swipe only past the minimum distance.
    Touch { down_x: f32, up_x: f32 },
    Shake,
    /// Unvalidated jump input, checked by the navigation policy.
    Jump(String),
    Latest,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
commands:
  n, next            next comic
  p, prev            previous comic
  swipe <from> <to>  swipe gesture between two x coordinates
  r, random, shake   random comic
  j <n>, jump <n>    jump to comic <n> (a bare number works too)
  l, latest          latest comic
  ?, help            this help
  q, quit            exit";

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default();
        let rest: Vec<&str> = words.collect();

        match (head, rest.as_slice()) {
            ("n" | "next" | "right", []) => Command::Swipe(Swipe::Next),
            ("p" | "prev" | "left", []) => Command::Swipe(Swipe::Previous),
            ("swipe", [down, up]) => match (down.parse::<f32>(), up.parse::<f32>()) {
                (Ok(down_x), Ok(up_x)) if f32::is_finite(down_x) && f32::is_finite(up_x) => {
                    Command::Touch { down_x, up_x }
                }
                _ => Command::Unknown(line.into()),
            },
            ("r" | "random" | "shake", []) => Command::Shake,
            ("j" | "jump" | "g" | "goto", [n]) => Command::Jump((*n).into()),
            ("j" | "jump" | "g" | "goto", []) => Command::Jump(String::new()),
            ("l" | "latest", []) => Command::Latest,
            ("?" | "h" | "help", []) => Command::Help,
            ("q" | "quit" | "exit", []) => Command::Quit,
            (n, []) if !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()) => {
                Command::Jump(n.into())
            }
            _ => Command::Unknown(line.into()),
        }
    }
}
