/// One line of player input, already lower-cased and split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Look,
    Inventory,
    Take(String),
    Drop(String),
    Quit,
    Empty,
    Unknown,
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let lower = input.trim().to_lowercase();
        let mut parts = lower.split_whitespace();

        let verb = match parts.next() {
            Some(v) => v,
            None => return Command::Empty,
        };
        let rest = parts.collect::<Vec<&str>>().join(" ");

        match (verb, rest.is_empty()) {
            ("quit", _) => Command::Quit,
            ("look", _) => Command::Look,
            ("inventory", _) => Command::Inventory,
            ("go", false) => {
                // only the first word names the direction
                let direction = rest.split(' ').next().unwrap_or_default();
                Command::Go(direction.to_string())
            }
            ("take", false) => Command::Take(rest),
            ("drop", false) => Command::Drop(rest),
            _ => Command::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() {
        assert_eq!(Command::parse("  GO North "), Command::Go("north".into()));
        assert_eq!(Command::parse("go up the stairs"), Command::Go("up".into()));
        assert_eq!(Command::parse("take  Old   Map"), Command::Take("old map".into()));
        assert_eq!(Command::parse("drop sword"), Command::Drop("sword".into()));
        assert_eq!(Command::parse("inventory"), Command::Inventory);
        assert_eq!(Command::parse("look"), Command::Look);
        assert_eq!(Command::parse("quit now"), Command::Quit);
    }

    #[test]
    fn incomplete_or_unknown_input() {
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("go"), Command::Unknown);
        assert_eq!(Command::parse("take"), Command::Unknown);
        assert_eq!(Command::parse("dance"), Command::Unknown);
        assert_eq!(Command::parse("north"), Command::Unknown);
    }
}
