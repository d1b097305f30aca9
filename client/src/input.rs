use dungeon_common::games::dungeon::{Direction, FieldSize};

pub const EXIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];
pub const MAX_FIELD_SIDE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Move(Direction),
    Exit,
}

pub fn parse_command(line: &str) -> Result<PlayerCommand, String> {
    let command = line.trim().to_lowercase();
    if EXIT_COMMANDS.contains(&command.as_str()) {
        return Ok(PlayerCommand::Exit);
    }
    command.parse::<Direction>().map(PlayerCommand::Move)
}

/// Accepts `"5, 5"` or `"(5, 5)"`.
pub fn parse_dimensions(line: &str) -> Result<FieldSize, String> {
    const FORMAT_HINT: &str = "Please enter dimensions in the correct format, like 5, 5.";

    let trimmed = line.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);

    let (width, height) = inner.split_once(',').ok_or_else(|| FORMAT_HINT.to_string())?;
    let width: usize = width.trim().parse().map_err(|_| FORMAT_HINT.to_string())?;
    let height: usize = height.trim().parse().map_err(|_| FORMAT_HINT.to_string())?;

    validate_dimensions(width, height)
}

pub fn validate_dimensions(width: usize, height: usize) -> Result<FieldSize, String> {
    let allowed = FieldSize::MIN_SIDE..=MAX_FIELD_SIDE;
    if !allowed.contains(&width) || !allowed.contains(&height) {
        return Err(format!(
            "Map sides must be between {} and {}, got {}x{}",
            FieldSize::MIN_SIDE,
            MAX_FIELD_SIDE,
            width,
            height
        ));
    }
    Ok(FieldSize::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_directions() {
        assert_eq!(parse_command("up"), Ok(PlayerCommand::Move(Direction::Up)));
        assert_eq!(parse_command("DOWN\n"), Ok(PlayerCommand::Move(Direction::Down)));
        assert_eq!(parse_command(" Left "), Ok(PlayerCommand::Move(Direction::Left)));
    }

    #[test]
    fn test_parse_command_exit() {
        for command in ["quit", "EXIT", "q\n"] {
            assert_eq!(parse_command(command), Ok(PlayerCommand::Exit));
        }
    }

    #[test]
    fn test_parse_command_rejects_garbage() {
        assert!(parse_command("jump").is_err());
    }

    #[test]
    fn test_parse_dimensions_plain_and_parenthesised() {
        assert_eq!(parse_dimensions("5, 5"), Ok(FieldSize::new(5, 5)));
        assert_eq!(parse_dimensions("(7,3)\n"), Ok(FieldSize::new(7, 3)));
    }

    #[test]
    fn test_parse_dimensions_bad_format() {
        assert!(parse_dimensions("5x5").is_err());
        assert!(parse_dimensions("five, 5").is_err());
        assert!(parse_dimensions("5, -1").is_err());
        assert!(parse_dimensions("").is_err());
    }

    #[test]
    fn test_parse_dimensions_out_of_range() {
        assert!(parse_dimensions("1, 5").is_err());
        assert!(parse_dimensions("5, 51").is_err());
        assert!(parse_dimensions("2, 2").is_ok());
    }
}
