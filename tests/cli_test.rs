#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use gomoku::{parse_command, prompt, Action, Cell, CliPlayer};

    #[test]
    fn test_hint_flag_changes_prompt() {
        assert!(!CliPlayer::new().hints());
        assert!(CliPlayer::with_hints().hints());
        assert_eq!(prompt(None), "Command (H8, jump N, quit): ");
        assert_eq!(
            prompt(Some(Cell::center())),
            "Command (H8, jump N, quit) [H8]: "
        );
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(parse_command("H8"), Some(Action::Place(Cell::center())));
        assert_eq!(
            parse_command("  a1 \n"),
            Some(Action::Place(Cell::from_index(0).unwrap()))
        );
        assert_eq!(parse_command("P1"), None);
        assert_eq!(parse_command("A0"), None);
        assert_eq!(parse_command("A+1"), None);
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse_command("jump 4"), Some(Action::Jump(4)));
        assert_eq!(parse_command("start"), Some(Action::Jump(0)));
        assert_eq!(parse_command("QUIT"), Some(Action::Quit));
        assert_eq!(parse_command("q"), Some(Action::Quit));
        assert_eq!(parse_command("hello"), None);
    }
}
