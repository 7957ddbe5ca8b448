/// interactive menu: introduction, price table, dispatch to the game
pub mod cli_main;
/// the game itself: condition entry, reaction runs and the win check
pub mod cli_game;
/// "condition = value" parsing with an explicit retry outcome instead of
/// recursive re-prompting
pub mod conditions;
/// tests
pub mod conditions_tests;
