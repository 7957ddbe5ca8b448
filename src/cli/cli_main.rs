use super::cli_game::{GameOutcome, print_introduction, print_price_table, setup_menu, show_example};
use crate::engine::scenario::Scenario;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    let scenario = Scenario::default();
    print_introduction();
    print_price_table(&scenario);
    loop {
        show_main_menu();
        let choice = get_user_input();
        match choice.trim().to_lowercase().as_str() {
            "1" | "setup" => match setup_menu(&scenario) {
                GameOutcome::Won | GameOutcome::Quit => break,
            },
            "2" | "example" => show_example(),
            "0" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn show_main_menu() {
    println!("\x1b[34m\n MaiSim: find Maillard reaction conditions that beat 90 % of the\n maximum theoretical profit \n\x1b[0m");
    println!("\x1b[33m1. setup: Set-up a new reaction\x1b[0m");
    println!("\x1b[33m2. example: See an example reaction\x1b[0m");
    println!("\x1b[33m0. quit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    io::stdout().flush().unwrap();
}

fn get_user_input() -> String {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}
