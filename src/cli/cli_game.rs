use super::conditions::{CONDITION_KEYS, ParseOutcome, PendingConditions, parse_assignment};
use crate::engine::kinetics::ReactionConditions;
use crate::engine::scenario::{Evaluation, Scenario};
use prettytable::{Cell, Row, Table};
use std::io::{self, Write};

/// the win condition: beat this share of the theoretical maximum profit
pub const WIN_THRESHOLD_PERCENT: f64 = 90.0;

const INTRODUCTION: &str = "INTRODUCTION: A pig-virus has resulted in complete extinction of pigs. \
Major Food Co. has hired you to make an affordable bacon substitute. It needs to smell and taste \
like bacon and cost as little as possible. Tofu is the most affordable substitute, but it doesn't \
taste like bacon. Fortunately, you know how to give tofu that iconic bacon smell using the \
Maillard reaction between glucose and glycine to form 2,5-dimethylpyrazine. Your goal is to find \
reaction conditions that maximize profit. You are in competition with Baconish Inc. and in order \
to outperform them you will need to achieve profits > 90 percent of the maximum theoretical \
profit. Some things to keep in mind:";

const HINTS: [&str; 3] = [
    "The maximum solubility of each reagent is 1 g/ml",
    "The reaction is run in water so the temperature should be 0-100 C",
    "The modeling software lets you play with impossible values (eg negative grams) to see what \
     will happen. The results of impossible values might be informative in helping you \
     understand the calculations used to calculate the results.",
];

pub fn print_introduction() {
    println!("\n{}", INTRODUCTION);
    for hint in HINTS {
        println!("\n    - {}", hint);
    }
    println!();
}

pub fn print_price_table(scenario: &Scenario) {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Molecule"), Cell::new("$/gram")]));
    for substance in [scenario.reagent1, scenario.reagent2, scenario.product] {
        table.add_row(Row::new(vec![
            Cell::new(substance.name),
            Cell::new(&format!("{}", substance.unit_price_usd_per_g)),
        ]));
    }
    table.printstd();
    println!(
        "The reaction duration cost is ${}/min\n",
        scenario.economics.cost_per_minute_usd
    );
}

fn print_pending_table(pending: &PendingConditions) {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("condition"), Cell::new("value")]));
    for key in CONDITION_KEYS {
        let value = pending
            .get(key)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "NA".to_string());
        table.add_row(Row::new(vec![Cell::new(key), Cell::new(&value)]));
    }
    table.printstd();
}

/// rows of the results table. The temperature shown is the clamped value
/// the engine actually ran with, not the raw entry
pub fn results_rows(
    conditions: &ReactionConditions,
    evaluation: &Evaluation,
) -> [(&'static str, String); 8] {
    let conditions = conditions.clamp_temperature();
    [
        ("reagent1_grams", conditions.reagent1_mass_g.to_string()),
        ("reagent2_grams", conditions.reagent2_mass_g.to_string()),
        ("volume_L", conditions.volume_l.to_string()),
        ("temperature_C", conditions.temperature_c.to_string()),
        ("pH", conditions.ph.to_string()),
        ("duration_min", conditions.duration_min.to_string()),
        (
            "product_g",
            format!("{:.2}", evaluation.reaction.product_mass_g),
        ),
        (
            "pct_of_max_profit",
            format!("{:.0}", evaluation.economics.percent_of_max_profit),
        ),
    ]
}

fn print_results_table(conditions: &ReactionConditions, evaluation: &Evaluation) {
    let mut table = Table::new();
    for (name, value) in results_rows(conditions, evaluation) {
        table.add_row(Row::new(vec![Cell::new(name), Cell::new(&value)]));
    }
    table.printstd();
}

/// the example run from the briefing: 1 g of each reagent in 1 ml at 85 C,
/// pH 7, 60 min
pub fn show_example() {
    let scenario = Scenario::default();
    let conditions = ReactionConditions {
        reagent1_mass_g: 1.0,
        reagent2_mass_g: 1.0,
        volume_l: 0.001,
        temperature_c: 85.0,
        ph: 7.0,
        duration_min: 60.0,
    };
    let evaluation = scenario.evaluate(conditions);
    println!();
    print_results_table(&conditions, &evaluation);
}

#[derive(Debug, PartialEq)]
pub enum GameOutcome {
    Won,
    Quit,
}

enum Choice {
    Start,
    Quit,
}

/// condition entry and reaction runs until the player wins or quits.
/// Assigned conditions survive between runs so the player can tweak one
/// value at a time
pub fn setup_menu(scenario: &Scenario) -> GameOutcome {
    let mut pending = PendingConditions::default();
    loop {
        while !pending.is_complete() {
            print_pending_table(&pending);
            let line = prompt(
                "Choose your reaction conditions by typing 'condition = value' \
                 (eg. duration_min = 60), or 'quit' to quit. Your choice: ",
            );
            match parse_assignment(&line) {
                ParseOutcome::Assigned { key, value } => {
                    pending.set(&key, value);
                }
                ParseOutcome::Quit => return GameOutcome::Quit,
                ParseOutcome::Retry(reason) => {
                    println!("\nSorry, that response didn't work: {}. Please try again.\n", reason)
                }
            }
        }
        match change_or_start(&mut pending) {
            Choice::Start => {
                let conditions = pending.build().expect("all conditions are set");
                let evaluation = scenario.evaluate(conditions);
                println!();
                print_results_table(&conditions, &evaluation);
                if evaluation.economics.percent_of_max_profit > WIN_THRESHOLD_PERCENT {
                    println!(
                        "\nCongratulations! You achieved a profit > {:.0} percent of the \
                         theoretical maximum.",
                        WIN_THRESHOLD_PERCENT
                    );
                    return GameOutcome::Won;
                }
                println!(
                    "\nThe percent of theoretical maximum profit for these reaction conditions \
                     is {:.0} %. Keep trying different conditions to improve it (or type 'quit' \
                     to quit).\n",
                    evaluation.economics.percent_of_max_profit
                );
            }
            Choice::Quit => return GameOutcome::Quit,
        }
    }
}

fn change_or_start(pending: &mut PendingConditions) -> Choice {
    loop {
        println!("\nWould you like to:");
        println!("'start': start the reaction");
        println!("'change': change a condition");
        println!("'quit': quit");
        let choice = prompt("Your choice: ");
        match choice.trim().to_lowercase().as_str() {
            "start" => return Choice::Start,
            "quit" => return Choice::Quit,
            "change" => {
                print_pending_table(pending);
                let line = prompt(
                    "Change a condition by typing 'condition = value' (eg. duration_min = 60). \
                     Your choice: ",
                );
                match parse_assignment(&line) {
                    ParseOutcome::Assigned { key, value } => {
                        pending.set(&key, value);
                        print_pending_table(pending);
                    }
                    ParseOutcome::Quit => return Choice::Quit,
                    ParseOutcome::Retry(reason) => {
                        println!("\nSorry, that response didn't work: {}. Please try again.\n", reason)
                    }
                }
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn prompt(text: &str) -> String {
    print!("{}", text);
    io::stdout().flush().unwrap();
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}
