use comfy_table::{presets::UTF8_FULL, Cell, Table};
use fairdice_core::{Event, OddsTable, Outcome, Participant, Prompt, RoundProof, Tag};

const CONTROLS: &str = "X - exit\n? - help";

pub fn prompt_text(prompt: &Prompt<'_>) -> String {
    let mut lines = Vec::new();

    match prompt {
        Prompt::Guess { tag, range } => {
            lines.push("Let's determine who makes the first move.".to_string());
            lines.push(commit_line(tag, *range));
            lines.push("Try to guess my selection.".to_string());
            lines.extend(choices(*range));
        }
        Prompt::SelectDie { dice } => {
            lines.push("Choose your dice:".to_string());
            lines.extend(
                dice.iter()
                    .enumerate()
                    .map(|(index, die)| format!("{} - {}", index, die)),
            );
        }
        Prompt::Contribution { roller, tag, range } => {
            let whose = match roller {
                Participant::Computer => "my",
                Participant::Human => "your",
            };
            lines.push(format!("It's time for {} roll.", whose));
            lines.push(commit_line(tag, *range));
            lines.push(format!("Add your number modulo {}.", range));
            lines.extend(choices(*range));
        }
    }

    lines.push(CONTROLS.to_string());
    lines.join("\n")
}

fn commit_line(tag: &Tag, range: u32) -> String {
    format!(
        "I selected a random value in the range 0..{} (HMAC={}).",
        range - 1,
        tag
    )
}

fn choices(range: u32) -> impl Iterator<Item = String> {
    (0..range).map(|value| format!("{} - {}", value, value))
}

pub fn event_text(event: &Event) -> String {
    match event {
        Event::FirstMoveResolved { guessed, proof, .. } => {
            let verdict = if *guessed {
                "You guessed it."
            } else {
                "You did not guess it."
            };
            format!("{}\n{}", reveal_line(proof), verdict)
        }
        Event::DiceAssigned { human, computer } => {
            format!("You choose the {} dice.\nI choose the {} dice.", human, computer)
        }
        Event::RollResolved {
            roller,
            proof,
            roll,
        } => {
            let fair = match proof.fair_value {
                Some(fair) => format!(
                    "\nThe fair number generation result is {} + {} = {} (mod {}).",
                    proof.value, proof.contribution, fair, proof.range
                ),
                None => String::new(),
            };
            let whose = match roller {
                Participant::Computer => "My",
                Participant::Human => "Your",
            };
            format!("{}{}\n{} roll result is {}.", reveal_line(proof), fair, whose, roll)
        }
        Event::Finished {
            outcome,
            human_roll,
            computer_roll,
        } => match outcome {
            Outcome::HumanWins => format!("You win ({} > {})!", human_roll, computer_roll),
            Outcome::ComputerWins => format!("I win ({} <= {})!", human_roll, computer_roll),
        },
        Event::Help(table) => format!(
            "Each cell is the chance that the row die rolls higher than the column die.\n{}",
            odds_table(table)
        ),
        Event::Rejected(reason) => format!("{}. Try again.", reason),
        Event::Cancelled => "Game cancelled.".to_string(),
    }
}

fn reveal_line(proof: &RoundProof) -> String {
    format!("My selection: {} (KEY={}).", proof.value, proof.secret)
}

pub fn odds_table(odds: &OddsTable) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec![Cell::new("User dice v")];
    header.extend(odds.dice().iter().map(|die| Cell::new(die.to_string())));
    table.set_header(header);

    for (row, die) in odds.dice().iter().enumerate() {
        let mut cells = vec![Cell::new(die.to_string())];
        cells.extend((0..odds.dice().len()).map(|col| {
            let text = match odds.probability(row, col) {
                Some(p) => format!("{:.4}", p),
                None => "-".to_string(),
            };
            Cell::new(text)
        }));
        table.add_row(cells);
    }

    table
}
