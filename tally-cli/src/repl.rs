// Interactive REPL using editline

use editline::{LineEditor, terminals::StdioTerminal};
use std::io::Write;
use tally_core::{Calculator, Operator};

pub fn run_repl() -> Result<(), Box<dyn std::error::Error>> {
    // Print ASCII art banner
    println!();
    println!(" _____     _ _       ");
    println!("|_   _|_ _| | |_   _ ");
    println!("  | |/ _` | | | | | |");
    println!("  | | (_| | | | |_| |");
    println!("  |_|\\__,_|_|_|\\__, |");
    println!("               |___/  v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Type digits, `.`, `+ - * /` and `=` to calculate (`x` also multiplies)");
    println!("Type `c` to clear, `quit` or Ctrl-D to exit");
    println!();

    let mut calc = Calculator::new();

    // Create editline editor and terminal
    let mut editor = LineEditor::new(1024, 50);
    let mut terminal = StdioTerminal::new();

    loop {
        // Print prompt
        print!("\n> ");
        std::io::stdout().flush()?;

        match editor.read_line(&mut terminal) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "quit" || trimmed == "exit" {
                    break;
                }

                for key in trimmed.chars() {
                    press_key(&mut calc, key);
                }

                // Render the two readouts the way a calculator face would
                if !calc.expression().is_empty() {
                    println!("{}", calc.expression());
                }
                println!("{}", calc.display());
            }
            Err(editline::Error::Eof) => {
                // EOF (Ctrl-D)
                println!("\nGoodbye!");
                break;
            }
            Err(editline::Error::Interrupted) => {
                // Ctrl-C - just continue
                println!("^C");
                continue;
            }
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }

    Ok(())
}

// Map one typed character onto the engine's input operations
fn press_key(calc: &mut Calculator, key: char) {
    match key {
        '0'..='9' => calc.on_digit(key),
        '.' => calc.on_decimal_point(),
        '+' => calc.on_operator(Operator::Add),
        '-' => calc.on_operator(Operator::Subtract),
        '*' | 'x' | 'X' => calc.on_operator(Operator::Multiply),
        '/' => calc.on_operator(Operator::Divide),
        '=' => calc.on_evaluate(),
        'c' | 'C' => calc.on_clear(),
        ch if ch.is_whitespace() => {}
        other => {
            eprintln!("Ignoring unknown key: {}", other);
        }
    }
}
