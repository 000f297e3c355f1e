use std::io;
use std::io::prelude::*;

use plotcalc::{calculate, chart, MathError};

fn execute_line(line: &str) {
    // syntax problems and division by zero arrive on different channels,
    // but the prompt renders both as an error line
    match calculate(line) {
        Ok(Some(value)) => println!("> {}", value),
        Ok(None) => println!("> error"),
        Err(MathError::DivisionByZero) => println!("> error"),
    }
}

fn execute_plot(expr: &str) {
    match chart::render(expr) {
        Some(plot) => print!("{}", plot),
        None => println!("> error"),
    }
}

fn main() {
    let exit_cmds = vec!["q", "quit", "exit"];
    let input = io::stdin();
    let mut output = io::stdout();

    println!("Enter an expression or equation ('q' to quit)");

    loop {
        output.write(b"> ").unwrap();
        output.flush().unwrap();

        let mut line = String::new();
        if input.read_line(&mut line).unwrap() == 0 {
            break;
        }

        if exit_cmds.contains(&line.trim()) {
            break;
        }

        let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();

        if let Some(expr) = stripped.strip_prefix("y=") {
            execute_plot(expr);
        } else {
            execute_line(&line);
        }
    }
}
