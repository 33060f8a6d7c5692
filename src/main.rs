use std::io::{self, BufRead, Write};

use expreval::{
    codegen::codegen::generate,
    lexer::lexer::{Lexer, StringSource},
    parser::parser::Parser,
};

/// Interactive read-loop: one line of input is one expression, evaluated
/// once. Diagnostics discard the line; nothing persists between cycles.
fn main() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Expression> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };

        let lexer = Lexer::new(StringSource::new(&line));
        let mut parser = Parser::new(lexer);
        let expression = parser.parse_expression();

        if !parser.diagnostics().is_empty() {
            for diagnostic in parser.diagnostics() {
                println!(
                    "{}: {} ({})",
                    diagnostic.get_kind_name(),
                    diagnostic.get_message(),
                    diagnostic.get_span().start
                );
            }

            println!();
            continue;
        }

        match generate(&expression) {
            Ok(evaluator) => match evaluator() {
                Ok(result) => println!("{}", result),
                Err(error) => println!("{}", error),
            },
            Err(error) => println!("{}", error),
        }

        println!();
    }
}
