use std::{fs::File, io::BufReader, process::exit};

use clap::{ArgAction, Parser};
use plaintalk::lexer::lexer::tokenize;

#[derive(Parser)]
#[clap(version = "0.1.0", about = "Lexer for the plaintalk scripting notation", long_about = None)]
#[clap(name = "plaintalk")]
struct Cli {
    #[clap(help = "Path to the plaintalk source file")]
    path: String,

    #[clap(long = "lexer-only")]
    #[clap(action = ArgAction::SetTrue)]
    #[clap(help = "Only run and output the lexer")]
    lexer_only: bool,
}

fn main() {
    let cli = Cli::parse();

    let file = match File::open(&cli.path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("{}: {}", cli.path, error);
            exit(1);
        }
    };

    let tokens = match tokenize(BufReader::new(file)) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        }
    };

    if cli.lexer_only {
        for token in &tokens {
            println!("{}", token);
        }
    }
}
