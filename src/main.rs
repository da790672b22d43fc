use std::path::PathBuf;

use clap::Parser as ClapParser;
use cumin_lang::cli::{self, ConvertOptions};

#[derive(ClapParser)]
#[command(name = "cumin")]
#[command(about = "Cumin - translates YAML documents into a brace-and-semicolon teaching configuration language")]
#[command(version)]
struct Cli {
    /// Path to the input document (YAML, or JSON when the extension is .json)
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the output file
    #[arg(short, long)]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let options = ConvertOptions {
        input: cli.input,
        output: cli.output,
    };

    match cli::execute_convert(&options) {
        Ok(()) => println!("Conversion complete: output written to {}", options.output.display()),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
