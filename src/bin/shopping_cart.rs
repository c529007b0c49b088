use std::io;
use std::process;

use colored::Colorize;
use coursework::{logging, menu, AppError};

fn run() -> Result<(), AppError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let mut cart = menu::start_cart(&mut input, &mut output)?;
    menu::cart_menu(&mut cart, &mut input, &mut output)
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{} {err}", "error:".red());
        process::exit(1);
    }
}
