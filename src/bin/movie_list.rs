use std::io;
use std::process;

use colored::Colorize;
use coursework::movies::MovieList;
use coursework::{logging, menu, AppError, Config};

fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let mut list = MovieList::from_path(&config.movies_file)?;

    println!("The Movie List program\n");
    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::movie_menu(
        &mut list,
        &mut stdin.lock(),
        &mut stdout.lock(),
        config.column_width,
    )
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{} {err}", "error:".red());
        process::exit(1);
    }
}
