//! Single-character command loops for the console exercises.
//!
//! Every loop reads from a `BufRead` and writes to a `Write`, so the same
//! code drives stdin/stdout in the binaries and in-memory buffers in tests.
//! Domain errors (unknown item, bad number) are printed and the loop
//! continues; I/O errors end it.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::cart::{ItemToPurchase, ShoppingCart};
use crate::error::AppError;
use crate::movies::{Movie, MovieList};
use crate::playlist::{Playlist, PlaylistSong};

// =============================================================================
// Milestone 1: Line and command input
// =============================================================================

/// Next line without its line ending, or `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Writes `label` on its own line and reads the answer.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String, AppError> {
    writeln!(output, "{label}")?;
    output.flush()?;
    read_line(input)?.ok_or_else(|| {
        io::Error::new(io::ErrorKind::UnexpectedEof, format!("no answer to '{label}'")).into()
    })
}

fn prompt_parsed<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    field: &'static str,
) -> Result<T, AppError> {
    let answer = prompt(input, output, label)?;
    answer
        .trim()
        .parse()
        .map_err(|_| AppError::invalid_input(field, answer))
}

/// First non-blank character of the next non-blank line.
fn read_command<R: BufRead>(input: &mut R) -> Result<Option<char>, AppError> {
    while let Some(line) = read_line(input)? {
        if let Some(command) = line.trim().chars().next() {
            debug!(%command, "menu command");
            return Ok(Some(command));
        }
    }
    Ok(None)
}

/// Asks "Choose an option:" until one of `valid` is entered.
fn read_option<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    valid: &str,
) -> Result<Option<char>, AppError> {
    loop {
        writeln!(output, "Choose an option:")?;
        output.flush()?;
        match read_command(input)? {
            Some(option) if valid.contains(option) => return Ok(Some(option)),
            Some(_) => continue,
            None => return Ok(None),
        }
    }
}

fn report<W: Write>(result: Result<(), AppError>, output: &mut W) -> Result<(), AppError> {
    match result {
        Err(err) if err.is_fatal() => Err(err),
        Err(err) => {
            writeln!(output, "{err}")?;
            writeln!(output)?;
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}

// =============================================================================
// Milestone 2: Movie list
// =============================================================================

/// Runs the movie menu until `x` or end of input.
pub fn movie_menu<R: BufRead, W: Write>(
    list: &mut MovieList,
    input: &mut R,
    output: &mut W,
    width: usize,
) -> Result<(), AppError> {
    loop {
        write!(
            output,
            "COMMANDS\n\
             v - View movie list\n\
             a - Add a movie\n\
             d - Delete a movie\n\
             x - Exit\n\n\
             Command: "
        )?;
        output.flush()?;

        let Some(command) = read_command(input)? else {
            return Ok(());
        };
        let result = match command {
            'v' => write!(output, "{}", list.render_table(width)).map_err(AppError::from),
            'a' => add_movie(list, input, output),
            'd' => delete_movie(list, input, output),
            'x' => {
                writeln!(output, "Goodbye, amigo!")?;
                return Ok(());
            }
            _ => writeln!(output, "Not a valid command. Please try again.").map_err(AppError::from),
        };
        report(result, output)?;
    }
}

fn add_movie<R: BufRead, W: Write>(
    list: &mut MovieList,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let title = prompt(input, output, "Title:")?;
    let year = prompt_parsed(input, output, "Year:", "year")?;
    let stars = prompt_parsed(input, output, "Stars (1-5):", "stars")?;
    let title = title.trim().to_string();
    writeln!(output, "{title} was added.\n")?;
    list.add(Movie::new(title, year, stars));
    Ok(())
}

fn delete_movie<R: BufRead, W: Write>(
    list: &mut MovieList,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let number = prompt_parsed(input, output, "Number:", "number")?;
    let removed = list.delete(number)?;
    writeln!(output, "{} was deleted.\n", removed.title)?;
    Ok(())
}

// =============================================================================
// Milestone 3: Shopping cart
// =============================================================================

/// Asks for the customer and date and echoes them back.
pub fn start_cart<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<ShoppingCart, AppError> {
    let customer = prompt(input, output, "Enter customer's name:")?;
    let date = prompt(input, output, "Enter today's date:")?;
    writeln!(output)?;
    writeln!(output, "Customer name: {customer}")?;
    writeln!(output, "Today's date: {date}\n")?;
    Ok(ShoppingCart::new(customer, date))
}

/// Runs the cart menu until `q` or end of input.
pub fn cart_menu<R: BufRead, W: Write>(
    cart: &mut ShoppingCart,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    loop {
        write!(
            output,
            "MENU\n\
             a - Add item to cart\n\
             d - Remove item from cart\n\
             c - Change item quantity\n\
             i - Output items' descriptions\n\
             o - Output shopping cart\n\
             q - Quit\n\n"
        )?;

        let Some(option) = read_option(input, output, "adcioq")? else {
            return Ok(());
        };
        let result = match option {
            'a' => add_item(cart, input, output),
            'd' => remove_item(cart, input, output),
            'c' => change_quantity(cart, input, output),
            'i' => {
                writeln!(output, "OUTPUT ITEMS' DESCRIPTIONS")?;
                writeln!(output, "{}", cart.render_descriptions()).map_err(AppError::from)
            }
            'o' => {
                writeln!(output, "OUTPUT SHOPPING CART")?;
                writeln!(output, "{}", cart.render_total()).map_err(AppError::from)
            }
            _ => return Ok(()),
        };
        report(result, output)?;
    }
}

fn add_item<R: BufRead, W: Write>(
    cart: &mut ShoppingCart,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    writeln!(output, "ADD ITEM TO CART")?;
    let name = prompt(input, output, "Enter the item name:")?;
    let description = prompt(input, output, "Enter the item description:")?;
    let price = prompt_parsed(input, output, "Enter the item price:", "price")?;
    let quantity = prompt_parsed(input, output, "Enter the item quantity:", "quantity")?;
    writeln!(output)?;
    cart.add_item(ItemToPurchase::new(name, description, price, quantity));
    Ok(())
}

fn remove_item<R: BufRead, W: Write>(
    cart: &mut ShoppingCart,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    writeln!(output, "REMOVE ITEM FROM CART")?;
    let name = prompt(input, output, "Enter name of item to remove:")?;
    cart.remove_item(&name)?;
    writeln!(output)?;
    Ok(())
}

fn change_quantity<R: BufRead, W: Write>(
    cart: &mut ShoppingCart,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    writeln!(output, "CHANGE ITEM QUANTITY")?;
    let name = prompt(input, output, "Enter the item name:")?;
    let quantity = prompt_parsed(input, output, "Enter the new quantity:", "quantity")?;
    let changes = ItemToPurchase {
        name,
        quantity,
        ..ItemToPurchase::default()
    };
    cart.modify_item(&changes)?;
    writeln!(output)?;
    Ok(())
}

// =============================================================================
// Milestone 4: Playlist
// =============================================================================

pub fn start_playlist<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Playlist, AppError> {
    let title = prompt(input, output, "Enter playlist's title:")?;
    writeln!(output)?;
    Ok(Playlist::new(title))
}

/// Runs the playlist menu until `q` or end of input.
pub fn playlist_menu<R: BufRead, W: Write>(
    playlist: &mut Playlist,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    loop {
        write!(
            output,
            "{} PLAYLIST MENU\n\
             a - Add song\n\
             d - Remove song\n\
             c - Change position of song\n\
             s - Output songs by specific artist\n\
             t - Output total time of playlist (in seconds)\n\
             o - Output full playlist\n\
             q - Quit\n\n",
            playlist.title
        )?;

        let Some(option) = read_option(input, output, "adcstoq")? else {
            return Ok(());
        };
        let result = match option {
            'a' => add_song(playlist, input, output),
            'd' => remove_song(playlist, input, output),
            'c' => change_song_position(playlist, input, output),
            's' => songs_by_artist(playlist, input, output),
            't' => {
                writeln!(output, "OUTPUT TOTAL TIME OF PLAYLIST (IN SECONDS)")?;
                writeln!(output, "Total time: {} seconds\n", playlist.total_time())
                    .map_err(AppError::from)
            }
            'o' => writeln!(output, "{}", playlist.render()).map_err(AppError::from),
            _ => return Ok(()),
        };
        report(result, output)?;
    }
}

fn add_song<R: BufRead, W: Write>(
    playlist: &mut Playlist,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    writeln!(output, "ADD SONG")?;
    let id = prompt(input, output, "Enter song's unique ID:")?;
    let name = prompt(input, output, "Enter song's name:")?;
    let artist = prompt(input, output, "Enter artist's name:")?;
    let length = prompt_parsed(input, output, "Enter song's length (in seconds):", "length")?;
    writeln!(output)?;
    playlist.add_song(PlaylistSong::new(id, name, artist, length));
    Ok(())
}

fn remove_song<R: BufRead, W: Write>(
    playlist: &mut Playlist,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    writeln!(output, "REMOVE SONG")?;
    let id = prompt(input, output, "Enter song's unique ID:")?;
    let removed = playlist.remove_song(&id)?;
    writeln!(output, "\"{}\" removed.\n", removed.name)?;
    Ok(())
}

fn change_song_position<R: BufRead, W: Write>(
    playlist: &mut Playlist,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    writeln!(output, "CHANGE POSITION OF SONG")?;
    let from = prompt_parsed(input, output, "Enter song's current position:", "position")?;
    let to = prompt_parsed(input, output, "Enter new position for song:", "position")?;
    let (position, song) = playlist.change_position(from, to)?;
    writeln!(output, "\"{}\" moved to position {position}\n", song.name)?;
    Ok(())
}

fn songs_by_artist<R: BufRead, W: Write>(
    playlist: &Playlist,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    writeln!(output, "OUTPUT SONGS BY SPECIFIC ARTIST")?;
    let artist = prompt(input, output, "Enter artist's name:")?;
    writeln!(output)?;
    for (position, song) in playlist.songs_by_artist(&artist) {
        writeln!(output, "{position}.\n{}", song.render())?;
    }
    Ok(())
}
