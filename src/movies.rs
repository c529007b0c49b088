use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::AppError;
use crate::linked_list::PositionalList;

// =============================================================================
// Milestone 1: Movie records from comma separated text
// =============================================================================

/// One `title,year,stars` line of the movie file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: u16,
    pub stars: u8,
}

impl Movie {
    pub fn new(title: impl Into<String>, year: u16, stars: u8) -> Self {
        Movie {
            title: title.into(),
            year,
            stars,
        }
    }
}

#[derive(Debug, Default)]
pub struct MovieList {
    movies: PositionalList<Movie>,
}

impl MovieList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every record of a headerless movie file, failing on the first
    /// malformed one.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AppError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_reader(reader);

        let mut movies = PositionalList::new();
        for record in reader.deserialize::<Movie>() {
            movies.insert_last(record?);
        }
        Ok(MovieList { movies })
    }

    /// Loads the movie file. A missing file gives an empty list.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        match File::open(path) {
            Ok(file) => {
                let list = Self::from_reader(file)?;
                info!(path = %path.display(), count = list.len(), "loaded movies");
                Ok(list)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "movie file not found, starting empty");
                Ok(Self::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    // =========================================================================
    // Milestone 2: Add and delete by displayed number
    // =========================================================================

    pub fn add(&mut self, movie: Movie) {
        self.movies.insert_last(movie);
    }

    /// Removes the movie shown as `number` in the table (1-indexed).
    pub fn delete(&mut self, number: usize) -> Result<Movie, AppError> {
        let count = self.movies.len();
        self.movies
            .try_remove_at_offset(number)
            .map_err(|_| AppError::InvalidNumber { number, count })
    }

    // =========================================================================
    // Milestone 3: Table view
    // =========================================================================

    /// Numbered table with columns of `width / 2`, `width * 4`, `width` and
    /// `width` characters, followed by a blank line.
    pub fn render_table(&self, width: usize) -> String {
        let number_width = width / 2;
        let title_width = width * 4;

        let mut out = format!(
            "{:<number_width$}{:<title_width$}{:<width$}{:<width$}\n",
            " ", "TITLE", "YEAR", "STARS"
        );
        for (index, movie) in self.iter().enumerate() {
            out.push_str(&format!(
                "{:<number_width$}{:<title_width$}{:<width$}{:<width$}\n",
                index + 1,
                movie.title,
                movie.year,
                movie.stars
            ));
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    const SAMPLE: &str = "\
Monty Python and the Holy Grail,1975,5
On the Waterfront,1954,5
Cat on a Hot Tin Roof,1958,4
";

    fn sample() -> MovieList {
        MovieList::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_records() {
        let list = sample();
        assert_eq!(list.len(), 3);
        let first = list.iter().next().unwrap();
        assert_eq!(first, &Movie::new("Monty Python and the Holy Grail", 1975, 5));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let list = MovieList::from_reader("  Vertigo , 1958 , 5\n".as_bytes()).unwrap();
        assert_eq!(list.iter().next(), Some(&Movie::new("Vertigo", 1958, 5)));
    }

    #[test]
    fn test_malformed_record_is_error() {
        let result = MovieList::from_reader("Vertigo,nineteen,5\n".as_bytes());
        assert!(matches!(result, Err(AppError::Csv(_))));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE}").unwrap();
        let list = MovieList::from_path(file.path()).unwrap();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let list = MovieList::from_path(&dir.path().join("movies.txt")).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_and_delete() {
        let mut list = sample();
        list.add(Movie::new("Rear Window", 1954, 5));
        assert_eq!(list.len(), 4);

        let removed = list.delete(2).unwrap();
        assert_eq!(removed.title, "On the Waterfront");
        let titles: Vec<&str> = list.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Monty Python and the Holy Grail",
                "Cat on a Hot Tin Roof",
                "Rear Window"
            ]
        );
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut list = sample();
        assert!(matches!(
            list.delete(0),
            Err(AppError::InvalidNumber { number: 0, count: 3 })
        ));
        assert!(matches!(
            list.delete(4),
            Err(AppError::InvalidNumber { number: 4, count: 3 })
        ));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_render_table() {
        let mut list = MovieList::new();
        list.add(Movie::new("Vertigo", 1958, 5));
        let table = list.render_table(8);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(
            lines[0],
            format!("{:<4}{:<32}{:<8}{:<8}", " ", "TITLE", "YEAR", "STARS")
        );
        assert_eq!(lines[1], format!("{:<4}{:<32}{:<8}{:<8}", 1, "Vertigo", 1958, 5));
        assert!(table.ends_with("\n\n"));
    }
}
