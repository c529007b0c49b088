//==============================================================================
// Positional list harness: runs the assignment checks at a configurable offset
//==============================================================================

use std::fmt::Display;
use std::process;

use colored::Colorize;
use coursework::{logging, Config, ListError, PositionalList};

/// Tallies passed and failed checks.
#[derive(Default)]
struct Checker {
    passed: usize,
    failed: usize,
}

impl Checker {
    fn check<T: PartialEq + Display>(&mut self, name: &str, expected: T, actual: T) {
        if expected == actual {
            self.passed += 1;
            println!("{} {name}", "Passed".green());
        } else {
            self.failed += 1;
            println!("{}", format!("****** Failed test {name} ******").red());
            println!("     Output was {actual}");
            println!("     Output should have been {expected}");
        }
    }
}

/// `len` consecutive values starting at 10, as a list and as its `Vec` model.
fn build(len: usize) -> (PositionalList<i32>, Vec<i32>) {
    let model: Vec<i32> = (10..).take(len).collect();
    (model.iter().copied().collect(), model)
}

/// Renders `values` the way the list does.
fn expected(values: &[i32]) -> String {
    if values.is_empty() {
        return coursework::linked_list::EMPTY_LIST.to_string();
    }
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn test_element_at_offset(checker: &mut Checker, offset: usize) {
    let (list, model) = build(offset * 2);
    checker.check("element_at_offset #1", expected(&model), list.render());
    checker.check(
        "element_at_offset #2",
        model[offset - 1].to_string(),
        list.element_at_offset(offset)
            .map(ToString::to_string)
            .unwrap_or_else(|err| err.to_string()),
    );

    let (short, _) = build(offset - 1);
    let caught = match short.element_at_offset(offset) {
        Err(ListError::EmptyCollection) => "caught",
        _ => "not caught",
    };
    checker.check("element_at_offset #3", "caught", caught);
}

fn test_insert_at_offset(checker: &mut Checker, offset: usize) {
    for (case, len) in [offset * 2, offset - 1, offset - 2].into_iter().enumerate() {
        let (mut list, mut model) = build(len);
        list.insert_at_offset(offset, 97);
        if offset - 1 <= model.len() {
            model.insert(offset - 1, 97);
        }
        checker.check(
            &format!("insert_at_offset #{}", case + 1),
            expected(&model),
            list.render(),
        );
        checker.check(
            &format!("insert_at_offset last #{}", case + 1),
            model.last().map(ToString::to_string).unwrap_or_default(),
            list.last().map(ToString::to_string).unwrap_or_default(),
        );
    }
}

fn test_remove_at_offset(checker: &mut Checker, offset: usize) {
    for (case, len) in [offset * 2, offset].into_iter().enumerate() {
        let (mut list, mut model) = build(len);
        list.remove_at_offset(offset);
        model.remove(offset - 1);
        checker.check(
            &format!("remove_at_offset #{}", case + 1),
            expected(&model),
            list.render(),
        );
        checker.check(
            &format!("remove_at_offset last #{}", case + 1),
            model.last().map(ToString::to_string).unwrap_or_default(),
            list.last().map(ToString::to_string).unwrap_or_default(),
        );
    }
}

fn test_swap_adjacent(checker: &mut Checker, offset: usize) {
    let first = offset - 1;
    for (case, len) in [offset * 2, offset].into_iter().enumerate() {
        let (mut list, mut model) = build(len);
        list.swap_adjacent_at_offsets(first);
        model.swap(first - 1, first);
        checker.check(
            &format!("swap_adjacent_at_offsets #{}", case + 1),
            expected(&model),
            list.render(),
        );
        checker.check(
            &format!("swap_adjacent_at_offsets last #{}", case + 1),
            model.last().map(ToString::to_string).unwrap_or_default(),
            list.last().map(ToString::to_string).unwrap_or_default(),
        );
    }
}

fn main() {
    logging::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red());
            process::exit(2);
        }
    };

    let mut checker = Checker::default();
    test_element_at_offset(&mut checker, config.offset);
    test_insert_at_offset(&mut checker, config.offset);
    test_remove_at_offset(&mut checker, config.offset);
    test_swap_adjacent(&mut checker, config.offset);

    println!(
        "\n{} passed, {} failed",
        checker.passed.to_string().green(),
        checker.failed.to_string().red()
    );
    if checker.failed > 0 {
        process::exit(1);
    }
}
