//! Interactive operator shell.
//!
//! Thin numbered menu over the catalog store: one line of input per prompt,
//! one store operation per action, outcome printed. Business-rule rejections
//! print their message and the session continues; storage failures end it.

use std::io::{self, BufRead, Write};

use crate::error::AppResult;
use crate::services::Library;

const MENU: &str = "\n--- LIBRARY MENU ---
1. Add Book
2. Register Member
3. Borrow Book
4. Return Book
5. View Analytics (Most Popular Book)
6. Show All Books
7. Show All Members
8. Exit";

enum Flow {
    Continue,
    Exit,
}

/// Run the menu loop on stdin until exit or end of input
pub fn run(library: &mut Library) -> AppResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with_input(library, &mut input)
}

/// Run the menu loop over any line-based input source
pub fn run_with_input(library: &mut Library, input: &mut impl BufRead) -> AppResult<()> {
    loop {
        println!("{}", MENU);
        let Some(choice) = prompt(input, "Enter choice: ")? else {
            break;
        };
        match dispatch(library, input, &choice)? {
            Flow::Continue => {}
            Flow::Exit => break,
        }
    }
    Ok(())
}

fn dispatch(library: &mut Library, input: &mut impl BufRead, choice: &str) -> AppResult<Flow> {
    match choice {
        "1" => {
            let Some(id) = prompt(input, "Enter Book ID: ")? else {
                return Ok(Flow::Exit);
            };
            let Some(title) = prompt(input, "Enter Title: ")? else {
                return Ok(Flow::Exit);
            };
            let Some(author) = prompt(input, "Enter Author: ")? else {
                return Ok(Flow::Exit);
            };
            report(library.add_book(&id, &title, &author), |_| {
                format!("Book '{}' added successfully.", title)
            })?;
        }
        "2" => {
            let Some(id) = prompt(input, "Enter Member ID: ")? else {
                return Ok(Flow::Exit);
            };
            let Some(name) = prompt(input, "Enter Name: ")? else {
                return Ok(Flow::Exit);
            };
            report(library.register_member(&id, &name), |_| {
                format!("Member '{}' registered successfully.", name)
            })?;
        }
        "3" => {
            let Some(member_id) = prompt(input, "Enter Member ID: ")? else {
                return Ok(Flow::Exit);
            };
            let Some(book_id) = prompt(input, "Enter Book ID: ")? else {
                return Ok(Flow::Exit);
            };
            report(library.borrow_book(&member_id, &book_id), |receipt| {
                format!(
                    "Success! '{}' borrowed by {}.",
                    receipt.book_title, receipt.member_name
                )
            })?;
        }
        "4" => {
            let Some(member_id) = prompt(input, "Enter Member ID: ")? else {
                return Ok(Flow::Exit);
            };
            let Some(book_id) = prompt(input, "Enter Book ID: ")? else {
                return Ok(Flow::Exit);
            };
            report(library.return_book(&member_id, &book_id), |receipt| {
                format!("'{}' returned successfully.", receipt.book_title)
            })?;
        }
        "5" => println!("{}", library.most_borrowed()),
        "6" => {
            for line in library.list_books() {
                println!("{}", line);
            }
        }
        "7" => {
            for line in library.list_members() {
                println!("{}", line);
            }
        }
        "8" => {
            println!("Exiting...");
            return Ok(Flow::Exit);
        }
        _ => println!("Invalid choice, try again."),
    }
    Ok(Flow::Continue)
}

/// Print the outcome of a store operation.
///
/// Non-fatal errors become one line of output; fatal ones propagate and end
/// the session.
fn report<T>(result: AppResult<T>, message: impl FnOnce(T) -> String) -> AppResult<()> {
    match result {
        Ok(value) => {
            println!("{}", message(value));
            Ok(())
        }
        Err(err) if err.is_fatal() => Err(err),
        Err(err) => {
            println!("{}", err);
            Ok(())
        }
    }
}

/// Print a prompt and read one trimmed line. `None` means the input is closed.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
