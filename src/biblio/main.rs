use biblio::api::{CmdMessage, LibraryApi, MessageLevel};
use biblio::error::Result;
use biblio::model::BookRecord;
use biblio::query::SearchField;
use biblio::store::fs::FileStore;
use biblio::store::DataStore;
use clap::Parser;
use colored::*;
use std::io::{self, BufRead};
use unicode_width::UnicodeWidthStr;

mod args;
mod prompt;

use args::Cli;
use prompt::Prompt;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(cli.data_dir);
    let (mut api, warnings) = LibraryApi::open(store);
    print_messages(&warnings);

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock());

    loop {
        print_menu();
        let Some(choice) = prompt.read_u32("Select an option: ", 1, 7)? else {
            break;
        };

        if choice == 7 {
            println!("Goodbye.");
            break;
        }

        let outcome = match choice {
            1 => handle_add(&mut api, &mut prompt),
            2 => handle_list(&api),
            3 => handle_loan(&mut api, &mut prompt),
            4 => handle_search(&api, &mut prompt, SearchField::Title),
            5 => handle_search(&api, &mut prompt, SearchField::Author),
            _ => handle_search(&api, &mut prompt, SearchField::Genre),
        };

        // Domain failures are messages, not session enders.
        if let Err(e) = outcome {
            println!("{}", format!("Error: {}", e).red());
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("{}", "=== Library Management ===".bold());
    println!("1. Add book");
    println!("2. List all books");
    println!("3. Register loan");
    println!("4. Search by title");
    println!("5. Search by author");
    println!("6. Search by genre");
    println!("7. Exit");
}

fn handle_add<S: DataStore>(
    api: &mut LibraryApi<S>,
    prompt: &mut Prompt<impl BufRead>,
) -> Result<()> {
    println!("\n--- Add Book ---");
    let Some(isbn) = prompt.read_string("ISBN: ", true)? else {
        return Ok(());
    };
    let Some(title) = prompt.read_string("Title: ", true)? else {
        return Ok(());
    };
    let Some(author) = prompt.read_string("Author: ", true)? else {
        return Ok(());
    };
    let Some(genre) = prompt.read_string("Genre: ", true)? else {
        return Ok(());
    };
    let Some(count) = prompt.read_u32("Available copies: ", 0, u32::MAX)? else {
        return Ok(());
    };

    let result = api.add_book(&isbn, &title, &author, &genre, count)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list<S: DataStore>(api: &LibraryApi<S>) -> Result<()> {
    let result = api.list_books()?;
    print_books(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_loan<S: DataStore>(
    api: &mut LibraryApi<S>,
    prompt: &mut Prompt<impl BufRead>,
) -> Result<()> {
    println!("\n--- Register Loan ---");
    let Some(isbn) = prompt.read_string("ISBN: ", true)? else {
        return Ok(());
    };
    let Some(borrower) = prompt.read_string("Borrower name: ", true)? else {
        return Ok(());
    };
    let Some(date) = prompt.read_date("Date (YYYY-MM-DD): ")? else {
        return Ok(());
    };

    let result = api.register_loan(&isbn, &borrower, date)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search<S: DataStore>(
    api: &LibraryApi<S>,
    prompt: &mut Prompt<impl BufRead>,
    field: SearchField,
) -> Result<()> {
    println!("\n--- Search by {} ---", field.label());
    let Some(term) = prompt.read_string("Search term: ", false)? else {
        return Ok(());
    };

    let result = api.search_books(field, &term)?;
    print_books(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_books(books: &[BookRecord]) {
    if books.is_empty() {
        return;
    }

    let isbn_w = column_width("ISBN", books.iter().map(|b| b.isbn.as_str()));
    let title_w = column_width("Title", books.iter().map(|b| b.title.as_str()));
    let author_w = column_width("Author", books.iter().map(|b| b.author.as_str()));
    let genre_w = column_width("Genre", books.iter().map(|b| b.genre.as_str()));

    println!();
    println!(
        "{}  {}  {}  {}  {}",
        pad("ISBN", isbn_w).bold(),
        pad("Title", title_w).bold(),
        pad("Author", author_w).bold(),
        pad("Genre", genre_w).bold(),
        "Available".bold()
    );
    for book in books {
        println!(
            "{}  {}  {}  {}  {}",
            pad(&book.isbn, isbn_w),
            pad(&book.title, title_w),
            pad(&book.author, author_w),
            pad(&book.genre, genre_w),
            book.available_count
        );
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.width())
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0)
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
