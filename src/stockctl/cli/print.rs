use colored::Colorize;
use stockctl::api::{CmdMessage, ListedItem, MessageLevel};
use stockctl::error::StockError;

use super::menu::OPTIONS;
use super::styles::STYLES;

pub(super) fn print_menu() {
    println!("\n{}\n", STYLES.header.apply_to("Menu:"));
    for (code, label) in OPTIONS.iter().enumerate() {
        println!("{} - {}", STYLES.code.apply_to(format!("{:>2}", code)), label);
    }
}

pub(super) fn print_invalid_option() {
    println!("\n{}", "Invalid option.".yellow());
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("\n{}", message.content.dimmed()),
            MessageLevel::Success => println!("\n{}", message.content.green()),
            MessageLevel::Warning => println!("\n{}", message.content.yellow()),
            MessageLevel::Error => println!("\n{}", message.content.red()),
        }
    }
}

pub(super) fn print_items(items: &[ListedItem]) {
    for item in items {
        println!("\n{}", item);
    }
}

pub(super) fn print_error(err: &StockError) {
    eprintln!("{}", format!("Error: {}", err).red());
}
