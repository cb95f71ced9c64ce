//! Colored status messages shared by every command.

use ansi_term::Colour;
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn paint<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    format!("{} {}", colour.bold().paint(icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", paint(Colour::Blue, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", paint(Colour::Green, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", paint(Colour::Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", paint(Colour::Red, ICON_ERR, msg));
}
