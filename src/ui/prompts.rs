// Terminal output helpers for the client side

use colored::Colorize;

/// Display a success message
pub fn success(message: &str) {
    println!("{}", message.green().bold());
}

