use crate::warnings::RewriteWarning;

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

pub fn display_warning(warning: &RewriteWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

pub fn display_proposed_version(old: Option<&str>, new: &str) {
    match old {
        Some(old) => {
            println!("\n\x1b[1mProposed Version Change:\x1b[0m");
            println!("  From: \x1b[31m{}\x1b[0m", old);
            println!("  To:   \x1b[32m{}\x1b[0m", new);
        }
        None => {
            println!("\n\x1b[1mInitial Version:\x1b[0m");
            println!("  New version: \x1b[32m{}\x1b[0m", new);
        }
    }
}
