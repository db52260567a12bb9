// Companion terminal driver - stand-in for the external service layer.
// Owns the session token and the I/O loop; all logic lives in the library.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use companion_core::{Companion, SAFETY_NOTE};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Opaque session token; the core never interprets it.
    let session_id: String = Uuid::new_v4().to_string().chars().take(8).collect();

    println!("Welcome to your Mental Health Companion (session {session_id})");
    println!("{SAFETY_NOTE}");
    println!("Type a message, or \"quit\" to leave.\n");

    let companion = Companion::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();

        if message.eq_ignore_ascii_case("quit") || message.eq_ignore_ascii_case("exit") {
            break;
        }
        if message.is_empty() {
            // Empty input validation belongs to the service layer; here we
            // just re-prompt.
            continue;
        }

        let response = companion.respond(message);
        println!("\n{}\n", response.message);
    }

    Ok(())
}
