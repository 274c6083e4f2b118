// src/bin/hash_password.rs

//! Maintenance helper that produces an Argon2 hash for a dashboard account
//! password, suitable for the `password_hash` field of the `DASHBOARD_USERS`
//! environment variable.
//!
//! Usage:
//!   hash_password <password>
//!   echo '<password>' | hash_password

use std::io::{self, BufRead};
use std::process::ExitCode;

use qwb_dashboard::services::auth_service;

fn read_password_arg() -> Option<String> {
  if let Some(arg) = std::env::args().nth(1) {
    return Some(arg);
  }
  // Fall back to the first line on stdin so the password does not have to
  // appear in shell history.
  let stdin = io::stdin();
  let mut line = String::new();
  match stdin.lock().read_line(&mut line) {
    Ok(0) => None,
    Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    Err(_) => None,
  }
}

fn main() -> ExitCode {
  let Some(password) = read_password_arg() else {
    eprintln!("Usage: hash_password <password>  (or pipe the password on stdin)");
    return ExitCode::FAILURE;
  };

  if password.is_empty() {
    eprintln!("Refusing to hash an empty password.");
    return ExitCode::FAILURE;
  }

  match auth_service::hash_password(&password) {
    Ok(hash) => {
      println!("{}", hash);
      ExitCode::SUCCESS
    }
    Err(e) => {
      eprintln!("Failed to hash password: {}", e);
      ExitCode::FAILURE
    }
  }
}
