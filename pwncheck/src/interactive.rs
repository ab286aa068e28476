use std::io;

use pwncheck_client::{RangeLookup, check_password};

use crate::error::Error;

/// Prompt loop for single-password checks.
///
/// Input is read without echo. Blank entries are skipped, query errors are
/// printed and the loop continues. The loop ends on end-of-input at the
/// prompt; other prompt failures are fatal.
pub async fn run<C: RangeLookup>(client: &C) -> Result<(), Error> {
    println!("Password checker using api.pwnedpasswords.com");

    loop {
        let password = match prompt_password().await {
            Ok(password) => password,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        };
        if password.is_empty() {
            continue;
        }

        match check_password(client, &password).await {
            Ok(Some(count)) => println!("Password found {count} times!\n"),
            Ok(None) => println!("Password not found, you are safe.\n"),
            Err(e) => println!("Error retrieving results!\n {e}\n"),
        }
    }

    Ok(())
}

/// Reads a password from the terminal without echoing it. The read blocks on
/// the tty, so it runs off the async runtime.
async fn prompt_password() -> io::Result<String> {
    tokio::task::spawn_blocking(|| rpassword::prompt_password("Enter a password to check: "))
        .await
        .map_err(io::Error::other)?
}
