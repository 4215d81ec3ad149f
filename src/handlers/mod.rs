//! Command dispatch: one module per resource, each turning parsed arguments into
//! an API call and the output to print.

pub mod bookmarks;
pub mod tags;
pub mod user;

use crate::{api::LinkdingApi, args::Commands, error::CliError, print::Output};

/// Run a parsed command against the API and return what should be printed.
///
/// # Errors
///
/// Returns validation failures before any request is made, and propagates API failures.
pub async fn dispatch(api: &dyn LinkdingApi, command: Commands) -> Result<Output, CliError> {
    match command {
        Commands::Bookmarks(cmd) => bookmarks::handle(api, cmd.action).await,
        Commands::Tags(cmd) => tags::handle(api, cmd.action).await,
        Commands::User(cmd) => user::handle(api, cmd.action).await,
    }
}
