//! Command-line surface for `linkding`.
//! Kept in the library so tests can build the same definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

#[derive(Parser, Debug)]
#[command(name = "linkding", version, about = "Interact with a linkding instance", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command; each may also come from the environment or a config file.
#[derive(Args, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// A path to a config file.
    #[arg(
        short = 'c',
        long,
        env = "LINKDING_CONFIG",
        value_name = "PATH",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    /// A linkding API token.
    #[arg(
        short = 't',
        long,
        env = "LINKDING_TOKEN",
        value_name = "TOKEN",
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// A URL to a linkding instance.
    #[arg(short = 'u', long, env = "LINKDING_URL", value_name = "URL")]
    pub url: Option<String>,

    /// Increase verbosity of standard output.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with bookmarks.
    Bookmarks(BookmarksArgs),
    /// Work with tags.
    Tags(TagsArgs),
    /// Work with user info.
    User(UserArgs),
}

impl Commands {
    /// Human-readable name of the invoked command, e.g. `bookmarks create`.
    pub fn name(&self) -> String {
        match self {
            Commands::Bookmarks(args) => format!("bookmarks {}", args.action.name()),
            Commands::Tags(args) => format!("tags {}", args.action.name()),
            Commands::User(args) => format!("user {}", args.action.name()),
        }
    }
}

#[derive(Parser, Debug)]
pub struct BookmarksArgs {
    #[command(subcommand)]
    pub action: BookmarksCmd,
}

#[derive(Subcommand, Debug)]
pub enum BookmarksCmd {
    /// Get all bookmarks.
    All {
        /// Return archived bookmarks.
        #[arg(short = 'a', long)]
        archived: bool,
        /// The number of bookmarks to return.
        #[arg(short = 'l', long)]
        limit: Option<u32>,
        /// The index from which to return results.
        #[arg(short = 'o', long)]
        offset: Option<u32>,
        /// Return bookmarks containing a query string.
        #[arg(short = 'q', long)]
        query: Option<String>,
    },
    /// Get a bookmark by its linkding ID.
    Get {
        /// The ID of a bookmark to retrieve.
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        bookmark_id: u64,
    },
    /// Create a bookmark.
    Create(BookmarkCreateArgs),
    /// Update a bookmark by its linkding ID.
    Update(BookmarkUpdateArgs),
    /// Delete a bookmark by its linkding ID.
    Delete {
        /// The ID of a bookmark to delete.
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        bookmark_id: u64,
    },
    /// Archive a bookmark by its linkding ID.
    Archive {
        /// The ID of a bookmark to archive.
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        bookmark_id: u64,
    },
    /// Unarchive a bookmark by its linkding ID.
    Unarchive {
        /// The ID of a bookmark to unarchive.
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        bookmark_id: u64,
    },
}

impl BookmarksCmd {
    fn name(&self) -> &'static str {
        match self {
            BookmarksCmd::All { .. } => "all",
            BookmarksCmd::Get { .. } => "get",
            BookmarksCmd::Create(_) => "create",
            BookmarksCmd::Update(_) => "update",
            BookmarksCmd::Delete { .. } => "delete",
            BookmarksCmd::Archive { .. } => "archive",
            BookmarksCmd::Unarchive { .. } => "unarchive",
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct BookmarkCreateArgs {
    /// The URL to bookmark.
    pub url: String,

    /// Whether the newly-created bookmark should be immediately archived.
    #[arg(short = 'a', long)]
    pub archived: bool,

    /// The description to give the bookmark.
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// Any Markdown-formatted notes to add to the bookmark.
    #[arg(short = 'n', long)]
    pub notes: Option<String>,

    /// Whether this bookmark should be shareable with other linkding users.
    #[arg(long)]
    pub shared: bool,

    /// The tags to apply to the bookmark (comma-separated).
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// The title to give the bookmark.
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Whether the bookmark should be marked as unread.
    #[arg(long)]
    pub unread: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct BookmarkUpdateArgs {
    /// The ID of a bookmark to update.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub bookmark_id: u64,

    /// The URL to assign to the bookmark.
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// The description to give the bookmark.
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// Any Markdown-formatted notes to add to the bookmark.
    #[arg(short = 'n', long)]
    pub notes: Option<String>,

    /// Whether this bookmark should be shareable with other linkding users.
    #[arg(long)]
    pub shared: bool,

    /// The tags to apply to the bookmark (comma-separated).
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// The title to give the bookmark.
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Whether the bookmark should be marked as unread.
    #[arg(long)]
    pub unread: bool,
}

impl BookmarkUpdateArgs {
    /// True when the caller supplied at least one field to change.
    pub fn has_fields(&self) -> bool {
        self.url.is_some()
            || self.title.is_some()
            || self.description.is_some()
            || self.notes.is_some()
            || self.tags.is_some()
            || self.unread
            || self.shared
    }
}

#[derive(Parser, Debug)]
pub struct TagsArgs {
    #[command(subcommand)]
    pub action: TagsCmd,
}

#[derive(Subcommand, Debug)]
pub enum TagsCmd {
    /// Get all tags.
    All {
        /// The number of tags to return.
        #[arg(short = 'l', long)]
        limit: Option<u32>,
        /// The index from which to return results.
        #[arg(short = 'o', long)]
        offset: Option<u32>,
    },
    /// Get a tag by its linkding ID.
    Get {
        /// The ID of a tag to retrieve.
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        tag_id: u64,
    },
    /// Create a tag.
    Create {
        /// The tag to create.
        tag_name: String,
    },
}

impl TagsCmd {
    fn name(&self) -> &'static str {
        match self {
            TagsCmd::All { .. } => "all",
            TagsCmd::Get { .. } => "get",
            TagsCmd::Create { .. } => "create",
        }
    }
}

#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub action: UserCmd,
}

#[derive(Subcommand, Debug)]
pub enum UserCmd {
    /// Get the profile of the token's owner.
    Profile,
}

impl UserCmd {
    fn name(&self) -> &'static str {
        match self {
            UserCmd::Profile => "profile",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_precede_subcommand() {
        let cli = Cli::try_parse_from([
            "linkding",
            "-t",
            "flag-token",
            "-u",
            "http://127.0.0.1:8080",
            "-v",
            "tags",
            "all",
        ])
        .expect("parse");

        assert_eq!(cli.global.token.as_deref(), Some("flag-token"));
        assert_eq!(cli.global.url.as_deref(), Some("http://127.0.0.1:8080"));
        assert!(cli.global.verbose);
        assert_eq!(cli.command.name(), "tags all");
    }

    #[test]
    fn subcommand_short_flags_do_not_clash_with_globals() {
        let cli = Cli::try_parse_from([
            "linkding",
            "-t",
            "token",
            "bookmarks",
            "create",
            "https://example.com",
            "-t",
            "Title",
            "--tags",
            "a,b",
        ])
        .expect("parse");

        assert_eq!(cli.global.token.as_deref(), Some("token"));
        match cli.command {
            Commands::Bookmarks(BookmarksArgs {
                action: BookmarksCmd::Create(args),
            }) => {
                assert_eq!(args.url, "https://example.com");
                assert_eq!(args.title.as_deref(), Some("Title"));
                assert_eq!(args.tags.as_deref(), Some("a,b"));
                assert!(!args.archived && !args.unread && !args.shared);
            }
            other => panic!("wrong command parsed: {other:?}"),
        }
    }

    #[test]
    fn identifiers_must_be_positive() {
        let err = Cli::try_parse_from(["linkding", "bookmarks", "get", "0"])
            .expect_err("zero id should be rejected");
        assert_eq!(err.exit_code(), 2);

        let err = Cli::try_parse_from(["linkding", "tags", "get", "abc"])
            .expect_err("non-numeric id should be rejected");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_subcommand_is_a_usage_error() {
        let err = Cli::try_parse_from(["linkding", "bookmarks"]).expect_err("needs action");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn update_without_flags_has_no_fields() {
        let args = BookmarkUpdateArgs {
            bookmark_id: 12,
            ..Default::default()
        };
        assert!(!args.has_fields());

        let args = BookmarkUpdateArgs {
            bookmark_id: 12,
            shared: true,
            ..Default::default()
        };
        assert!(args.has_fields());
    }
}
