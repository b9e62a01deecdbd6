use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notes", bin_name = "notes", version)]
#[command(about = "Notes CLI - Organize your thoughts!", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Notes file to use
    #[arg(short, long, global = true, env = "NOTES_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Use the notes file in the user data directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    #[command(alias = "new")]
    Add {
        /// Title of the note
        title: String,

        /// Body of the note
        #[arg(allow_hyphen_values = true)]
        body: String,
    },

    /// List all notes by id and title
    #[command(alias = "ls")]
    List,

    /// Display one or more notes
    #[command(alias = "display")]
    Show {
        /// Ids of the notes (e.g. 1 3-5 all)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        ids: Vec<String>,
    },

    /// Delete a note by id; later notes move down one id
    #[command(alias = "rm")]
    Delete {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },

    /// Replace the body of a note
    Replace {
        #[arg(allow_hyphen_values = true)]
        id: String,

        /// New body
        #[arg(allow_hyphen_values = true)]
        body: String,
    },

    /// Append text to the body of a note
    Append {
        #[arg(allow_hyphen_values = true)]
        id: String,

        /// Text to append, joined with ", "
        #[arg(allow_hyphen_values = true)]
        fragment: String,
    },

    /// Delete all notes
    Clear,

    /// Close gaps in note ids
    Doctor,

    /// Print the path of the notes file
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add() {
        let cli = Cli::try_parse_from(["notes", "add", "Title", "Body"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Add { ref title, ref body }) if title == "Title" && body == "Body"
        ));
    }

    #[test]
    fn parses_negative_id_as_value() {
        let cli = Cli::try_parse_from(["notes", "delete", "-1"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Delete { ref id }) if id == "-1"));
    }

    #[test]
    fn parses_global_flags_anywhere() {
        let cli = Cli::try_parse_from(["notes", "list", "-vv", "--file", "x.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.file, Some(PathBuf::from("x.json")));
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["notes"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn show_requires_ids() {
        assert!(Cli::try_parse_from(["notes", "show"]).is_err());
        let cli = Cli::try_parse_from(["notes", "display", "all"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Show { ref ids }) if ids == &["all"]));
    }
}
