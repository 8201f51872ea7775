use cardwall_board::ZoneId;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cardwall")]
#[command(version)]
#[command(about = "Inspect and rearrange kanban boards from the command line")]
#[command(long_about = "
cardwall talks to a kanban board backend and replays the same drag gestures the
board page performs: pick an item up, hover a drop zone, release.

Drop zones are the gaps between items, counted from 0:
  list zones   \"2\"    the gap in front of the third list
  card zones   \"1-0\"  the gap in front of the first card of the second list

Example usage:
  cardwall workspaces                 # Boards you can open
  cardwall show 7                     # Lists and cards of board 7
  cardwall move-list 7 12 0           # Move list 12 to the front
  cardwall move-card 7 40 1-2         # Move card 40 into list #2, third slot
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for commands that print data
    #[arg(long, value_enum, global = true, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List workspaces and their boards
    Workspaces,
    /// Show the lists and cards of a board
    Show {
        /// Board id
        board: u64,
    },
    /// Drag a list into a list drop zone
    MoveList {
        /// Board id
        board: u64,
        /// List id
        list: u64,
        /// Target gap, e.g. "0" for the front of the board
        zone: ZoneId,
    },
    /// Drag a card into a card drop zone
    MoveCard {
        /// Board id
        board: u64,
        /// Card id
        card: u64,
        /// Target gap as "<list slot>-<card slot>", e.g. "1-0"
        zone: ZoneId,
    },
    /// Delete a board with its lists and cards
    DeleteBoard {
        /// Board id
        board: u64,
    },
    /// Append a list to a board
    AddList {
        /// Board id
        board: u64,
        /// List title
        #[arg(long)]
        title: Option<String>,
    },
    /// Append a card to a list
    AddCard {
        /// Board id
        board: u64,
        /// List id
        list: u64,
        /// Card title
        #[arg(long)]
        title: Option<String>,
        /// Card content
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a list and its cards
    DeleteList {
        /// Board id
        board: u64,
        /// List id
        list: u64,
    },
    /// Delete a card
    DeleteCard {
        /// Board id
        board: u64,
        /// Card id
        card: u64,
    },
}
