use clap::{Args, CommandFactory, Parser, Subcommand};
use eduhub::model::ResourceId;
use eduhub::state::{TypeFilter, ViewMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "eduhub",
    bin_name = "eduhub",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Browse, preview and download educational resources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the global configuration instead of the project one
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Catalog JSON file to browse
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Browse,
    Resource,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Browse => "Browse Commands:",
            CommandGroup::Resource => "Per-Resource Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "search" | "categories" | "types" | "nav" => Some(CommandGroup::Browse),
            "view" | "download" | "favorite" | "share" => Some(CommandGroup::Resource),
            "config" | "init" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Browse,
            CommandGroup::Resource,
            CommandGroup::Misc,
        ]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("eduhub {version}\n"));
    output.push_str("Browse, preview and download educational resources\n");
    output.push('\n');
    output.push_str("Usage: eduhub [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -g, --global         Use the global configuration\n");
    output.push_str("  -v, --verbose        Verbose output\n");
    output.push_str("      --catalog <PATH> Catalog JSON file to browse\n");
    output.push_str("      --no-color       Disable colored output\n");
    output.push_str("  -h, --help           Print help\n");
    output.push_str("  -V, --version        Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for the parsed subcommand, or the grouped help when there is none
pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Browse(c)) => match c {
            BrowseCommands::List { .. } => "list",
            BrowseCommands::Search { .. } => "search",
            BrowseCommands::Categories => "categories",
            BrowseCommands::Types => "types",
            BrowseCommands::Nav => "nav",
        },
        Some(Commands::Resource(c)) => match c {
            ResourceCommands::View { .. } => "view",
            ResourceCommands::Download { .. } => "download",
            ResourceCommands::Favorite { .. } => "favorite",
            ResourceCommands::Share { .. } => "share",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Init => "init",
            MiscCommands::Help { .. } => "help",
        },
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(name);
}

pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Browse(BrowseCommands),

    #[command(flatten)]
    Resource(ResourceCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

/// Filter, sort and view flags shared by `list` and `search`
#[derive(Args, Debug, Default, Clone)]
pub struct QueryArgs {
    /// Exact category name, or "all"
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Resource type (pdf, image, video, audio, document, presentation, archive) or "all"
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub resource_type: Option<TypeFilter>,

    /// Sort key: recent, popular, rating or name
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Layout: grid or list
    #[arg(long, value_name = "MODE")]
    pub view: Option<ViewMode>,
}

#[derive(Subcommand, Debug)]
pub enum BrowseCommands {
    /// List resources
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Search text, matched against names and descriptions
        #[arg(short, long)]
        search: Option<String>,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Search resources by name or description
    #[command(display_order = 2)]
    Search {
        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// List the categories in the catalog
    #[command(display_order = 3)]
    Categories,

    /// List the resource types
    #[command(display_order = 4)]
    Types,

    /// Show the site navigation
    #[command(display_order = 5)]
    Nav,
}

#[derive(Subcommand, Debug)]
pub enum ResourceCommands {
    /// Preview a resource
    #[command(alias = "v", display_order = 10)]
    View {
        /// Resource id
        id: ResourceId,
    },

    /// Download a resource
    #[command(alias = "dl", display_order = 11)]
    Download {
        /// Resource id
        id: ResourceId,
    },

    /// Add a resource to favorites, or remove it
    #[command(alias = "fav", display_order = 12)]
    Favorite {
        /// Resource id
        id: ResourceId,
    },

    /// Share a resource
    #[command(display_order = 13)]
    Share {
        /// Resource id
        id: ResourceId,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (default-sort, default-view, catalog)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the configuration directory
    #[command(display_order = 31)]
    Init,

    /// Print help for eduhub or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
