use clap::{CommandFactory, Parser, Subcommand, ValueHint};
use specify::Result;
use specify::commands::init::Shell;
use specify::commands::{create, init};

#[derive(Parser)]
#[command(name = "specify")]
#[command(about = "Bootstrap a new feature workspace: numbered branch, isolated worktree, and spec file")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(
    after_help = "A description whose first word is a subcommand name must be escaped with '--',\ne.g. 'specify -- init login flow'."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Emit the result as a single JSON line instead of human-readable lines
    #[arg(long)]
    json: bool,

    /// Free-text feature description (words are joined with single spaces).
    /// Prefix with '--' when the first word collides with a subcommand name
    #[arg(value_hint = ValueHint::Other)]
    description: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell integration (exports SPECIFY_FEATURE, cd into worktree)
    Init {
        /// Shell to generate integration for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { shell }) => {
            init::generate_shell_integration(shell);
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            init::generate_completions(shell, &mut cmd);
        }
        None => {
            let description = cli.description.join(" ");
            let report = create::create_feature(&description)?;
            report.print(cli.json)?;
        }
    }

    Ok(())
}
