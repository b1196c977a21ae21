//! Development tasks: man pages and shell completions for `draftcheck`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "draftcheck development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for draftcheck and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
        /// Shells to generate for (default: all)
        #[arg(long, value_enum, value_delimiter = ',')]
        shell: Vec<CompletionShell>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CompletionShell {
    Bash,
    Elvish,
    Fish,
    PowerShell,
    Zsh,
}

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Self::Bash,
            CompletionShell::Elvish => Self::Elvish,
            CompletionShell::Fish => Self::Fish,
            CompletionShell::PowerShell => Self::PowerShell,
            CompletionShell::Zsh => Self::Zsh,
        }
    }
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => gen_man(&out),
        Task::Completions { out, shell } => {
            let shells = if shell.is_empty() {
                vec![
                    CompletionShell::Bash,
                    CompletionShell::Elvish,
                    CompletionShell::Fish,
                    CompletionShell::PowerShell,
                    CompletionShell::Zsh,
                ]
            } else {
                shell
            };
            gen_completions(&out, &shells)
        }
    }
}

fn gen_man(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let cmd = draftcheck::command();
    clap_mangen::generate_to(cmd, out)?;
    println!("man pages written to {}", out.display());
    Ok(())
}

fn gen_completions(out: &Path, shells: &[CompletionShell]) -> io::Result<()> {
    fs::create_dir_all(out)?;
    for &shell in shells {
        let mut cmd = draftcheck::command();
        let path = clap_complete::generate_to(Shell::from(shell), &mut cmd, "draftcheck", out)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
