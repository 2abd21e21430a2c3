//! Shell integration and completion generation.
//!
//! The exported feature branch has to reach the caller's shell session, and
//! environment changes made by a child process die with it. The wrapper
//! functions printed here run the binary with `--json`, export
//! `SPECIFY_FEATURE` from the result, and `cd` into the new worktree, so the
//! contract holds for any caller that evals the integration.

use clap::{Command, ValueEnum};
use clap_complete::{Shell as CompleteShell, generate};
use std::io;

#[derive(ValueEnum, Clone, Copy)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

/// Generate shell integration for the specified shell
pub fn generate_shell_integration(shell: Shell) {
    match shell {
        Shell::Bash | Shell::Zsh => print_posix_integration(),
        Shell::Fish => print_fish_integration(),
    }
}

/// Generate native shell completions using clap
pub fn generate_completions(shell: Shell, cmd: &mut Command) {
    let clap_shell = match shell {
        Shell::Bash => CompleteShell::Bash,
        Shell::Zsh => CompleteShell::Zsh,
        Shell::Fish => CompleteShell::Fish,
    };

    generate(
        clap_shell,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}

fn print_posix_integration() {
    println!(
        r#"# Specify shell integration
# Wraps specify-bin so a successful run exports SPECIFY_FEATURE and moves the
# shell into the new worktree.

specify() {{
    case "$1" in
        init|completions|help|--help|-h|--version|-V)
            # Delegate non-provisioning invocations to the binary
            specify-bin "$@"
            ;;
        *)
            local out
            out=$(specify-bin --json "$@") || return 1

            local branch dir
            branch=$(printf '%s' "$out" | sed -n 's/.*"branch_name":"\([^"]*\)".*/\1/p')
            dir=$(printf '%s' "$out" | sed -n 's/.*"worktree_path":"\([^"]*\)".*/\1/p')

            if [ -n "$branch" ]; then
                export SPECIFY_FEATURE="$branch"
            fi
            if [ -n "$dir" ]; then
                cd "$dir" || return 1
            fi
            printf '%s\n' "$out"
            ;;
    esac
}}"#
    );
}

fn print_fish_integration() {
    println!(
        r#"# Specify shell integration for Fish
# Wraps specify-bin so a successful run exports SPECIFY_FEATURE and moves the
# shell into the new worktree.

function specify
    switch "$argv[1]"
        case init completions help --help -h --version -V
            specify-bin $argv
        case '*'
            set -l out (specify-bin --json $argv)
            or return 1

            set -l branch (printf '%s' "$out" | sed -n 's/.*"branch_name":"\([^"]*\)".*/\1/p')
            set -l dir (printf '%s' "$out" | sed -n 's/.*"worktree_path":"\([^"]*\)".*/\1/p')

            if test -n "$branch"
                set -gx SPECIFY_FEATURE $branch
            end
            if test -n "$dir"
                cd $dir
                or return 1
            end
            printf '%s\n' "$out"
    end
end"#
    );
}
