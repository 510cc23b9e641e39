//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Add project args (base dir, transforms, config).
fn with_project_args(cmd: Command) -> Command {
    cmd.arg(base_dir_arg())
        .arg(transform_arg())
        .arg(config_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("quasiql")
        .about("Extract and validate GraphQL tags embedded in JavaScript sources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(ast_command())
        .subcommand(transforms_command())
        .subcommand(langs_command())
}

/// Validate the GraphQL tags of source files.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate the GraphQL tags of source files")
        .override_usage(
            "\
  quasiql check <FILE>...
  quasiql check -C <DIR> <FILE>...
  quasiql check -c <CONFIG> <FILE>...",
        )
        .after_help(
            r#"EXAMPLES:
  quasiql check src/App.js                    # validate one file
  quasiql check -C src App.js Feed.tsx        # files relative to src/
  quasiql check -t vue-script App.vue         # extract <script> first
  quasiql check -c quasiql.json --strict a.js # warnings fail the run

Files that never mention `graphql` are skipped."#,
        )
        .arg(files_arg())
        .arg(strict_arg())
        .arg(color_arg());

    with_project_args(cmd)
}

/// Print the merged GraphQL document of a source file.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Print the merged GraphQL document of a source file")
        .after_help(
            r#"EXAMPLES:
  quasiql ast src/App.js                 # canonical GraphQL text
  quasiql ast src/App.js --format json   # graphql-js shaped AST"#,
        )
        .arg(file_arg())
        .arg(format_arg())
        .arg(compact_arg())
        .arg(color_arg());

    with_project_args(cmd)
}

/// List built-in transforms.
pub fn transforms_command() -> Command {
    Command::new("transforms").about("List built-in transforms")
}

/// List host languages.
pub fn langs_command() -> Command {
    Command::new("langs").about("List supported host languages with extensions")
}
