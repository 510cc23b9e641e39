//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Source files to check (positional, repeatable).
pub fn files_arg() -> Arg {
    Arg::new("files")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("Source files, relative to the base directory or to the working directory")
}

/// Single source file (positional).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Source file")
}

/// Base directory files are resolved against (--base-dir).
pub fn base_dir_arg() -> Arg {
    Arg::new("base_dir")
        .short('C')
        .long("base-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Base directory (default: config file's baseDir, else current directory)")
}

/// Transform applied before tag search (--transform, repeatable).
pub fn transform_arg() -> Arg {
    Arg::new("transforms")
        .short('t')
        .long("transform")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Transform to apply, in order (replaces the config file's list)")
}

/// JSON project config (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON config with baseDir and transforms")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("graphql")
        .value_parser(["graphql", "json"])
        .help("Output format")
}

/// Compact JSON output (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (no effect on graphql output)")
}
