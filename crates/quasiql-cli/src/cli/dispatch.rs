//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::{AstArgs, OutputFormat};
use crate::commands::check::CheckArgs;
use crate::commands::config::ProjectArgs;

/// Project flags shared by `check` and `ast`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProjectParams {
    pub base_dir: Option<PathBuf>,
    pub transforms: Vec<String>,
    pub config: Option<PathBuf>,
}

impl ProjectParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            base_dir: m.get_one::<PathBuf>("base_dir").cloned(),
            transforms: m
                .get_many::<String>("transforms")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            config: m.get_one::<PathBuf>("config").cloned(),
        }
    }
}

impl From<ProjectParams> for ProjectArgs {
    fn from(p: ProjectParams) -> Self {
        Self {
            base_dir: p.base_dir,
            transforms: p.transforms,
            config: p.config,
        }
    }
}

pub struct CheckParams {
    pub files: Vec<PathBuf>,
    pub project: ProjectParams,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            files: m
                .get_many::<PathBuf>("files")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            project: ProjectParams::from_matches(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            files: p.files,
            project: p.project.into(),
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub file: PathBuf,
    pub project: ProjectParams,
    pub format: OutputFormat,
    pub compact: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: m.get_one::<PathBuf>("file").cloned().unwrap_or_default(),
            project: ProjectParams::from_matches(m),
            format: parse_format(m),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            file: p.file,
            project: p.project.into(),
            format: p.format,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TransformsParams;

impl TransformsParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}

pub struct LangsParams;

impl LangsParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Graphql,
    }
}
