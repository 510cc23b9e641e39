use std::path::PathBuf;

use quasiql_lib::Diagnostics;

use super::config::ProjectArgs;
use super::run_common::{SourceTexts, open_parser, relative_file};

pub struct CheckArgs {
    pub files: Vec<PathBuf>,
    pub project: ProjectArgs,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let parser = open_parser(&args.project, args.color);
    let mut diagnostics = Diagnostics::new();
    let mut sources = SourceTexts::default();

    for path in &args.files {
        let file = relative_file(parser.base_dir(), path);
        match parser.is_eligible(&file) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(err) => {
                err.report(&mut diagnostics);
                continue;
            }
        }

        let before = diagnostics.len();
        if let Err(err) = parser.parse(&file, &mut diagnostics) {
            err.report(&mut diagnostics);
        }
        if diagnostics.len() > before {
            sources.add(&parser, &file);
        }
    }

    let is_valid = if args.strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        !diagnostics.has_errors()
    };

    if !diagnostics.is_empty() {
        eprint!("{}", sources.render(&diagnostics, args.color));
    }
    if !is_valid {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
