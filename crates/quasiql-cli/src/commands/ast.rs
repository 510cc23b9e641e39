use std::path::PathBuf;

use quasiql_lib::{Diagnostics, Document, graphql};

use super::config::ProjectArgs;
use super::run_common::{SourceTexts, open_parser, relative_file};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Graphql,
    Json,
}

pub struct AstArgs {
    pub file: PathBuf,
    pub project: ProjectArgs,
    pub format: OutputFormat,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let parser = open_parser(&args.project, args.color);
    let file = relative_file(parser.base_dir(), &args.file);
    let mut diagnostics = Diagnostics::new();

    let document = match parser.is_eligible(&file) {
        Ok(false) => Ok(Default::default()),
        Ok(true) => parser.parse(&file, &mut diagnostics),
        Err(err) => Err(err),
    };

    let mut sources = SourceTexts::default();
    let document = match document {
        Ok(document) => document,
        Err(err) => {
            err.report(&mut diagnostics);
            sources.add(&parser, &file);
            eprint!("{}", sources.render(&diagnostics, args.color));
            std::process::exit(1);
        }
    };

    if !diagnostics.is_empty() {
        sources.add(&parser, &file);
        eprint!("{}", sources.render(&diagnostics, args.color));
    }

    match render(&document, args.format, args.compact) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

pub fn render(
    document: &Document,
    format: OutputFormat,
    compact: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Graphql => Ok(graphql::print(document)),
        OutputFormat::Json if compact => serde_json::to_string(document),
        OutputFormat::Json => serde_json::to_string_pretty(document),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quasiql_lib::graphql::Source;

    fn document(text: &str) -> Document {
        graphql::parse(&Source::new(text, "t")).unwrap()
    }

    #[test]
    fn renders_graphql() {
        let output = render(&document("query Q{a}"), OutputFormat::Graphql, false).unwrap();
        insta::assert_snapshot!(output, @r"
        query Q {
          a
        }
        ");
    }

    #[test]
    fn renders_compact_json() {
        let output = render(&Document::default(), OutputFormat::Json, true).unwrap();
        insta::assert_snapshot!(output, @r#"{"kind":"Document","definitions":[]}"#);
    }

    #[test]
    fn pretty_json_is_valid() {
        let output = render(&document("fragment F on T { a }"), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["definitions"][0]["kind"], "FragmentDefinition");
    }
}
