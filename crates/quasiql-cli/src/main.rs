mod cli;
mod commands;

use cli::{AstParams, CheckParams, LangsParams, TransformsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("transforms", m)) => {
            let _params = TransformsParams::from_matches(m);
            commands::transforms::run();
        }
        Some(("langs", m)) => {
            let _params = LangsParams::from_matches(m);
            commands::langs::run();
        }
        _ => unreachable!("clap should have caught this"),
    }
}
