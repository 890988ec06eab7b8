use anyhow::Result;
use clap::Command;

mod canon;
mod compare;
mod semver;
mod sort;

pub fn get_cli() -> Command {
    build_cli(Command::new("uavc"))
}

pub fn build_cli(cmd: clap::Command) -> clap::Command {
    cmd.about("Inspect and order user-agent version fragments")
        .subcommand_required(true)
        .subcommand(sort::args())
        .subcommand(compare::args())
        .subcommand(canon::args())
        .subcommand(semver::args())
}

pub fn main_cli(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("sort", matches)) => sort::main(matches),
        Some(("compare", matches)) => compare::main(matches),
        Some(("canon", matches)) => canon::main(matches),
        Some(("semver", matches)) => semver::main(matches),
        _ => {
            get_cli().print_long_help()?;
            Ok(())
        }
    }
}
