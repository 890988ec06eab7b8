use anyhow::Context;
use anyhow::Result;
use clap::arg;
use clap::Command;

pub fn args() -> Command {
    Command::new("semver")
        .about("Project version fragments onto major.minor.patch")
        .arg(arg!(versions: <version>... "Versions to project"))
        .arg(
            arg!(--parts <n> "Segment count, 4 keeps a pre-release tag")
                .value_parser(clap::value_parser!(usize))
                .default_value("3"),
        )
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {
    let versions = matches.get_many::<String>("versions").context("version expected")?;
    let parts = *matches.get_one::<usize>("parts").context("parts expected")?;

    for v in versions {
        println!("{}", ua_version::to_semver_parts(v, parts));
    }

    Ok(())
}
