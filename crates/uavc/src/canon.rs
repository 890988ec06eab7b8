use anyhow::Context;
use anyhow::Result;
use clap::arg;
use clap::Command;

pub fn args() -> Command {
    Command::new("canon")
        .about("Print the canonical form of version fragments")
        .arg(arg!(versions: <version>... "Versions to canonicalize"))
        .arg(arg!(--sanitize "Strip rule-template artifacts first"))
        .arg(arg!(--major "Print only the leading numeric component"))
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {
    let versions = matches.get_many::<String>("versions").context("version expected")?;
    let sanitize = matches.get_flag("sanitize");
    let major = matches.get_flag("major");

    for v in versions {
        let v = if sanitize {
            ua_version::sanitize(v)
        } else {
            v.to_string()
        };
        if major {
            println!("{}", ua_version::major(&v));
        } else {
            println!("{}", ua_version::canonicalize(&v));
        }
    }

    Ok(())
}
