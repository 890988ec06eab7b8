use std::cmp::Ordering;

use anyhow::Context;
use anyhow::Result;
use clap::arg;
use clap::Command;
use tracing::trace;

pub fn args() -> Command {
    Command::new("compare")
        .about("Compare two version fragments")
        .arg(arg!(left: <left> "Left version"))
        .arg(arg!(right: <right> "Right version"))
        .arg(arg!(--ordinal "Use the semver-projection strategy"))
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {
    let left = matches.get_one::<String>("left").context("left version expected")?;
    let right = matches.get_one::<String>("right").context("right version expected")?;
    let ordinal = matches.get_flag("ordinal");

    let ord = if ordinal {
        ua_version::compare(left, right)
    } else {
        ua_version::compare_canonicalized(left, right)
    };

    trace!(%left, %right, ordinal, "compared");

    let word = match ord {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    };
    println!("{word}");

    Ok(())
}
