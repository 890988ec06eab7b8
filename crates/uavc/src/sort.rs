use anyhow::Context;
use anyhow::Result;
use clap::arg;
use clap::Command;

use ua_version::{compare, VersionString};

pub fn args() -> Command {
    Command::new("sort")
        .about("Sort and dedup version fragments")
        .long_about("Take a list of version fragments, sort them with the canonicalized strategy and print them one per line")
        .arg(arg!(versions: <version>... "Versions to sort"))
        .arg(arg!(--ordinal "Order by the semver projection instead of the canonical form"))
        .arg(arg!(--ascending "output in ascending order (default)")
            .overrides_with("descending")
        )
        .arg(arg!(--descending "output in descending order")
            .overrides_with("ascending")
        )
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {
    let versions = matches.get_many::<String>("versions").context("version expected")?;
    let ordinal = matches.get_flag("ordinal");
    let descending = matches.get_flag("descending");

    let mut versions: Vec<VersionString> = versions.map(|v| v.as_str().into()).collect();

    if ordinal {
        versions.sort_by(|a, b| compare(a.as_str(), b.as_str()));
        versions.dedup_by(|a, b| compare(a.as_str(), b.as_str()).is_eq());
    } else {
        versions.sort();
        versions.dedup();
    }

    if descending {
        versions.reverse();
    }

    for v in versions {
        println!("{}", v.as_str());
    }

    Ok(())
}
