use clap::Parser;
use console::style;
use miette::IntoDiagnostic;

use super::GlobArgs;

#[derive(Debug, Parser)]
pub struct Opt {
    /// The glob to match against
    glob: String,

    /// The paths to check
    #[clap(required = true)]
    paths: Vec<String>,

    #[clap(flatten)]
    args: GlobArgs,
}

pub fn matches(opt: Opt) -> miette::Result<()> {
    let options = opt.args.options()?;
    let regex = glob_regex::glob_to_regex(&opt.glob, &options).into_diagnostic()?;

    let mut mismatches = 0;
    for path in &opt.paths {
        if regex.is_match(path) {
            println!("{} {path}", style("✔").green());
        } else {
            mismatches += 1;
            println!("{} {path}", style("✘").red());
        }
    }

    if mismatches > 0 {
        return Err(miette::miette!(
            "{mismatches} of {} paths did not match '{}'",
            opt.paths.len(),
            opt.glob
        ));
    }
    Ok(())
}
