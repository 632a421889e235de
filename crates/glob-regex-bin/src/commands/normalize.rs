use clap::Parser;
use miette::IntoDiagnostic;

use super::GlobArgs;

#[derive(Debug, Parser)]
pub struct Opt {
    /// The glob to normalize
    glob: String,

    #[clap(flatten)]
    args: GlobArgs,
}

pub fn normalize(opt: Opt) -> miette::Result<()> {
    let options = opt.args.options()?;
    println!(
        "{}",
        glob_regex::normalize_glob(&opt.glob, &options).into_diagnostic()?
    );
    Ok(())
}
