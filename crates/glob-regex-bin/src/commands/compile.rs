use clap::Parser;
use miette::IntoDiagnostic;

use super::GlobArgs;

#[derive(Debug, Parser)]
pub struct Opt {
    /// The glob to compile
    glob: String,

    #[clap(flatten)]
    args: GlobArgs,
}

pub fn compile(opt: Opt) -> miette::Result<()> {
    let options = opt.args.options()?;
    let regex = glob_regex::glob_to_regex(&opt.glob, &options).into_diagnostic()?;
    println!("{regex}");
    Ok(())
}
