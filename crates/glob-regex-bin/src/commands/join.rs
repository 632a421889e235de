use clap::Parser;
use miette::IntoDiagnostic;

use super::GlobArgs;

#[derive(Debug, Parser)]
pub struct Opt {
    /// The globs to join, empty globs are skipped
    globs: Vec<String>,

    #[clap(flatten)]
    args: GlobArgs,
}

pub fn join(opt: Opt) -> miette::Result<()> {
    let options = opt.args.options()?;
    let joined =
        glob_regex::join_globs(opt.globs.iter().map(String::as_str), &options).into_diagnostic()?;
    println!("{joined}");
    Ok(())
}
