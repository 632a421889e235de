#[derive(Debug, clap::Parser)]
pub struct Opt {
    /// The string to inspect
    input: String,
}

pub fn is_glob(opt: Opt) -> miette::Result<()> {
    println!("{}", glob_regex::is_glob(&opt.input));
    Ok(())
}
