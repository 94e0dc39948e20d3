use crate::error::CliError;
use argh::FromArgs;
use bitprobe_api::ops::find_prime;

#[derive(FromArgs, Debug)]
/// Find the smallest prime greater than or equal to a value
#[argh(subcommand, name = "find-prime")]
pub struct FindPrimeCmd {
    /// lower bound for the search
    #[argh(positional)]
    pub n: u64,
}

pub fn handle_find_prime_command(cmd: FindPrimeCmd) -> Result<(), CliError> {
    let prime = find_prime(cmd.n)?;
    println!("{prime}");
    Ok(())
}
