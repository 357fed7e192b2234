use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::wallet;

/// Show the buyer address derived from the signing credential.
pub fn execute(config: &Config) -> Result<()> {
    let signer = wallet::signer(&config.wallet)?;

    output::section("Wallet Address");
    output::field("Address", signer.address());
    Ok(())
}
