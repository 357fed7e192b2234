use crate::adapter::inbound::cli::command::BuyArgs;
use crate::adapter::inbound::cli::output;
use crate::application::PurchaseFlow;
use crate::domain::PurchaseOutcome;
use crate::error::{Error, PurchaseError, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Run one purchase. `--dry-run` overrides a `dry_run = false` config.
pub async fn execute(config: &Config, args: &BuyArgs) -> Result<()> {
    let marketplace = bootstrap::build_marketplace(config)?;
    let strategy = bootstrap::build_strategy(config)?;
    let mut settings = bootstrap::purchase_settings(config)?;
    settings.dry_run |= args.dry_run;

    let mut flow = PurchaseFlow::new(&marketplace, &strategy, settings);
    let result = flow.run().await;

    match result {
        Ok(PurchaseOutcome::Confirmed(receipt)) => {
            output::section("Purchase Confirmed");
            output::field("Tx hash", receipt.tx_hash);
            if let Some(block) = receipt.block_number {
                output::field("Block", block);
            }
            output::field("Gas used", receipt.gas_used);
            output::success("Token bought");
            Ok(())
        }
        Ok(PurchaseOutcome::DryRun(call)) => {
            output::section("Dry Run");
            output::field("Target", call.target);
            output::field("Value", format!("{} ETH", call.value_ether()));
            output::field("Expected id", call.expected_id);
            output::field("Calldata", call.data.len());
            output::warning("Transaction not submitted");
            Ok(())
        }
        Err(e) => {
            if let Error::Purchase(PurchaseError::TransactionFailed {
                receipt: Some(ref receipt),
                ..
            }) = e
            {
                output::field("Tx hash", receipt.tx_hash);
            }
            output::field("State", flow.state());
            Err(e)
        }
    }
}
