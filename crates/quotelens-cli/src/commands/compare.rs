use quotelens_core::ProviderId;

use crate::cli::CompareArgs;
use crate::error::CliError;

use super::{CommandResult, Services};

pub async fn run(args: &CompareArgs, services: &Services) -> Result<CommandResult, CliError> {
    let response = services
        .aggregator
        .compare_investment(&args.symbols, &args.investment, &args.years)
        .await?;

    let unavailable = response
        .comparison_table
        .iter()
        .filter(|row| row.is_unavailable())
        .count();

    let mut result =
        CommandResult::ok(serde_json::to_value(&response)?, ProviderId::Yahoo);
    if unavailable > 0 {
        result = result.with_warning(format!(
            "{unavailable} symbol(s) had no usable history and report N/A"
        ));
    }

    Ok(result)
}
