use accounts_app::auth::TokenService;
use clap::Args;

use crate::cli::SigningKeyArgs;

#[derive(Debug, Args)]
pub(crate) struct VerifyTokenArgs {
    #[command(flatten)]
    key: SigningKeyArgs,

    /// Token to check
    #[arg(long)]
    token: String,
}

pub(crate) fn run(args: &VerifyTokenArgs) -> Result<(), String> {
    let subject = args
        .key
        .token_service()?
        .verify(&args.token)
        .map_err(|error| format!("token rejected: {error}"))?;

    println!("user_id: {subject}");

    Ok(())
}
