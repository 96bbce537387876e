use accounts_app::{auth::TokenService, domain::users::records::UserId};
use clap::Args;
use jiff::Timestamp;

use crate::cli::SigningKeyArgs;

#[derive(Debug, Args)]
pub(crate) struct IssueTokenArgs {
    #[command(flatten)]
    key: SigningKeyArgs,

    /// User id to embed as the token subject
    #[arg(long)]
    user_id: i64,
}

pub(crate) fn run(args: &IssueTokenArgs) -> Result<(), String> {
    let subject = UserId::from_i64(args.user_id);

    if !subject.is_assigned() {
        return Err("user-id must be positive".to_string());
    }

    let issued_at = Timestamp::now();
    let tokens = args.key.token_service()?;
    let token = tokens
        .issue(subject, issued_at)
        .map_err(|error| format!("failed to issue token: {error}"))?;

    println!("user_id: {subject}");
    println!("issued_at: {issued_at}");
    println!("expires_in: {:#}", tokens.ttl());
    println!("token: {token}");

    Ok(())
}
