use clap::{Args, Subcommand};

mod issue;
mod public_key;
mod verify;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    /// Sign a session token for a user id
    Issue(issue::IssueTokenArgs),
    /// Check a session token and print its subject
    Verify(verify::VerifyTokenArgs),
    /// Print the verification key derived from the signing key
    PublicKey(public_key::PublicKeyArgs),
}

pub(crate) fn run(command: TokenCommand) -> Result<(), String> {
    match command.command {
        TokenSubcommand::Issue(args) => issue::run(&args),
        TokenSubcommand::Verify(args) => verify::run(&args),
        TokenSubcommand::PublicKey(args) => public_key::run(&args),
    }
}
