use clap::Args;

use crate::cli::SigningKeyArgs;

#[derive(Debug, Args)]
pub(crate) struct PublicKeyArgs {
    #[command(flatten)]
    key: SigningKeyArgs,
}

pub(crate) fn run(args: &PublicKeyArgs) -> Result<(), String> {
    let keys = args.key.key_material()?;

    print!("{}", keys.public_key_pem());

    Ok(())
}
