use std::sync::Arc;

use accounts_app::{
    auth::{BcryptHasher, DEFAULT_HASH_COST},
    database,
    domain::users::{AccountsUsersService, PgUsersRepository, UsersService, data::NewUserRequest},
};
use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct RegisterUserArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Display name, 3 to 60 characters
    #[arg(long)]
    full_name: String,

    /// Phone number starting with +62
    #[arg(long)]
    phone_number: String,

    /// Initial password
    #[arg(long, env = "ACCOUNTS_USER_PASSWORD", hide_env_values = true)]
    password: String,

    /// bcrypt work factor
    #[arg(long, env = "PASSWORD_HASH_COST", default_value_t = DEFAULT_HASH_COST)]
    hash_cost: u32,
}

pub(crate) async fn run(args: RegisterUserArgs) -> Result<(), String> {
    let hasher = BcryptHasher::new(args.hash_cost).map_err(|error| error.to_string())?;

    let pool = database::connect(&args.database.options())
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = AccountsUsersService::new(
        Arc::new(PgUsersRepository::new(pool.clone())),
        Arc::new(hasher),
    );

    let user = service
        .register_user(NewUserRequest {
            full_name: args.full_name,
            phone_number: args.phone_number,
            password: args.password,
        })
        .await
        .map_err(|error| format!("failed to register user: {error}"))?;

    pool.close().await;

    println!("user_id: {}", user.id);
    println!("full_name: {}", user.full_name);
    println!("phone_number: {}", user.phone_number);

    Ok(())
}
