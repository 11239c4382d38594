use clap::Args;
use stockroom_app::{
    database,
    domain::users::{PgUsersService, UsersService, UsersServiceError, records::UserUuid},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct DeleteUserArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// UUID of the user to delete
    #[arg(long)]
    uuid: Uuid,
}

pub(crate) async fn run(args: DeleteUserArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    match PgUsersService::new(pool)
        .delete_user(UserUuid::from_uuid(args.uuid))
        .await
    {
        Ok(()) => println!("deleted user {}", args.uuid),
        Err(UsersServiceError::NotFound) => println!("user {} does not exist", args.uuid),
        Err(error) => return Err(format!("failed to delete user: {error}")),
    }

    Ok(())
}
