use clap::Args;
use stockroom_app::{
    auth::{generate_api_token, hash_api_token, is_well_formed},
    database,
    domain::users::{PgUsersService, UsersService, data::NewUser, records::UserUuid},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Display name recorded on stock movements
    #[arg(long)]
    name: String,

    /// Unique email address
    #[arg(long)]
    email: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional user UUID; generated when omitted
    #[arg(long)]
    user_uuid: Option<Uuid>,

    /// Optional raw API token (`st_` followed by 64 hex characters); generated when omitted
    #[arg(long, hide_env_values = true)]
    token: Option<String>,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let raw_token = match args.token {
        Some(token) if !is_well_formed(&token) => {
            return Err("token must be `st_` followed by 64 hex characters".to_string());
        }
        Some(token) => token,
        None => generate_api_token().to_string(),
    };

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let user = PgUsersService::new(pool)
        .create_user(NewUser {
            uuid: args.user_uuid.map_or_else(UserUuid::new, UserUuid::from_uuid),
            name: args.name,
            email: args.email,
            token_hash: hash_api_token(&raw_token),
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("user_name: {}", user.name);
    println!("api_token: {raw_token}");
    println!("store this token now; it is only shown once");

    Ok(())
}
