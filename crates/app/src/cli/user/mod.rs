use clap::{Args, Subcommand};

mod create;
mod delete;

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    Create(create::CreateUserArgs),
    Delete(delete::DeleteUserArgs),
}

pub(crate) async fn run(command: UserCommand) -> Result<(), String> {
    match command.command {
        UserSubcommand::Create(args) => create::run(args).await,
        UserSubcommand::Delete(args) => delete::run(args).await,
    }
}
