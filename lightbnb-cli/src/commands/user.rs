//! `lightbnb user` - look up and register users

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use lightbnb_db::{NewUser, User};

use super::Session;

#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommands,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Show a user by email or id
    Show(ShowArgs),
    /// Register a new user
    Add(AddArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ShowArgs {
    /// Exact email address
    #[arg(long)]
    pub email: Option<String>,

    /// User id
    #[arg(long)]
    pub id: Option<i32>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Password hash, stored as given
    #[arg(long)]
    pub password: String,
}

pub async fn run(session: &Session, args: UserArgs) -> Result<()> {
    match args.command {
        UserCommands::Show(args) => run_show(session, args).await,
        UserCommands::Add(args) => run_add(session, args).await,
    }
}

async fn run_show(session: &Session, args: ShowArgs) -> Result<()> {
    let gateway = session.gateway().await?;

    let user = match (&args.email, args.id) {
        (Some(email), _) => gateway.get_user_by_email(email).await?,
        (None, Some(id)) => gateway.get_user_by_id(id).await?,
        (None, None) => bail!("pass --email or --id"),
    };

    match user {
        Some(user) => session.emit(&user, print_user),
        None => match args.email {
            Some(email) => bail!("No user with email '{}'", email),
            None => bail!("No user with id {}", args.id.unwrap_or_default()),
        },
    }
}

async fn run_add(session: &Session, args: AddArgs) -> Result<()> {
    let new = NewUser {
        name: args.name,
        email: args.email,
        password: args.password,
    };

    let gateway = session.gateway().await?;
    match gateway.add_user(&new).await {
        Ok(user) => session.emit(&user, print_user),
        Err(err) if err.is_unique_violation() => {
            bail!("A user with email '{}' already exists", new.email)
        }
        Err(err) => Err(err.into()),
    }
}

fn print_user(user: &User) {
    println!("#{} {} <{}>", user.id, user.name, user.email);
}
