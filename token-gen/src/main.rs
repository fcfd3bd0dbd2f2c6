use anyhow::{Context, Result, bail};
use clap::Parser;

use cyber_kittens::services::auth::TokenIssuer;

/// Mint an HS256 access token for local testing of the kittens API.
///
/// The token carries `{id, username?, iat, exp}` and is signed with the same
/// shared secret the server reads from `JWT_SECRET`.
///
/// Example:
///   token-gen --user-id 1 --username tom-owner
///   curl -H "Authorization: Bearer $(token-gen --user-id 1 --quiet)" localhost:3000/kittens/<id>
#[derive(Parser, Debug)]
#[command(name = "token-gen", version, about)]
struct Args {
    /// Identity id placed in the `id` claim (compared with kitten ownerId)
    #[arg(long)]
    user_id: i64,

    /// Optional `username` claim
    #[arg(long)]
    username: Option<String>,

    /// Shared HS256 secret
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    secret: String,

    /// Token lifetime in seconds
    #[arg(long, default_value_t = 3600)]
    ttl_seconds: u64,

    /// Print only the token (no extra lines)
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.secret.is_empty() {
        bail!("secret must not be empty");
    }

    let issuer = TokenIssuer::new(&args.secret, args.ttl_seconds);
    let token = issuer
        .issue(args.user_id, args.username.as_deref())
        .context("failed to sign token")?;

    if args.quiet {
        println!("{token}");
    } else {
        println!("user_id: {}", args.user_id);
        println!("expires_in: {}s", issuer.ttl_seconds());
        println!("Authorization: Bearer {token}");
    }

    Ok(())
}
