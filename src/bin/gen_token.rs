//! Mints a short-lived JWT for exercising the API by hand.

use creators_portal::infrastructure::{
    auth::{issue_token, JwtKeys},
    config::Config,
};
use dotenvy::dotenv;

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;
    let keys = JwtKeys::new(&config.auth.jwt_secret);
    let user_id = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<i64>())
        .transpose()?
        .unwrap_or(1);

    let token = issue_token(&keys, user_id, config.jwt_ttl())?;
    println!("{token}");

    Ok(())
}
