//! Print the Argon2 hash for a password, for seeding admin accounts by hand:
//!   cargo run --bin hash-password --features server -- 'the-password'

fn main() {
    let password = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "changeme-now".to_string());
    let hash = server::auth::password::hash_password(&password).expect("Failed to hash password");
    println!("{hash}");
}
