use assert_cmd::cargo::CommandCargoExt;

/// Run the `destinations-fetch` binary without any database configuration
pub fn run(args: &[&str]) -> std::process::Output {
    std::process::Command::cargo_bin("destinations-fetch")
        .unwrap()
        .env_remove("DATABASE_URL")
        .env("PGHOST", "127.0.0.1")
        .env("PGPORT", "1")
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .unwrap()
}
