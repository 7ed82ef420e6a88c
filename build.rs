use std::env;
use std::fs;
use std::path::Path;

// Keys config.rs reads through option_env!.
const CONFIG_KEYS: &[&str] = &["BACKEND_URL", "ENVIRONMENT"];

// Reads an optional .env file and re-exports the configuration keys as
// compile-time environment variables.
fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();
                    if !CONFIG_KEYS.contains(&key) {
                        continue;
                    }

                    // Real environment wins over .env entries.
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using default backend settings. Copy .env.example to .env to override.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
