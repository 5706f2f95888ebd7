//! Auto-wiring a small application and printing what got registered.
//!
//! Run with `RUST_LOG=autowire_container=debug` to watch the scan.

use autowire::prelude::*;
use autowire::{auto_service, service_impl};
use tracing_subscriber::EnvFilter;

// === Abstractions ===

trait Logger: Send + Sync {
    fn log(&self, msg: &str);
}

trait UserRepository: Send + Sync {
    fn find_user(&self, id: u64) -> String;
}

// === Implementations ===

#[auto_service]
struct ConsoleLogger;

#[service_impl]
impl Logger for ConsoleLogger {
    fn log(&self, msg: &str) {
        println!("[LOG] {msg}");
    }
}

#[auto_service(lifetime = "scoped")]
struct PostgresUserRepository;

#[service_impl]
impl UserRepository for PostgresUserRepository {
    fn find_user(&self, id: u64) -> String {
        format!("user #{id}")
    }
}

// Registered against itself: no explicit services, no declared traits.
#[auto_service(lifetime = "transient")]
struct UserService;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut services = ServiceCollection::new();
    services.auto_wire()?;

    println!("Registered {} services:", services.len());
    print!("{services}");

    Ok(())
}
