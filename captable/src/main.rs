use captable::{
    Console,
    driver::{self, DriverConfig},
    logging::{self, LoggingConfig},
};

fn main() {
    logging::init(&LoggingConfig::default());

    // A failed write is reported on stderr; the exit status stays 0.
    let mut console = Console::new();
    if let Err(error) = driver::run(&mut console, &DriverConfig::default()) {
        tracing::error!(%error, "driver failed");
    }
}
