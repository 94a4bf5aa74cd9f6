#![expect(missing_docs, reason = "example")]

use uplog::{Level, Log, TimeLogger, debugf, errorf, infof, warningf};

fn main() {
    uplog::time::init();

    let stderr = std::io::stderr();
    let logger = TimeLogger::new(&stderr, Level::Info);

    infof!(logger, "starting up\n");
    debugf!(logger, "gated out, never rendered\n");

    if logger.is_level(Level::Debug) {
        // Skipped: building the report would be wasted work.
        debugf!(logger, "state dump: {:?}\n", expensive_report());
    }

    std::thread::sleep(std::time::Duration::from_millis(25));
    warningf!(logger, "slow response from {}: {}ms\n", "upstream", 350);
    errorf!(logger, "giving up after {} attempts\n", 3);
}

fn expensive_report() -> Vec<u64> {
    (0..1_000_000u64).collect()
}
