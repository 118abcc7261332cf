//! Progress reporting while waiting on the model

use std::io::{self, Write};
use std::time::Instant;

/// Single-line status message on stderr
pub struct ProgressReporter {
    started: Instant,
}

impl ProgressReporter {
    pub fn start(msg: &str) -> Self {
        eprint!("\r{:<50}", msg);
        io::stderr().flush().ok();
        Self {
            started: Instant::now(),
        }
    }

    pub fn finish(&self) {
        eprintln!(
            "\rDone ({:.1}s)                                        ",
            self.started.elapsed().as_secs_f64()
        );
    }
}
