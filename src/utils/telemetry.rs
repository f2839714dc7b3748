// file: src/utils/telemetry.rs
// description: stage timing for search requests
// reference: Production observability best practices

use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Operation timer for performance tracking
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        info!("Starting operation: {}", operation);
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        info!(
            "Completed operation: {} in {:.2}s",
            self.operation,
            elapsed.as_secs_f64()
        );
        elapsed
    }

    pub fn finish_with_count(self, count: usize) -> Duration {
        let elapsed = self.elapsed();
        info!(
            "Completed operation: {} - {} items in {:.2}s ({:.2} items/sec)",
            self.operation,
            count,
            elapsed.as_secs_f64(),
            if elapsed.as_secs_f64() > 0.0 {
                count as f64 / elapsed.as_secs_f64()
            } else {
                0.0
            }
        );
        elapsed
    }

    /// Logs a warning when the stage has already run past `threshold`.
    pub fn warn_if_slow(&self, threshold: Duration, message: &str) -> bool {
        let elapsed = self.elapsed();
        let slow = elapsed > threshold;
        if slow {
            warn!(
                "Slow stage [{}]: {} ({:.2}s, limit {:.2}s)",
                self.operation,
                message,
                elapsed.as_secs_f64(),
                threshold.as_secs_f64()
            );
        }
        slow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_timer() {
        let timer = OperationTimer::new("test");
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.finish();
        assert!(elapsed >= Duration::from_millis(10));
    }

    #[test]
    fn test_warn_if_slow_reports_threshold() {
        let timer = OperationTimer::new("relevance annotation");
        std::thread::sleep(Duration::from_millis(5));
        assert!(timer.warn_if_slow(Duration::ZERO, "classification lagging"));
        assert!(!timer.warn_if_slow(Duration::from_secs(60), "classification lagging"));
    }

    #[test]
    fn test_finish_with_count() {
        let timer = OperationTimer::new("matching");
        let elapsed = timer.finish_with_count(12);
        assert!(elapsed < Duration::from_secs(5));
    }
}
