use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use error_location::ErrorLocation;
use uuid::Uuid;

struct Window {
    count: u32,
    started_at: Instant,
}

/// Fixed-window send counter keyed by sender.
///
/// A sender's counter is created at 1 on first use and reset whenever its
/// window has elapsed, so an expired window behaves exactly like an absent
/// counter. Incrementing is atomic under the lock; callers compare the
/// returned post-increment count against `max_requests`, which means a
/// rejected attempt still counts toward the window.
pub struct SendRateLimiter {
    windows: Mutex<HashMap<Uuid, Window>>,
    config: RateLimitConfig,
}

impl SendRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Increment the sender's counter and return the post-increment count
    #[track_caller]
    pub fn increment_and_check(&self, sender_id: Uuid) -> AuthErrorResult<u32> {
        let mut windows = self
            .windows
            .lock()
            .map_err(|_| AuthError::LimiterUnavailable {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let now = Instant::now();
        let window_len = Duration::from_secs(self.config.window_secs);

        let window = windows.entry(sender_id).or_insert(Window {
            count: 0,
            started_at: now,
        });

        if now.duration_since(window.started_at) >= window_len {
            window.count = 0;
            window.started_at = now;
        }

        window.count += 1;
        Ok(window.count)
    }

    pub fn max_requests(&self) -> u32 {
        self.config.max_requests
    }

    pub fn window_secs(&self) -> u64 {
        self.config.window_secs
    }
}

impl Default for SendRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
