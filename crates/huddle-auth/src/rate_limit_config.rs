/// Configuration for the friend-request send limiter
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum sends per window
    pub max_requests: u32,
    /// Window duration in seconds
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 3, // 3 sends
            window_secs: 60, // per minute
        }
    }
}
