// src/utils.rs

//! Utility helpers shared by the storefront UI and catalog models.

/// Cross-platform time utilities
pub mod time {
    use chrono::{DateTime, Utc};

    /// Cross-platform clock that works on both native and WASM
    pub struct Time;

    impl Time {
        /// Get current UTC time - works on both native and WASM
        pub fn now() -> DateTime<Utc> {
            #[cfg(not(target_arch = "wasm32"))]
            {
                Utc::now()
            }

            #[cfg(target_arch = "wasm32")]
            {
                let millis = js_sys::Date::now() as i64;
                match DateTime::from_timestamp_millis(millis) {
                    Some(dt) => dt,
                    None => {
                        web_sys::console::error_1(
                            &"Failed to create DateTime from JS timestamp".into(),
                        );
                        DateTime::from_timestamp(1640995200, 0).unwrap()
                    }
                }
            }
        }

        /// Get current timestamp as milliseconds since epoch
        pub fn now_millis() -> u64 {
            Self::now().timestamp_millis() as u64
        }
    }
}

/// String helpers
pub mod strings {
    /// Truncates a string to `max_len` characters, appending an ellipsis
    pub fn truncate(s: &str, max_len: usize) -> String {
        if s.chars().count() <= max_len {
            s.to_string()
        } else {
            let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
            format!("{}…", truncated)
        }
    }

    /// Uppercased alphanumeric slug used for SKU segments ("Space Gray" -> "SPACE-GRAY")
    pub fn sku_segment(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut last_dash = true;
        for ch in s.chars() {
            if ch.is_ascii_alphanumeric() {
                out.push(ch.to_ascii_uppercase());
                last_dash = false;
            } else if !last_dash {
                out.push('-');
                last_dash = true;
            }
        }
        while out.ends_with('-') {
            out.pop();
        }
        out
    }
}

/// Display formatting helpers
pub mod format {
    /// Formats a playback position in seconds as "M:SS"
    pub fn video_timestamp(seconds: f64) -> String {
        let total = if seconds.is_finite() && seconds > 0.0 {
            seconds as u64
        } else {
            0
        };
        format!("{}:{:02}", total / 60, total % 60)
    }

    /// Compact count for badges ("1234" -> "1.2k")
    pub fn compact_count(n: u32) -> String {
        if n >= 1_000_000 {
            format!("{:.1}M", n as f64 / 1_000_000.0)
        } else if n >= 1_000 {
            format!("{:.1}k", n as f64 / 1_000.0)
        } else {
            n.to_string()
        }
    }

    /// Pluralizing label for item counts
    pub fn count_label(n: usize, singular: &str, plural: &str) -> String {
        if n == 1 {
            format!("1 {}", singular)
        } else {
            format!("{} {}", n, plural)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(strings::truncate("short", 10), "short");
        let long = strings::truncate("a very long product title", 10);
        assert!(long.ends_with('…'));
        assert!(long.chars().count() <= 10);
    }

    #[test]
    fn test_sku_segment() {
        assert_eq!(strings::sku_segment("Space Gray"), "SPACE-GRAY");
        assert_eq!(strings::sku_segment("128GB"), "128GB");
        assert_eq!(strings::sku_segment("  Brand New!  "), "BRAND-NEW");
    }

    #[test]
    fn test_video_timestamp() {
        assert_eq!(format::video_timestamp(0.0), "0:00");
        assert_eq!(format::video_timestamp(61.4), "1:01");
        assert_eq!(format::video_timestamp(f64::NAN), "0:00");
    }

    #[test]
    fn test_compact_count() {
        assert_eq!(format::compact_count(950), "950");
        assert_eq!(format::compact_count(1_234), "1.2k");
        assert_eq!(format::compact_count(2_500_000), "2.5M");
    }
}
