/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Profile norm below this carries no usable interest signal (cold start).
pub const PROFILE_SIGNAL_THRESHOLD: f64 = 0.1;

/// Weight of the title+summary text in the composite content vector.
pub const TITLE_SUMMARY_WEIGHT: f32 = 0.7;

/// Weight of the category text in the composite content vector.
pub const CATEGORY_WEIGHT: f32 = 0.3;

/// Minimum token length (in characters) kept by the tokenizer.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Seconds per day, for fractional-day age arithmetic.
pub const SECONDS_PER_DAY: f64 = 86_400.0;
