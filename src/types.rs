// src/types.rs

use std::collections::HashMap;

use serde_json::Value;

/// Generic metadata container attached to errors and diagnostics
pub type Metadata = HashMap<String, Value>;
