use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// `{"error": "..."}` body used for not-found and internal failures.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// `{"errors": [...]}` body used for rejected input.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}

impl ErrorsBody {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }
}
