use std::fmt;

use serde_json::Value;

/// What a command prints on success.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// A response body, echoed as compact JSON in the order the server sent it.
    Json(Value),
    /// A fixed confirmation sentence.
    Message(String),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Json(value) => write!(f, "{value}"),
            Output::Message(message) => f.write_str(message),
        }
    }
}

pub fn print_output(output: &Output) {
    println!("{output}");
}
