use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::RokuKey;

/// One remote input. Literal text rides the `Lit_` keypress route, which
/// takes exactly one percent-encoded character per request, so a string
/// expands to a whole burst of requests.
pub enum RokuInput {
  KeyPress(RokuKey),
  Literal(String)
}

impl RokuInput {
  /// ECP request paths for this input, in send order.
  pub fn request_paths(&self) -> Vec<String> {
    match self {
      RokuInput::KeyPress(key) => vec![format!("keypress/{}", key.route())],
      RokuInput::Literal(text) => text
        .chars()
        .map(|c| {
          let mut buf = [0u8; 4];
          let encoded = utf8_percent_encode(c.encode_utf8(&mut buf), NON_ALPHANUMERIC);
          format!("keypress/Lit_{}", encoded)
        })
        .collect()
    }
  }
}
