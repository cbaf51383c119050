/// The slice of the ECP key map this tool actually sends: the select
/// button and the four directional pad keys. The protocol knows plenty
/// more (volume, home, power, ...), none of which appear in the
/// choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RokuKey {
  Ok,

  PadUp,
  PadDown,
  PadLeft,
  PadRight
}

impl RokuKey {
  /// Path segment understood by the `/keypress/` routes.
  pub fn route(self) -> &'static str {
    match self {
      RokuKey::Ok => "select",
      RokuKey::PadUp => "up",
      RokuKey::PadDown => "down",
      RokuKey::PadLeft => "left",
      RokuKey::PadRight => "right"
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_key_maps_to_its_ecp_route() {
    assert_eq!(RokuKey::Ok.route(), "select");
    assert_eq!(RokuKey::PadUp.route(), "up");
    assert_eq!(RokuKey::PadDown.route(), "down");
    assert_eq!(RokuKey::PadLeft.route(), "left");
    assert_eq!(RokuKey::PadRight.route(), "right");
  }
}
