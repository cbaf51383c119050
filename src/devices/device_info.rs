use std::fmt::{Display, Formatter, Result};

use super::RokuDeviceInfo;

/// Transport-agnostic device description assembled from the device-info query.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
  pub name: String,
  pub product: Product,
  pub network: Network,
  pub power: PowerState
}

#[derive(Debug, Clone)]
pub struct Product {
  pub vendor: String,
  pub model_name: String,
  pub model_number: String,
  pub serial_number: String
}

/// Describes the network this device is connected to
#[derive(Debug, Clone)]
pub struct Network {
  pub network_type: NetworkType,
  pub network_name: String,
  pub mac_address: String
}

/// The link-layer technology behind the device's connection.
#[derive(Debug, Clone)]
pub enum NetworkType {
  WiFi,
  Ethernet,
  Unknown
}

impl Display for NetworkType {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(
      f, "{}",
      match self {
        NetworkType::WiFi => "WiFi",
        NetworkType::Ethernet => "Ethernet",
        NetworkType::Unknown => "Unknown"
      }
    )
  }
}

/// Coarse power state from the `power-mode` field. Anything the device
/// reports that we do not recognize collapses to `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerState {
  On,
  Standby,
  Unknown
}

impl PowerState {
  pub fn is_on(&self) -> bool {
    matches!(self, PowerState::On)
  }

  fn from_mode(mode: Option<&str>) -> Self {
    match mode {
      Some("PowerOn") => PowerState::On,
      Some("DisplayOff") | Some("Headless") | Some("Ready") => PowerState::Standby,
      _ => PowerState::Unknown
    }
  }
}

impl Display for PowerState {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(
      f, "{}",
      match self {
        PowerState::On => "On",
        PowerState::Standby => "Standby",
        PowerState::Unknown => "Unknown"
      }
    )
  }
}

impl From<RokuDeviceInfo> for DeviceInfo {
  fn from(raw: RokuDeviceInfo) -> Self {
    DeviceInfo {
      name: raw.name,
      product: Product {
        vendor: raw.vendor_name,
        model_name: raw.model_name_human,
        model_number: raw.model_number,
        serial_number: raw.serial_number
      },
      network: Network {
        network_type: match raw.network_type.as_str() {
          "wifi" => NetworkType::WiFi,
          "ethernet" => NetworkType::Ethernet,
          _ => NetworkType::Unknown
        },
        network_name: raw.network_name,
        mac_address: raw.mac_address
      },
      power: PowerState::from_mode(raw.power_mode.as_deref())
    }
  }
}
