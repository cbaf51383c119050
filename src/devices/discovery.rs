use std::{
  net::{IpAddr, SocketAddr},
  time::Duration
};

use anyhow::{anyhow, Context, Result};
use futures::future::join_all;
use ssdp::{
  header::{HeaderMut, Man, MX, ST},
  message::{Multicast, SearchRequest},
  FieldMap
};
use tokio::task::spawn_blocking;
use tracing::{debug, warn};

use super::{query_text, Device, DeviceInfo, RokuDeviceInfo};

const ECP_PORT: u16 = 8060;

/// One bounded SSDP sweep for `roku:ecp` responders, then a concurrent
/// device-info lookup for every unique location. Unlike a long-running
/// remote this is a one-shot script, so the sweep ends with the timeout
/// instead of looping forever.
pub async fn discover(timeout: Duration) -> Result<Vec<Device>> {
  // the ssdp crate blocks on the multicast socket, keep it off the runtime
  let locations = spawn_blocking(move || search_locations(timeout))
    .await
    .context("discovery task panicked")??;

  debug!(count = locations.len(), "ssdp sweep finished");

  let mut devices = Vec::new();
  for result in join_all(locations.into_iter().map(lookup_device)).await {
    match result {
      Ok(device) => devices.push(device),
      // a device that answered the multicast but not the info query is skipped
      Err(error) => warn!(error = %format!("{error:#}"), "device info lookup failed")
    }
  }

  Ok(devices)
}

/// Connects straight to a known address, skipping discovery entirely.
pub async fn connect(ip: IpAddr) -> Result<Device> {
  lookup_device(SocketAddr::new(ip, ECP_PORT)).await
}

fn search_locations(timeout: Duration) -> Result<Vec<SocketAddr>> {
  let mut request = SearchRequest::new();
  request.set(Man);
  request.set(MX(timeout.as_secs().clamp(1, 120) as u8));
  request.set(ST::Target(FieldMap::new("roku:ecp").unwrap()));

  let mut locations = Vec::<SocketAddr>::new();
  for (_, location) in request
    .multicast()
    .map_err(|error| anyhow!("SSDP multicast failed: {:?}", error))?
  {
    // devices answer on several interfaces, only keep the first sighting
    if locations.contains(&location) { continue; }
    locations.push(location);
  }

  Ok(locations)
}

async fn lookup_device(mut location: SocketAddr) -> Result<Device> {
  // no Device yet to borrow a client from, the lookup brings its own
  let client = hyper::Client::new();
  let xml = query_text(
    &client,
    &format!("http://{}:{}/query/device-info", location.ip(), ECP_PORT)
  )
  .await?;

  let raw: RokuDeviceInfo =
    serde_xml_rs::from_str(&xml).context("failed to parse device info")?;

  // re-use the location, just pin the port the ECP service listens on
  location.set_port(ECP_PORT);

  Ok(Device::new(location, DeviceInfo::from(raw)))
}
