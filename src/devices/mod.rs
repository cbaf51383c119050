use std::net::SocketAddr;

use anyhow::{Context, Result};
use hyper::{client::HttpConnector, Body, Client, Method, Request};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use tracing::debug;

mod device_info;
mod discovery;
mod roku;

pub use device_info::*;
pub use discovery::*;
pub use roku::*;

/// One remote-controllable Roku on the local network.
///
/// The Roku engineers decided the control API would work over HTTP: a full
/// POST per keypress, no persistent connection, no authentication. Every
/// method here is one or more of those requests.
#[derive(Debug, Clone)]
pub struct Device {
  location: SocketAddr,
  info: DeviceInfo,
  http_client: Client<HttpConnector>
}

/// An installed channel from the `/query/apps` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
  pub id: String,
  pub name: String
}

impl From<RokuApp> for App {
  fn from(raw: RokuApp) -> App {
    App { id: raw.id, name: raw.name }
  }
}

impl Device {
  pub(crate) fn new(location: SocketAddr, info: DeviceInfo) -> Self {
    // TCP_NODELAY so individual keypresses are not held back by packet aggregation
    let mut connector = HttpConnector::new();
    connector.set_nodelay(true);

    Device {
      location,
      info,
      http_client: Client::builder().build(connector)
    }
  }

  pub fn info(&self) -> &DeviceInfo { &self.info }

  pub fn ip(&self) -> String {
    self.location.ip().to_string()
  }

  async fn post(&self, path: &str) -> Result<()> {
    let uri = format!("http://{}/{}", self.location, path);
    debug!(%uri, "ecp post");

    let request = Request::builder()
      .method(Method::POST)
      .uri(&uri)
      .body(Body::empty())
      .context("failed to construct ECP request")?;

    self.http_client
      .request(request)
      .await
      .with_context(|| format!("POST {} failed", uri))?;

    Ok(())
  }

  /// Sends one remote input. Literal text expands to one request per
  /// character, delivered strictly in order.
  pub async fn send(&self, input: RokuInput) -> Result<()> {
    for path in input.request_paths() {
      self.post(&path).await?;
    }
    Ok(())
  }

  pub async fn keypress(&self, key: RokuKey) -> Result<()> {
    self.send(RokuInput::KeyPress(key)).await
  }

  pub async fn literal(&self, text: &str) -> Result<()> {
    self.send(RokuInput::Literal(text.into())).await
  }

  pub async fn query_apps(&self) -> Result<Vec<App>> {
    let xml = query_text(&self.http_client, &format!("http://{}/query/apps", self.location)).await?;
    let list: RokuAppList = serde_xml_rs::from_str(&xml).context("failed to parse app list")?;
    Ok(list.apps.into_iter().map(App::from).collect())
  }

  pub async fn query_active_app(&self) -> Result<String> {
    let xml =
      query_text(&self.http_client, &format!("http://{}/query/active-app", self.location)).await?;
    let active: RokuActiveApp =
      serde_xml_rs::from_str(&xml).context("failed to parse active app")?;
    debug!(id = ?active.app.id, name = %active.app.name, "active app");
    Ok(active.app.name)
  }

  /// Case-insensitive lookup in the installed channel list.
  pub async fn find_app(&self, name: &str) -> Result<Option<App>> {
    Ok(
      self
        .query_apps()
        .await?
        .into_iter()
        .find(|app| app.name.eq_ignore_ascii_case(name))
    )
  }

  pub async fn launch(&self, app: &App) -> Result<()> {
    self.post(&format!("launch/{}", app.id)).await
  }

  /// ECP escape hatch: hand a video URL to the built-in media player
  /// (channel 15985). Fire and forget, the response body says nothing useful.
  pub async fn play_hosted_video(&self, url: &str) -> Result<()> {
    let encoded = utf8_percent_encode(url, NON_ALPHANUMERIC);
    self
      .post(&format!(
        "input/15985?t=v&u={}&videoName=hosted&videoFormat=mp4",
        encoded
      ))
      .await
  }
}

/// GET a query endpoint and hand back the body as utf8 text.
async fn query_text(client: &Client<HttpConnector>, uri: &str) -> Result<String> {
  let request = Request::builder()
    .method(Method::GET)
    .uri(uri)
    .body(Body::empty())
    .context("failed to construct query request")?;

  let response = client
    .request(request)
    .await
    .with_context(|| format!("GET {} failed", uri))?;

  let bytes = hyper::body::to_bytes(response.into_body())
    .await
    .context("failed to read query response")?;

  Ok(
    std::str::from_utf8(&bytes)
      .context("query response was not utf8")?
      .to_owned()
  )
}
