mod cli;
mod devices;
mod script;
mod videos;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, VideoSource};
use devices::Device;
use script::Timing;

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let cli = Cli::parse();

  // every failure is a printed message followed by a normal exit
  if let Err(error) = run(cli).await {
    println!("[-] {error:#}");
  }
}

enum Plan {
  Search(String),
  Hosted(String)
}

async fn run(cli: Cli) -> Result<()> {
  // resolve the video before touching the network, so a bad index
  // never causes any device interaction
  let plan = match cli.source() {
    VideoSource::Suggest => {
      suggest_videos();
      return Ok(());
    },
    VideoSource::Index(index) => match videos::favorite(index) {
      Some(title) => Plan::Search(title.to_owned()),
      None => {
        println!(
          "[-] Video index must be below {} (see --suggest-videos)",
          videos::FAVORITES.len()
        );
        return Ok(());
      }
    },
    VideoSource::Title(title) => Plan::Search(title),
    VideoSource::HostedUrl(url) => Plan::Hosted(url)
  };

  let device = match select_device(&cli).await? {
    Some(device) => device,
    None => return Ok(())
  };

  print_status(&device).await?;

  match plan {
    Plan::Search(title) => {
      println!("[*] Searching YouTube for: {}", title);
      script::play_youtube_video(&device, &title, cli.creepy_text, &Timing::default()).await
    },
    Plan::Hosted(url) => {
      println!("[*] Sending hosted video to the built-in player");
      device.play_hosted_video(&url).await
    }
  }
}

fn suggest_videos() {
  println!("[*] Built-in videos:");
  for (index, title) in videos::FAVORITES.iter().enumerate() {
    println!("  {}: {}", index, title);
  }
}

/// Picks the device to drive: a direct connection when `--roku-ip` was
/// given, otherwise one SSDP sweep. A single hit is auto-selected, multiple
/// hits prompt for an index on stdin. `None` means the run is over.
async fn select_device(cli: &Cli) -> Result<Option<Device>> {
  if let Some(ip) = cli.roku_ip {
    let device = devices::connect(ip).await?;
    println!("[+] Connected to Roku: {} ({})", device.info().name, device.ip());
    return Ok(Some(device));
  }

  let found = devices::discover(Duration::from_secs(cli.delay)).await?;

  // only a multi-device sweep needs the prompt
  let selection = if found.len() > 1 {
    println!("Multiple Roku devices found:");
    for (index, device) in found.iter().enumerate() {
      println!("  {}: {} ({})", index, device.info().name, device.ip());
    }
    println!("Please select one of the listed devices");

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Some(line)
  } else {
    None
  };

  Ok(pick_device(found, selection.as_deref()))
}

/// Applies the selection rules to a discovery result: zero devices is a
/// reported dead end, a single device is taken without prompting, anything
/// more needs a valid index from the prompt line.
fn pick_device(mut found: Vec<Device>, selection: Option<&str>) -> Option<Device> {
  if found.is_empty() {
    println!("[*] No Roku devices found");
    return None;
  }

  if found.len() == 1 {
    let device = found.remove(0);
    println!("[+] Found Roku: {} ({})", device.info().name, device.ip());
    return Some(device);
  }

  let selection: usize = match selection.unwrap_or("").trim().parse() {
    Ok(n) => n,
    Err(_) => {
      println!("[-] Selection must be an integer");
      return None;
    }
  };

  if selection >= found.len() {
    println!("[-] Selection must be one of the listed devices");
    return None;
  }

  let device = found.remove(selection);
  println!("[*] Device selected: {} ({})", device.info().name, device.ip());
  Some(device)
}

async fn print_status(device: &Device) -> Result<()> {
  let info = device.info();

  println!("[*] Status:");
  println!("[*] Power state: {}", info.power);
  println!(
    "[*] Model: {} {} ({}), serial {}",
    info.product.vendor, info.product.model_name, info.product.model_number, info.product.serial_number
  );
  println!(
    "[*] Network: {} ({}, {})",
    info.network.network_name, info.network.network_type, info.network.mac_address
  );

  // the active-app query only means something while the display is on
  if info.power.is_on() {
    println!("[*] Active app: {}", device.query_active_app().await?);
  }

  println!("[*] Available apps:");
  for app in device.query_apps().await? {
    println!("    {}", app.name);
  }

  Ok(())
}
