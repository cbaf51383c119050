use std::net::IpAddr;

use clap::{ArgGroup, Parser};

/// Prank a Roku on your network: scripted YouTube search-and-play, filler
/// lines typed into the search box, or a hosted video pushed straight to
/// the built-in player.
#[derive(Parser, Debug)]
#[command(name = "spooku", version, about, group(ArgGroup::new("source").required(true)))]
pub struct Cli {
  /// Connect to this Roku IP instead of discovering one
  #[arg(short = 'r', long = "roku-ip", value_name = "IP")]
  pub roku_ip: Option<IpAddr>,

  /// Seconds to wait for SSDP discovery responses
  #[arg(short = 'd', long = "delay", default_value_t = 3, value_name = "SECONDS")]
  pub delay: u64,

  /// Type the filler lines into the search box before the real query
  #[arg(short = 'c', long = "creepy-text")]
  pub creepy_text: bool,

  /// Print the built-in video list and exit
  #[arg(long = "suggest-videos", group = "source")]
  pub suggest_videos: bool,

  /// Play this entry of the built-in video list
  #[arg(short = 'i', long = "video_index", group = "source", value_name = "INDEX")]
  pub video_index: Option<usize>,

  /// Search YouTube for this title and play the first hit
  #[arg(short = 'y', long = "youtube-video-title", group = "source", value_name = "TITLE")]
  pub youtube_video_title: Option<String>,

  /// Play a hosted video file through the built-in player
  #[arg(short = 'u', long = "hosted-video-url", group = "source", value_name = "URL")]
  pub hosted_video_url: Option<String>
}

/// What the run is about. Exactly one per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
  Suggest,
  Index(usize),
  Title(String),
  HostedUrl(String)
}

impl Cli {
  pub fn source(&self) -> VideoSource {
    if self.suggest_videos {
      VideoSource::Suggest
    } else if let Some(index) = self.video_index {
      VideoSource::Index(index)
    } else if let Some(title) = &self.youtube_video_title {
      VideoSource::Title(title.clone())
    } else if let Some(url) = &self.hosted_video_url {
      VideoSource::HostedUrl(url.clone())
    } else {
      // the required argument group guarantees one of the above matched
      unreachable!("clap enforces a video source")
    }
  }
}

#[cfg(test)]
mod tests {
  use clap::error::ErrorKind;

  use super::*;

  fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("spooku").chain(args.iter().copied()))
  }

  #[test]
  fn a_video_source_is_required() {
    let err = parse(&[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
  }

  #[test]
  fn video_sources_are_mutually_exclusive() {
    let err = parse(&["--suggest-videos", "-i", "1"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

    let err = parse(&["-y", "some title", "-u", "http://example.com/v.mp4"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
  }

  #[test]
  fn index_source_parses_alongside_common_flags() {
    let cli = parse(&["-r", "192.168.1.40", "-c", "-i", "1"]).unwrap();
    assert_eq!(cli.source(), VideoSource::Index(1));
    assert!(cli.creepy_text);
    assert!(cli.roku_ip.is_some());
    assert_eq!(cli.delay, 3);
  }

  #[test]
  fn non_integer_index_is_rejected_by_the_parser() {
    let err = parse(&["-i", "one"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
  }

  #[test]
  fn hosted_url_source_round_trips() {
    let cli = parse(&["-u", "http://example.com/spooky.mp4"]).unwrap();
    assert_eq!(cli.source(), VideoSource::HostedUrl("http://example.com/spooky.mp4".into()));
    assert!(!cli.creepy_text);
  }
}
