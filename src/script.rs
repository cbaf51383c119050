use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::debug;

use crate::devices::{Device, RokuKey};

/// Inter-step delays for the navigation choreography. The defaults are the
/// hand-tuned values the script has always used; callers can override any
/// of them instead of editing the sequence itself.
#[derive(Debug, Clone)]
pub struct Timing {
  /// wait for the app to reach its home screen after launch
  pub app_launch: Duration,
  /// between the coarse menu moves right after launch
  pub menu_nav: Duration,
  /// between the fine moves across the on-screen keyboard
  pub fine_nav: Duration,
  /// settle time after a full literal text entry
  pub text_settle: Duration,
  /// how long a creepy line stays on screen before being cleared
  pub creepy_read: Duration,
  /// between submitting the search and picking the first result
  pub result_pick: Duration
}

impl Default for Timing {
  fn default() -> Self {
    Timing {
      app_launch: Duration::from_secs(8),
      menu_nav: Duration::from_millis(500),
      fine_nav: Duration::from_millis(100),
      text_settle: Duration::from_secs(2),
      creepy_read: Duration::from_secs(3),
      result_pick: Duration::from_secs(2)
    }
  }
}

/// One remote action plus the blind sleep that follows it. The remote UI is
/// unobservable over ECP, so the delay is all the synchronization there is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStep {
  pub action: Action,
  pub delay: Duration
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  Press(RokuKey),
  Literal(String)
}

impl NavigationStep {
  fn press(key: RokuKey, delay: Duration) -> Self {
    NavigationStep { action: Action::Press(key), delay }
  }

  fn literal(text: &str, delay: Duration) -> Self {
    NavigationStep { action: Action::Literal(text.into()), delay }
  }
}

/// Builds the fixed YouTube search choreography: dismiss the launch overlay,
/// walk to the search field, type each filler line (cleared after a pause),
/// type the real query, submit, pick the first result. Pure data; nothing
/// is sent from here.
pub fn search_steps(query: &str, filler: &[&str], timing: &Timing) -> Vec<NavigationStep> {
  let mut steps = vec![
    // the app drops an overlay on launch, a bare select dismisses it
    NavigationStep::press(RokuKey::Ok, timing.menu_nav),
    // over to the search entry in the side menu
    NavigationStep::press(RokuKey::PadLeft, timing.menu_nav),
    NavigationStep::press(RokuKey::PadUp, timing.menu_nav),
    NavigationStep::press(RokuKey::PadRight, timing.menu_nav),
    // across the keyboard to the clear control
    NavigationStep::press(RokuKey::PadRight, timing.fine_nav),
    NavigationStep::press(RokuKey::PadDown, timing.fine_nav),
    NavigationStep::press(RokuKey::PadDown, timing.fine_nav),
    NavigationStep::press(RokuKey::PadDown, timing.fine_nav),
    NavigationStep::press(RokuKey::PadDown, timing.fine_nav),
    NavigationStep::press(RokuKey::PadRight, timing.fine_nav)
  ];

  for line in filler {
    steps.push(NavigationStep::literal(line, timing.creepy_read));
    // cursor is parked on the clear control, select wipes the line
    steps.push(NavigationStep::press(RokuKey::Ok, timing.fine_nav));
  }

  steps.push(NavigationStep::literal(query, timing.text_settle));
  // search button, then the first result
  steps.push(NavigationStep::press(RokuKey::Ok, timing.result_pick));
  steps.push(NavigationStep::press(RokuKey::Ok, Duration::ZERO));

  steps
}

/// Runs the steps against a device, strictly in order. No feedback: if the
/// UI is slower than the delays, the presses land somewhere else and nobody
/// here will know.
pub async fn run_steps(device: &Device, steps: &[NavigationStep]) -> Result<()> {
  for (index, step) in steps.iter().enumerate() {
    debug!(index, action = ?step.action, "navigation step");

    match &step.action {
      Action::Press(key) => device.keypress(*key).await?,
      Action::Literal(text) => device.literal(text).await?
    }

    sleep(step.delay).await;
  }

  Ok(())
}

/// Launches YouTube and plays the first search hit for `query`. Only the
/// launch is guarded; once the choreography starts there is nothing to
/// check against.
pub async fn play_youtube_video(
  device: &Device,
  query: &str,
  creepy: bool,
  timing: &Timing
) -> Result<()> {
  let app = match device.find_app("YouTube").await? {
    Some(app) => app,
    None => {
      println!("[-] YouTube not found on this device");
      return Ok(());
    }
  };

  println!("[*] Launching {}", app.name);
  device.launch(&app).await?;
  sleep(timing.app_launch).await;

  let filler: &[&str] = if creepy { crate::videos::CREEPY_LINES } else { &[] };
  run_steps(device, &search_steps(query, filler, timing)).await
}

#[cfg(test)]
mod tests {
  use crate::videos::CREEPY_LINES;

  use super::*;

  fn literal_count(steps: &[NavigationStep]) -> usize {
    steps
      .iter()
      .filter(|s| matches!(s.action, Action::Literal(_)))
      .count()
  }

  #[test]
  fn plain_sequence_types_only_the_query() {
    let steps = search_steps("crab rave", &[], &Timing::default());
    assert_eq!(literal_count(&steps), 1);
    // 10 navigation presses, the query, the search select, the result select
    assert_eq!(steps.len(), 13);
  }

  #[test]
  fn sequence_opens_with_the_overlay_dismiss() {
    let steps = search_steps("crab rave", &[], &Timing::default());
    assert_eq!(steps[0].action, Action::Press(RokuKey::Ok));
  }

  #[test]
  fn creepy_sequence_inserts_exactly_three_cleared_fillers() {
    let timing = Timing::default();
    let steps = search_steps("crab rave", CREEPY_LINES, &timing);
    assert_eq!(literal_count(&steps), 4);

    // each filler is typed, left up for the read pause, then cleared
    for (index, step) in steps.iter().enumerate() {
      if let Action::Literal(text) = &step.action {
        if text != "crab rave" {
          assert_eq!(step.delay, timing.creepy_read);
          assert_eq!(steps[index + 1].action, Action::Press(RokuKey::Ok));
        }
      }
    }
  }

  #[test]
  fn query_is_typed_after_every_filler() {
    let steps = search_steps("q", CREEPY_LINES, &Timing::default());
    let last_literal = steps
      .iter()
      .rposition(|s| matches!(s.action, Action::Literal(_)))
      .unwrap();

    assert_eq!(steps[last_literal].action, Action::Literal("q".into()));
    // only the submit and result selects remain after the query
    assert_eq!(steps.len() - 1 - last_literal, 2);
  }
}
