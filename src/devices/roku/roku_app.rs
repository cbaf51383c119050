use serde::Deserialize;

/// `/query/apps` payload: `<apps><app id="837" ...>YouTube</app>...</apps>`
#[derive(Debug, Deserialize, Clone)]
#[serde(rename="apps")]
pub struct RokuAppList {
  #[serde(rename="app", default)]
  pub apps: Vec<RokuApp>
}

#[derive(Debug, Deserialize, Clone)]
pub struct RokuApp {
  pub id: String,

  #[serde(rename="$value")]
  pub name: String
}

/// `/query/active-app` payload. The home screen reports an `<app>` element
/// with no id attribute, so the entry type is looser than [`RokuApp`].
#[derive(Debug, Deserialize, Clone)]
#[serde(rename="active-app")]
pub struct RokuActiveApp {
  pub app: RokuActiveAppEntry
}

#[derive(Debug, Deserialize, Clone)]
pub struct RokuActiveAppEntry {
  pub id: Option<String>,

  #[serde(rename="$value")]
  pub name: String
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_an_app_listing() {
    let xml = r#"<apps>
      <app id="837" type="appl" version="1.0.80000286">YouTube</app>
      <app id="12" type="appl" version="4.2.81177021">Netflix</app>
    </apps>"#;

    let list: RokuAppList = serde_xml_rs::from_str(xml).unwrap();
    assert_eq!(list.apps.len(), 2);
    assert_eq!(list.apps[0].id, "837");
    assert_eq!(list.apps[0].name, "YouTube");
  }

  #[test]
  fn parses_the_home_screen_as_active_app() {
    let xml = r#"<active-app><app>Roku</app></active-app>"#;

    let active: RokuActiveApp = serde_xml_rs::from_str(xml).unwrap();
    assert_eq!(active.app.name, "Roku");
    assert!(active.app.id.is_none());
  }

  #[test]
  fn parses_a_running_channel_as_active_app() {
    let xml = r#"<active-app><app id="837" type="appl" version="1.0.80000286">YouTube</app></active-app>"#;

    let active: RokuActiveApp = serde_xml_rs::from_str(xml).unwrap();
    assert_eq!(active.app.name, "YouTube");
    assert_eq!(active.app.id.as_deref(), Some("837"));
  }
}
