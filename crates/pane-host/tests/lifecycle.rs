//! HelloPropertyPane driven through the web part host

use property_pane_core::{HostContext, HostName, SourceItem};
use property_pane_host::options::{
    DEMO_LISTS, ErasedOptionSource, MockOptionSource, StaticListSource,
};
use property_pane_host::pane::PropertyPaneField;
use property_pane_host::parts::{HelloProperties, HelloPropertyPane};
use property_pane_host::webpart::{
    PageContext, StaticHostContext, Theme, WebPartContext, WebPartError, WebPartHost,
    WebPartState,
};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

const ALIAS: &str = "hello-property-pane";

fn context(host: HostContext, lists: Arc<dyn ErasedOptionSource>) -> WebPartContext {
    WebPartContext::new(
        Arc::new(StaticHostContext(host)),
        Arc::new(PageContext {
            user_display_name: "Adele Vance".to_string(),
        }),
        lists,
    )
}

fn list_options(host: &WebPartHost) -> (Vec<String>, bool) {
    let pane = host.property_pane(ALIAS).unwrap();
    match pane.field("list").unwrap() {
        PropertyPaneField::Dropdown {
            options, disabled, ..
        } => (options.iter().map(|o| o.text.clone()).collect(), *disabled),
        other => panic!("list field is not a dropdown: {other:?}"),
    }
}

#[tokio::test]
async fn test_full_activation() {
    let source = MockOptionSource::with_items(vec![
        SourceItem::new("a", "Alpha"),
        SourceItem::new("b", "Beta"),
    ]);
    let calls = source.call_counter();
    let part = HelloPropertyPane::new();
    let refreshes = part.refresh_counter();

    let mut host = WebPartHost::new();
    host.register(part);
    host.init_all(&context(
        HostContext::embedded(HostName::SuiteLegacy, false),
        Arc::new(source),
    ))
    .await
    .unwrap();
    assert_eq!(host.state_of(ALIAS), Some(WebPartState::Initialized));

    let view = host.render(ALIAS).unwrap();
    assert_eq!(view["environmentMessage"], "AppTeamsTabEnvironment");
    assert_eq!(view["userDisplayName"], "Adele Vance");

    // Nothing is fetched before the pane opens
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    let pane = host.open_property_pane(ALIAS).unwrap();
    assert!(pane.field("list").unwrap().is_disabled());
    host.open_property_pane(ALIAS).unwrap();
    host.property_pane_settled(ALIAS).await.unwrap();

    assert_eq!(list_options(&host), (vec!["Alpha".to_string(), "Beta".to_string()], false));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);

    host.set_property(ALIAS, "color", serde_json::json!("Blue"))
        .unwrap();
    host.apply_theme(Some(&Theme { is_inverted: true }));
    let view = host.render(ALIAS).unwrap();
    assert_eq!(view["color"], "Blue");
    assert_eq!(view["isDarkTheme"], true);

    host.dispose_all().await.unwrap();
    assert_eq!(host.state_of(ALIAS), Some(WebPartState::Disposed));
    assert!(matches!(
        host.render(ALIAS),
        Err(WebPartError::InvalidState { .. })
    ));
}

#[tokio::test]
async fn test_failed_load_never_enables_dropdown() {
    let source = MockOptionSource::new().with_error("HTTP 500");
    let calls = source.call_counter();
    let mut host = WebPartHost::new();
    host.register(HelloPropertyPane::new());
    host.init_all(&context(HostContext::portal(false), Arc::new(source)))
        .await
        .unwrap();

    host.open_property_pane(ALIAS).unwrap();
    host.property_pane_settled(ALIAS).await.unwrap();
    host.open_property_pane(ALIAS).unwrap();
    host.property_pane_settled(ALIAS).await.unwrap();

    assert_eq!(list_options(&host), (Vec::new(), true));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_static_source_loads_after_delay() {
    let mut host = WebPartHost::new();
    host.register(HelloPropertyPane::with_properties(HelloProperties {
        list: DEMO_LISTS[0].0.to_string(),
        ..Default::default()
    }));
    host.init_all(&context(
        HostContext::portal(true),
        Arc::new(StaticListSource::demo(Duration::from_secs(2))),
    ))
    .await
    .unwrap();

    host.open_property_pane(ALIAS).unwrap();
    tokio::task::yield_now().await;
    assert!(list_options(&host).1);

    host.property_pane_settled(ALIAS).await.unwrap();
    let (options, disabled) = list_options(&host);
    assert!(!disabled);
    assert_eq!(options, vec!["Shared Documents", "Site Assets"]);

    let view = host.render(ALIAS).unwrap();
    assert_eq!(view["list"], DEMO_LISTS[0].0);
    assert_eq!(view["environmentMessage"], "AppLocalEnvironmentSharePoint");
}

#[tokio::test]
async fn test_property_pane_before_init_is_rejected() {
    let mut host = WebPartHost::new();
    host.register(HelloPropertyPane::new());
    assert!(matches!(
        host.open_property_pane(ALIAS),
        Err(WebPartError::InvalidState {
            state: WebPartState::Created,
            ..
        })
    ));
}
