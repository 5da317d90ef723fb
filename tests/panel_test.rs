//! Integration tests for the shortcut panel
//!
//! These tests exercise the complete flow the host page drives: JSON
//! context and shortcut payloads in, composed rows out, and collaborator
//! side effects on activation.

use assaydeck::context::ExecutionContext;
use assaydeck::dispatch::mock::{CallLog, MockClipboard, MockModal, MockOpener, recording_notify};
use assaydeck::dispatch::{ActionDispatcher, CopyTarget};
use assaydeck::panel::{PanelState, compose};
use assaydeck::shortcuts::{self, Icon, ShortcutDescriptor};

const ASSAY_PATH: &str =
    "/omicsZone/projects/00/00000000-0000-0000-0000-000000000000/sample_data/study_11111111-1111-1111-1111-111111111111/assay_22222222-2222-2222-2222-222222222222";

fn test_context() -> ExecutionContext {
    ExecutionContext::from_json(
        r#"{
            "project_uuid": "00000000-0000-0000-0000-000000000000",
            "project_title": "TestProject",
            "irods_status": true,
            "irods_webdav_enabled": true,
            "irods_webdav_url": "https://davrods.example.org"
        }"#,
    )
    .unwrap()
}

fn default_shortcuts() -> Vec<ShortcutDescriptor> {
    shortcuts::parse_list(&format!(
        r#"[
            {{"id": "results_reports", "label": "Results and Reports", "path": "{ASSAY_PATH}/ResultsReports"}},
            {{"id": "misc_files", "label": "Misc Files", "path": "{ASSAY_PATH}/MiscFiles"}}
        ]"#
    ))
    .unwrap()
}

fn plugin_shortcut() -> ShortcutDescriptor {
    ShortcutDescriptor::new(
        "plugin_shortcut",
        "Plugin Shortcut",
        format!("{ASSAY_PATH}/PluginShortcut"),
    )
}

#[test]
fn renders_default_shortcuts() {
    let rows = compose(&test_context(), &default_shortcuts(), true);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows.iter().filter(|r| r.view.icon == Icon::Puzzle).count(), 0);
    for row in &rows {
        assert!(row.interactive());
        assert!(row.primary.is_some());
        // Full action set: copy path, copy dav link, open dav link, list dir
        assert_eq!(row.actions().len(), 4);
    }
}

#[test]
fn renders_extra_plugin_shortcut() {
    let mut list = default_shortcuts();
    list.push(plugin_shortcut());
    let rows = compose(&test_context(), &list, true);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows.iter().filter(|r| r.view.icon == Icon::Puzzle).count(), 1);
    assert_eq!(rows[2].view.icon, Icon::Puzzle);
}

#[test]
fn renders_disabled_shortcuts_without_side_effects() {
    let list: Vec<_> = default_shortcuts()
        .into_iter()
        .map(ShortcutDescriptor::disabled)
        .collect();

    let log = CallLog::new();
    let mut dispatcher = ActionDispatcher::new(test_context())
        .with_clipboard(Box::new(MockClipboard::new(log.clone())))
        .with_opener(Box::new(MockOpener::new(log.clone())))
        .with_notify(recording_notify(log.clone()));
    let mut modal = MockModal::new(log.clone());

    let mut state = PanelState::new(&dispatcher, &list, true);
    assert_eq!(state.rows().len(), 2);
    for row in state.rows() {
        assert!(!row.interactive());
    }

    // Activate everything on every row; nothing may reach a collaborator
    for _ in 0..list.len() {
        state
            .activate_primary(&mut dispatcher, Some(&mut modal))
            .unwrap();
        state.open_menu();
        state
            .activate_menu_item(&mut dispatcher, Some(&mut modal))
            .unwrap();
        state.select_next();
    }
    assert!(log.is_empty());
}

#[test]
fn copy_path_invokes_clipboard_then_notify_callback() {
    let log = CallLog::new();
    let mut dispatcher = ActionDispatcher::new(test_context())
        .with_clipboard(Box::new(MockClipboard::new(log.clone())))
        .with_notify(recording_notify(log.clone()));

    let list = default_shortcuts();
    dispatcher.copy_path(&list[0], CopyTarget::IrodsPath).unwrap();

    let calls = log.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], format!("clipboard:{ASSAY_PATH}/ResultsReports"));
    assert_eq!(calls[1], "notify:Copied iRODS path to clipboard");
}

#[test]
fn copy_dav_link_derives_encoded_url() {
    let log = CallLog::new();
    let mut dispatcher = ActionDispatcher::new(test_context())
        .with_clipboard(Box::new(MockClipboard::new(log.clone())));

    let shortcut = ShortcutDescriptor::new("misc_files", "Misc Files", "/zone/Misc Files");
    dispatcher.copy_path(&shortcut, CopyTarget::DavLink).unwrap();

    assert_eq!(
        log.calls(),
        vec!["clipboard:https://davrods.example.org/zone/Misc%20Files".to_string()]
    );
}

#[test]
fn list_directory_opens_modal_with_title_first() {
    let log = CallLog::new();
    let dispatcher = ActionDispatcher::new(test_context());
    let mut modal = MockModal::new(log.clone());

    let list = default_shortcuts();
    dispatcher
        .list_directory(&list[1], Some(&mut modal))
        .unwrap();

    assert_eq!(
        log.calls(),
        vec![
            "set_title:Misc Files".to_string(),
            format!("show_modal:{ASSAY_PATH}/MiscFiles"),
        ]
    );
    assert_eq!(modal.title.as_deref(), Some("Misc Files"));
}

#[test]
fn list_directory_affordance_suppressed_without_modal() {
    let rows = compose(&test_context(), &default_shortcuts(), false);
    for row in &rows {
        assert_eq!(row.actions().len(), 3);
        assert!(row.actions().iter().all(|a| !a.requires_modal()));
    }
}

#[test]
fn dav_affordances_suppressed_without_webdav() {
    let mut context = test_context();
    context.irods_webdav_enabled = false;

    let rows = compose(&context, &default_shortcuts(), true);
    for row in &rows {
        assert!(row.actions().iter().all(|a| !a.requires_dav()));
    }

    // Opening a link in this context touches no collaborator
    let log = CallLog::new();
    let mut dispatcher =
        ActionDispatcher::new(context).with_opener(Box::new(MockOpener::new(log.clone())));
    dispatcher.open_link(&default_shortcuts()[0]).unwrap();
    assert!(log.is_empty());
}

#[test]
fn replacing_shortcut_list_rerenders_from_scratch() {
    let dispatcher = ActionDispatcher::new(test_context());
    let mut state = PanelState::new(&dispatcher, &default_shortcuts(), true);
    state.select_next();

    let mut list = default_shortcuts();
    list.push(plugin_shortcut());
    state.set_shortcuts(&dispatcher, &list);
    assert_eq!(state.rows().len(), 3);

    state.set_shortcuts(&dispatcher, &list[..1]);
    assert_eq!(state.rows().len(), 1);
    assert_eq!(state.cursor, 0);
    assert_eq!(state.rows()[0].view.icon, Icon::FolderTable);
}

#[test]
fn malformed_plugin_entry_degrades_instead_of_failing() {
    let mut list = default_shortcuts();
    list.push(ShortcutDescriptor::new("broken_plugin", "", "not-absolute"));

    let log = CallLog::new();
    let mut dispatcher = ActionDispatcher::new(test_context())
        .with_clipboard(Box::new(MockClipboard::new(log.clone())));

    let mut state = PanelState::new(&dispatcher, &list, true);
    assert_eq!(state.rows().len(), 3);
    assert!(state.rows()[2].primary.is_none());

    state.select_next();
    state.select_next();
    state.activate_primary(&mut dispatcher, None).unwrap();
    assert!(log.is_empty());
}
