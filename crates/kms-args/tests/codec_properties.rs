use expect_test::expect;
use kms_args::catalog::{KMS_ARGUMENTS, LAUNCHER, MODBUS_SIM};
use kms_args::codec::{extract_flag, extract_multi, extract_scalar, unrecognized};
use kms_args::{
    encode, extract_field, extract_state, FieldValue, FormState, LaunchParameters, LaunchRequest,
    Page, PageForm,
};
use serde_json::json;

fn listing(tokens: &[String]) -> String {
    tokens.iter().map(|token| format!("{token}\n")).collect()
}

#[test]
fn scalar_round_trip_keeps_value() {
    for value in ["tool.exe", "a=b", " spaced ", ""] {
        let mut state = FormState::new(&LAUNCHER);
        state.set_scalar("Title", value).unwrap();
        let tokens = encode(&LAUNCHER, &state);
        assert_eq!(extract_scalar(&tokens, "Title"), value);
    }
}

#[test]
fn empty_scalar_emits_no_token() {
    let mut state = FormState::new(&LAUNCHER);
    state.set_scalar("Title", "").unwrap();
    assert!(encode(&LAUNCHER, &state).is_empty());
}

#[test]
fn multi_value_round_trip_keeps_order_and_duplicates() {
    let values = vec!["b.cfg".to_string(), "a.cfg".to_string(), "b.cfg".to_string()];
    let mut state = FormState::new(&KMS_ARGUMENTS);
    state.set_multi("ConfigFiles", values.clone()).unwrap();
    let tokens = encode(&KMS_ARGUMENTS, &state);
    assert_eq!(extract_multi(&tokens, "ConfigFiles"), values);
}

#[test]
fn flag_round_trip() {
    let mut state = FormState::new(&KMS_ARGUMENTS);
    state.set_flag("Help", true).unwrap();
    let tokens = encode(&KMS_ARGUMENTS, &state);
    assert!(extract_flag(&tokens, "Help"));

    state.set_flag("Help", false).unwrap();
    assert!(encode(&KMS_ARGUMENTS, &state).is_empty());
}

#[test]
fn duplicate_scalar_tokens_take_the_first() {
    let field = LAUNCHER.field("Title").unwrap();
    assert_eq!(
        extract_field(&["Title=1", "Title=2"], field),
        FieldValue::Scalar("1".to_string())
    );
}

#[test]
fn launcher_scenario_follows_declaration_order() {
    let mut state = FormState::new(&LAUNCHER);
    state.set_flag("Socket.KeepALive", true).unwrap();
    state.set_scalar("Title", "").unwrap();
    state.set_scalar("Exec", "tool.exe").unwrap();

    let request = LaunchRequest::build(
        &LAUNCHER,
        &state,
        &FormState::new(&KMS_ARGUMENTS),
        &LaunchParameters::default(),
    );
    assert_eq!(request.arguments, ["Exec=tool.exe", "Socket.KeepALive"]);
}

#[test]
fn kms_scenario_extracts_scalar_and_list() {
    let tokens = [
        "Log_ConsoleLevel=WARNING",
        "ConfigFiles+=a.cfg",
        "ConfigFiles+=b.cfg",
    ];
    let state = extract_state(&tokens, &KMS_ARGUMENTS);
    let present: serde_json::Map<_, _> = state
        .iter()
        .filter(|(_, value)| !value.is_unset())
        .map(|(name, value)| (name.to_string(), serde_json::to_value(value).unwrap()))
        .collect();
    assert_eq!(
        serde_json::Value::Object(present),
        json!({ "ConfigFiles": ["a.cfg", "b.cfg"], "Log_ConsoleLevel": "WARNING" })
    );
}

#[test]
fn sparse_payload_drops_false_detach() {
    let request = LaunchRequest::build(
        &MODBUS_SIM,
        &FormState::new(&MODBUS_SIM),
        &FormState::new(&KMS_ARGUMENTS),
        &LaunchParameters {
            detach: false,
            exit: true,
            working_directory: String::new(),
        },
    );
    let body = serde_json::to_string(&request).unwrap();
    assert_eq!(body, r#"{"Arguments":[],"Exit":true}"#);
}

#[test]
fn kms_group_follows_page_tokens() {
    let mut form = PageForm::new(Page::Launcher);
    for edit in [
        "Help",
        "Exec=tool.exe",
        "ConfigFiles+=base.cfg",
        "Title=Demo",
        "Routes+=/api=http://127.0.0.1:9000",
        "Log_ConsoleLevel=INFO",
    ] {
        form.apply(edit).unwrap();
    }
    expect![[r#"
        Exec=tool.exe
        Routes+=/api=http://127.0.0.1:9000
        Title=Demo
        ConfigFiles+=base.cfg
        Help
        Log_ConsoleLevel=INFO
    "#]]
    .assert_eq(&listing(&form.request().arguments));
}

#[test]
fn seeded_form_re_encodes_its_own_tokens() {
    let saved = [
        "Exec=tool.exe",
        "FileServer.Verbose",
        "Page=index.html",
        "AllowedRanges+=127.0.0.1",
        "AllowedRanges+=192.168.0.0/16",
        "SaveConfig=launcher.cfg",
        "Stats_Console",
    ];
    let form = PageForm::seeded(Page::Launcher, &saved);
    expect![[r#"
        AllowedRanges+=127.0.0.1
        AllowedRanges+=192.168.0.0/16
        Exec=tool.exe
        FileServer.Verbose
        Page=index.html
        SaveConfig=launcher.cfg
        Stats_Console
    "#]]
    .assert_eq(&listing(&form.arguments()));
}

#[test]
fn foreign_tokens_are_ignored_but_reported() {
    let tokens = ["Socket_ReuseAddr", "Socket.ReuseAddr", "DisplayHelp"];
    let state = extract_state(&tokens, &LAUNCHER);
    assert!(state.flag("Socket.ReuseAddr"));
    assert_eq!(
        unrecognized(&tokens, &LAUNCHER),
        ["Socket_ReuseAddr", "DisplayHelp"]
    );
}
