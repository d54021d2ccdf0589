use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn gqlp<I>(args: I, stdin: Option<&[u8]>) -> Output
where
    I: IntoIterator<Item = &'static str>,
{
    let bin = env!("CARGO_BIN_EXE_gqlp");

    let mut child = Command::new(bin)
        .args(args)
        .env_remove("GQL_URL_ARGUMENT_ENCODING")
        .env("GQL_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start gqlp");

    {
        let mut child_stdin = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            child_stdin.write_all(input).expect("Failed to write stdin");
        }
    }

    child.wait_with_output().expect("Failed to wait for gqlp")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn post_body() {
    let output = gqlp(
        [
            "post-body",
            "--query",
            "query Ping {\n  ping\n}",
            "--operation-name",
            "Ping",
            "--variables",
            "{ \"x\": 1 }",
        ],
        None,
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        r#"{"operationName":"Ping","variables":{"x":1},"query":"query Ping {\n  ping\n}"}"#
    );
}

#[test]
fn get_params() {
    let output = gqlp(["get-params", "-q", "query {\n ping\n}"], None);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "query=query%20%7B%20ping%20%7D");
}

#[test]
fn decode_body_from_stdin() {
    let output = gqlp(
        ["decode-body"],
        Some(br#"{"query":"query { ping }","variables":{"x":1}}"#),
    );

    assert!(output.status.success());
    let printed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        printed,
        serde_json::json!({
            "operationName": null,
            "query": "query { ping }",
            "variables": "{\"x\":1}"
        })
    );
}

#[test]
fn decode_body_rejects_invalid_requests() {
    let output = gqlp(["decode-body"], Some(br#"{"query":"{ ping }"}"#));

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not a valid GraphQL query."));
}

#[test]
fn decode_query() {
    let output = gqlp(
        ["decode-query", "operationName=Ping&query=query+Ping+%7B+ping+%7D"],
        None,
    );

    assert!(output.status.success());
    let printed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(printed["operationName"], "Ping");
    assert_eq!(printed["query"], "query Ping { ping }");
}

#[test]
fn content_type() {
    let output = gqlp(["content-type", "application/json; charset=UTF-8"], None);
    assert_eq!(stdout(&output), "true");

    let output = gqlp(["content-type", "text/plain"], None);
    assert_eq!(stdout(&output), "false");

    let output = gqlp(["content-type"], None);
    assert_eq!(stdout(&output), "false");
}
