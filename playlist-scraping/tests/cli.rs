use std::{
    path::PathBuf,
    process::{Command, Output},
};

const BIN: &str = env!("CARGO_BIN_EXE_playlist-scraping");

fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn temp_file(name: &str, content: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "playlist-scraping-cli-{}-{name}",
        std::process::id()
    ));
    fs_err::write(&path, content).unwrap();
    path
}

#[test]
fn test_missing_argument() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        format!("Usage: {BIN} input.html\n")
    );
}

#[test]
fn test_too_many_arguments() {
    let output = run(&["a.html", "b.html"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        format!("Usage: {BIN} input.html\n")
    );
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("playlist-scraping-cli-does-not-exist.html");
    let output = run(&[path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("playlist-scraping-cli-does-not-exist.html"));
}

#[test]
fn test_empty_file() {
    let path = temp_file("empty.html", b"");
    let output = run(&[path.to_str().unwrap()]);
    fs_err::remove_file(&path).unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_playlist_file() {
    let parts: [&[u8]; 5] = [
        b"<html><head><script>if (a<!--b) {}</script></head><body>\n",
        br#"<a id="video-title" href="/watch?v=abcdEFGH123&amp;list=PL">12 - My Video</a>"#,
        b"\n",
        br#"<a id="video-title" href="/watch?v=bbbbbbbbbbb">Say "Hi"</a>"#,
        b"\n\xff</body></html>",
    ];
    let path = temp_file("playlist.html", &parts.concat());
    let output = run(&[path.to_str().unwrap()]);
    fs_err::remove_file(&path).unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        concat!(
            "\"12 - My Video\" => '12v' : 'abcdEFGH123',\n",
            "\"Say \\\"Hi\\\"\" => '2v' : 'bbbbbbbbbbb',\n",
        )
    );
}
