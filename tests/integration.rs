//! End-to-end tests over the public API: requests are parsed, routed and
//! handled against a real temporary library, without a network listener.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use docshelf::protocol::request::parse_request_line;
use docshelf::protocol::{RequestContext, Response, handle_request};

const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\n";

// Builds a library tree:
//   docs/
//     archive/            (empty)
//     guides/intro.md
//     guides/my notes.md
//     manual.pdf
//     notes.markdown
//     skip.txt            (not a document)
fn library() -> (TempDir, RequestContext) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("docs");
    fs::create_dir_all(root.join("guides")).unwrap();
    fs::create_dir_all(root.join("archive")).unwrap();
    fs::write(
        root.join("guides/intro.md"),
        "# Intro\n\nSome **bold** text.\n",
    )
    .unwrap();
    fs::write(root.join("guides/my notes.md"), "notes\n").unwrap();
    fs::write(root.join("manual.pdf"), PDF_BYTES).unwrap();
    fs::write(root.join("notes.markdown"), "# Notes\n").unwrap();
    fs::write(root.join("skip.txt"), "plain\n").unwrap();

    let context = RequestContext {
        library_root: root.canonicalize().unwrap(),
    };
    (tmp, context)
}

fn get(context: &RequestContext, target: &str) -> Response {
    let line = format!("GET {} HTTP/1.1\r\n", target);
    let request = parse_request_line(&line).unwrap();
    handle_request(context, &request)
}

fn body_text(response: &Response) -> String {
    String::from_utf8(response.body.clone()).unwrap()
}

fn header<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response
        .headers
        .iter()
        .find(|(header_name, _)| header_name == name)
        .map(|(_, value)| value.as_str())
}

#[test]
fn test_home_page_links_to_listing() {
    let (_tmp, context) = library();
    let response = get(&context, "/");
    assert_eq!(response.status, 200);
    assert!(body_text(&response).contains(r#"href="/list""#));
}

#[test]
fn test_root_listing_partitions_and_orders_entries() {
    let (_tmp, context) = library();
    let response = get(&context, "/list");
    assert_eq!(response.status, 200);

    let body = body_text(&response);
    assert!(body.contains(r#"href="/list?folder=guides""#));
    assert!(body.contains(r#"href="/view/manual.pdf""#));
    assert!(body.contains(r#"href="/download/notes.markdown""#));
    // Unrecognized extensions never appear
    assert!(!body.contains("skip.txt"));

    // Folders precede documents in the rendered order
    let archive_at = body.find("archive").unwrap();
    let guides_at = body.find(r#"/list?folder=guides"#).unwrap();
    let manual_at = body.find("manual.pdf").unwrap();
    assert!(archive_at < manual_at);
    assert!(guides_at < manual_at);
}

#[test]
fn test_subfolder_listing_builds_breadcrumbs() {
    let (_tmp, context) = library();
    let response = get(&context, "/list?folder=guides");
    assert_eq!(response.status, 200);

    let body = body_text(&response);
    assert!(body.contains(r#"href="/list""#)); // Home crumb
    assert!(body.contains(r#"href="/list?folder=guides""#));
    assert!(body.contains("intro.md"));
}

#[test]
fn test_listing_traversal_is_forbidden() {
    let (_tmp, context) = library();
    for folder in ["..", "../..", "guides/../.."] {
        let response = get(&context, &format!("/list?folder={}", folder));
        assert_eq!(response.status, 403, "folder={:?}", folder);
    }
}

#[test]
fn test_listing_missing_folder_is_not_found() {
    let (_tmp, context) = library();
    let response = get(&context, "/list?folder=absent");
    assert_eq!(response.status, 404);
}

#[test]
fn test_view_markdown_renders_html() {
    let (_tmp, context) = library();
    let response = get(&context, "/view/guides/intro.md");
    assert_eq!(response.status, 200);
    assert_eq!(
        header(&response, "Content-Type"),
        Some("text/html; charset=utf-8")
    );

    let body = body_text(&response);
    assert!(body.contains("<strong>bold</strong>"));
    // Back link points at the containing folder
    assert!(body.contains(r#"href="/list?folder=guides""#));
}

#[test]
fn test_view_pdf_serves_inline_bytes() {
    let (_tmp, context) = library();
    let response = get(&context, "/view/manual.pdf");
    assert_eq!(response.status, 200);
    assert_eq!(header(&response, "Content-Type"), Some("application/pdf"));
    assert_eq!(
        header(&response, "Content-Disposition"),
        Some(r#"inline; filename="manual.pdf""#)
    );
    assert_eq!(response.body, PDF_BYTES);
}

#[test]
fn test_view_decodes_percent_escapes() {
    let (_tmp, context) = library();
    let response = get(&context, "/view/guides/my%20notes.md");
    assert_eq!(response.status, 200);
}

#[test]
fn test_view_directory_is_not_found() {
    let (_tmp, context) = library();
    let response = get(&context, "/view/guides");
    assert_eq!(response.status, 404);
}

#[test]
fn test_view_unsupported_extension_is_bad_request() {
    let (_tmp, context) = library();
    let response = get(&context, "/view/skip.txt");
    assert_eq!(response.status, 400);
}

#[test]
fn test_download_round_trips_exact_bytes() {
    let (_tmp, context) = library();

    let response = get(&context, "/download/manual.pdf");
    assert_eq!(response.status, 200);
    assert_eq!(header(&response, "Content-Type"), Some("application/pdf"));
    assert_eq!(
        header(&response, "Content-Disposition"),
        Some(r#"attachment; filename="manual.pdf""#)
    );
    let on_disk = fs::read(context.library_root.join("manual.pdf")).unwrap();
    assert_eq!(response.body, on_disk);

    // Markdown downloads are raw bytes too, never rendered
    let response = get(&context, "/download/guides/intro.md");
    assert_eq!(header(&response, "Content-Type"), Some("text/markdown"));
    let on_disk = fs::read(context.library_root.join("guides/intro.md")).unwrap();
    assert_eq!(response.body, on_disk);
}

#[test]
fn test_download_unsupported_extension_is_bad_request() {
    let (_tmp, context) = library();
    let response = get(&context, "/download/skip.txt");
    assert_eq!(response.status, 400);
}

#[test]
fn test_download_traversal_is_forbidden() {
    let (tmp, context) = library();
    // A real file outside the root that traversal would reach
    fs::write(tmp.path().join("outside.pdf"), PDF_BYTES).unwrap();
    let response = get(&context, "/download/../outside.pdf");
    assert_eq!(response.status, 403);
}

#[test]
fn test_unknown_route_is_not_found() {
    let (_tmp, context) = library();
    let response = get(&context, "/admin");
    assert_eq!(response.status, 404);
}

#[cfg(unix)]
#[test]
fn test_sibling_prefix_escape_is_forbidden() {
    let (tmp, context) = library();

    // Sibling directory whose name shares the root as a string prefix; a
    // symlink inside the root points at it
    let sibling = tmp.path().join("docs-evil");
    fs::create_dir_all(&sibling).unwrap();
    fs::write(sibling.join("secret.pdf"), PDF_BYTES).unwrap();
    std::os::unix::fs::symlink(&sibling, context.library_root.join("shared")).unwrap();

    for target in ["/view/shared/secret.pdf", "/download/shared/secret.pdf"] {
        let response = get(&context, target);
        assert_eq!(response.status, 403, "target={:?}", target);
    }
}

#[test]
fn test_listing_reflects_current_disk_state() {
    let (_tmp, context) = library();

    let response = get(&context, "/list");
    assert!(!body_text(&response).contains("late.pdf"));

    fs::write(context.library_root.join("late.pdf"), PDF_BYTES).unwrap();
    let response = get(&context, "/list");
    assert!(body_text(&response).contains("late.pdf"));
}

#[test]
fn test_resolved_listing_paths_are_root_relative() {
    let (_tmp, context) = library();
    let response = get(&context, "/list?folder=guides");
    let body = body_text(&response);
    // Links carry root-relative paths, not absolute ones
    assert!(body.contains(r#"href="/view/guides/intro.md""#));
    assert!(!body.contains(&context.library_root.display().to_string()));
}

#[test]
fn test_library_root_must_exist_for_requests() {
    // A context over a nonexistent root yields NotFound, never a crash
    let context = RequestContext {
        library_root: PathBuf::from("/nonexistent/docshelf-test-root"),
    };
    let response = get(&context, "/list?folder=sub");
    assert_eq!(response.status, 404);
}
