//! Integration tests for the session.
//!
//! Tests verify:
//! - bootstrap opens the default web project with the preview showing
//! - mode switching and the fall-back to the default project
//! - notices for uploads, web file edits, refused deletes and runs
//! - run lifecycle: begin/finish, stop, stale tickets (last write wins)
//! - the async run under a paused tokio clock
//! - preview and export for both modes

use playground_runner::{Fixed, RunnerConfig, Synthesizer};
use playground_session::{Preview, Session, SessionError};
use playground_types::{
    ExecutionRecord, LanguageCatalog, LanguageId, Notice, Severity, Status, WebFileKind,
};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn session() -> Session {
    Session::new(LanguageCatalog::builtin())
}

fn synth() -> Synthesizer {
    Synthesizer::seeded(RunnerConfig::instant(), 7)
}

fn messages(notices: &[Notice]) -> Vec<&str> {
    notices.iter().map(|n| n.message.as_str()).collect()
}

fn accepted(stdout: &str) -> ExecutionRecord {
    ExecutionRecord {
        stdout: stdout.to_string(),
        stderr: String::new(),
        compile_output: String::new(),
        status: Status::accepted(),
        time: "1.000".to_string(),
        memory: 2048,
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Bootstrap and modes
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_bootstrap_opens_default_project() {
    let s = session();
    let snap = s.snapshot();
    assert_eq!(snap.mode, "project");
    assert_eq!(snap.web_project.map(|p| p.files.len()), Some(3));
    assert!(snap.preview_open);
    assert!(!snap.console_open);
    assert!(!snap.is_running);
    assert!(snap.can_show_preview);
    assert!(s.notices().is_empty());
}

#[test]
fn test_creating_a_file_leaves_project_mode() {
    let mut s = session();
    let id = s.create_single_file_for(LanguageId::PYTHON).unwrap();
    let snap = s.snapshot();
    assert_eq!(snap.mode, "files");
    assert_eq!(snap.current_file_id, Some(id.as_str()));
    assert!(snap.web_project.is_none());
    assert!(!snap.can_show_preview);
}

#[test]
fn test_unknown_language_creates_nothing() {
    let mut s = session();
    assert_eq!(s.create_single_file_for(LanguageId(4242)), None);
    assert_eq!(s.snapshot().mode, "project");
}

#[test]
fn test_deleting_last_single_file_restores_project() {
    let mut s = session();
    let id = s.create_single_file_for(LanguageId::C).unwrap();
    assert!(s.delete_file(&id));
    let snap = s.snapshot();
    assert_eq!(snap.mode, "project");
    assert!(snap.files.is_empty());
}

#[test]
fn test_deleting_current_file_selects_next() {
    let mut s = session();
    let a = s.create_single_file_for(LanguageId::C).unwrap();
    let b = s.create_single_file_for(LanguageId::JAVA).unwrap();
    assert!(s.delete_file(&b));
    assert_eq!(s.snapshot().current_file_id, Some(a.as_str()));
}

#[test]
fn test_clearing_selection_restores_project() {
    let mut s = session();
    s.create_single_file_for(LanguageId::KOTLIN).unwrap();
    s.set_current_file(None);
    assert_eq!(s.snapshot().mode, "project");
    assert_eq!(s.snapshot().files.len(), 1);
}

#[test]
fn test_creating_web_project_reopens_preview() {
    let mut s = session();
    s.toggle_preview();
    s.create_single_file_for(LanguageId::PYTHON).unwrap();
    s.create_web_project();
    assert!(s.preview_open());
    assert_eq!(s.snapshot().mode, "project");
}

#[test]
fn test_restored_project_reopens_preview() {
    let mut s = session();
    let id = s.create_single_file_for(LanguageId::C).unwrap();
    s.toggle_preview();
    s.delete_file(&id);
    assert_eq!(s.snapshot().mode, "project");
    assert!(s.preview_open());
}

#[test]
fn test_toggles() {
    let mut s = session();
    s.toggle_preview();
    s.toggle_console();
    assert!(!s.preview_open());
    assert!(s.console_open());
}

// ══════════════════════════════════════════════════════════════════════════════
// Notices
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_upload_notice() {
    let mut s = session();
    s.add_uploaded_file("main.py", "print(1)");
    let notices = s.take_notices();
    assert_eq!(messages(&notices), ["main.py uploaded successfully!"]);
    assert_eq!(notices[0].severity, Severity::Info);
    assert!(s.take_notices().is_empty());
}

#[test]
fn test_web_file_notices() {
    let mut s = session();
    let id = s.add_web_project_file(WebFileKind::Css, Some("theme")).unwrap();
    assert!(s.rename_web_project_file(&id, "dark.css"));
    s.delete_web_project_file(&id).unwrap();
    assert_eq!(
        messages(&s.take_notices()),
        ["CSS file created!", "File renamed!", "File deleted!"]
    );
}

#[test]
fn test_named_web_file_gets_extension() {
    let mut s = session();
    let id = s.add_web_project_file(WebFileKind::Js, Some("app")).unwrap();
    let project = s.store().web_project().unwrap();
    assert_eq!(project.file(&id).map(|f| f.name.as_str()), Some("app.js"));
    assert_eq!(project.active_file_id.as_deref(), Some(id.as_str()));
}

#[test]
fn test_blank_name_uses_default() {
    let mut s = session();
    let id = s.add_web_project_file(WebFileKind::Html, Some("   ")).unwrap();
    let name = s.store().web_project().unwrap().file(&id).unwrap().name.clone();
    assert_eq!(name, "page.html");
}

#[test]
fn test_last_file_delete_is_refused_with_warning() {
    let mut s = session();
    s.delete_web_project_file("css-1").unwrap();
    s.delete_web_project_file("js-1").unwrap();
    s.take_notices();

    let err = s.delete_web_project_file("html-1").unwrap_err();
    assert!(matches!(err, SessionError::Store(_)));
    let notices = s.take_notices();
    assert_eq!(messages(&notices), ["Cannot delete the last file!"]);
    assert_eq!(notices[0].severity, Severity::Warning);
    assert_eq!(s.store().web_project().unwrap().files.len(), 1);
}

#[test]
fn test_failed_rename_is_silent() {
    let mut s = session();
    assert!(!s.rename_web_project_file("nope", "x.css"));
    assert!(s.notices().is_empty());
}

// ══════════════════════════════════════════════════════════════════════════════
// Runs
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_begin_run_in_project_mode_uses_first_html() {
    let mut s = session();
    let ticket = s.begin_run().unwrap();
    assert_eq!(ticket.language, LanguageId::WEB_PROJECT);
    assert!(ticket.source.contains("<!DOCTYPE html>"));
    assert!(s.is_running());
    assert!(s.console_open());
    assert!(s.result().is_none());
}

#[test]
fn test_project_without_html_runs_empty_document() {
    let mut s = session();
    s.delete_web_project_file("html-1").unwrap();
    let ticket = s.begin_run().unwrap();
    assert_eq!(ticket.source, "");
    assert_eq!(ticket.language, LanguageId::WEB_PROJECT);
}

#[test]
fn test_run_now_single_file() {
    let mut s = session();
    let id = s.create_single_file_for(LanguageId::PYTHON).unwrap();
    s.update_file_content(&id, "print('hi')");
    let rec = s.run_now(&synth()).unwrap().clone();
    assert!(rec.stdout.contains("[1] hi\n"));
    assert!(!s.is_running());
    assert_eq!(s.result(), Some(&rec));
    assert_eq!(messages(&s.take_notices()), ["Code executed successfully!"]);
}

#[test]
fn test_failed_run_notice() {
    let mut s = session();
    let id = s.create_single_file_for(LanguageId::JAVA).unwrap();
    s.update_file_content(&id, "class Nope {}");
    s.run_now(&synth()).unwrap();
    let notices = s.take_notices();
    assert_eq!(messages(&notices), ["Execution failed: Compilation Error"]);
    assert_eq!(notices[0].severity, Severity::Error);
}

#[test]
fn test_run_edits_after_begin_do_not_leak_in() {
    let mut s = session();
    let id = s.create_single_file_for(LanguageId::PYTHON).unwrap();
    s.update_file_content(&id, "print('before')");
    let ticket = s.begin_run().unwrap();
    s.update_file_content(&id, "print('after')");
    let rec = synth().synthesize(&ticket.source, ticket.language);
    s.finish_run(ticket.id, rec);
    assert!(s.result().unwrap().stdout.contains("before"));
}

#[test]
fn test_stale_finish_overwrites_newer_result() {
    let mut s = session();
    let first = s.begin_run().unwrap();
    let second = s.begin_run().unwrap();
    assert!(second.id > first.id);

    s.finish_run(second.id, accepted("second"));
    s.finish_run(first.id, accepted("first"));
    assert_eq!(s.result().unwrap().stdout, "first");
    assert!(!s.is_running());
}

#[test]
fn test_stop_clears_flag_but_result_still_lands() {
    let mut s = session();
    let ticket = s.begin_run().unwrap();
    s.stop();
    assert!(!s.is_running());
    assert_eq!(messages(&s.take_notices()), ["Execution stopped"]);

    s.finish_run(ticket.id, accepted("late"));
    assert_eq!(s.result().unwrap().stdout, "late");
}

#[test]
fn test_stop_when_idle_is_quiet() {
    let mut s = session();
    s.stop();
    assert!(s.notices().is_empty());
}

#[test]
fn test_nothing_selected_refuses_run() {
    let mut s = session();
    let id = s.create_single_file_for(LanguageId::C).unwrap();
    s.set_current_file(Some("missing"));
    assert!(s.store().current_file().is_none());
    assert_eq!(s.begin_run().unwrap_err(), SessionError::NothingToRun);
    assert!(!s.is_running());
    assert_eq!(messages(&s.take_notices()), ["No file selected"]);
    assert!(s.store().file(&id).is_some());
}

#[tokio::test(start_paused = true)]
async fn test_async_run_waits_then_records() {
    let synth = Synthesizer::with_config(RunnerConfig::default()).with_random(Fixed(0.0));
    let mut s = session();
    let start = tokio::time::Instant::now();
    let rec = s.run(&synth).await.unwrap().clone();
    assert!(start.elapsed() >= std::time::Duration::from_millis(1500));
    assert!(rec.stdout.starts_with("🌐 Web Project Analysis Complete!"));
    assert_eq!(rec.time, "0.500");
    assert_eq!(rec.memory, 2000);
    assert!(!s.is_running());
}

// ══════════════════════════════════════════════════════════════════════════════
// Preview and export
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_project_preview_inlines_siblings() {
    let s = session();
    let preview = s.preview().unwrap();
    let Preview::Project(doc) = &preview else {
        panic!("expected project preview");
    };
    assert_eq!(doc.entry.as_deref(), Some("index.html"));
    assert!(doc.missing().next().is_none());
    assert!(preview.html().contains("<style>"));
    assert!(!preview.html().contains("src=\"script.js\""));
}

#[test]
fn test_single_file_preview() {
    let mut s = session();
    let id = s.add_uploaded_file("app.js", "console.log(1)");
    assert!(s.can_show_preview());
    let html = s.preview().unwrap().html().to_string();
    assert!(html.contains("console.log(1)"));
    assert_eq!(s.preview_file_name().as_deref(), Some("preview-app.html"));

    s.update_file_content(&id, "x < y");
    assert!(s.preview().is_some());
}

#[test]
fn test_preview_file_name_only_for_live_languages() {
    let mut s = session();
    s.add_uploaded_file("main.c", "int main() {}");
    assert!(!s.can_show_preview());
    assert_eq!(s.preview_file_name(), None);
}

#[test]
fn test_exports_follow_mode() {
    let mut s = session();
    assert!(s.export_manifest().is_none());
    let archive = s.export_archive().unwrap();
    assert_eq!(archive.file_name, "my-web-project.zip");
    assert_eq!(archive.entries.len(), 3);

    s.add_uploaded_file("a.py", "print(1)");
    assert!(s.export_archive().is_none());
    let manifest = s.export_manifest().unwrap();
    assert_eq!(manifest.files.len(), 1);
    assert_eq!(manifest.files[0].language, "Python");
}

#[test]
fn test_snapshot_serializes() {
    let s = session();
    let json = serde_json::to_value(s.snapshot()).unwrap();
    assert_eq!(json["mode"], "project");
    assert_eq!(json["preview_open"], true);
    assert!(json["result"].is_null());
}

#[test]
fn test_preview_determinism_100_iterations() {
    let s = session();
    let first = s.preview().unwrap();
    for i in 0..100 {
        assert_eq!(s.preview().unwrap(), first, "iteration {i}");
    }
}
